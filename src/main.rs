use anyhow::Context;
use chrono::{Duration, Utc};
use serde::Deserialize;
use std::sync::Arc;
use watchnet::{
    ConnectionType, EngineConfig, InMemorySource, NetworkEngine, NetworkFilter, UserEdge,
    UserNetworkGraph, UserNode,
};

/// Pre-aggregated rows read from a JSON file
#[derive(Deserialize)]
struct Snapshot {
    nodes: Vec<UserNode>,
    #[serde(default)]
    edges: Vec<UserEdge>,
    event_count: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    println!("Watchnet v{}", watchnet::version());
    println!("==========================================");

    let config = match std::env::var("WATCHNET_CONFIG") {
        Ok(path) => EngineConfig::from_file(&path).with_context(|| format!("loading {}", path))?,
        Err(_) => EngineConfig::default(),
    };

    let source = match std::env::args().nth(1) {
        Some(path) => load_snapshot(&path, &config)?,
        None => demo_household(&config),
    };

    let engine = NetworkEngine::with_config(Arc::new(source), config);
    let graph = engine.build_with_defaults(&NetworkFilter::new()).await?;

    print_summary(&graph);
    println!("{}", serde_json::to_string_pretty(&graph)?);
    Ok(())
}

fn load_snapshot(path: &str, config: &EngineConfig) -> anyhow::Result<InMemorySource> {
    let contents = std::fs::read_to_string(path).with_context(|| format!("reading {}", path))?;
    let snapshot: Snapshot =
        serde_json::from_str(&contents).with_context(|| format!("parsing {}", path))?;

    let mut source = InMemorySource::from_parts(snapshot.nodes, snapshot.edges, config.limits.clone());
    if let Some(count) = snapshot.event_count {
        source.set_event_count(count);
    }
    Ok(source)
}

/// A small household plus a remote watch party
fn demo_household(config: &EngineConfig) -> InMemorySource {
    let now = Utc::now();
    let mut source = InMemorySource::with_limits(config.limits.clone());

    for (id, name, plays, hours) in [
        ("1", "Alice", 120, 96.0),
        ("2", "Bob", 85, 60.5),
        ("3", "Charlie", 40, 22.0),
        ("4", "Dana", 33, 30.0),
        ("5", "Eve", 12, 8.5),
        ("6", "Frank", 5, 3.0),
    ] {
        source.add_node(UserNode::new(id, name, plays, hours, now - Duration::days(1)));
    }

    source.add_edge(UserEdge::new(
        "1",
        "2",
        ConnectionType::SharedSession,
        14,
        shows(&["The Expanse", "Severance", "Dune"]),
        now - Duration::days(90),
        now - Duration::days(2),
    ));
    source.add_edge(UserEdge::new(
        "1",
        "3",
        ConnectionType::SharedSession,
        6,
        shows(&["Bluey"]),
        now - Duration::days(60),
        now - Duration::days(5),
    ));
    source.add_edge(UserEdge::new(
        "2",
        "3",
        ConnectionType::SharedSession,
        4,
        shows(&["Bluey", "Paddington 2"]),
        now - Duration::days(40),
        now - Duration::days(9),
    ));
    source.add_edge(UserEdge::new(
        "4",
        "5",
        ConnectionType::WatchParty,
        3,
        shows(&["Andor"]),
        now - Duration::days(20),
        now - Duration::days(3),
    ));

    source
}

fn shows(titles: &[&str]) -> Vec<String> {
    titles.iter().map(|t| t.to_string()).collect()
}

fn print_summary(graph: &UserNetworkGraph) {
    let summary = &graph.summary;
    println!("\nNetwork {}:", graph.metadata.query_hash);
    println!("  Users: {} ({} isolated)", summary.total_users, summary.isolated_users);
    println!("  Connections: {}", summary.total_connections);
    println!("  Clusters: {} (largest {})", summary.total_clusters, summary.largest_cluster_size);
    println!("  Density: {:.3}", summary.network_density);
    if let Some(hub) = &summary.max_connections_user {
        println!("  Most connected: {} ({})", hub, summary.max_connections_count);
    }
    println!("  Type: {}", summary.network_type);

    for cluster in &graph.clusters {
        println!(
            "  - {} [{}]: {} users, density {:.2}",
            cluster.name, cluster.characteristic_type, cluster.user_count, cluster.density
        );
    }
    println!();
}
