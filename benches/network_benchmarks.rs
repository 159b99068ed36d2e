use chrono::Utc;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::time::Instant;
use watchnet::analysis::assemble;
use watchnet::{detect_clusters, ConnectionType, NetworkFilter, UserEdge, UserNode};

/// Users split into communities of `group` members, each a ring with one chord
fn community_network(users: usize, group: usize) -> (Vec<UserNode>, Vec<UserEdge>) {
    let now = Utc::now();
    let nodes: Vec<UserNode> = (0..users)
        .map(|i| UserNode::new(format!("user-{}", i), format!("User {}", i), (i % 300) as u64 + 3, 1.0, now))
        .collect();

    let mut edges = Vec::new();
    for start in (0..users).step_by(group) {
        let end = (start + group).min(users);
        for i in start..end {
            let next = if i + 1 == end { start } else { i + 1 };
            if next != i {
                edges.push(UserEdge::new(
                    nodes[i].id.clone(),
                    nodes[next].id.clone(),
                    ConnectionType::SharedSession,
                    (i % 12) as u32 + 1,
                    vec![],
                    now,
                    now,
                ));
            }
        }
        if end - start > 3 {
            edges.push(UserEdge::new(
                nodes[start].id.clone(),
                nodes[start + 2].id.clone(),
                ConnectionType::WatchParty,
                2,
                vec![],
                now,
                now,
            ));
        }
    }
    (nodes, edges)
}

/// Benchmark cluster detection alone
fn bench_detect_clusters(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect_clusters");

    for size in [100, 1000, 10_000].iter() {
        let (nodes, edges) = community_network(*size, 8);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| detect_clusters(&nodes, &edges));
        });
    }
    group.finish();
}

/// Benchmark the full analysis at the default source caps (100 users, 500 edges)
fn bench_assemble(c: &mut Criterion) {
    let (nodes, edges) = community_network(100, 12);
    let filter = NetworkFilter::new();

    c.bench_function("assemble_default_caps", |b| {
        b.iter(|| {
            assemble(
                nodes.clone(),
                edges.clone(),
                &filter,
                2,
                0.0,
                10_000,
                Instant::now(),
            )
        });
    });
}

criterion_group!(benches, bench_detect_clusters, bench_assemble);
criterion_main!(benches);
