//! Request filter shared by every graph source

use chrono::{DateTime, Duration, Months, Utc};
use serde::{Deserialize, Serialize};

/// Criteria that select the playback events a network is built from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkFilter {
    /// Inclusive lower bound on event time
    pub start_date: Option<DateTime<Utc>>,
    /// Inclusive upper bound on event time
    pub end_date: Option<DateTime<Utc>>,
    /// Restrict to these user ids (empty = all users)
    #[serde(default)]
    pub users: Vec<String>,
    /// Restrict to these media types (empty = all types)
    #[serde(default)]
    pub media_types: Vec<String>,
}

impl NetworkFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_start(mut self, start: DateTime<Utc>) -> Self {
        self.start_date = Some(start);
        self
    }

    pub fn with_end(mut self, end: DateTime<Utc>) -> Self {
        self.end_date = Some(end);
        self
    }

    pub fn with_users<I, S>(mut self, users: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.users = users.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_media_types<I, S>(mut self, media_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.media_types = media_types.into_iter().map(Into::into).collect();
        self
    }

    /// Whether the user list admits `user_id`
    pub fn includes_user(&self, user_id: &str) -> bool {
        self.users.is_empty() || self.users.iter().any(|u| u == user_id)
    }

    /// Whether the interval `[first, last]` overlaps the date range
    pub fn overlaps(&self, first: DateTime<Utc>, last: DateTime<Utc>) -> bool {
        let after_start = self.start_date.map_or(true, |start| last >= start);
        let before_end = self.end_date.map_or(true, |end| first <= end);
        after_start && before_end
    }

    /// Date range reported in metadata.
    ///
    /// Missing bounds default to one year before `now` and `now`.
    pub fn data_range(&self, now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
        let default_start = now
            .checked_sub_months(Months::new(12))
            .unwrap_or_else(|| now - Duration::days(365));
        (
            self.start_date.unwrap_or(default_start),
            self.end_date.unwrap_or(now),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_user_list() {
        let all = NetworkFilter::new();
        assert!(all.includes_user("anyone"));

        let some = NetworkFilter::new().with_users(["alice", "bob"]);
        assert!(some.includes_user("bob"));
        assert!(!some.includes_user("carol"));
    }

    #[test]
    fn test_overlaps() {
        let filter = NetworkFilter::new()
            .with_start(at(2024, 1, 1))
            .with_end(at(2024, 6, 30));

        assert!(filter.overlaps(at(2023, 12, 1), at(2024, 1, 1)));
        assert!(filter.overlaps(at(2024, 3, 1), at(2024, 9, 1)));
        assert!(!filter.overlaps(at(2023, 1, 1), at(2023, 12, 31)));
        assert!(!filter.overlaps(at(2024, 7, 1), at(2024, 8, 1)));
        assert!(NetworkFilter::new().overlaps(at(1999, 1, 1), at(1999, 1, 2)));
    }

    #[test]
    fn test_data_range_defaults() {
        let now = at(2025, 3, 15);
        let (start, end) = NetworkFilter::new().data_range(now);
        assert_eq!(start, at(2024, 3, 15));
        assert_eq!(end, now);

        let bounded = NetworkFilter::new().with_start(at(2025, 1, 1));
        assert_eq!(bounded.data_range(now), (at(2025, 1, 1), now));
    }
}
