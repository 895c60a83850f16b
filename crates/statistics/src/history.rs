use bevy::prelude::*;
use chrono::NaiveDateTime;

use crate::config::DEFAULT_MAX_SNAPSHOTS;
use crate::snapshot::Snapshot;

/// Recorded snapshots, oldest first, at most one per minute.
#[derive(Resource, Debug, Clone)]
pub struct SnapshotHistory {
    snapshots: Vec<Snapshot>,
    max_snapshots: usize,
}

impl Default for SnapshotHistory {
    fn default() -> Self {
        Self::with_limit(DEFAULT_MAX_SNAPSHOTS)
    }
}

impl SnapshotHistory {
    pub fn with_limit(max_snapshots: usize) -> Self {
        Self {
            snapshots: Vec::new(),
            max_snapshots: max_snapshots.max(1),
        }
    }

    pub fn max_snapshots(&self) -> usize {
        self.max_snapshots
    }

    /// Inserts `snapshot` in date order. A snapshot comparing equal to an
    /// existing one (same minute) replaces it. The oldest entries are dropped
    /// beyond the limit.
    pub fn record(&mut self, snapshot: Snapshot) {
        match self.snapshots.binary_search(&snapshot) {
            Ok(index) => self.snapshots[index] = snapshot,
            Err(index) => self.snapshots.insert(index, snapshot),
        }
        self.trim();
    }

    /// Replaces the whole history, e.g. after loading a save.
    pub fn replace_all(&mut self, mut snapshots: Vec<Snapshot>) {
        snapshots.sort();
        snapshots.dedup();
        self.snapshots = snapshots;
        self.trim();
    }

    fn trim(&mut self) {
        if self.snapshots.len() > self.max_snapshots {
            let excess = self.snapshots.len() - self.max_snapshots;
            self.snapshots.drain(..excess);
        }
    }

    pub fn latest(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Snapshot> {
        self.snapshots.iter()
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Snapshots with `from <= date <= to`.
    pub fn range(&self, from: NaiveDateTime, to: NaiveDateTime) -> &[Snapshot] {
        let start = self.snapshots.partition_point(|s| s.snapshot_date < from);
        let end = self.snapshots.partition_point(|s| s.snapshot_date <= to);
        &self.snapshots[start..end.max(start)]
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, d)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .expect("valid date")
    }

    fn snapshot(d: u32, population: u32) -> Snapshot {
        let mut s = Snapshot::new(day(d));
        s.population = population;
        s
    }

    #[test]
    fn test_record_keeps_date_order() {
        let mut history = SnapshotHistory::default();
        history.record(snapshot(3, 30));
        history.record(snapshot(1, 10));
        history.record(snapshot(2, 20));
        let populations: Vec<u32> = history.iter().map(|s| s.population).collect();
        assert_eq!(populations, vec![10, 20, 30]);
        assert_eq!(history.latest().map(|s| s.population), Some(30));
    }

    #[test]
    fn test_same_minute_replaces() {
        let mut history = SnapshotHistory::default();
        history.record(snapshot(1, 10));
        let mut again = snapshot(1, 11);
        again.snapshot_date += chrono::Duration::seconds(30);
        history.record(again);
        assert_eq!(history.len(), 1);
        assert_eq!(history.latest().map(|s| s.population), Some(11));
    }

    #[test]
    fn test_limit_drops_oldest() {
        let mut history = SnapshotHistory::with_limit(2);
        for d in 1..=4 {
            history.record(snapshot(d, d));
        }
        let populations: Vec<u32> = history.iter().map(|s| s.population).collect();
        assert_eq!(populations, vec![3, 4]);
    }

    #[test]
    fn test_range_is_inclusive() {
        let mut history = SnapshotHistory::default();
        for d in 1..=5 {
            history.record(snapshot(d, d));
        }
        let slice = history.range(day(2), day(4));
        assert_eq!(slice.len(), 3);
        assert_eq!(slice[0].population, 2);
        assert!(history.range(day(5), day(1)).is_empty());
    }

    #[test]
    fn test_replace_all_sorts_and_dedups() {
        let mut history = SnapshotHistory::with_limit(10);
        history.replace_all(vec![snapshot(2, 2), snapshot(1, 1), snapshot(2, 22)]);
        assert_eq!(history.len(), 2);
        assert_eq!(history.snapshots()[0].population, 1);
    }
}
