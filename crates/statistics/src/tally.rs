//! Incremental, double-buffered counting over the host's entity buffers.
//!
//! Walking every building slot in one tick would stall the simulation, so a
//! [`BufferedTally`] processes a bounded batch of slots per call into a private
//! scratch tally. When a full pass over the slot range completes, the scratch
//! is swapped with the published tally under a lock. Readers only ever see
//! complete passes.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::host::{BuildingRecord, ZoneKind};
use crate::snapshot::Snapshot;

/// A per-pass accumulator.
pub trait Tally: Default + Send + Sync + 'static {
    type Entity;

    fn observe(&mut self, entity: &Self::Entity);

    /// Entities observed so far in this pass.
    fn observed(&self) -> u32;
}

/// A slot-addressed entity buffer.
pub trait EntitySource<E> {
    fn slot_count(&self) -> usize;
    fn entity_at(&self, slot: usize) -> Option<E>;
}

impl<E: Clone> EntitySource<E> for [E] {
    fn slot_count(&self) -> usize {
        self.len()
    }

    fn entity_at(&self, slot: usize) -> Option<E> {
        self.get(slot).cloned()
    }
}

// ---------------------------------------------------------------------------
// ZoneLevelTally
// ---------------------------------------------------------------------------

/// Zoned buildings per zone and level, plus abandoned buildings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoneLevelTally {
    pub residential: [u32; 5],
    pub commercial: [u32; 3],
    pub industrial: [u32; 3],
    pub office: [u32; 3],
    pub abandoned: u32,
    observed: u32,
}

/// Level `level` (1-based) as an index into `counts`, clamped to the valid range.
fn level_index(level: u8, max: usize) -> usize {
    (level.max(1) as usize).min(max) - 1
}

impl Tally for ZoneLevelTally {
    type Entity = BuildingRecord;

    fn observe(&mut self, building: &BuildingRecord) {
        self.observed += 1;
        if building.abandoned {
            self.abandoned += 1;
            return;
        }
        let counts: &mut [u32] = match building.zone {
            Some(ZoneKind::Residential) => &mut self.residential,
            Some(ZoneKind::Commercial) => &mut self.commercial,
            Some(ZoneKind::Industrial) => &mut self.industrial,
            Some(ZoneKind::Office) => &mut self.office,
            None => return,
        };
        let index = level_index(building.level, counts.len());
        counts[index] += 1;
    }

    fn observed(&self) -> u32 {
        self.observed
    }
}

impl ZoneLevelTally {
    pub fn zoned_total(&self) -> u32 {
        self.residential
            .iter()
            .chain(&self.commercial)
            .chain(&self.industrial)
            .chain(&self.office)
            .sum()
    }

    /// Writes the per-level building counts and abandoned buildings.
    pub fn apply_to(&self, snapshot: &mut Snapshot) {
        let [r1, r2, r3, r4, r5] = self.residential;
        snapshot.residential_level1 = r1;
        snapshot.residential_level2 = r2;
        snapshot.residential_level3 = r3;
        snapshot.residential_level4 = r4;
        snapshot.residential_level5 = r5;

        let [c1, c2, c3] = self.commercial;
        snapshot.commercial_level1 = c1;
        snapshot.commercial_level2 = c2;
        snapshot.commercial_level3 = c3;

        let [i1, i2, i3] = self.industrial;
        snapshot.industrial_level1 = i1;
        snapshot.industrial_level2 = i2;
        snapshot.industrial_level3 = i3;

        let [o1, o2, o3] = self.office;
        snapshot.office_level1 = o1;
        snapshot.office_level2 = o2;
        snapshot.office_level3 = o3;

        snapshot.abandoned_buildings = self.abandoned;
    }
}

// ---------------------------------------------------------------------------
// BufferedTally / TallyReader
// ---------------------------------------------------------------------------

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    // A reader that panicked mid-read cannot leave a tally half-written.
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Scratch tally owned by the tick loop plus the last completed pass.
pub struct BufferedTally<T: Tally> {
    scratch: T,
    readable: Arc<Mutex<T>>,
    next_slot: usize,
    batch_size: usize,
    cycles_completed: u64,
}

impl<T: Tally> BufferedTally<T> {
    pub fn new(batch_size: usize) -> Self {
        Self {
            scratch: T::default(),
            readable: Arc::new(Mutex::new(T::default())),
            next_slot: 0,
            batch_size: batch_size.max(1),
            cycles_completed: 0,
        }
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Number of complete passes published so far.
    pub fn cycles_completed(&self) -> u64 {
        self.cycles_completed
    }

    /// Observes up to `batch_size` slots of `source`, resuming where the
    /// previous call stopped. Returns true if this call finished a pass and
    /// published it.
    pub fn process_batch<S>(&mut self, source: &S) -> bool
    where
        S: EntitySource<T::Entity> + ?Sized,
    {
        let slots = source.slot_count();
        if self.next_slot > slots {
            // The source shrank mid-pass.
            self.next_slot = slots;
        }

        let end = (self.next_slot + self.batch_size).min(slots);
        for slot in self.next_slot..end {
            if let Some(entity) = source.entity_at(slot) {
                self.scratch.observe(&entity);
            }
        }
        self.next_slot = end;

        if self.next_slot < slots {
            return false;
        }

        self.publish();
        true
    }

    fn publish(&mut self) {
        {
            let mut readable = lock(&self.readable);
            std::mem::swap(&mut *readable, &mut self.scratch);
        }
        self.scratch = T::default();
        self.next_slot = 0;
        self.cycles_completed += 1;
    }

    pub fn reader(&self) -> TallyReader<T> {
        TallyReader {
            readable: Arc::clone(&self.readable),
        }
    }
}

/// Shared read handle onto the last completed pass of a [`BufferedTally`].
pub struct TallyReader<T: Tally> {
    readable: Arc<Mutex<T>>,
}

impl<T: Tally> Clone for TallyReader<T> {
    fn clone(&self) -> Self {
        Self {
            readable: Arc::clone(&self.readable),
        }
    }
}

impl<T: Tally> TallyReader<T> {
    pub fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let guard = lock(&self.readable);
        f(&*guard)
    }
}

impl<T: Tally + Clone> TallyReader<T> {
    pub fn latest(&self) -> T {
        self.read(T::clone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::thread;

    fn building(zone: ZoneKind, level: u8) -> Option<BuildingRecord> {
        Some(BuildingRecord {
            zone: Some(zone),
            level,
            abandoned: false,
        })
    }

    #[derive(Debug, Clone, Default)]
    struct CountTally {
        count: u32,
    }

    impl Tally for CountTally {
        type Entity = u32;

        fn observe(&mut self, _: &u32) {
            self.count += 1;
        }

        fn observed(&self) -> u32 {
            self.count
        }
    }

    #[test]
    fn test_zone_level_tally_counts_levels() {
        let buildings = vec![
            building(ZoneKind::Residential, 1),
            building(ZoneKind::Residential, 5),
            building(ZoneKind::Office, 2),
            None,
            Some(BuildingRecord {
                zone: Some(ZoneKind::Commercial),
                level: 3,
                abandoned: true,
            }),
        ];
        let mut tally = ZoneLevelTally::default();
        for b in buildings.iter().flatten() {
            tally.observe(b);
        }
        assert_eq!(tally.residential, [1, 0, 0, 0, 1]);
        assert_eq!(tally.office, [0, 1, 0]);
        assert_eq!(tally.commercial, [0, 0, 0]);
        assert_eq!(tally.abandoned, 1);
        assert_eq!(tally.observed(), 4);
        assert_eq!(tally.zoned_total(), 3);
    }

    #[test]
    fn test_out_of_range_levels_are_clamped() {
        let mut tally = ZoneLevelTally::default();
        tally.observe(&BuildingRecord {
            zone: Some(ZoneKind::Industrial),
            level: 9,
            abandoned: false,
        });
        tally.observe(&BuildingRecord {
            zone: Some(ZoneKind::Industrial),
            level: 0,
            abandoned: false,
        });
        assert_eq!(tally.industrial, [1, 0, 1]);
    }

    #[test]
    fn test_apply_to_sets_level_fields() {
        let tally = ZoneLevelTally {
            residential: [5, 4, 3, 2, 1],
            office: [0, 0, 7],
            abandoned: 2,
            ..Default::default()
        };
        let mut snapshot = Snapshot::default();
        tally.apply_to(&mut snapshot);
        assert_eq!(snapshot.residential_level1, 5);
        assert_eq!(snapshot.residential_level5, 1);
        assert_eq!(snapshot.office_level3, 7);
        assert_eq!(snapshot.abandoned_buildings, 2);
    }

    #[test]
    fn test_publishes_only_after_full_pass() {
        let slots: Vec<u32> = (0..10).collect();
        let mut buffered = BufferedTally::<CountTally>::new(4);
        let reader = buffered.reader();

        assert!(!buffered.process_batch(slots.as_slice()));
        assert!(!buffered.process_batch(slots.as_slice()));
        assert_eq!(reader.latest().count, 0);

        assert!(buffered.process_batch(slots.as_slice()));
        assert_eq!(reader.latest().count, 10);
        assert_eq!(buffered.cycles_completed(), 1);

        // The next pass starts from an empty scratch.
        assert!(!buffered.process_batch(slots.as_slice()));
        assert_eq!(reader.latest().count, 10);
    }

    #[test]
    fn test_zero_batch_size_is_clamped() {
        let buffered = BufferedTally::<CountTally>::new(0);
        assert_eq!(buffered.batch_size(), 1);
    }

    #[test]
    fn test_empty_source_publishes_empty_pass() {
        let slots: Vec<u32> = Vec::new();
        let mut buffered = BufferedTally::<CountTally>::new(8);
        assert!(buffered.process_batch(slots.as_slice()));
        assert_eq!(buffered.reader().latest().count, 0);
    }

    #[test]
    fn test_concurrent_reads_never_see_partial_pass() {
        const N: u32 = 20_000;
        const READS: usize = 1000;

        let slots: Vec<u32> = (0..N).collect();
        let mut buffered = BufferedTally::<CountTally>::new(8192);
        let reader = buffered.reader();
        let done = Arc::new(AtomicBool::new(false));

        let handle = {
            let done = Arc::clone(&done);
            thread::spawn(move || {
                let mut seen = Vec::with_capacity(READS);
                for _ in 0..READS {
                    seen.push(reader.read(|t| t.count));
                    thread::yield_now();
                }
                done.store(true, Ordering::SeqCst);
                seen
            })
        };

        let mut passes = 0;
        while !done.load(Ordering::SeqCst) {
            if buffered.process_batch(slots.as_slice()) {
                passes += 1;
            }
        }
        // Make sure at least one pass completes even if the reader was fast.
        while passes == 0 {
            if buffered.process_batch(slots.as_slice()) {
                passes += 1;
            }
        }

        let seen = handle.join().expect("reader thread panicked");
        assert_eq!(seen.len(), READS);
        for total in seen {
            assert!(total == 0 || total == N, "observed partial pass: {total}");
        }
        assert_eq!(buffered.reader().latest().count, N);
    }
}
