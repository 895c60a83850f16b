// ---------------------------------------------------------------------------
// tests_roundtrip – write_snapshot / read_snapshot preserve every field
// ---------------------------------------------------------------------------

use statistics::test_harness::random_snapshot;
use statistics::{Snapshot, StatisticKind};

use super::{
    deserialize_snapshot, read_snapshot, serialize_snapshot, write_snapshot, SnapshotReader,
    SnapshotWriter, CURRENT_FORMAT_VERSION,
};

/// Field-by-field comparison; `Snapshot`'s own `==` only looks at the minute.
fn assert_same_fields(a: &Snapshot, b: &Snapshot) {
    assert_eq!(a.snapshot_date, b.snapshot_date);
    for kind in StatisticKind::ALL {
        assert_eq!(a.value(kind), b.value(kind), "{kind:?} differs");
    }
    assert_eq!(serialize_snapshot(a), serialize_snapshot(b));
}

#[test]
fn test_random_snapshots_roundtrip() {
    for seed in 0..64 {
        let original = random_snapshot(seed);
        let bytes = serialize_snapshot(&original);
        let restored =
            deserialize_snapshot(&bytes, CURRENT_FORMAT_VERSION).expect("decode should succeed");
        assert_same_fields(&original, &restored);
    }
}

#[test]
fn test_default_snapshot_roundtrip() {
    let original = Snapshot::default();
    let restored = deserialize_snapshot(&serialize_snapshot(&original), CURRENT_FORMAT_VERSION)
        .expect("decode should succeed");
    assert_same_fields(&original, &restored);
}

#[test]
fn test_present_zero_stays_distinct_from_absent() {
    let mut original = Snapshot::default();
    original.heating_production = Some(0);
    original.heating_consumption = None;
    let restored = deserialize_snapshot(&serialize_snapshot(&original), CURRENT_FORMAT_VERSION)
        .expect("decode should succeed");
    assert_eq!(restored.heating_production, Some(0));
    assert_eq!(restored.heating_consumption, None);
}

#[test]
fn test_consecutive_records_share_one_stream() {
    let snapshots: Vec<Snapshot> = (100..110).map(random_snapshot).collect();
    let mut w = SnapshotWriter::new();
    for s in &snapshots {
        write_snapshot(&mut w, s);
    }
    let bytes = w.into_bytes();

    let mut r = SnapshotReader::new(&bytes);
    for original in &snapshots {
        let restored = read_snapshot(&mut r, CURRENT_FORMAT_VERSION).expect("decode");
        assert_same_fields(original, &restored);
    }
    assert!(r.is_empty());
}

#[test]
fn test_record_length_covers_base_fields_only() {
    // Timestamp plus base fields; every nullable field absent.
    assert_eq!(serialize_snapshot(&Snapshot::default()).len(), 651);

    let mut all_present = Snapshot::default();
    all_present.water_tank_reserved = Some(1);
    all_present.water_tank_storage_capacity = Some(1);
    all_present.tram_residents = Some(1);
    all_present.tram_tourists = Some(1);
    all_present.ferry_residents = Some(1);
    all_present.ferry_tourists = Some(1);
    all_present.heating_consumption = Some(1);
    all_present.heating_production = Some(1);
    all_present.residential_low_eco_income = Some(1);
    all_present.residential_high_eco_income = Some(1);
    all_present.commercial_leisure_income = Some(1);
    all_present.commercial_tourism_income = Some(1);
    all_present.commercial_eco_income = Some(1);
    all_present.office_it_cluster_income = Some(1);
    all_present.park_areas = Some(1);
    all_present.park_visitors = Some(1);
    all_present.campus_students = Some(1);
    all_present.campus_capacity = Some(1);
    assert_eq!(serialize_snapshot(&all_present).len(), 755);
}
