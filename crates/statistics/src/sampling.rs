use bevy::prelude::*;
use chrono::NaiveDateTime;

use crate::config::StatisticsConfig;
use crate::history::SnapshotHistory;
use crate::host::{CityReader, CitySource, GameDate};
use crate::snapshot::Snapshot;
use crate::tally::{BufferedTally, ZoneLevelTally};

/// Building tally advanced one batch per fixed tick.
#[derive(Resource)]
pub struct BuildingTally(pub BufferedTally<ZoneLevelTally>);

impl BuildingTally {
    pub fn new(batch_size: usize) -> Self {
        Self(BufferedTally::new(batch_size))
    }
}

pub fn tally_building_batch(source: Option<Res<CitySource>>, mut tally: ResMut<BuildingTally>) {
    let Some(source) = source else {
        return;
    };
    if tally.0.process_batch(source.reader()) {
        debug!(
            "Building tally pass {} published",
            tally.0.cycles_completed()
        );
    }
}

/// Builds a gated snapshot for the game day containing `timestamp`.
pub fn take_snapshot(
    timestamp: NaiveDateTime,
    reader: &dyn CityReader,
    tally: &ZoneLevelTally,
) -> Snapshot {
    let mut snapshot = Snapshot::for_game_date(timestamp);
    reader.populate(&mut snapshot);
    tally.apply_to(&mut snapshot);
    snapshot.apply_content_gating(reader.content_packs());
    snapshot
}

/// Records a snapshot once the configured number of game days has passed
/// since the latest one. Waits for the first complete building tally so the
/// zone statistics are never recorded half-counted.
pub fn record_snapshot(
    source: Option<Res<CitySource>>,
    date: Res<GameDate>,
    config: Res<StatisticsConfig>,
    tally: Res<BuildingTally>,
    mut history: ResMut<SnapshotHistory>,
) {
    let Some(source) = source else {
        return;
    };
    if tally.0.cycles_completed() == 0 {
        return;
    }

    let today = date.0.date();
    if let Some(latest) = history.latest() {
        let elapsed = (today - latest.snapshot_date.date()).num_days();
        if elapsed < i64::from(config.snapshot_interval_days) {
            return;
        }
    }

    let published = tally.0.reader().latest();
    let snapshot = take_snapshot(date.0, source.reader(), &published);
    debug!(
        "Recorded statistics snapshot for {} (population {})",
        snapshot.snapshot_date, snapshot.population
    );
    history.record(snapshot);
}
