//! Everything the statistics plugin needs from the game it runs inside.

use bevy::prelude::*;
use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};

use crate::snapshot::{ContentPacks, Snapshot};
use crate::tally::EntitySource;

/// The host's in-game clock. The host advances it; the plugin only reads it.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameDate(pub NaiveDateTime);

impl Default for GameDate {
    fn default() -> Self {
        let start = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or_default();
        Self(start.and_time(NaiveTime::MIN))
    }
}

impl GameDate {
    pub fn advance_days(&mut self, days: u32) {
        if let Some(next) = self.0.checked_add_days(Days::new(u64::from(days))) {
            self.0 = next;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoneKind {
    Residential,
    Commercial,
    Industrial,
    Office,
}

/// What the tally needs to know about one building slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildingRecord {
    /// `None` for service and unique buildings.
    pub zone: Option<ZoneKind>,
    /// 1-based building level.
    pub level: u8,
    pub abandoned: bool,
}

/// Read access to the running city.
///
/// Building slots are sparse: the host owns a fixed-size buffer and most
/// slots are unused at any given time.
pub trait CityReader: Send + Sync + 'static {
    fn content_packs(&self) -> ContentPacks;

    /// Size of the host's building buffer.
    fn building_slots(&self) -> usize;

    /// The building in `slot`, or `None` if the slot is unused.
    fn building(&self, slot: usize) -> Option<BuildingRecord>;

    /// Fills every base field the host can read directly. Zone levels and
    /// abandoned buildings come from the tally and are overwritten later.
    fn populate(&self, snapshot: &mut Snapshot);
}

/// The host's [`CityReader`], inserted before startup.
#[derive(Resource)]
pub struct CitySource(Box<dyn CityReader>);

impl CitySource {
    pub fn new(reader: impl CityReader) -> Self {
        Self(Box::new(reader))
    }

    pub fn reader(&self) -> &dyn CityReader {
        self.0.as_ref()
    }
}

impl EntitySource<BuildingRecord> for dyn CityReader {
    fn slot_count(&self) -> usize {
        self.building_slots()
    }

    fn entity_at(&self, slot: usize) -> Option<BuildingRecord> {
        self.building(slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_game_date_advance_keeps_time_of_day() {
        let mut date = GameDate::default();
        let start = date.0;
        date.advance_days(3);
        assert_eq!((date.0 - start).num_days(), 3);
        assert_eq!(date.0.hour(), start.hour());
    }

    #[test]
    fn test_advance_zero_days_is_noop() {
        let mut date = GameDate::default();
        let before = date;
        date.advance_days(0);
        assert_eq!(date, before);
    }
}
