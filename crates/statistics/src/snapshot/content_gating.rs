use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::Snapshot;

/// Optional content packs the host game reports as active.
///
/// Statistics that only exist with a pack (trams need Snowfall, ferries need
/// Mass Transit, ...) are `None` in a snapshot whenever the pack is missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentPacks {
    pub after_dark: bool,
    pub snowfall: bool,
    pub natural_disasters: bool,
    pub mass_transit: bool,
    pub green_cities: bool,
    pub parklife: bool,
    pub campus: bool,
}

impl ContentPacks {
    pub fn all() -> Self {
        Self {
            after_dark: true,
            snowfall: true,
            natural_disasters: true,
            mass_transit: true,
            green_cities: true,
            parklife: true,
            campus: true,
        }
    }
}

/// Clears `field` when its pack is inactive. Returns true if a value had to be
/// discarded.
fn gate<T>(active: bool, field: &mut Option<T>) -> bool {
    if active {
        return false;
    }
    field.take().is_some()
}

impl Snapshot {
    /// Forces every pack-gated field to `None` when its pack is inactive.
    ///
    /// A reader that supplies a value for an inactive pack is a bug in the
    /// reader, so the discarded fields are reported.
    pub fn apply_content_gating(&mut self, packs: ContentPacks) {
        let mut discarded = Vec::new();
        let mut check = |name: &'static str, dropped: bool| {
            if dropped {
                discarded.push(name);
            }
        };

        check("water_tank_reserved", gate(packs.natural_disasters, &mut self.water_tank_reserved));
        check(
            "water_tank_storage_capacity",
            gate(packs.natural_disasters, &mut self.water_tank_storage_capacity),
        );
        check("tram_residents", gate(packs.snowfall, &mut self.tram_residents));
        check("tram_tourists", gate(packs.snowfall, &mut self.tram_tourists));
        check("heating_consumption", gate(packs.snowfall, &mut self.heating_consumption));
        check("heating_production", gate(packs.snowfall, &mut self.heating_production));
        check("ferry_residents", gate(packs.mass_transit, &mut self.ferry_residents));
        check("ferry_tourists", gate(packs.mass_transit, &mut self.ferry_tourists));
        check(
            "residential_low_eco_income",
            gate(packs.green_cities, &mut self.residential_low_eco_income),
        );
        check(
            "residential_high_eco_income",
            gate(packs.green_cities, &mut self.residential_high_eco_income),
        );
        check("commercial_eco_income", gate(packs.green_cities, &mut self.commercial_eco_income));
        check(
            "office_it_cluster_income",
            gate(packs.green_cities, &mut self.office_it_cluster_income),
        );
        check(
            "commercial_leisure_income",
            gate(packs.after_dark, &mut self.commercial_leisure_income),
        );
        check(
            "commercial_tourism_income",
            gate(packs.after_dark, &mut self.commercial_tourism_income),
        );
        check("park_areas", gate(packs.parklife, &mut self.park_areas));
        check("park_visitors", gate(packs.parklife, &mut self.park_visitors));
        check("campus_students", gate(packs.campus, &mut self.campus_students));
        check("campus_capacity", gate(packs.campus, &mut self.campus_capacity));

        if !discarded.is_empty() {
            warn!(
                "Snapshot {}: discarded {} value(s) from inactive content packs: {:?}",
                self.snapshot_date,
                discarded.len(),
                discarded
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn test_inactive_packs_clear_gated_fields() {
        let mut s = Snapshot::new(NaiveDateTime::default());
        s.tram_residents = Some(10);
        s.ferry_residents = Some(4);
        s.campus_students = Some(900);
        s.apply_content_gating(ContentPacks {
            mass_transit: true,
            ..Default::default()
        });
        assert_eq!(s.tram_residents, None);
        assert_eq!(s.ferry_residents, Some(4));
        assert_eq!(s.campus_students, None);
    }

    #[test]
    fn test_all_packs_keep_values() {
        let mut s = Snapshot::new(NaiveDateTime::default());
        s.heating_production = Some(0);
        s.park_areas = Some(3);
        s.apply_content_gating(ContentPacks::all());
        assert_eq!(s.heating_production, Some(0));
        assert_eq!(s.park_areas, Some(3));
    }

    #[test]
    fn test_zero_stays_distinct_from_missing() {
        let mut s = Snapshot::new(NaiveDateTime::default());
        s.water_tank_reserved = Some(0);
        s.apply_content_gating(ContentPacks {
            natural_disasters: true,
            ..Default::default()
        });
        assert_eq!(s.water_tank_reserved, Some(0));
        assert_eq!(s.water_tank_reserved_percent(), None);
    }
}
