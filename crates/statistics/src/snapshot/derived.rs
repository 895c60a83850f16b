//! Derived statistics, computed from base fields on every read.

use super::ratios::{
    per_capita, percent, percent_opt, total, total_nullable, total_present,
    weighted_level_average,
};
use super::Snapshot;

impl Snapshot {
    // Utilities

    pub fn electricity_consumption_percent(&self) -> f32 {
        percent(self.electricity_consumption, self.electricity_production)
    }

    pub fn water_consumption_percent(&self) -> f32 {
        percent(self.water_consumption, self.water_pumping_capacity)
    }

    pub fn water_tank_reserved_percent(&self) -> Option<f32> {
        percent_opt(self.water_tank_reserved, self.water_tank_storage_capacity)
    }

    pub fn sewage_production_percent(&self) -> f32 {
        percent(self.sewage_production, self.sewage_drain_capacity)
    }

    pub fn landfill_storage_percent(&self) -> f32 {
        percent(self.landfill_storage, self.landfill_capacity)
    }

    pub fn garbage_production_percent(&self) -> f32 {
        percent(self.garbage_production, self.garbage_processing_capacity)
    }

    pub fn heating_consumption_percent(&self) -> Option<f32> {
        percent_opt(self.heating_consumption, self.heating_production)
    }

    // Education

    pub fn elementary_usage_percent(&self) -> f32 {
        percent(self.elementary_eligible, self.elementary_capacity)
    }

    pub fn high_school_usage_percent(&self) -> f32 {
        percent(self.high_school_eligible, self.high_school_capacity)
    }

    pub fn university_usage_percent(&self) -> f32 {
        percent(self.university_eligible, self.university_capacity)
    }

    pub fn library_usage_percent(&self) -> f32 {
        percent(self.library_users, self.library_capacity)
    }

    pub fn campus_usage_percent(&self) -> Option<f32> {
        percent_opt(self.campus_students, self.campus_capacity)
    }

    /// Citizens counted across all four education levels.
    pub fn education_level_total(&self) -> u32 {
        total(&[
            self.uneducated,
            self.educated,
            self.well_educated,
            self.highly_educated,
        ])
    }

    pub fn uneducated_percent(&self) -> f32 {
        percent(self.uneducated, self.education_level_total())
    }

    pub fn educated_percent(&self) -> f32 {
        percent(self.educated, self.education_level_total())
    }

    pub fn well_educated_percent(&self) -> f32 {
        percent(self.well_educated, self.education_level_total())
    }

    pub fn highly_educated_percent(&self) -> f32 {
        percent(self.highly_educated, self.education_level_total())
    }

    // Health, deathcare and crime

    pub fn hospital_usage_percent(&self) -> f32 {
        percent(self.hospital_patients, self.hospital_capacity)
    }

    pub fn cemetery_usage_percent(&self) -> f32 {
        percent(self.cemetery_buried, self.cemetery_capacity)
    }

    pub fn crematorium_usage_percent(&self) -> f32 {
        percent(self.crematorium_deceased, self.crematorium_capacity)
    }

    pub fn jail_usage_percent(&self) -> f32 {
        percent(self.detained_criminals, self.jail_capacity)
    }

    // Zoning

    pub fn zoned_total(&self) -> u32 {
        total(&[
            self.residential_zoned,
            self.commercial_zoned,
            self.industrial_zoned,
            self.office_zoned,
        ])
    }

    pub fn residential_zoned_percent(&self) -> f32 {
        percent(self.residential_zoned, self.zoned_total())
    }

    pub fn commercial_zoned_percent(&self) -> f32 {
        percent(self.commercial_zoned, self.zoned_total())
    }

    pub fn industrial_zoned_percent(&self) -> f32 {
        percent(self.industrial_zoned, self.zoned_total())
    }

    pub fn office_zoned_percent(&self) -> f32 {
        percent(self.office_zoned, self.zoned_total())
    }

    fn residential_levels(&self) -> [u32; 5] {
        [
            self.residential_level1,
            self.residential_level2,
            self.residential_level3,
            self.residential_level4,
            self.residential_level5,
        ]
    }

    fn commercial_levels(&self) -> [u32; 3] {
        [
            self.commercial_level1,
            self.commercial_level2,
            self.commercial_level3,
        ]
    }

    fn industrial_levels(&self) -> [u32; 3] {
        [
            self.industrial_level1,
            self.industrial_level2,
            self.industrial_level3,
        ]
    }

    fn office_levels(&self) -> [u32; 3] {
        [self.office_level1, self.office_level2, self.office_level3]
    }

    pub fn residential_average_level(&self) -> f32 {
        weighted_level_average(&self.residential_levels())
    }

    pub fn commercial_average_level(&self) -> f32 {
        weighted_level_average(&self.commercial_levels())
    }

    pub fn industrial_average_level(&self) -> f32 {
        weighted_level_average(&self.industrial_levels())
    }

    pub fn office_average_level(&self) -> f32 {
        weighted_level_average(&self.office_levels())
    }

    pub fn residential_buildings(&self) -> u32 {
        total(&self.residential_levels())
    }

    pub fn commercial_buildings(&self) -> u32 {
        total(&self.commercial_levels())
    }

    pub fn industrial_buildings(&self) -> u32 {
        total(&self.industrial_levels())
    }

    pub fn office_buildings(&self) -> u32 {
        total(&self.office_levels())
    }

    /// Leveled zone buildings; abandoned buildings are counted separately.
    pub fn zone_buildings_total(&self) -> u32 {
        total(&[
            self.residential_buildings(),
            self.commercial_buildings(),
            self.industrial_buildings(),
            self.office_buildings(),
        ])
    }

    // Public transportation

    pub fn bus_total(&self) -> u32 {
        total(&[self.bus_residents, self.bus_tourists])
    }

    pub fn metro_total(&self) -> u32 {
        total(&[self.metro_residents, self.metro_tourists])
    }

    pub fn train_total(&self) -> u32 {
        total(&[self.train_residents, self.train_tourists])
    }

    pub fn tram_total(&self) -> Option<u32> {
        total_present(&[self.tram_residents, self.tram_tourists])
    }

    pub fn ferry_total(&self) -> Option<u32> {
        total_present(&[self.ferry_residents, self.ferry_tourists])
    }

    /// All transit lines; lines from inactive content packs count as zero.
    pub fn public_transport_total(&self) -> u32 {
        total_nullable(&[
            Some(self.bus_total()),
            Some(self.metro_total()),
            Some(self.train_total()),
            self.tram_total(),
            self.ferry_total(),
        ])
    }

    // Population

    pub fn children_percent(&self) -> f32 {
        percent(self.children, self.population)
    }

    pub fn teens_percent(&self) -> f32 {
        percent(self.teens, self.population)
    }

    pub fn young_adults_percent(&self) -> f32 {
        percent(self.young_adults, self.population)
    }

    pub fn adults_percent(&self) -> f32 {
        percent(self.adults, self.population)
    }

    pub fn seniors_percent(&self) -> f32 {
        percent(self.seniors, self.population)
    }

    pub fn households_total(&self) -> u32 {
        total(&[self.occupied_households, self.available_households])
    }

    pub fn occupied_households_percent(&self) -> f32 {
        percent(self.occupied_households, self.households_total())
    }

    pub fn unemployment_percent(&self) -> f32 {
        percent(self.unemployed, self.eligible_workers)
    }

    pub fn jobs_filled_percent(&self) -> f32 {
        percent(self.jobs_filled, self.jobs_available)
    }

    // Trade and tourism

    pub fn imports_total(&self) -> u32 {
        total(&[
            self.imports_goods,
            self.imports_forestry,
            self.imports_farming,
            self.imports_ore,
            self.imports_oil,
        ])
    }

    pub fn exports_total(&self) -> u32 {
        total(&[
            self.exports_goods,
            self.exports_forestry,
            self.exports_farming,
            self.exports_ore,
            self.exports_oil,
        ])
    }

    pub fn tourists_total(&self) -> u32 {
        total(&[
            self.low_wealth_tourists,
            self.medium_wealth_tourists,
            self.high_wealth_tourists,
        ])
    }

    // Economy

    pub fn profit(&self) -> i64 {
        self.total_income.saturating_sub(self.total_expenses)
    }

    pub fn income_per_capita(&self) -> Option<f32> {
        per_capita(Some(self.total_income), self.population)
    }

    pub fn residential_income_total(&self) -> i64 {
        total_nullable(&[
            Some(self.residential_low_income),
            Some(self.residential_high_income),
            self.residential_low_eco_income,
            self.residential_high_eco_income,
        ])
    }

    pub fn commercial_income_total(&self) -> i64 {
        total_nullable(&[
            Some(self.commercial_low_income),
            Some(self.commercial_high_income),
            self.commercial_leisure_income,
            self.commercial_tourism_income,
            self.commercial_eco_income,
        ])
    }

    pub fn industrial_income_total(&self) -> i64 {
        total(&[
            self.industrial_generic_income,
            self.industrial_forestry_income,
            self.industrial_farming_income,
            self.industrial_ore_income,
            self.industrial_oil_income,
        ])
    }

    pub fn office_income_total(&self) -> i64 {
        total_nullable(&[
            Some(self.office_generic_income),
            self.office_it_cluster_income,
        ])
    }

    pub fn service_expenses_total(&self) -> i64 {
        total(&[
            self.road_expenses,
            self.electricity_expenses,
            self.water_expenses,
            self.garbage_expenses,
            self.healthcare_expenses,
            self.fire_expenses,
            self.police_expenses,
            self.education_expenses,
            self.transport_expenses,
            self.park_expenses,
            self.policy_expenses,
            self.loan_expenses,
        ])
    }

    // Game limits

    pub fn buildings_usage_percent(&self) -> f32 {
        percent(self.buildings_in_use, self.buildings_capacity)
    }

    pub fn citizens_usage_percent(&self) -> f32 {
        percent(self.citizens_in_use, self.citizens_capacity)
    }

    pub fn vehicles_usage_percent(&self) -> f32 {
        percent(self.vehicles_in_use, self.vehicles_capacity)
    }

    pub fn network_segments_usage_percent(&self) -> f32 {
        percent(self.network_segments_in_use, self.network_segments_capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn snapshot() -> Snapshot {
        Snapshot::new(NaiveDateTime::default())
    }

    #[test]
    fn test_empty_snapshot_derived_values_are_zero() {
        let s = snapshot();
        assert_eq!(s.electricity_consumption_percent(), 0.0);
        assert_eq!(s.uneducated_percent(), 0.0);
        assert_eq!(s.residential_average_level(), 0.0);
        assert_eq!(s.public_transport_total(), 0);
        assert_eq!(s.income_per_capita(), Some(0.0));
        assert_eq!(s.water_tank_reserved_percent(), None);
        assert_eq!(s.tram_total(), None);
    }

    #[test]
    fn test_utility_percentages() {
        let mut s = snapshot();
        s.electricity_consumption = 120;
        s.electricity_production = 160;
        s.water_tank_reserved = Some(250);
        s.water_tank_storage_capacity = Some(1000);
        assert!((s.electricity_consumption_percent() - 75.0).abs() < 1e-5);
        assert_eq!(s.water_tank_reserved_percent(), Some(25.0));
    }

    #[test]
    fn test_education_level_shares() {
        let mut s = snapshot();
        s.uneducated = 10;
        s.educated = 30;
        s.well_educated = 40;
        s.highly_educated = 20;
        assert_eq!(s.education_level_total(), 100);
        assert_eq!(s.uneducated_percent(), 10.0);
        assert_eq!(s.well_educated_percent(), 40.0);
    }

    #[test]
    fn test_zone_levels_and_buildings() {
        let mut s = snapshot();
        s.residential_level1 = 1;
        s.residential_level2 = 1;
        s.residential_level3 = 1;
        s.residential_level4 = 1;
        s.residential_level5 = 1;
        s.office_level3 = 6;
        assert_eq!(s.residential_average_level(), 3.0);
        assert_eq!(s.office_average_level(), 3.0);
        assert_eq!(s.commercial_average_level(), 0.0);
        assert_eq!(s.residential_buildings(), 5);
        assert_eq!(s.zone_buildings_total(), 11);
    }

    #[test]
    fn test_transit_totals_treat_inactive_packs_as_zero() {
        let mut s = snapshot();
        s.bus_residents = 100;
        s.bus_tourists = 20;
        s.metro_residents = 50;
        s.ferry_residents = Some(7);
        s.ferry_tourists = Some(3);
        assert_eq!(s.bus_total(), 120);
        assert_eq!(s.tram_total(), None);
        assert_eq!(s.ferry_total(), Some(10));
        assert_eq!(s.public_transport_total(), 180);
    }

    #[test]
    fn test_income_totals() {
        let mut s = snapshot();
        s.residential_low_income = 1_000;
        s.residential_high_income = 2_000;
        s.residential_low_eco_income = Some(500);
        s.commercial_low_income = 300;
        s.commercial_leisure_income = None;
        s.office_generic_income = 50;
        assert_eq!(s.residential_income_total(), 3_500);
        assert_eq!(s.commercial_income_total(), 300);
        assert_eq!(s.office_income_total(), 50);
    }

    #[test]
    fn test_profit_and_per_capita() {
        let mut s = snapshot();
        s.total_income = 10_000;
        s.total_expenses = 12_500;
        s.population = 500;
        assert_eq!(s.profit(), -2_500);
        assert_eq!(s.income_per_capita(), Some(20.0));
    }
}
