//! Point-in-time measurement of the city.
//!
//! A [`Snapshot`] holds the base fields read from the running game plus a set
//! of derived fields (see `derived.rs`) that are recomputed on every read and
//! never stored. Fields that depend on an optional content pack are `Option`s
//! and are `None` exactly when that pack is not active.

use chrono::{NaiveDateTime, NaiveTime, Timelike};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

mod accessors;
mod content_gating;
mod derived;
pub mod ratios;

pub use content_gating::ContentPacks;

/// One measurement of the city at `snapshot_date`.
///
/// Base fields use the narrowest integer type that matches the game's own
/// counters. Equality and ordering only look at the timestamp, truncated to
/// the minute.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub snapshot_date: NaiveDateTime,

    // Electricity
    pub electricity_consumption: i32,
    pub electricity_production: i32,

    // Water
    pub water_consumption: i32,
    pub water_pumping_capacity: i32,

    // Water Tank
    pub water_tank_reserved: Option<i64>,
    pub water_tank_storage_capacity: Option<i64>,

    // Sewage
    pub sewage_production: i32,
    pub sewage_drain_capacity: i32,

    // Landfill
    pub landfill_storage: i64,
    pub landfill_capacity: i64,

    // Garbage
    pub garbage_production: i32,
    pub garbage_processing_capacity: i32,
    pub garbage_uncollected: u32,

    // Education
    pub elementary_eligible: u32,
    pub elementary_capacity: u32,
    pub high_school_eligible: u32,
    pub high_school_capacity: u32,
    pub university_eligible: u32,
    pub university_capacity: u32,
    pub library_users: u32,
    pub library_capacity: u32,

    // Education Level
    pub uneducated: u32,
    pub educated: u32,
    pub well_educated: u32,
    pub highly_educated: u32,

    // Happiness
    pub average_happiness: u8,
    pub residential_happiness: u8,
    pub commercial_happiness: u8,
    pub industrial_happiness: u8,
    pub office_happiness: u8,

    // Healthcare
    pub average_health: u8,
    pub sick_citizens: u32,
    pub hospital_patients: u32,
    pub hospital_capacity: u32,

    // Deathcare
    pub cemetery_buried: u32,
    pub cemetery_capacity: u32,
    pub crematorium_deceased: u32,
    pub crematorium_capacity: u32,

    // Zoning
    pub residential_zoned: u32,
    pub commercial_zoned: u32,
    pub industrial_zoned: u32,
    pub office_zoned: u32,

    // Zone Level
    pub residential_level1: u32,
    pub residential_level2: u32,
    pub residential_level3: u32,
    pub residential_level4: u32,
    pub residential_level5: u32,
    pub commercial_level1: u32,
    pub commercial_level2: u32,
    pub commercial_level3: u32,
    pub industrial_level1: u32,
    pub industrial_level2: u32,
    pub industrial_level3: u32,
    pub office_level1: u32,
    pub office_level2: u32,
    pub office_level3: u32,

    // Zone Buildings
    pub abandoned_buildings: u32,

    // Zone Demand
    pub residential_demand: u8,
    pub commercial_demand: u8,
    pub workplace_demand: u8,

    // Traffic
    pub traffic_average_flow: u8,
    pub active_vehicles: u32,

    // Pollution
    pub ground_pollution: u8,
    pub drinking_water_pollution: u8,
    pub noise_pollution: u8,

    // Fire Safety
    pub fire_hazard: u8,
    pub buildings_on_fire: u32,

    // Crime
    pub crime_rate: u8,
    pub detained_criminals: u32,
    pub jail_capacity: u32,

    // Public Transportation
    pub bus_residents: u32,
    pub bus_tourists: u32,
    pub metro_residents: u32,
    pub metro_tourists: u32,
    pub train_residents: u32,
    pub train_tourists: u32,
    pub tram_residents: Option<u32>,
    pub tram_tourists: Option<u32>,
    pub ferry_residents: Option<u32>,
    pub ferry_tourists: Option<u32>,

    // Population
    pub population: u32,
    pub children: u32,
    pub teens: u32,
    pub young_adults: u32,
    pub adults: u32,
    pub seniors: u32,
    pub birth_rate: u32,
    pub death_rate: u32,

    // Households
    pub occupied_households: u32,
    pub available_households: u32,

    // Employment
    pub eligible_workers: u32,
    pub unemployed: u32,
    pub jobs_available: u32,
    pub jobs_filled: u32,

    // Outside Connections
    pub imports_goods: u32,
    pub imports_forestry: u32,
    pub imports_farming: u32,
    pub imports_ore: u32,
    pub imports_oil: u32,
    pub exports_goods: u32,
    pub exports_forestry: u32,
    pub exports_farming: u32,
    pub exports_ore: u32,
    pub exports_oil: u32,

    // Land Value
    pub average_land_value: u32,

    // Heating
    pub heating_consumption: Option<i32>,
    pub heating_production: Option<i32>,

    // Tourism
    pub city_attractiveness: u32,
    pub low_wealth_tourists: u32,
    pub medium_wealth_tourists: u32,
    pub high_wealth_tourists: u32,

    // Tax Rate
    pub residential_low_tax_rate: u8,
    pub residential_high_tax_rate: u8,
    pub commercial_low_tax_rate: u8,
    pub commercial_high_tax_rate: u8,
    pub industrial_tax_rate: u8,
    pub office_tax_rate: u8,

    // City Economy
    pub total_income: i64,
    pub total_expenses: i64,
    pub bank_balance: i64,
    pub loan_balance: i64,

    // Residential Income
    pub residential_low_income: i64,
    pub residential_high_income: i64,
    pub residential_low_eco_income: Option<i64>,
    pub residential_high_eco_income: Option<i64>,

    // Commercial Income
    pub commercial_low_income: i64,
    pub commercial_high_income: i64,
    pub commercial_leisure_income: Option<i64>,
    pub commercial_tourism_income: Option<i64>,
    pub commercial_eco_income: Option<i64>,

    // Industrial Income
    pub industrial_generic_income: i64,
    pub industrial_forestry_income: i64,
    pub industrial_farming_income: i64,
    pub industrial_ore_income: i64,
    pub industrial_oil_income: i64,

    // Office Income
    pub office_generic_income: i64,
    pub office_it_cluster_income: Option<i64>,

    // Service Expenses
    pub road_expenses: i64,
    pub electricity_expenses: i64,
    pub water_expenses: i64,
    pub garbage_expenses: i64,
    pub healthcare_expenses: i64,
    pub fire_expenses: i64,
    pub police_expenses: i64,
    pub education_expenses: i64,
    pub transport_expenses: i64,
    pub park_expenses: i64,
    pub policy_expenses: i64,
    pub loan_expenses: i64,

    // Park Areas
    pub park_areas: Option<u32>,
    pub park_visitors: Option<u32>,

    // Campus
    pub campus_students: Option<u32>,
    pub campus_capacity: Option<u32>,

    // Game Limits
    pub buildings_in_use: u32,
    pub buildings_capacity: u32,
    pub citizens_in_use: u32,
    pub citizens_capacity: u32,
    pub vehicles_in_use: u32,
    pub vehicles_capacity: u32,
    pub network_segments_in_use: u32,
    pub network_segments_capacity: u32,
}

impl Snapshot {
    /// Every field and derived property exposed as a statistic, in catalog
    /// order. `snapshot_date` is not a statistic and is not listed.
    ///
    /// When you add a field or derived property, add its name here and a
    /// matching `StatisticKind`. The registry self-check reports drift.
    pub const FIELD_NAMES: &'static [&'static str] = &[
        "electricity_consumption",
        "electricity_production",
        "electricity_consumption_percent",
        "water_consumption",
        "water_pumping_capacity",
        "water_consumption_percent",
        "water_tank_reserved",
        "water_tank_storage_capacity",
        "water_tank_reserved_percent",
        "sewage_production",
        "sewage_drain_capacity",
        "sewage_production_percent",
        "landfill_storage",
        "landfill_capacity",
        "landfill_storage_percent",
        "garbage_production",
        "garbage_processing_capacity",
        "garbage_production_percent",
        "garbage_uncollected",
        "elementary_eligible",
        "elementary_capacity",
        "elementary_usage_percent",
        "high_school_eligible",
        "high_school_capacity",
        "high_school_usage_percent",
        "university_eligible",
        "university_capacity",
        "university_usage_percent",
        "library_users",
        "library_capacity",
        "library_usage_percent",
        "uneducated",
        "educated",
        "well_educated",
        "highly_educated",
        "education_level_total",
        "uneducated_percent",
        "educated_percent",
        "well_educated_percent",
        "highly_educated_percent",
        "average_happiness",
        "residential_happiness",
        "commercial_happiness",
        "industrial_happiness",
        "office_happiness",
        "average_health",
        "sick_citizens",
        "hospital_patients",
        "hospital_capacity",
        "hospital_usage_percent",
        "cemetery_buried",
        "cemetery_capacity",
        "cemetery_usage_percent",
        "crematorium_deceased",
        "crematorium_capacity",
        "crematorium_usage_percent",
        "residential_zoned",
        "commercial_zoned",
        "industrial_zoned",
        "office_zoned",
        "zoned_total",
        "residential_zoned_percent",
        "commercial_zoned_percent",
        "industrial_zoned_percent",
        "office_zoned_percent",
        "residential_level1",
        "residential_level2",
        "residential_level3",
        "residential_level4",
        "residential_level5",
        "residential_average_level",
        "commercial_level1",
        "commercial_level2",
        "commercial_level3",
        "commercial_average_level",
        "industrial_level1",
        "industrial_level2",
        "industrial_level3",
        "industrial_average_level",
        "office_level1",
        "office_level2",
        "office_level3",
        "office_average_level",
        "residential_buildings",
        "commercial_buildings",
        "industrial_buildings",
        "office_buildings",
        "zone_buildings_total",
        "abandoned_buildings",
        "residential_demand",
        "commercial_demand",
        "workplace_demand",
        "traffic_average_flow",
        "active_vehicles",
        "ground_pollution",
        "drinking_water_pollution",
        "noise_pollution",
        "fire_hazard",
        "buildings_on_fire",
        "crime_rate",
        "detained_criminals",
        "jail_capacity",
        "jail_usage_percent",
        "bus_residents",
        "bus_tourists",
        "bus_total",
        "metro_residents",
        "metro_tourists",
        "metro_total",
        "train_residents",
        "train_tourists",
        "train_total",
        "tram_residents",
        "tram_tourists",
        "tram_total",
        "ferry_residents",
        "ferry_tourists",
        "ferry_total",
        "public_transport_total",
        "population",
        "children",
        "teens",
        "young_adults",
        "adults",
        "seniors",
        "children_percent",
        "teens_percent",
        "young_adults_percent",
        "adults_percent",
        "seniors_percent",
        "birth_rate",
        "death_rate",
        "occupied_households",
        "available_households",
        "households_total",
        "occupied_households_percent",
        "eligible_workers",
        "unemployed",
        "unemployment_percent",
        "jobs_available",
        "jobs_filled",
        "jobs_filled_percent",
        "imports_goods",
        "imports_forestry",
        "imports_farming",
        "imports_ore",
        "imports_oil",
        "imports_total",
        "exports_goods",
        "exports_forestry",
        "exports_farming",
        "exports_ore",
        "exports_oil",
        "exports_total",
        "average_land_value",
        "heating_consumption",
        "heating_production",
        "heating_consumption_percent",
        "city_attractiveness",
        "low_wealth_tourists",
        "medium_wealth_tourists",
        "high_wealth_tourists",
        "tourists_total",
        "residential_low_tax_rate",
        "residential_high_tax_rate",
        "commercial_low_tax_rate",
        "commercial_high_tax_rate",
        "industrial_tax_rate",
        "office_tax_rate",
        "total_income",
        "total_expenses",
        "profit",
        "bank_balance",
        "loan_balance",
        "income_per_capita",
        "residential_low_income",
        "residential_high_income",
        "residential_low_eco_income",
        "residential_high_eco_income",
        "residential_income_total",
        "commercial_low_income",
        "commercial_high_income",
        "commercial_leisure_income",
        "commercial_tourism_income",
        "commercial_eco_income",
        "commercial_income_total",
        "industrial_generic_income",
        "industrial_forestry_income",
        "industrial_farming_income",
        "industrial_ore_income",
        "industrial_oil_income",
        "industrial_income_total",
        "office_generic_income",
        "office_it_cluster_income",
        "office_income_total",
        "road_expenses",
        "electricity_expenses",
        "water_expenses",
        "garbage_expenses",
        "healthcare_expenses",
        "fire_expenses",
        "police_expenses",
        "education_expenses",
        "transport_expenses",
        "park_expenses",
        "policy_expenses",
        "loan_expenses",
        "service_expenses_total",
        "park_areas",
        "park_visitors",
        "campus_students",
        "campus_capacity",
        "campus_usage_percent",
        "buildings_in_use",
        "buildings_capacity",
        "buildings_usage_percent",
        "citizens_in_use",
        "citizens_capacity",
        "citizens_usage_percent",
        "vehicles_in_use",
        "vehicles_capacity",
        "vehicles_usage_percent",
        "network_segments_in_use",
        "network_segments_capacity",
        "network_segments_usage_percent",
    ];

    /// Empty snapshot stamped with `timestamp` as given.
    pub fn new(timestamp: NaiveDateTime) -> Self {
        Self {
            snapshot_date: timestamp,
            ..Default::default()
        }
    }

    /// Empty snapshot for the game day containing `timestamp`; the time of day
    /// is discarded.
    pub fn for_game_date(timestamp: NaiveDateTime) -> Self {
        Self::new(timestamp.date().and_time(NaiveTime::MIN))
    }

    /// The timestamp with seconds and sub-second precision dropped, which is
    /// the key used for equality and ordering.
    pub fn minute_key(&self) -> NaiveDateTime {
        let date = self.snapshot_date;
        date.with_second(0)
            .and_then(|d| d.with_nanosecond(0))
            .unwrap_or(date)
    }
}

impl PartialEq for Snapshot {
    fn eq(&self, other: &Self) -> bool {
        self.minute_key() == other.minute_key()
    }
}

impl Eq for Snapshot {}

impl PartialOrd for Snapshot {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Snapshot {
    fn cmp(&self, other: &Self) -> Ordering {
        self.minute_key().cmp(&other.minute_key())
    }
}

impl Hash for Snapshot {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.minute_key().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2031, 4, 17)
            .and_then(|d| d.and_hms_opt(h, m, s))
            .expect("valid test date")
    }

    #[test]
    fn test_new_snapshot_is_zeroed() {
        let snapshot = Snapshot::new(at(8, 30, 0));
        assert_eq!(snapshot.snapshot_date, at(8, 30, 0));
        assert_eq!(snapshot.population, 0);
        assert_eq!(snapshot.bank_balance, 0);
        assert_eq!(snapshot.tram_residents, None);
        assert_eq!(snapshot.water_tank_reserved, None);
    }

    #[test]
    fn test_for_game_date_drops_time_of_day() {
        let snapshot = Snapshot::for_game_date(at(17, 45, 12));
        assert_eq!(snapshot.snapshot_date, at(0, 0, 0));
    }

    #[test]
    fn test_equal_when_only_seconds_differ() {
        let a = Snapshot::new(at(10, 15, 3));
        let mut b = Snapshot::new(at(10, 15, 59));
        b.population = 1234;
        assert_eq!(a, b);
        assert_eq!(a.cmp(&b), Ordering::Equal);
    }

    #[test]
    fn test_unequal_when_minute_differs() {
        let a = Snapshot::new(at(10, 15, 59));
        let b = Snapshot::new(at(10, 16, 0));
        assert_ne!(a, b);
        assert!(a < b);
    }

    #[test]
    fn test_field_names_unique() {
        let unique: std::collections::HashSet<&str> =
            Snapshot::FIELD_NAMES.iter().copied().collect();
        assert_eq!(unique.len(), Snapshot::FIELD_NAMES.len());
        assert!(!unique.contains("snapshot_date"));
    }
}
