//! # TestHost: headless harness for the statistics plugin
//!
//! Wraps a `bevy::app::App` running `MinimalPlugins` + [`StatisticsPlugin`]
//! with a scripted [`FakeCity`] standing in for the game. Fixed ticks are
//! driven by hand so tests are deterministic.

use std::time::Duration;

use bevy::app::App;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use chrono::{DateTime, NaiveDateTime};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::colors::ColorTable;
use crate::config::StatisticsConfig;
use crate::history::SnapshotHistory;
use crate::host::{BuildingRecord, CityReader, CitySource, GameDate, ZoneKind};
use crate::registry::StatisticsRegistry;
use crate::sampling::BuildingTally;
use crate::snapshot::{ContentPacks, Snapshot};
use crate::StatisticsPlugin;

// ---------------------------------------------------------------------------
// FakeCity
// ---------------------------------------------------------------------------

/// A scripted [`CityReader`]: fixed building slots plus a template snapshot
/// whose base fields are copied into every sample.
#[derive(Debug, Clone, Default)]
pub struct FakeCity {
    pub packs: ContentPacks,
    pub buildings: Vec<Option<BuildingRecord>>,
    pub template: Snapshot,
}

impl FakeCity {
    /// A small city with every content pack active.
    pub fn small() -> Self {
        let mut template = Snapshot::default();
        template.population = 1200;
        template.electricity_consumption = 80;
        template.electricity_production = 100;
        template.tram_residents = Some(40);
        template.campus_students = Some(300);
        Self {
            packs: ContentPacks::all(),
            buildings: Vec::new(),
            template,
        }
        .with_buildings(ZoneKind::Residential, 2, 10)
        .with_buildings(ZoneKind::Commercial, 1, 4)
        .with_empty_slots(6)
    }

    pub fn with_packs(mut self, packs: ContentPacks) -> Self {
        self.packs = packs;
        self
    }

    pub fn with_buildings(mut self, zone: ZoneKind, level: u8, count: usize) -> Self {
        self.buildings.extend((0..count).map(|_| {
            Some(BuildingRecord {
                zone: Some(zone),
                level,
                abandoned: false,
            })
        }));
        self
    }

    pub fn with_abandoned(mut self, count: usize) -> Self {
        self.buildings.extend((0..count).map(|_| {
            Some(BuildingRecord {
                zone: Some(ZoneKind::Industrial),
                level: 1,
                abandoned: true,
            })
        }));
        self
    }

    pub fn with_empty_slots(mut self, count: usize) -> Self {
        self.buildings.extend((0..count).map(|_| None));
        self
    }
}

impl CityReader for FakeCity {
    fn content_packs(&self) -> ContentPacks {
        self.packs
    }

    fn building_slots(&self) -> usize {
        self.buildings.len()
    }

    fn building(&self, slot: usize) -> Option<BuildingRecord> {
        self.buildings.get(slot).copied().flatten()
    }

    fn populate(&self, snapshot: &mut Snapshot) {
        let date = snapshot.snapshot_date;
        *snapshot = self.template.clone();
        snapshot.snapshot_date = date;
    }
}

// ---------------------------------------------------------------------------
// TestHost
// ---------------------------------------------------------------------------

/// A headless Bevy App with the statistics plugin installed.
pub struct TestHost {
    app: App,
}

impl Default for TestHost {
    fn default() -> Self {
        Self::new()
    }
}

impl TestHost {
    /// Ready color table, default config and [`FakeCity::small`].
    pub fn new() -> Self {
        Self::build(ColorTable::loaded(), StatisticsConfig::default(), Some(FakeCity::small()))
    }

    pub fn with_config(config: StatisticsConfig) -> Self {
        Self::build(ColorTable::loaded(), config, Some(FakeCity::small()))
    }

    pub fn with_city(city: FakeCity) -> Self {
        Self::build(ColorTable::loaded(), StatisticsConfig::default(), Some(city))
    }

    pub fn with_city_and_config(city: FakeCity, config: StatisticsConfig) -> Self {
        Self::build(ColorTable::loaded(), config, Some(city))
    }

    /// Runs startup with `colors` as the engine color table.
    pub fn with_colors(colors: ColorTable) -> Self {
        Self::build(colors, StatisticsConfig::default(), Some(FakeCity::small()))
    }

    /// No [`CitySource`] at all, as on a host that never registered one.
    pub fn without_city() -> Self {
        Self::build(ColorTable::loaded(), StatisticsConfig::default(), None)
    }

    /// Like [`TestHost::new`] with `plugin` added next to the statistics
    /// plugin, before startup runs.
    pub fn with_plugin(plugin: impl Plugin) -> Self {
        Self::build_with(
            ColorTable::loaded(),
            StatisticsConfig::default(),
            Some(FakeCity::small()),
            |app| {
                app.add_plugins(plugin);
            },
        )
    }

    fn build(colors: ColorTable, config: StatisticsConfig, city: Option<FakeCity>) -> Self {
        Self::build_with(colors, config, city, |_| {})
    }

    fn build_with(
        colors: ColorTable,
        config: StatisticsConfig,
        city: Option<FakeCity>,
        extra: impl FnOnce(&mut App),
    ) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        // Fixed ticks only run through `tick()`.
        app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::ZERO));
        app.insert_resource(colors);
        if let Some(city) = city {
            app.insert_resource(CitySource::new(city));
        }
        app.add_plugins(StatisticsPlugin { config });
        extra(&mut app);
        // Run one update so Startup and PostStartup systems execute.
        app.update();
        Self { app }
    }

    // -----------------------------------------------------------------------
    // Driving the simulation
    // -----------------------------------------------------------------------

    /// Run `n` fixed ticks.
    pub fn tick(&mut self, n: u32) {
        for _ in 0..n {
            self.app.world_mut().run_schedule(FixedUpdate);
        }
    }

    /// Run a frame (Update-schedule systems included).
    pub fn update(&mut self) {
        self.app.update();
    }

    /// Ticks until the building tally publishes another complete pass.
    pub fn complete_tally_pass(&mut self) {
        let before = self.resource::<BuildingTally>().0.cycles_completed();
        // One pass needs at most slots / batch + 1 ticks.
        for _ in 0..10_000 {
            self.tick(1);
            if self.resource::<BuildingTally>().0.cycles_completed() > before {
                return;
            }
        }
        panic!("building tally never completed a pass");
    }

    pub fn advance_days(&mut self, days: u32) {
        self.app.world_mut().resource_mut::<GameDate>().advance_days(days);
    }

    pub fn set_date(&mut self, date: NaiveDateTime) {
        self.app.world_mut().insert_resource(GameDate(date));
    }

    pub fn replace_city(&mut self, city: FakeCity) {
        self.app.world_mut().insert_resource(CitySource::new(city));
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn resource<T: Resource>(&self) -> &T {
        self.app.world().resource::<T>()
    }

    pub fn resource_mut<T: Resource>(&mut self) -> Mut<'_, T> {
        self.app.world_mut().resource_mut::<T>()
    }

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    pub fn history(&self) -> &SnapshotHistory {
        self.resource::<SnapshotHistory>()
    }

    pub fn registry(&self) -> &StatisticsRegistry {
        self.resource::<StatisticsRegistry>()
    }
}

// ---------------------------------------------------------------------------
// Random snapshots
// ---------------------------------------------------------------------------

/// A snapshot with every base field randomized, deterministic per `seed`.
/// Nullable fields are `None` about half of the time.
pub fn random_snapshot(seed: u64) -> Snapshot {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    // Anywhere between 1970 and 2100, with sub-second precision.
    let secs = rng.gen_range(0..4_102_444_800_i64);
    let nanos = rng.gen_range(0..1_000_000_000_u32);
    let date = DateTime::from_timestamp(secs, nanos)
        .map(|d| d.naive_utc())
        .unwrap_or_default();

    let mut s = Snapshot::new(date);
    randomize_fields(&mut s, &mut rng);
    s
}

fn randomize_fields(s: &mut Snapshot, rng: &mut ChaCha8Rng) {
    s.electricity_consumption = rng.gen();
    s.electricity_production = rng.gen();
    s.water_consumption = rng.gen();
    s.water_pumping_capacity = rng.gen();
    s.water_tank_reserved = rng.gen_bool(0.5).then(|| rng.gen());
    s.water_tank_storage_capacity = rng.gen_bool(0.5).then(|| rng.gen());
    s.sewage_production = rng.gen();
    s.sewage_drain_capacity = rng.gen();
    s.landfill_storage = rng.gen();
    s.landfill_capacity = rng.gen();
    s.garbage_production = rng.gen();
    s.garbage_processing_capacity = rng.gen();
    s.garbage_uncollected = rng.gen();
    s.elementary_eligible = rng.gen();
    s.elementary_capacity = rng.gen();
    s.high_school_eligible = rng.gen();
    s.high_school_capacity = rng.gen();
    s.university_eligible = rng.gen();
    s.university_capacity = rng.gen();
    s.library_users = rng.gen();
    s.library_capacity = rng.gen();
    s.uneducated = rng.gen();
    s.educated = rng.gen();
    s.well_educated = rng.gen();
    s.highly_educated = rng.gen();
    s.average_happiness = rng.gen();
    s.residential_happiness = rng.gen();
    s.commercial_happiness = rng.gen();
    s.industrial_happiness = rng.gen();
    s.office_happiness = rng.gen();
    s.average_health = rng.gen();
    s.sick_citizens = rng.gen();
    s.hospital_patients = rng.gen();
    s.hospital_capacity = rng.gen();
    s.cemetery_buried = rng.gen();
    s.cemetery_capacity = rng.gen();
    s.crematorium_deceased = rng.gen();
    s.crematorium_capacity = rng.gen();
    s.residential_zoned = rng.gen();
    s.commercial_zoned = rng.gen();
    s.industrial_zoned = rng.gen();
    s.office_zoned = rng.gen();
    s.residential_level1 = rng.gen();
    s.residential_level2 = rng.gen();
    s.residential_level3 = rng.gen();
    s.residential_level4 = rng.gen();
    s.residential_level5 = rng.gen();
    s.commercial_level1 = rng.gen();
    s.commercial_level2 = rng.gen();
    s.commercial_level3 = rng.gen();
    s.industrial_level1 = rng.gen();
    s.industrial_level2 = rng.gen();
    s.industrial_level3 = rng.gen();
    s.office_level1 = rng.gen();
    s.office_level2 = rng.gen();
    s.office_level3 = rng.gen();
    s.abandoned_buildings = rng.gen();
    s.residential_demand = rng.gen();
    s.commercial_demand = rng.gen();
    s.workplace_demand = rng.gen();
    s.traffic_average_flow = rng.gen();
    s.active_vehicles = rng.gen();
    s.ground_pollution = rng.gen();
    s.drinking_water_pollution = rng.gen();
    s.noise_pollution = rng.gen();
    s.fire_hazard = rng.gen();
    s.buildings_on_fire = rng.gen();
    s.crime_rate = rng.gen();
    s.detained_criminals = rng.gen();
    s.jail_capacity = rng.gen();
    s.bus_residents = rng.gen();
    s.bus_tourists = rng.gen();
    s.metro_residents = rng.gen();
    s.metro_tourists = rng.gen();
    s.train_residents = rng.gen();
    s.train_tourists = rng.gen();
    s.tram_residents = rng.gen_bool(0.5).then(|| rng.gen());
    s.tram_tourists = rng.gen_bool(0.5).then(|| rng.gen());
    s.ferry_residents = rng.gen_bool(0.5).then(|| rng.gen());
    s.ferry_tourists = rng.gen_bool(0.5).then(|| rng.gen());
    s.population = rng.gen();
    s.children = rng.gen();
    s.teens = rng.gen();
    s.young_adults = rng.gen();
    s.adults = rng.gen();
    s.seniors = rng.gen();
    s.birth_rate = rng.gen();
    s.death_rate = rng.gen();
    s.occupied_households = rng.gen();
    s.available_households = rng.gen();
    s.eligible_workers = rng.gen();
    s.unemployed = rng.gen();
    s.jobs_available = rng.gen();
    s.jobs_filled = rng.gen();
    s.imports_goods = rng.gen();
    s.imports_forestry = rng.gen();
    s.imports_farming = rng.gen();
    s.imports_ore = rng.gen();
    s.imports_oil = rng.gen();
    s.exports_goods = rng.gen();
    s.exports_forestry = rng.gen();
    s.exports_farming = rng.gen();
    s.exports_ore = rng.gen();
    s.exports_oil = rng.gen();
    s.average_land_value = rng.gen();
    s.heating_consumption = rng.gen_bool(0.5).then(|| rng.gen());
    s.heating_production = rng.gen_bool(0.5).then(|| rng.gen());
    s.city_attractiveness = rng.gen();
    s.low_wealth_tourists = rng.gen();
    s.medium_wealth_tourists = rng.gen();
    s.high_wealth_tourists = rng.gen();
    s.residential_low_tax_rate = rng.gen();
    s.residential_high_tax_rate = rng.gen();
    s.commercial_low_tax_rate = rng.gen();
    s.commercial_high_tax_rate = rng.gen();
    s.industrial_tax_rate = rng.gen();
    s.office_tax_rate = rng.gen();
    s.total_income = rng.gen();
    s.total_expenses = rng.gen();
    s.bank_balance = rng.gen();
    s.loan_balance = rng.gen();
    s.residential_low_income = rng.gen();
    s.residential_high_income = rng.gen();
    s.residential_low_eco_income = rng.gen_bool(0.5).then(|| rng.gen());
    s.residential_high_eco_income = rng.gen_bool(0.5).then(|| rng.gen());
    s.commercial_low_income = rng.gen();
    s.commercial_high_income = rng.gen();
    s.commercial_leisure_income = rng.gen_bool(0.5).then(|| rng.gen());
    s.commercial_tourism_income = rng.gen_bool(0.5).then(|| rng.gen());
    s.commercial_eco_income = rng.gen_bool(0.5).then(|| rng.gen());
    s.industrial_generic_income = rng.gen();
    s.industrial_forestry_income = rng.gen();
    s.industrial_farming_income = rng.gen();
    s.industrial_ore_income = rng.gen();
    s.industrial_oil_income = rng.gen();
    s.office_generic_income = rng.gen();
    s.office_it_cluster_income = rng.gen_bool(0.5).then(|| rng.gen());
    s.road_expenses = rng.gen();
    s.electricity_expenses = rng.gen();
    s.water_expenses = rng.gen();
    s.garbage_expenses = rng.gen();
    s.healthcare_expenses = rng.gen();
    s.fire_expenses = rng.gen();
    s.police_expenses = rng.gen();
    s.education_expenses = rng.gen();
    s.transport_expenses = rng.gen();
    s.park_expenses = rng.gen();
    s.policy_expenses = rng.gen();
    s.loan_expenses = rng.gen();
    s.park_areas = rng.gen_bool(0.5).then(|| rng.gen());
    s.park_visitors = rng.gen_bool(0.5).then(|| rng.gen());
    s.campus_students = rng.gen_bool(0.5).then(|| rng.gen());
    s.campus_capacity = rng.gen_bool(0.5).then(|| rng.gen());
    s.buildings_in_use = rng.gen();
    s.buildings_capacity = rng.gen();
    s.citizens_in_use = rng.gen();
    s.citizens_capacity = rng.gen();
    s.vehicles_in_use = rng.gen();
    s.vehicles_capacity = rng.gen();
    s.network_segments_in_use = rng.gen();
    s.network_segments_capacity = rng.gen();
}
