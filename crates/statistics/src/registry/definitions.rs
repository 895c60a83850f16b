//! The built-in catalog: every category in display order with its ordered
//! statistics.

use crate::catalog::{
    Category, CategoryKind, StatisticKind, StatisticSpec, UNITS_AMOUNT, UNITS_LAND_VALUE,
    UNITS_LEVEL, UNITS_MONEY, UNITS_MONEY_WEEKLY, UNITS_MW, UNITS_NONE, UNITS_PERCENT,
    UNITS_WATER,
};
use crate::colors::{engine, fixed, ColorTable, StatisticColor};
use crate::host::ZoneKind;

fn stat(
    kind: StatisticKind,
    name_part1: &'static str,
    name_part2: &'static str,
    units: &'static str,
    color: StatisticColor,
) -> StatisticSpec {
    StatisticSpec {
        kind,
        name_part1,
        name_part2,
        units,
        color,
    }
}

/// Builds the catalog with every color resolved against `colors`.
pub fn build_categories(colors: &ColorTable) -> Vec<Category> {
    let mut categories = catalog();
    for statistic in categories.iter_mut().flat_map(|c| c.statistics.iter_mut()) {
        statistic.resolve_color(colors);
    }
    categories
}

/// Zone statistics use an engine color slot; the rest use the fixed palette,
/// restarting per category.
fn catalog() -> Vec<Category> {
    vec![
        Category::new(
            CategoryKind::Electricity,
            vec![
                stat(
                    StatisticKind::ElectricityConsumption,
                    "Electricity",
                    "Consumption",
                    UNITS_MW,
                    fixed(0),
                ),
                stat(
                    StatisticKind::ElectricityProduction,
                    "Electricity",
                    "Production",
                    UNITS_MW,
                    fixed(1),
                ),
                stat(
                    StatisticKind::ElectricityConsumptionPercent,
                    "Electricity",
                    "Consumption",
                    UNITS_PERCENT,
                    fixed(2),
                ),
            ],
        ),
        Category::new(
            CategoryKind::Water,
            vec![
                stat(
                    StatisticKind::WaterConsumption,
                    "Water",
                    "Consumption",
                    UNITS_WATER,
                    fixed(0),
                ),
                stat(
                    StatisticKind::WaterPumpingCapacity,
                    "Water",
                    "Pumping Capacity",
                    UNITS_WATER,
                    fixed(1),
                ),
                stat(
                    StatisticKind::WaterConsumptionPercent,
                    "Water",
                    "Consumption",
                    UNITS_PERCENT,
                    fixed(2),
                ),
            ],
        ),
        Category::new(
            CategoryKind::WaterTank,
            vec![
                stat(
                    StatisticKind::WaterTankReserved,
                    "Water Tank",
                    "Reserved",
                    UNITS_WATER,
                    fixed(0),
                ),
                stat(
                    StatisticKind::WaterTankStorageCapacity,
                    "Water Tank",
                    "Storage Capacity",
                    UNITS_WATER,
                    fixed(1),
                ),
                stat(
                    StatisticKind::WaterTankReservedPercent,
                    "Water Tank",
                    "Reserved",
                    UNITS_PERCENT,
                    fixed(2),
                ),
            ],
        ),
        Category::new(
            CategoryKind::Sewage,
            vec![
                stat(
                    StatisticKind::SewageProduction,
                    "Sewage",
                    "Production",
                    UNITS_WATER,
                    fixed(0),
                ),
                stat(
                    StatisticKind::SewageDrainCapacity,
                    "Sewage",
                    "Drain Capacity",
                    UNITS_WATER,
                    fixed(1),
                ),
                stat(
                    StatisticKind::SewageProductionPercent,
                    "Sewage",
                    "Production",
                    UNITS_PERCENT,
                    fixed(2),
                ),
            ],
        ),
        Category::new(
            CategoryKind::Landfill,
            vec![
                stat(
                    StatisticKind::LandfillStorage,
                    "Landfill",
                    "Storage",
                    UNITS_AMOUNT,
                    fixed(0),
                ),
                stat(
                    StatisticKind::LandfillCapacity,
                    "Landfill",
                    "Capacity",
                    UNITS_AMOUNT,
                    fixed(1),
                ),
                stat(
                    StatisticKind::LandfillStoragePercent,
                    "Landfill",
                    "Storage",
                    UNITS_PERCENT,
                    fixed(2),
                ),
            ],
        ),
        Category::new(
            CategoryKind::Garbage,
            vec![
                stat(
                    StatisticKind::GarbageProduction,
                    "Garbage",
                    "Production",
                    UNITS_AMOUNT,
                    fixed(0),
                ),
                stat(
                    StatisticKind::GarbageProcessingCapacity,
                    "Garbage",
                    "Processing Capacity",
                    UNITS_AMOUNT,
                    fixed(1),
                ),
                stat(
                    StatisticKind::GarbageProductionPercent,
                    "Garbage",
                    "Production",
                    UNITS_PERCENT,
                    fixed(2),
                ),
                stat(
                    StatisticKind::GarbageUncollected,
                    "Garbage",
                    "Uncollected",
                    UNITS_AMOUNT,
                    fixed(3),
                ),
            ],
        ),
        Category::new(
            CategoryKind::Education,
            vec![
                stat(
                    StatisticKind::ElementaryEligible,
                    "Elementary",
                    "Eligible",
                    UNITS_NONE,
                    fixed(0),
                ),
                stat(
                    StatisticKind::ElementaryCapacity,
                    "Elementary",
                    "Capacity",
                    UNITS_NONE,
                    fixed(1),
                ),
                stat(
                    StatisticKind::ElementaryUsagePercent,
                    "Elementary",
                    "Usage",
                    UNITS_PERCENT,
                    fixed(2),
                ),
                stat(
                    StatisticKind::HighSchoolEligible,
                    "High School",
                    "Eligible",
                    UNITS_NONE,
                    fixed(3),
                ),
                stat(
                    StatisticKind::HighSchoolCapacity,
                    "High School",
                    "Capacity",
                    UNITS_NONE,
                    fixed(4),
                ),
                stat(
                    StatisticKind::HighSchoolUsagePercent,
                    "High School",
                    "Usage",
                    UNITS_PERCENT,
                    fixed(5),
                ),
                stat(
                    StatisticKind::UniversityEligible,
                    "University",
                    "Eligible",
                    UNITS_NONE,
                    fixed(6),
                ),
                stat(
                    StatisticKind::UniversityCapacity,
                    "University",
                    "Capacity",
                    UNITS_NONE,
                    fixed(7),
                ),
                stat(
                    StatisticKind::UniversityUsagePercent,
                    "University",
                    "Usage",
                    UNITS_PERCENT,
                    fixed(8),
                ),
                stat(
                    StatisticKind::LibraryUsers,
                    "Library",
                    "Users",
                    UNITS_NONE,
                    fixed(9),
                ),
                stat(
                    StatisticKind::LibraryCapacity,
                    "Library",
                    "Capacity",
                    UNITS_NONE,
                    fixed(10),
                ),
                stat(
                    StatisticKind::LibraryUsagePercent,
                    "Library",
                    "Usage",
                    UNITS_PERCENT,
                    fixed(11),
                ),
            ],
        ),
        Category::new(
            CategoryKind::EducationLevel,
            vec![
                stat(
                    StatisticKind::Uneducated,
                    "Uneducated",
                    "",
                    UNITS_NONE,
                    fixed(0),
                ),
                stat(
                    StatisticKind::Educated,
                    "Educated",
                    "",
                    UNITS_NONE,
                    fixed(1),
                ),
                stat(
                    StatisticKind::WellEducated,
                    "Well Educated",
                    "",
                    UNITS_NONE,
                    fixed(2),
                ),
                stat(
                    StatisticKind::HighlyEducated,
                    "Highly Educated",
                    "",
                    UNITS_NONE,
                    fixed(3),
                ),
                stat(
                    StatisticKind::EducationLevelTotal,
                    "Education Level",
                    "Total",
                    UNITS_NONE,
                    fixed(4),
                ),
                stat(
                    StatisticKind::UneducatedPercent,
                    "Uneducated",
                    "",
                    UNITS_PERCENT,
                    fixed(5),
                ),
                stat(
                    StatisticKind::EducatedPercent,
                    "Educated",
                    "",
                    UNITS_PERCENT,
                    fixed(6),
                ),
                stat(
                    StatisticKind::WellEducatedPercent,
                    "Well Educated",
                    "",
                    UNITS_PERCENT,
                    fixed(7),
                ),
                stat(
                    StatisticKind::HighlyEducatedPercent,
                    "Highly Educated",
                    "",
                    UNITS_PERCENT,
                    fixed(8),
                ),
            ],
        ),
        Category::new(
            CategoryKind::Happiness,
            vec![
                stat(
                    StatisticKind::AverageHappiness,
                    "Happiness",
                    "Average",
                    UNITS_PERCENT,
                    fixed(0),
                ),
                stat(
                    StatisticKind::ResidentialHappiness,
                    "Residential",
                    "Happiness",
                    UNITS_PERCENT,
                    engine(ZoneKind::Residential),
                ),
                stat(
                    StatisticKind::CommercialHappiness,
                    "Commercial",
                    "Happiness",
                    UNITS_PERCENT,
                    engine(ZoneKind::Commercial),
                ),
                stat(
                    StatisticKind::IndustrialHappiness,
                    "Industrial",
                    "Happiness",
                    UNITS_PERCENT,
                    engine(ZoneKind::Industrial),
                ),
                stat(
                    StatisticKind::OfficeHappiness,
                    "Office",
                    "Happiness",
                    UNITS_PERCENT,
                    engine(ZoneKind::Office),
                ),
            ],
        ),
        Category::new(
            CategoryKind::Healthcare,
            vec![
                stat(
                    StatisticKind::AverageHealth,
                    "Health",
                    "Average",
                    UNITS_PERCENT,
                    fixed(0),
                ),
                stat(
                    StatisticKind::SickCitizens,
                    "Sick",
                    "Citizens",
                    UNITS_NONE,
                    fixed(1),
                ),
                stat(
                    StatisticKind::HospitalPatients,
                    "Hospital",
                    "Patients",
                    UNITS_NONE,
                    fixed(2),
                ),
                stat(
                    StatisticKind::HospitalCapacity,
                    "Hospital",
                    "Capacity",
                    UNITS_NONE,
                    fixed(3),
                ),
                stat(
                    StatisticKind::HospitalUsagePercent,
                    "Hospital",
                    "Usage",
                    UNITS_PERCENT,
                    fixed(4),
                ),
            ],
        ),
        Category::new(
            CategoryKind::Deathcare,
            vec![
                stat(
                    StatisticKind::CemeteryBuried,
                    "Cemetery",
                    "Buried",
                    UNITS_NONE,
                    fixed(0),
                ),
                stat(
                    StatisticKind::CemeteryCapacity,
                    "Cemetery",
                    "Capacity",
                    UNITS_NONE,
                    fixed(1),
                ),
                stat(
                    StatisticKind::CemeteryUsagePercent,
                    "Cemetery",
                    "Usage",
                    UNITS_PERCENT,
                    fixed(2),
                ),
                stat(
                    StatisticKind::CrematoriumDeceased,
                    "Crematorium",
                    "Deceased",
                    UNITS_NONE,
                    fixed(3),
                ),
                stat(
                    StatisticKind::CrematoriumCapacity,
                    "Crematorium",
                    "Capacity",
                    UNITS_NONE,
                    fixed(4),
                ),
                stat(
                    StatisticKind::CrematoriumUsagePercent,
                    "Crematorium",
                    "Usage",
                    UNITS_PERCENT,
                    fixed(5),
                ),
            ],
        ),
        Category::new(
            CategoryKind::Zoning,
            vec![
                stat(
                    StatisticKind::ResidentialZoned,
                    "Residential",
                    "Zoned",
                    UNITS_NONE,
                    engine(ZoneKind::Residential),
                ),
                stat(
                    StatisticKind::CommercialZoned,
                    "Commercial",
                    "Zoned",
                    UNITS_NONE,
                    engine(ZoneKind::Commercial),
                ),
                stat(
                    StatisticKind::IndustrialZoned,
                    "Industrial",
                    "Zoned",
                    UNITS_NONE,
                    engine(ZoneKind::Industrial),
                ),
                stat(
                    StatisticKind::OfficeZoned,
                    "Office",
                    "Zoned",
                    UNITS_NONE,
                    engine(ZoneKind::Office),
                ),
                stat(
                    StatisticKind::ZonedTotal,
                    "Zoned",
                    "Total",
                    UNITS_NONE,
                    fixed(0),
                ),
                stat(
                    StatisticKind::ResidentialZonedPercent,
                    "Residential",
                    "Zoned",
                    UNITS_PERCENT,
                    engine(ZoneKind::Residential),
                ),
                stat(
                    StatisticKind::CommercialZonedPercent,
                    "Commercial",
                    "Zoned",
                    UNITS_PERCENT,
                    engine(ZoneKind::Commercial),
                ),
                stat(
                    StatisticKind::IndustrialZonedPercent,
                    "Industrial",
                    "Zoned",
                    UNITS_PERCENT,
                    engine(ZoneKind::Industrial),
                ),
                stat(
                    StatisticKind::OfficeZonedPercent,
                    "Office",
                    "Zoned",
                    UNITS_PERCENT,
                    engine(ZoneKind::Office),
                ),
            ],
        ),
        Category::new(
            CategoryKind::ZoneLevel,
            vec![
                stat(
                    StatisticKind::ResidentialLevel1,
                    "Residential",
                    "Level 1",
                    UNITS_NONE,
                    fixed(0),
                ),
                stat(
                    StatisticKind::ResidentialLevel2,
                    "Residential",
                    "Level 2",
                    UNITS_NONE,
                    fixed(1),
                ),
                stat(
                    StatisticKind::ResidentialLevel3,
                    "Residential",
                    "Level 3",
                    UNITS_NONE,
                    fixed(2),
                ),
                stat(
                    StatisticKind::ResidentialLevel4,
                    "Residential",
                    "Level 4",
                    UNITS_NONE,
                    fixed(3),
                ),
                stat(
                    StatisticKind::ResidentialLevel5,
                    "Residential",
                    "Level 5",
                    UNITS_NONE,
                    fixed(4),
                ),
                stat(
                    StatisticKind::ResidentialAverageLevel,
                    "Residential",
                    "Average",
                    UNITS_LEVEL,
                    engine(ZoneKind::Residential),
                ),
                stat(
                    StatisticKind::CommercialLevel1,
                    "Commercial",
                    "Level 1",
                    UNITS_NONE,
                    fixed(5),
                ),
                stat(
                    StatisticKind::CommercialLevel2,
                    "Commercial",
                    "Level 2",
                    UNITS_NONE,
                    fixed(6),
                ),
                stat(
                    StatisticKind::CommercialLevel3,
                    "Commercial",
                    "Level 3",
                    UNITS_NONE,
                    fixed(7),
                ),
                stat(
                    StatisticKind::CommercialAverageLevel,
                    "Commercial",
                    "Average",
                    UNITS_LEVEL,
                    engine(ZoneKind::Commercial),
                ),
                stat(
                    StatisticKind::IndustrialLevel1,
                    "Industrial",
                    "Level 1",
                    UNITS_NONE,
                    fixed(8),
                ),
                stat(
                    StatisticKind::IndustrialLevel2,
                    "Industrial",
                    "Level 2",
                    UNITS_NONE,
                    fixed(9),
                ),
                stat(
                    StatisticKind::IndustrialLevel3,
                    "Industrial",
                    "Level 3",
                    UNITS_NONE,
                    fixed(10),
                ),
                stat(
                    StatisticKind::IndustrialAverageLevel,
                    "Industrial",
                    "Average",
                    UNITS_LEVEL,
                    engine(ZoneKind::Industrial),
                ),
                stat(
                    StatisticKind::OfficeLevel1,
                    "Office",
                    "Level 1",
                    UNITS_NONE,
                    fixed(11),
                ),
                stat(
                    StatisticKind::OfficeLevel2,
                    "Office",
                    "Level 2",
                    UNITS_NONE,
                    fixed(0),
                ),
                stat(
                    StatisticKind::OfficeLevel3,
                    "Office",
                    "Level 3",
                    UNITS_NONE,
                    fixed(1),
                ),
                stat(
                    StatisticKind::OfficeAverageLevel,
                    "Office",
                    "Average",
                    UNITS_LEVEL,
                    engine(ZoneKind::Office),
                ),
            ],
        ),
        Category::new(
            CategoryKind::ZoneBuildings,
            vec![
                stat(
                    StatisticKind::ResidentialBuildings,
                    "Residential",
                    "Buildings",
                    UNITS_NONE,
                    engine(ZoneKind::Residential),
                ),
                stat(
                    StatisticKind::CommercialBuildings,
                    "Commercial",
                    "Buildings",
                    UNITS_NONE,
                    engine(ZoneKind::Commercial),
                ),
                stat(
                    StatisticKind::IndustrialBuildings,
                    "Industrial",
                    "Buildings",
                    UNITS_NONE,
                    engine(ZoneKind::Industrial),
                ),
                stat(
                    StatisticKind::OfficeBuildings,
                    "Office",
                    "Buildings",
                    UNITS_NONE,
                    engine(ZoneKind::Office),
                ),
                stat(
                    StatisticKind::ZoneBuildingsTotal,
                    "Zone Buildings",
                    "Total",
                    UNITS_NONE,
                    fixed(0),
                ),
                stat(
                    StatisticKind::AbandonedBuildings,
                    "Abandoned",
                    "Buildings",
                    UNITS_NONE,
                    fixed(1),
                ),
            ],
        ),
        Category::new(
            CategoryKind::ZoneDemand,
            vec![
                stat(
                    StatisticKind::ResidentialDemand,
                    "Residential",
                    "Demand",
                    UNITS_PERCENT,
                    engine(ZoneKind::Residential),
                ),
                stat(
                    StatisticKind::CommercialDemand,
                    "Commercial",
                    "Demand",
                    UNITS_PERCENT,
                    engine(ZoneKind::Commercial),
                ),
                stat(
                    StatisticKind::WorkplaceDemand,
                    "Workplace",
                    "Demand",
                    UNITS_PERCENT,
                    engine(ZoneKind::Industrial),
                ),
            ],
        ),
        Category::new(
            CategoryKind::Traffic,
            vec![
                stat(
                    StatisticKind::TrafficAverageFlow,
                    "Traffic",
                    "Average Flow",
                    UNITS_PERCENT,
                    fixed(0),
                ),
                stat(
                    StatisticKind::ActiveVehicles,
                    "Vehicles",
                    "Active",
                    UNITS_NONE,
                    fixed(1),
                ),
            ],
        ),
        Category::new(
            CategoryKind::Pollution,
            vec![
                stat(
                    StatisticKind::GroundPollution,
                    "Ground",
                    "Pollution",
                    UNITS_PERCENT,
                    fixed(0),
                ),
                stat(
                    StatisticKind::DrinkingWaterPollution,
                    "Drinking Water",
                    "Pollution",
                    UNITS_PERCENT,
                    fixed(1),
                ),
                stat(
                    StatisticKind::NoisePollution,
                    "Noise",
                    "Pollution",
                    UNITS_PERCENT,
                    fixed(2),
                ),
            ],
        ),
        Category::new(
            CategoryKind::FireSafety,
            vec![
                stat(
                    StatisticKind::FireHazard,
                    "Fire",
                    "Hazard",
                    UNITS_PERCENT,
                    fixed(0),
                ),
                stat(
                    StatisticKind::BuildingsOnFire,
                    "Buildings",
                    "On Fire",
                    UNITS_NONE,
                    fixed(1),
                ),
            ],
        ),
        Category::new(
            CategoryKind::Crime,
            vec![
                stat(
                    StatisticKind::CrimeRate,
                    "Crime",
                    "Rate",
                    UNITS_PERCENT,
                    fixed(0),
                ),
                stat(
                    StatisticKind::DetainedCriminals,
                    "Criminals",
                    "Detained",
                    UNITS_NONE,
                    fixed(1),
                ),
                stat(
                    StatisticKind::JailCapacity,
                    "Jail",
                    "Capacity",
                    UNITS_NONE,
                    fixed(2),
                ),
                stat(
                    StatisticKind::JailUsagePercent,
                    "Jail",
                    "Usage",
                    UNITS_PERCENT,
                    fixed(3),
                ),
            ],
        ),
        Category::new(
            CategoryKind::PublicTransportation,
            vec![
                stat(
                    StatisticKind::BusResidents,
                    "Bus",
                    "Residents",
                    UNITS_NONE,
                    fixed(0),
                ),
                stat(
                    StatisticKind::BusTourists,
                    "Bus",
                    "Tourists",
                    UNITS_NONE,
                    fixed(1),
                ),
                stat(
                    StatisticKind::BusTotal,
                    "Bus",
                    "Total",
                    UNITS_NONE,
                    fixed(2),
                ),
                stat(
                    StatisticKind::MetroResidents,
                    "Metro",
                    "Residents",
                    UNITS_NONE,
                    fixed(3),
                ),
                stat(
                    StatisticKind::MetroTourists,
                    "Metro",
                    "Tourists",
                    UNITS_NONE,
                    fixed(4),
                ),
                stat(
                    StatisticKind::MetroTotal,
                    "Metro",
                    "Total",
                    UNITS_NONE,
                    fixed(5),
                ),
                stat(
                    StatisticKind::TrainResidents,
                    "Train",
                    "Residents",
                    UNITS_NONE,
                    fixed(6),
                ),
                stat(
                    StatisticKind::TrainTourists,
                    "Train",
                    "Tourists",
                    UNITS_NONE,
                    fixed(7),
                ),
                stat(
                    StatisticKind::TrainTotal,
                    "Train",
                    "Total",
                    UNITS_NONE,
                    fixed(8),
                ),
                stat(
                    StatisticKind::TramResidents,
                    "Tram",
                    "Residents",
                    UNITS_NONE,
                    fixed(9),
                ),
                stat(
                    StatisticKind::TramTourists,
                    "Tram",
                    "Tourists",
                    UNITS_NONE,
                    fixed(10),
                ),
                stat(
                    StatisticKind::TramTotal,
                    "Tram",
                    "Total",
                    UNITS_NONE,
                    fixed(11),
                ),
                stat(
                    StatisticKind::FerryResidents,
                    "Ferry",
                    "Residents",
                    UNITS_NONE,
                    fixed(0),
                ),
                stat(
                    StatisticKind::FerryTourists,
                    "Ferry",
                    "Tourists",
                    UNITS_NONE,
                    fixed(1),
                ),
                stat(
                    StatisticKind::FerryTotal,
                    "Ferry",
                    "Total",
                    UNITS_NONE,
                    fixed(2),
                ),
                stat(
                    StatisticKind::PublicTransportTotal,
                    "Public Transport",
                    "Total",
                    UNITS_NONE,
                    fixed(3),
                ),
            ],
        ),
        Category::new(
            CategoryKind::Population,
            vec![
                stat(
                    StatisticKind::Population,
                    "Population",
                    "Total",
                    UNITS_NONE,
                    fixed(0),
                ),
                stat(
                    StatisticKind::Children,
                    "Children",
                    "",
                    UNITS_NONE,
                    fixed(1),
                ),
                stat(StatisticKind::Teens, "Teens", "", UNITS_NONE, fixed(2)),
                stat(
                    StatisticKind::YoungAdults,
                    "Young Adults",
                    "",
                    UNITS_NONE,
                    fixed(3),
                ),
                stat(StatisticKind::Adults, "Adults", "", UNITS_NONE, fixed(4)),
                stat(StatisticKind::Seniors, "Seniors", "", UNITS_NONE, fixed(5)),
                stat(
                    StatisticKind::ChildrenPercent,
                    "Children",
                    "",
                    UNITS_PERCENT,
                    fixed(6),
                ),
                stat(
                    StatisticKind::TeensPercent,
                    "Teens",
                    "",
                    UNITS_PERCENT,
                    fixed(7),
                ),
                stat(
                    StatisticKind::YoungAdultsPercent,
                    "Young Adults",
                    "",
                    UNITS_PERCENT,
                    fixed(8),
                ),
                stat(
                    StatisticKind::AdultsPercent,
                    "Adults",
                    "",
                    UNITS_PERCENT,
                    fixed(9),
                ),
                stat(
                    StatisticKind::SeniorsPercent,
                    "Seniors",
                    "",
                    UNITS_PERCENT,
                    fixed(10),
                ),
                stat(
                    StatisticKind::BirthRate,
                    "Birth",
                    "Rate",
                    UNITS_NONE,
                    fixed(11),
                ),
                stat(
                    StatisticKind::DeathRate,
                    "Death",
                    "Rate",
                    UNITS_NONE,
                    fixed(0),
                ),
            ],
        ),
        Category::new(
            CategoryKind::Households,
            vec![
                stat(
                    StatisticKind::OccupiedHouseholds,
                    "Households",
                    "Occupied",
                    UNITS_NONE,
                    fixed(0),
                ),
                stat(
                    StatisticKind::AvailableHouseholds,
                    "Households",
                    "Available",
                    UNITS_NONE,
                    fixed(1),
                ),
                stat(
                    StatisticKind::HouseholdsTotal,
                    "Households",
                    "Total",
                    UNITS_NONE,
                    fixed(2),
                ),
                stat(
                    StatisticKind::OccupiedHouseholdsPercent,
                    "Households",
                    "Occupied",
                    UNITS_PERCENT,
                    fixed(3),
                ),
            ],
        ),
        Category::new(
            CategoryKind::Employment,
            vec![
                stat(
                    StatisticKind::EligibleWorkers,
                    "Workers",
                    "Eligible",
                    UNITS_NONE,
                    fixed(0),
                ),
                stat(
                    StatisticKind::Unemployed,
                    "Unemployed",
                    "",
                    UNITS_NONE,
                    fixed(1),
                ),
                stat(
                    StatisticKind::UnemploymentPercent,
                    "Unemployment",
                    "",
                    UNITS_PERCENT,
                    fixed(2),
                ),
                stat(
                    StatisticKind::JobsAvailable,
                    "Jobs",
                    "Available",
                    UNITS_NONE,
                    fixed(3),
                ),
                stat(
                    StatisticKind::JobsFilled,
                    "Jobs",
                    "Filled",
                    UNITS_NONE,
                    fixed(4),
                ),
                stat(
                    StatisticKind::JobsFilledPercent,
                    "Jobs",
                    "Filled",
                    UNITS_PERCENT,
                    fixed(5),
                ),
            ],
        ),
        Category::new(
            CategoryKind::OutsideConnections,
            vec![
                stat(
                    StatisticKind::ImportsGoods,
                    "Imports",
                    "Goods",
                    UNITS_AMOUNT,
                    fixed(0),
                ),
                stat(
                    StatisticKind::ImportsForestry,
                    "Imports",
                    "Forestry",
                    UNITS_AMOUNT,
                    fixed(1),
                ),
                stat(
                    StatisticKind::ImportsFarming,
                    "Imports",
                    "Farming",
                    UNITS_AMOUNT,
                    fixed(2),
                ),
                stat(
                    StatisticKind::ImportsOre,
                    "Imports",
                    "Ore",
                    UNITS_AMOUNT,
                    fixed(3),
                ),
                stat(
                    StatisticKind::ImportsOil,
                    "Imports",
                    "Oil",
                    UNITS_AMOUNT,
                    fixed(4),
                ),
                stat(
                    StatisticKind::ImportsTotal,
                    "Imports",
                    "Total",
                    UNITS_AMOUNT,
                    fixed(5),
                ),
                stat(
                    StatisticKind::ExportsGoods,
                    "Exports",
                    "Goods",
                    UNITS_AMOUNT,
                    fixed(6),
                ),
                stat(
                    StatisticKind::ExportsForestry,
                    "Exports",
                    "Forestry",
                    UNITS_AMOUNT,
                    fixed(7),
                ),
                stat(
                    StatisticKind::ExportsFarming,
                    "Exports",
                    "Farming",
                    UNITS_AMOUNT,
                    fixed(8),
                ),
                stat(
                    StatisticKind::ExportsOre,
                    "Exports",
                    "Ore",
                    UNITS_AMOUNT,
                    fixed(9),
                ),
                stat(
                    StatisticKind::ExportsOil,
                    "Exports",
                    "Oil",
                    UNITS_AMOUNT,
                    fixed(10),
                ),
                stat(
                    StatisticKind::ExportsTotal,
                    "Exports",
                    "Total",
                    UNITS_AMOUNT,
                    fixed(11),
                ),
            ],
        ),
        Category::new(
            CategoryKind::LandValue,
            vec![
                stat(
                    StatisticKind::AverageLandValue,
                    "Land Value",
                    "Average",
                    UNITS_LAND_VALUE,
                    fixed(0),
                ),
            ],
        ),
        Category::new(
            CategoryKind::Heating,
            vec![
                stat(
                    StatisticKind::HeatingConsumption,
                    "Heating",
                    "Consumption",
                    UNITS_MW,
                    fixed(0),
                ),
                stat(
                    StatisticKind::HeatingProduction,
                    "Heating",
                    "Production",
                    UNITS_MW,
                    fixed(1),
                ),
                stat(
                    StatisticKind::HeatingConsumptionPercent,
                    "Heating",
                    "Consumption",
                    UNITS_PERCENT,
                    fixed(2),
                ),
            ],
        ),
        Category::new(
            CategoryKind::Tourism,
            vec![
                stat(
                    StatisticKind::CityAttractiveness,
                    "City",
                    "Attractiveness",
                    UNITS_NONE,
                    fixed(0),
                ),
                stat(
                    StatisticKind::LowWealthTourists,
                    "Tourists",
                    "Low Wealth",
                    UNITS_NONE,
                    fixed(1),
                ),
                stat(
                    StatisticKind::MediumWealthTourists,
                    "Tourists",
                    "Medium Wealth",
                    UNITS_NONE,
                    fixed(2),
                ),
                stat(
                    StatisticKind::HighWealthTourists,
                    "Tourists",
                    "High Wealth",
                    UNITS_NONE,
                    fixed(3),
                ),
                stat(
                    StatisticKind::TouristsTotal,
                    "Tourists",
                    "Total",
                    UNITS_NONE,
                    fixed(4),
                ),
            ],
        ),
        Category::new(
            CategoryKind::TaxRate,
            vec![
                stat(
                    StatisticKind::ResidentialLowTaxRate,
                    "Residential Low",
                    "Tax Rate",
                    UNITS_PERCENT,
                    fixed(0),
                ),
                stat(
                    StatisticKind::ResidentialHighTaxRate,
                    "Residential High",
                    "Tax Rate",
                    UNITS_PERCENT,
                    fixed(1),
                ),
                stat(
                    StatisticKind::CommercialLowTaxRate,
                    "Commercial Low",
                    "Tax Rate",
                    UNITS_PERCENT,
                    fixed(2),
                ),
                stat(
                    StatisticKind::CommercialHighTaxRate,
                    "Commercial High",
                    "Tax Rate",
                    UNITS_PERCENT,
                    fixed(3),
                ),
                stat(
                    StatisticKind::IndustrialTaxRate,
                    "Industrial",
                    "Tax Rate",
                    UNITS_PERCENT,
                    fixed(4),
                ),
                stat(
                    StatisticKind::OfficeTaxRate,
                    "Office",
                    "Tax Rate",
                    UNITS_PERCENT,
                    fixed(5),
                ),
            ],
        ),
        Category::new(
            CategoryKind::CityEconomy,
            vec![
                stat(
                    StatisticKind::TotalIncome,
                    "Income",
                    "Total",
                    UNITS_MONEY_WEEKLY,
                    fixed(0),
                ),
                stat(
                    StatisticKind::TotalExpenses,
                    "Expenses",
                    "Total",
                    UNITS_MONEY_WEEKLY,
                    fixed(1),
                ),
                stat(
                    StatisticKind::Profit,
                    "Profit",
                    "",
                    UNITS_MONEY_WEEKLY,
                    fixed(2),
                ),
                stat(
                    StatisticKind::BankBalance,
                    "Bank",
                    "Balance",
                    UNITS_MONEY,
                    fixed(3),
                ),
                stat(
                    StatisticKind::LoanBalance,
                    "Loan",
                    "Balance",
                    UNITS_MONEY,
                    fixed(4),
                ),
                stat(
                    StatisticKind::IncomePerCapita,
                    "Income",
                    "Per Capita",
                    UNITS_MONEY_WEEKLY,
                    fixed(5),
                ),
            ],
        ),
        Category::new(
            CategoryKind::ResidentialIncome,
            vec![
                stat(
                    StatisticKind::ResidentialLowIncome,
                    "Residential Low",
                    "Income",
                    UNITS_MONEY_WEEKLY,
                    fixed(0),
                ),
                stat(
                    StatisticKind::ResidentialHighIncome,
                    "Residential High",
                    "Income",
                    UNITS_MONEY_WEEKLY,
                    fixed(1),
                ),
                stat(
                    StatisticKind::ResidentialLowEcoIncome,
                    "Residential Low Eco",
                    "Income",
                    UNITS_MONEY_WEEKLY,
                    fixed(2),
                ),
                stat(
                    StatisticKind::ResidentialHighEcoIncome,
                    "Residential High Eco",
                    "Income",
                    UNITS_MONEY_WEEKLY,
                    fixed(3),
                ),
                stat(
                    StatisticKind::ResidentialIncomeTotal,
                    "Residential",
                    "Income Total",
                    UNITS_MONEY_WEEKLY,
                    engine(ZoneKind::Residential),
                ),
            ],
        ),
        Category::new(
            CategoryKind::CommercialIncome,
            vec![
                stat(
                    StatisticKind::CommercialLowIncome,
                    "Commercial Low",
                    "Income",
                    UNITS_MONEY_WEEKLY,
                    fixed(0),
                ),
                stat(
                    StatisticKind::CommercialHighIncome,
                    "Commercial High",
                    "Income",
                    UNITS_MONEY_WEEKLY,
                    fixed(1),
                ),
                stat(
                    StatisticKind::CommercialLeisureIncome,
                    "Commercial Leisure",
                    "Income",
                    UNITS_MONEY_WEEKLY,
                    fixed(2),
                ),
                stat(
                    StatisticKind::CommercialTourismIncome,
                    "Commercial Tourism",
                    "Income",
                    UNITS_MONEY_WEEKLY,
                    fixed(3),
                ),
                stat(
                    StatisticKind::CommercialEcoIncome,
                    "Commercial Eco",
                    "Income",
                    UNITS_MONEY_WEEKLY,
                    fixed(4),
                ),
                stat(
                    StatisticKind::CommercialIncomeTotal,
                    "Commercial",
                    "Income Total",
                    UNITS_MONEY_WEEKLY,
                    engine(ZoneKind::Commercial),
                ),
            ],
        ),
        Category::new(
            CategoryKind::IndustrialIncome,
            vec![
                stat(
                    StatisticKind::IndustrialGenericIncome,
                    "Industrial Generic",
                    "Income",
                    UNITS_MONEY_WEEKLY,
                    fixed(0),
                ),
                stat(
                    StatisticKind::IndustrialForestryIncome,
                    "Industrial Forestry",
                    "Income",
                    UNITS_MONEY_WEEKLY,
                    fixed(1),
                ),
                stat(
                    StatisticKind::IndustrialFarmingIncome,
                    "Industrial Farming",
                    "Income",
                    UNITS_MONEY_WEEKLY,
                    fixed(2),
                ),
                stat(
                    StatisticKind::IndustrialOreIncome,
                    "Industrial Ore",
                    "Income",
                    UNITS_MONEY_WEEKLY,
                    fixed(3),
                ),
                stat(
                    StatisticKind::IndustrialOilIncome,
                    "Industrial Oil",
                    "Income",
                    UNITS_MONEY_WEEKLY,
                    fixed(4),
                ),
                stat(
                    StatisticKind::IndustrialIncomeTotal,
                    "Industrial",
                    "Income Total",
                    UNITS_MONEY_WEEKLY,
                    engine(ZoneKind::Industrial),
                ),
            ],
        ),
        Category::new(
            CategoryKind::OfficeIncome,
            vec![
                stat(
                    StatisticKind::OfficeGenericIncome,
                    "Office Generic",
                    "Income",
                    UNITS_MONEY_WEEKLY,
                    fixed(0),
                ),
                stat(
                    StatisticKind::OfficeItClusterIncome,
                    "Office IT Cluster",
                    "Income",
                    UNITS_MONEY_WEEKLY,
                    fixed(1),
                ),
                stat(
                    StatisticKind::OfficeIncomeTotal,
                    "Office",
                    "Income Total",
                    UNITS_MONEY_WEEKLY,
                    engine(ZoneKind::Office),
                ),
            ],
        ),
        Category::new(
            CategoryKind::ServiceExpenses,
            vec![
                stat(
                    StatisticKind::RoadExpenses,
                    "Roads",
                    "Expenses",
                    UNITS_MONEY_WEEKLY,
                    fixed(0),
                ),
                stat(
                    StatisticKind::ElectricityExpenses,
                    "Electricity",
                    "Expenses",
                    UNITS_MONEY_WEEKLY,
                    fixed(1),
                ),
                stat(
                    StatisticKind::WaterExpenses,
                    "Water",
                    "Expenses",
                    UNITS_MONEY_WEEKLY,
                    fixed(2),
                ),
                stat(
                    StatisticKind::GarbageExpenses,
                    "Garbage",
                    "Expenses",
                    UNITS_MONEY_WEEKLY,
                    fixed(3),
                ),
                stat(
                    StatisticKind::HealthcareExpenses,
                    "Healthcare",
                    "Expenses",
                    UNITS_MONEY_WEEKLY,
                    fixed(4),
                ),
                stat(
                    StatisticKind::FireExpenses,
                    "Fire",
                    "Expenses",
                    UNITS_MONEY_WEEKLY,
                    fixed(5),
                ),
                stat(
                    StatisticKind::PoliceExpenses,
                    "Police",
                    "Expenses",
                    UNITS_MONEY_WEEKLY,
                    fixed(6),
                ),
                stat(
                    StatisticKind::EducationExpenses,
                    "Education",
                    "Expenses",
                    UNITS_MONEY_WEEKLY,
                    fixed(7),
                ),
                stat(
                    StatisticKind::TransportExpenses,
                    "Transport",
                    "Expenses",
                    UNITS_MONEY_WEEKLY,
                    fixed(8),
                ),
                stat(
                    StatisticKind::ParkExpenses,
                    "Parks",
                    "Expenses",
                    UNITS_MONEY_WEEKLY,
                    fixed(9),
                ),
                stat(
                    StatisticKind::PolicyExpenses,
                    "Policies",
                    "Expenses",
                    UNITS_MONEY_WEEKLY,
                    fixed(10),
                ),
                stat(
                    StatisticKind::LoanExpenses,
                    "Loans",
                    "Expenses",
                    UNITS_MONEY_WEEKLY,
                    fixed(11),
                ),
                stat(
                    StatisticKind::ServiceExpensesTotal,
                    "Service Expenses",
                    "Total",
                    UNITS_MONEY_WEEKLY,
                    fixed(0),
                ),
            ],
        ),
        Category::new(
            CategoryKind::ParkAreas,
            vec![
                stat(
                    StatisticKind::ParkAreas,
                    "Park Areas",
                    "",
                    UNITS_NONE,
                    fixed(0),
                ),
                stat(
                    StatisticKind::ParkVisitors,
                    "Park",
                    "Visitors",
                    UNITS_NONE,
                    fixed(1),
                ),
            ],
        ),
        Category::new(
            CategoryKind::Campus,
            vec![
                stat(
                    StatisticKind::CampusStudents,
                    "Campus",
                    "Students",
                    UNITS_NONE,
                    fixed(0),
                ),
                stat(
                    StatisticKind::CampusCapacity,
                    "Campus",
                    "Capacity",
                    UNITS_NONE,
                    fixed(1),
                ),
                stat(
                    StatisticKind::CampusUsagePercent,
                    "Campus",
                    "Usage",
                    UNITS_PERCENT,
                    fixed(2),
                ),
            ],
        ),
        Category::new(
            CategoryKind::GameLimits,
            vec![
                stat(
                    StatisticKind::BuildingsInUse,
                    "Buildings",
                    "In Use",
                    UNITS_NONE,
                    fixed(0),
                ),
                stat(
                    StatisticKind::BuildingsCapacity,
                    "Buildings",
                    "Capacity",
                    UNITS_NONE,
                    fixed(1),
                ),
                stat(
                    StatisticKind::BuildingsUsagePercent,
                    "Buildings",
                    "Usage",
                    UNITS_PERCENT,
                    fixed(2),
                ),
                stat(
                    StatisticKind::CitizensInUse,
                    "Citizens",
                    "In Use",
                    UNITS_NONE,
                    fixed(3),
                ),
                stat(
                    StatisticKind::CitizensCapacity,
                    "Citizens",
                    "Capacity",
                    UNITS_NONE,
                    fixed(4),
                ),
                stat(
                    StatisticKind::CitizensUsagePercent,
                    "Citizens",
                    "Usage",
                    UNITS_PERCENT,
                    fixed(5),
                ),
                stat(
                    StatisticKind::VehiclesInUse,
                    "Vehicles",
                    "In Use",
                    UNITS_NONE,
                    fixed(6),
                ),
                stat(
                    StatisticKind::VehiclesCapacity,
                    "Vehicles",
                    "Capacity",
                    UNITS_NONE,
                    fixed(7),
                ),
                stat(
                    StatisticKind::VehiclesUsagePercent,
                    "Vehicles",
                    "Usage",
                    UNITS_PERCENT,
                    fixed(8),
                ),
                stat(
                    StatisticKind::NetworkSegmentsInUse,
                    "Network Segments",
                    "In Use",
                    UNITS_NONE,
                    fixed(9),
                ),
                stat(
                    StatisticKind::NetworkSegmentsCapacity,
                    "Network Segments",
                    "Capacity",
                    UNITS_NONE,
                    fixed(10),
                ),
                stat(
                    StatisticKind::NetworkSegmentsUsagePercent,
                    "Network Segments",
                    "Usage",
                    UNITS_PERCENT,
                    fixed(11),
                ),
            ],
        ),
    ]
}
