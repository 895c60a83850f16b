use serde::{Deserialize, Serialize};

/// One measurable quantity. Each variant maps to exactly one [`Snapshot`]
/// field or derived property, named by [`StatisticKind::field_name`].
///
/// [`Snapshot`]: crate::snapshot::Snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StatisticKind {
    // Electricity
    ElectricityConsumption,
    ElectricityProduction,
    ElectricityConsumptionPercent,
    // Water
    WaterConsumption,
    WaterPumpingCapacity,
    WaterConsumptionPercent,
    // Water Tank
    WaterTankReserved,
    WaterTankStorageCapacity,
    WaterTankReservedPercent,
    // Sewage
    SewageProduction,
    SewageDrainCapacity,
    SewageProductionPercent,
    // Landfill
    LandfillStorage,
    LandfillCapacity,
    LandfillStoragePercent,
    // Garbage
    GarbageProduction,
    GarbageProcessingCapacity,
    GarbageProductionPercent,
    GarbageUncollected,
    // Education
    ElementaryEligible,
    ElementaryCapacity,
    ElementaryUsagePercent,
    HighSchoolEligible,
    HighSchoolCapacity,
    HighSchoolUsagePercent,
    UniversityEligible,
    UniversityCapacity,
    UniversityUsagePercent,
    LibraryUsers,
    LibraryCapacity,
    LibraryUsagePercent,
    // Education Level
    Uneducated,
    Educated,
    WellEducated,
    HighlyEducated,
    EducationLevelTotal,
    UneducatedPercent,
    EducatedPercent,
    WellEducatedPercent,
    HighlyEducatedPercent,
    // Happiness
    AverageHappiness,
    ResidentialHappiness,
    CommercialHappiness,
    IndustrialHappiness,
    OfficeHappiness,
    // Healthcare
    AverageHealth,
    SickCitizens,
    HospitalPatients,
    HospitalCapacity,
    HospitalUsagePercent,
    // Deathcare
    CemeteryBuried,
    CemeteryCapacity,
    CemeteryUsagePercent,
    CrematoriumDeceased,
    CrematoriumCapacity,
    CrematoriumUsagePercent,
    // Zoning
    ResidentialZoned,
    CommercialZoned,
    IndustrialZoned,
    OfficeZoned,
    ZonedTotal,
    ResidentialZonedPercent,
    CommercialZonedPercent,
    IndustrialZonedPercent,
    OfficeZonedPercent,
    // Zone Level
    ResidentialLevel1,
    ResidentialLevel2,
    ResidentialLevel3,
    ResidentialLevel4,
    ResidentialLevel5,
    ResidentialAverageLevel,
    CommercialLevel1,
    CommercialLevel2,
    CommercialLevel3,
    CommercialAverageLevel,
    IndustrialLevel1,
    IndustrialLevel2,
    IndustrialLevel3,
    IndustrialAverageLevel,
    OfficeLevel1,
    OfficeLevel2,
    OfficeLevel3,
    OfficeAverageLevel,
    // Zone Buildings
    ResidentialBuildings,
    CommercialBuildings,
    IndustrialBuildings,
    OfficeBuildings,
    ZoneBuildingsTotal,
    AbandonedBuildings,
    // Zone Demand
    ResidentialDemand,
    CommercialDemand,
    WorkplaceDemand,
    // Traffic
    TrafficAverageFlow,
    ActiveVehicles,
    // Pollution
    GroundPollution,
    DrinkingWaterPollution,
    NoisePollution,
    // Fire Safety
    FireHazard,
    BuildingsOnFire,
    // Crime
    CrimeRate,
    DetainedCriminals,
    JailCapacity,
    JailUsagePercent,
    // Public Transportation
    BusResidents,
    BusTourists,
    BusTotal,
    MetroResidents,
    MetroTourists,
    MetroTotal,
    TrainResidents,
    TrainTourists,
    TrainTotal,
    TramResidents,
    TramTourists,
    TramTotal,
    FerryResidents,
    FerryTourists,
    FerryTotal,
    PublicTransportTotal,
    // Population
    Population,
    Children,
    Teens,
    YoungAdults,
    Adults,
    Seniors,
    ChildrenPercent,
    TeensPercent,
    YoungAdultsPercent,
    AdultsPercent,
    SeniorsPercent,
    BirthRate,
    DeathRate,
    // Households
    OccupiedHouseholds,
    AvailableHouseholds,
    HouseholdsTotal,
    OccupiedHouseholdsPercent,
    // Employment
    EligibleWorkers,
    Unemployed,
    UnemploymentPercent,
    JobsAvailable,
    JobsFilled,
    JobsFilledPercent,
    // Outside Connections
    ImportsGoods,
    ImportsForestry,
    ImportsFarming,
    ImportsOre,
    ImportsOil,
    ImportsTotal,
    ExportsGoods,
    ExportsForestry,
    ExportsFarming,
    ExportsOre,
    ExportsOil,
    ExportsTotal,
    // Land Value
    AverageLandValue,
    // Heating
    HeatingConsumption,
    HeatingProduction,
    HeatingConsumptionPercent,
    // Tourism
    CityAttractiveness,
    LowWealthTourists,
    MediumWealthTourists,
    HighWealthTourists,
    TouristsTotal,
    // Tax Rate
    ResidentialLowTaxRate,
    ResidentialHighTaxRate,
    CommercialLowTaxRate,
    CommercialHighTaxRate,
    IndustrialTaxRate,
    OfficeTaxRate,
    // City Economy
    TotalIncome,
    TotalExpenses,
    Profit,
    BankBalance,
    LoanBalance,
    IncomePerCapita,
    // Residential Income
    ResidentialLowIncome,
    ResidentialHighIncome,
    ResidentialLowEcoIncome,
    ResidentialHighEcoIncome,
    ResidentialIncomeTotal,
    // Commercial Income
    CommercialLowIncome,
    CommercialHighIncome,
    CommercialLeisureIncome,
    CommercialTourismIncome,
    CommercialEcoIncome,
    CommercialIncomeTotal,
    // Industrial Income
    IndustrialGenericIncome,
    IndustrialForestryIncome,
    IndustrialFarmingIncome,
    IndustrialOreIncome,
    IndustrialOilIncome,
    IndustrialIncomeTotal,
    // Office Income
    OfficeGenericIncome,
    OfficeItClusterIncome,
    OfficeIncomeTotal,
    // Service Expenses
    RoadExpenses,
    ElectricityExpenses,
    WaterExpenses,
    GarbageExpenses,
    HealthcareExpenses,
    FireExpenses,
    PoliceExpenses,
    EducationExpenses,
    TransportExpenses,
    ParkExpenses,
    PolicyExpenses,
    LoanExpenses,
    ServiceExpensesTotal,
    // Park Areas
    ParkAreas,
    ParkVisitors,
    // Campus
    CampusStudents,
    CampusCapacity,
    CampusUsagePercent,
    // Game Limits
    BuildingsInUse,
    BuildingsCapacity,
    BuildingsUsagePercent,
    CitizensInUse,
    CitizensCapacity,
    CitizensUsagePercent,
    VehiclesInUse,
    VehiclesCapacity,
    VehiclesUsagePercent,
    NetworkSegmentsInUse,
    NetworkSegmentsCapacity,
    NetworkSegmentsUsagePercent,
}

impl StatisticKind {
    pub const COUNT: usize = 225;

    /// Every statistic, in declaration order.
    pub const ALL: [StatisticKind; Self::COUNT] = [
        Self::ElectricityConsumption,
        Self::ElectricityProduction,
        Self::ElectricityConsumptionPercent,
        Self::WaterConsumption,
        Self::WaterPumpingCapacity,
        Self::WaterConsumptionPercent,
        Self::WaterTankReserved,
        Self::WaterTankStorageCapacity,
        Self::WaterTankReservedPercent,
        Self::SewageProduction,
        Self::SewageDrainCapacity,
        Self::SewageProductionPercent,
        Self::LandfillStorage,
        Self::LandfillCapacity,
        Self::LandfillStoragePercent,
        Self::GarbageProduction,
        Self::GarbageProcessingCapacity,
        Self::GarbageProductionPercent,
        Self::GarbageUncollected,
        Self::ElementaryEligible,
        Self::ElementaryCapacity,
        Self::ElementaryUsagePercent,
        Self::HighSchoolEligible,
        Self::HighSchoolCapacity,
        Self::HighSchoolUsagePercent,
        Self::UniversityEligible,
        Self::UniversityCapacity,
        Self::UniversityUsagePercent,
        Self::LibraryUsers,
        Self::LibraryCapacity,
        Self::LibraryUsagePercent,
        Self::Uneducated,
        Self::Educated,
        Self::WellEducated,
        Self::HighlyEducated,
        Self::EducationLevelTotal,
        Self::UneducatedPercent,
        Self::EducatedPercent,
        Self::WellEducatedPercent,
        Self::HighlyEducatedPercent,
        Self::AverageHappiness,
        Self::ResidentialHappiness,
        Self::CommercialHappiness,
        Self::IndustrialHappiness,
        Self::OfficeHappiness,
        Self::AverageHealth,
        Self::SickCitizens,
        Self::HospitalPatients,
        Self::HospitalCapacity,
        Self::HospitalUsagePercent,
        Self::CemeteryBuried,
        Self::CemeteryCapacity,
        Self::CemeteryUsagePercent,
        Self::CrematoriumDeceased,
        Self::CrematoriumCapacity,
        Self::CrematoriumUsagePercent,
        Self::ResidentialZoned,
        Self::CommercialZoned,
        Self::IndustrialZoned,
        Self::OfficeZoned,
        Self::ZonedTotal,
        Self::ResidentialZonedPercent,
        Self::CommercialZonedPercent,
        Self::IndustrialZonedPercent,
        Self::OfficeZonedPercent,
        Self::ResidentialLevel1,
        Self::ResidentialLevel2,
        Self::ResidentialLevel3,
        Self::ResidentialLevel4,
        Self::ResidentialLevel5,
        Self::ResidentialAverageLevel,
        Self::CommercialLevel1,
        Self::CommercialLevel2,
        Self::CommercialLevel3,
        Self::CommercialAverageLevel,
        Self::IndustrialLevel1,
        Self::IndustrialLevel2,
        Self::IndustrialLevel3,
        Self::IndustrialAverageLevel,
        Self::OfficeLevel1,
        Self::OfficeLevel2,
        Self::OfficeLevel3,
        Self::OfficeAverageLevel,
        Self::ResidentialBuildings,
        Self::CommercialBuildings,
        Self::IndustrialBuildings,
        Self::OfficeBuildings,
        Self::ZoneBuildingsTotal,
        Self::AbandonedBuildings,
        Self::ResidentialDemand,
        Self::CommercialDemand,
        Self::WorkplaceDemand,
        Self::TrafficAverageFlow,
        Self::ActiveVehicles,
        Self::GroundPollution,
        Self::DrinkingWaterPollution,
        Self::NoisePollution,
        Self::FireHazard,
        Self::BuildingsOnFire,
        Self::CrimeRate,
        Self::DetainedCriminals,
        Self::JailCapacity,
        Self::JailUsagePercent,
        Self::BusResidents,
        Self::BusTourists,
        Self::BusTotal,
        Self::MetroResidents,
        Self::MetroTourists,
        Self::MetroTotal,
        Self::TrainResidents,
        Self::TrainTourists,
        Self::TrainTotal,
        Self::TramResidents,
        Self::TramTourists,
        Self::TramTotal,
        Self::FerryResidents,
        Self::FerryTourists,
        Self::FerryTotal,
        Self::PublicTransportTotal,
        Self::Population,
        Self::Children,
        Self::Teens,
        Self::YoungAdults,
        Self::Adults,
        Self::Seniors,
        Self::ChildrenPercent,
        Self::TeensPercent,
        Self::YoungAdultsPercent,
        Self::AdultsPercent,
        Self::SeniorsPercent,
        Self::BirthRate,
        Self::DeathRate,
        Self::OccupiedHouseholds,
        Self::AvailableHouseholds,
        Self::HouseholdsTotal,
        Self::OccupiedHouseholdsPercent,
        Self::EligibleWorkers,
        Self::Unemployed,
        Self::UnemploymentPercent,
        Self::JobsAvailable,
        Self::JobsFilled,
        Self::JobsFilledPercent,
        Self::ImportsGoods,
        Self::ImportsForestry,
        Self::ImportsFarming,
        Self::ImportsOre,
        Self::ImportsOil,
        Self::ImportsTotal,
        Self::ExportsGoods,
        Self::ExportsForestry,
        Self::ExportsFarming,
        Self::ExportsOre,
        Self::ExportsOil,
        Self::ExportsTotal,
        Self::AverageLandValue,
        Self::HeatingConsumption,
        Self::HeatingProduction,
        Self::HeatingConsumptionPercent,
        Self::CityAttractiveness,
        Self::LowWealthTourists,
        Self::MediumWealthTourists,
        Self::HighWealthTourists,
        Self::TouristsTotal,
        Self::ResidentialLowTaxRate,
        Self::ResidentialHighTaxRate,
        Self::CommercialLowTaxRate,
        Self::CommercialHighTaxRate,
        Self::IndustrialTaxRate,
        Self::OfficeTaxRate,
        Self::TotalIncome,
        Self::TotalExpenses,
        Self::Profit,
        Self::BankBalance,
        Self::LoanBalance,
        Self::IncomePerCapita,
        Self::ResidentialLowIncome,
        Self::ResidentialHighIncome,
        Self::ResidentialLowEcoIncome,
        Self::ResidentialHighEcoIncome,
        Self::ResidentialIncomeTotal,
        Self::CommercialLowIncome,
        Self::CommercialHighIncome,
        Self::CommercialLeisureIncome,
        Self::CommercialTourismIncome,
        Self::CommercialEcoIncome,
        Self::CommercialIncomeTotal,
        Self::IndustrialGenericIncome,
        Self::IndustrialForestryIncome,
        Self::IndustrialFarmingIncome,
        Self::IndustrialOreIncome,
        Self::IndustrialOilIncome,
        Self::IndustrialIncomeTotal,
        Self::OfficeGenericIncome,
        Self::OfficeItClusterIncome,
        Self::OfficeIncomeTotal,
        Self::RoadExpenses,
        Self::ElectricityExpenses,
        Self::WaterExpenses,
        Self::GarbageExpenses,
        Self::HealthcareExpenses,
        Self::FireExpenses,
        Self::PoliceExpenses,
        Self::EducationExpenses,
        Self::TransportExpenses,
        Self::ParkExpenses,
        Self::PolicyExpenses,
        Self::LoanExpenses,
        Self::ServiceExpensesTotal,
        Self::ParkAreas,
        Self::ParkVisitors,
        Self::CampusStudents,
        Self::CampusCapacity,
        Self::CampusUsagePercent,
        Self::BuildingsInUse,
        Self::BuildingsCapacity,
        Self::BuildingsUsagePercent,
        Self::CitizensInUse,
        Self::CitizensCapacity,
        Self::CitizensUsagePercent,
        Self::VehiclesInUse,
        Self::VehiclesCapacity,
        Self::VehiclesUsagePercent,
        Self::NetworkSegmentsInUse,
        Self::NetworkSegmentsCapacity,
        Self::NetworkSegmentsUsagePercent,
    ];

    /// Name of the backing snapshot field or derived property.
    pub fn field_name(self) -> &'static str {
        match self {
            Self::ElectricityConsumption => "electricity_consumption",
            Self::ElectricityProduction => "electricity_production",
            Self::ElectricityConsumptionPercent => "electricity_consumption_percent",
            Self::WaterConsumption => "water_consumption",
            Self::WaterPumpingCapacity => "water_pumping_capacity",
            Self::WaterConsumptionPercent => "water_consumption_percent",
            Self::WaterTankReserved => "water_tank_reserved",
            Self::WaterTankStorageCapacity => "water_tank_storage_capacity",
            Self::WaterTankReservedPercent => "water_tank_reserved_percent",
            Self::SewageProduction => "sewage_production",
            Self::SewageDrainCapacity => "sewage_drain_capacity",
            Self::SewageProductionPercent => "sewage_production_percent",
            Self::LandfillStorage => "landfill_storage",
            Self::LandfillCapacity => "landfill_capacity",
            Self::LandfillStoragePercent => "landfill_storage_percent",
            Self::GarbageProduction => "garbage_production",
            Self::GarbageProcessingCapacity => "garbage_processing_capacity",
            Self::GarbageProductionPercent => "garbage_production_percent",
            Self::GarbageUncollected => "garbage_uncollected",
            Self::ElementaryEligible => "elementary_eligible",
            Self::ElementaryCapacity => "elementary_capacity",
            Self::ElementaryUsagePercent => "elementary_usage_percent",
            Self::HighSchoolEligible => "high_school_eligible",
            Self::HighSchoolCapacity => "high_school_capacity",
            Self::HighSchoolUsagePercent => "high_school_usage_percent",
            Self::UniversityEligible => "university_eligible",
            Self::UniversityCapacity => "university_capacity",
            Self::UniversityUsagePercent => "university_usage_percent",
            Self::LibraryUsers => "library_users",
            Self::LibraryCapacity => "library_capacity",
            Self::LibraryUsagePercent => "library_usage_percent",
            Self::Uneducated => "uneducated",
            Self::Educated => "educated",
            Self::WellEducated => "well_educated",
            Self::HighlyEducated => "highly_educated",
            Self::EducationLevelTotal => "education_level_total",
            Self::UneducatedPercent => "uneducated_percent",
            Self::EducatedPercent => "educated_percent",
            Self::WellEducatedPercent => "well_educated_percent",
            Self::HighlyEducatedPercent => "highly_educated_percent",
            Self::AverageHappiness => "average_happiness",
            Self::ResidentialHappiness => "residential_happiness",
            Self::CommercialHappiness => "commercial_happiness",
            Self::IndustrialHappiness => "industrial_happiness",
            Self::OfficeHappiness => "office_happiness",
            Self::AverageHealth => "average_health",
            Self::SickCitizens => "sick_citizens",
            Self::HospitalPatients => "hospital_patients",
            Self::HospitalCapacity => "hospital_capacity",
            Self::HospitalUsagePercent => "hospital_usage_percent",
            Self::CemeteryBuried => "cemetery_buried",
            Self::CemeteryCapacity => "cemetery_capacity",
            Self::CemeteryUsagePercent => "cemetery_usage_percent",
            Self::CrematoriumDeceased => "crematorium_deceased",
            Self::CrematoriumCapacity => "crematorium_capacity",
            Self::CrematoriumUsagePercent => "crematorium_usage_percent",
            Self::ResidentialZoned => "residential_zoned",
            Self::CommercialZoned => "commercial_zoned",
            Self::IndustrialZoned => "industrial_zoned",
            Self::OfficeZoned => "office_zoned",
            Self::ZonedTotal => "zoned_total",
            Self::ResidentialZonedPercent => "residential_zoned_percent",
            Self::CommercialZonedPercent => "commercial_zoned_percent",
            Self::IndustrialZonedPercent => "industrial_zoned_percent",
            Self::OfficeZonedPercent => "office_zoned_percent",
            Self::ResidentialLevel1 => "residential_level1",
            Self::ResidentialLevel2 => "residential_level2",
            Self::ResidentialLevel3 => "residential_level3",
            Self::ResidentialLevel4 => "residential_level4",
            Self::ResidentialLevel5 => "residential_level5",
            Self::ResidentialAverageLevel => "residential_average_level",
            Self::CommercialLevel1 => "commercial_level1",
            Self::CommercialLevel2 => "commercial_level2",
            Self::CommercialLevel3 => "commercial_level3",
            Self::CommercialAverageLevel => "commercial_average_level",
            Self::IndustrialLevel1 => "industrial_level1",
            Self::IndustrialLevel2 => "industrial_level2",
            Self::IndustrialLevel3 => "industrial_level3",
            Self::IndustrialAverageLevel => "industrial_average_level",
            Self::OfficeLevel1 => "office_level1",
            Self::OfficeLevel2 => "office_level2",
            Self::OfficeLevel3 => "office_level3",
            Self::OfficeAverageLevel => "office_average_level",
            Self::ResidentialBuildings => "residential_buildings",
            Self::CommercialBuildings => "commercial_buildings",
            Self::IndustrialBuildings => "industrial_buildings",
            Self::OfficeBuildings => "office_buildings",
            Self::ZoneBuildingsTotal => "zone_buildings_total",
            Self::AbandonedBuildings => "abandoned_buildings",
            Self::ResidentialDemand => "residential_demand",
            Self::CommercialDemand => "commercial_demand",
            Self::WorkplaceDemand => "workplace_demand",
            Self::TrafficAverageFlow => "traffic_average_flow",
            Self::ActiveVehicles => "active_vehicles",
            Self::GroundPollution => "ground_pollution",
            Self::DrinkingWaterPollution => "drinking_water_pollution",
            Self::NoisePollution => "noise_pollution",
            Self::FireHazard => "fire_hazard",
            Self::BuildingsOnFire => "buildings_on_fire",
            Self::CrimeRate => "crime_rate",
            Self::DetainedCriminals => "detained_criminals",
            Self::JailCapacity => "jail_capacity",
            Self::JailUsagePercent => "jail_usage_percent",
            Self::BusResidents => "bus_residents",
            Self::BusTourists => "bus_tourists",
            Self::BusTotal => "bus_total",
            Self::MetroResidents => "metro_residents",
            Self::MetroTourists => "metro_tourists",
            Self::MetroTotal => "metro_total",
            Self::TrainResidents => "train_residents",
            Self::TrainTourists => "train_tourists",
            Self::TrainTotal => "train_total",
            Self::TramResidents => "tram_residents",
            Self::TramTourists => "tram_tourists",
            Self::TramTotal => "tram_total",
            Self::FerryResidents => "ferry_residents",
            Self::FerryTourists => "ferry_tourists",
            Self::FerryTotal => "ferry_total",
            Self::PublicTransportTotal => "public_transport_total",
            Self::Population => "population",
            Self::Children => "children",
            Self::Teens => "teens",
            Self::YoungAdults => "young_adults",
            Self::Adults => "adults",
            Self::Seniors => "seniors",
            Self::ChildrenPercent => "children_percent",
            Self::TeensPercent => "teens_percent",
            Self::YoungAdultsPercent => "young_adults_percent",
            Self::AdultsPercent => "adults_percent",
            Self::SeniorsPercent => "seniors_percent",
            Self::BirthRate => "birth_rate",
            Self::DeathRate => "death_rate",
            Self::OccupiedHouseholds => "occupied_households",
            Self::AvailableHouseholds => "available_households",
            Self::HouseholdsTotal => "households_total",
            Self::OccupiedHouseholdsPercent => "occupied_households_percent",
            Self::EligibleWorkers => "eligible_workers",
            Self::Unemployed => "unemployed",
            Self::UnemploymentPercent => "unemployment_percent",
            Self::JobsAvailable => "jobs_available",
            Self::JobsFilled => "jobs_filled",
            Self::JobsFilledPercent => "jobs_filled_percent",
            Self::ImportsGoods => "imports_goods",
            Self::ImportsForestry => "imports_forestry",
            Self::ImportsFarming => "imports_farming",
            Self::ImportsOre => "imports_ore",
            Self::ImportsOil => "imports_oil",
            Self::ImportsTotal => "imports_total",
            Self::ExportsGoods => "exports_goods",
            Self::ExportsForestry => "exports_forestry",
            Self::ExportsFarming => "exports_farming",
            Self::ExportsOre => "exports_ore",
            Self::ExportsOil => "exports_oil",
            Self::ExportsTotal => "exports_total",
            Self::AverageLandValue => "average_land_value",
            Self::HeatingConsumption => "heating_consumption",
            Self::HeatingProduction => "heating_production",
            Self::HeatingConsumptionPercent => "heating_consumption_percent",
            Self::CityAttractiveness => "city_attractiveness",
            Self::LowWealthTourists => "low_wealth_tourists",
            Self::MediumWealthTourists => "medium_wealth_tourists",
            Self::HighWealthTourists => "high_wealth_tourists",
            Self::TouristsTotal => "tourists_total",
            Self::ResidentialLowTaxRate => "residential_low_tax_rate",
            Self::ResidentialHighTaxRate => "residential_high_tax_rate",
            Self::CommercialLowTaxRate => "commercial_low_tax_rate",
            Self::CommercialHighTaxRate => "commercial_high_tax_rate",
            Self::IndustrialTaxRate => "industrial_tax_rate",
            Self::OfficeTaxRate => "office_tax_rate",
            Self::TotalIncome => "total_income",
            Self::TotalExpenses => "total_expenses",
            Self::Profit => "profit",
            Self::BankBalance => "bank_balance",
            Self::LoanBalance => "loan_balance",
            Self::IncomePerCapita => "income_per_capita",
            Self::ResidentialLowIncome => "residential_low_income",
            Self::ResidentialHighIncome => "residential_high_income",
            Self::ResidentialLowEcoIncome => "residential_low_eco_income",
            Self::ResidentialHighEcoIncome => "residential_high_eco_income",
            Self::ResidentialIncomeTotal => "residential_income_total",
            Self::CommercialLowIncome => "commercial_low_income",
            Self::CommercialHighIncome => "commercial_high_income",
            Self::CommercialLeisureIncome => "commercial_leisure_income",
            Self::CommercialTourismIncome => "commercial_tourism_income",
            Self::CommercialEcoIncome => "commercial_eco_income",
            Self::CommercialIncomeTotal => "commercial_income_total",
            Self::IndustrialGenericIncome => "industrial_generic_income",
            Self::IndustrialForestryIncome => "industrial_forestry_income",
            Self::IndustrialFarmingIncome => "industrial_farming_income",
            Self::IndustrialOreIncome => "industrial_ore_income",
            Self::IndustrialOilIncome => "industrial_oil_income",
            Self::IndustrialIncomeTotal => "industrial_income_total",
            Self::OfficeGenericIncome => "office_generic_income",
            Self::OfficeItClusterIncome => "office_it_cluster_income",
            Self::OfficeIncomeTotal => "office_income_total",
            Self::RoadExpenses => "road_expenses",
            Self::ElectricityExpenses => "electricity_expenses",
            Self::WaterExpenses => "water_expenses",
            Self::GarbageExpenses => "garbage_expenses",
            Self::HealthcareExpenses => "healthcare_expenses",
            Self::FireExpenses => "fire_expenses",
            Self::PoliceExpenses => "police_expenses",
            Self::EducationExpenses => "education_expenses",
            Self::TransportExpenses => "transport_expenses",
            Self::ParkExpenses => "park_expenses",
            Self::PolicyExpenses => "policy_expenses",
            Self::LoanExpenses => "loan_expenses",
            Self::ServiceExpensesTotal => "service_expenses_total",
            Self::ParkAreas => "park_areas",
            Self::ParkVisitors => "park_visitors",
            Self::CampusStudents => "campus_students",
            Self::CampusCapacity => "campus_capacity",
            Self::CampusUsagePercent => "campus_usage_percent",
            Self::BuildingsInUse => "buildings_in_use",
            Self::BuildingsCapacity => "buildings_capacity",
            Self::BuildingsUsagePercent => "buildings_usage_percent",
            Self::CitizensInUse => "citizens_in_use",
            Self::CitizensCapacity => "citizens_capacity",
            Self::CitizensUsagePercent => "citizens_usage_percent",
            Self::VehiclesInUse => "vehicles_in_use",
            Self::VehiclesCapacity => "vehicles_capacity",
            Self::VehiclesUsagePercent => "vehicles_usage_percent",
            Self::NetworkSegmentsInUse => "network_segments_in_use",
            Self::NetworkSegmentsCapacity => "network_segments_capacity",
            Self::NetworkSegmentsUsagePercent => "network_segments_usage_percent",
        }
    }

    /// Reverse of [`StatisticKind::field_name`].
    pub fn from_field_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.field_name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_name_round_trip() {
        for kind in StatisticKind::ALL {
            assert_eq!(StatisticKind::from_field_name(kind.field_name()), Some(kind));
        }
    }

    #[test]
    fn test_unknown_field_name() {
        assert_eq!(StatisticKind::from_field_name("snapshot_date"), None);
        assert_eq!(StatisticKind::from_field_name(""), None);
    }
}
