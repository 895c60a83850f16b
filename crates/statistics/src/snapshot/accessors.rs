use super::Snapshot;
use crate::catalog::StatisticKind;

impl Snapshot {
    /// Current value of `kind` widened to `f64`, or `None` when the statistic
    /// is unavailable (inactive content pack).
    ///
    /// This match is the mapping between statistics and snapshot fields; the
    /// compiler keeps it exhaustive and the registry check keeps the names in
    /// sync with [`Snapshot::FIELD_NAMES`].
    pub fn value(&self, kind: StatisticKind) -> Option<f64> {
        match kind {
            StatisticKind::ElectricityConsumption => Some(f64::from(self.electricity_consumption)),
            StatisticKind::ElectricityProduction => Some(f64::from(self.electricity_production)),
            StatisticKind::ElectricityConsumptionPercent => {
                Some(f64::from(self.electricity_consumption_percent()))
            }
            StatisticKind::WaterConsumption => Some(f64::from(self.water_consumption)),
            StatisticKind::WaterPumpingCapacity => Some(f64::from(self.water_pumping_capacity)),
            StatisticKind::WaterConsumptionPercent => {
                Some(f64::from(self.water_consumption_percent()))
            }
            StatisticKind::WaterTankReserved => self.water_tank_reserved.map(|v| v as f64),
            StatisticKind::WaterTankStorageCapacity => {
                self.water_tank_storage_capacity.map(|v| v as f64)
            }
            StatisticKind::WaterTankReservedPercent => {
                self.water_tank_reserved_percent().map(f64::from)
            }
            StatisticKind::SewageProduction => Some(f64::from(self.sewage_production)),
            StatisticKind::SewageDrainCapacity => Some(f64::from(self.sewage_drain_capacity)),
            StatisticKind::SewageProductionPercent => {
                Some(f64::from(self.sewage_production_percent()))
            }
            StatisticKind::LandfillStorage => Some(self.landfill_storage as f64),
            StatisticKind::LandfillCapacity => Some(self.landfill_capacity as f64),
            StatisticKind::LandfillStoragePercent => {
                Some(f64::from(self.landfill_storage_percent()))
            }
            StatisticKind::GarbageProduction => Some(f64::from(self.garbage_production)),
            StatisticKind::GarbageProcessingCapacity => {
                Some(f64::from(self.garbage_processing_capacity))
            }
            StatisticKind::GarbageProductionPercent => {
                Some(f64::from(self.garbage_production_percent()))
            }
            StatisticKind::GarbageUncollected => Some(f64::from(self.garbage_uncollected)),
            StatisticKind::ElementaryEligible => Some(f64::from(self.elementary_eligible)),
            StatisticKind::ElementaryCapacity => Some(f64::from(self.elementary_capacity)),
            StatisticKind::ElementaryUsagePercent => {
                Some(f64::from(self.elementary_usage_percent()))
            }
            StatisticKind::HighSchoolEligible => Some(f64::from(self.high_school_eligible)),
            StatisticKind::HighSchoolCapacity => Some(f64::from(self.high_school_capacity)),
            StatisticKind::HighSchoolUsagePercent => {
                Some(f64::from(self.high_school_usage_percent()))
            }
            StatisticKind::UniversityEligible => Some(f64::from(self.university_eligible)),
            StatisticKind::UniversityCapacity => Some(f64::from(self.university_capacity)),
            StatisticKind::UniversityUsagePercent => {
                Some(f64::from(self.university_usage_percent()))
            }
            StatisticKind::LibraryUsers => Some(f64::from(self.library_users)),
            StatisticKind::LibraryCapacity => Some(f64::from(self.library_capacity)),
            StatisticKind::LibraryUsagePercent => Some(f64::from(self.library_usage_percent())),
            StatisticKind::Uneducated => Some(f64::from(self.uneducated)),
            StatisticKind::Educated => Some(f64::from(self.educated)),
            StatisticKind::WellEducated => Some(f64::from(self.well_educated)),
            StatisticKind::HighlyEducated => Some(f64::from(self.highly_educated)),
            StatisticKind::EducationLevelTotal => Some(f64::from(self.education_level_total())),
            StatisticKind::UneducatedPercent => Some(f64::from(self.uneducated_percent())),
            StatisticKind::EducatedPercent => Some(f64::from(self.educated_percent())),
            StatisticKind::WellEducatedPercent => Some(f64::from(self.well_educated_percent())),
            StatisticKind::HighlyEducatedPercent => Some(f64::from(self.highly_educated_percent())),
            StatisticKind::AverageHappiness => Some(f64::from(self.average_happiness)),
            StatisticKind::ResidentialHappiness => Some(f64::from(self.residential_happiness)),
            StatisticKind::CommercialHappiness => Some(f64::from(self.commercial_happiness)),
            StatisticKind::IndustrialHappiness => Some(f64::from(self.industrial_happiness)),
            StatisticKind::OfficeHappiness => Some(f64::from(self.office_happiness)),
            StatisticKind::AverageHealth => Some(f64::from(self.average_health)),
            StatisticKind::SickCitizens => Some(f64::from(self.sick_citizens)),
            StatisticKind::HospitalPatients => Some(f64::from(self.hospital_patients)),
            StatisticKind::HospitalCapacity => Some(f64::from(self.hospital_capacity)),
            StatisticKind::HospitalUsagePercent => Some(f64::from(self.hospital_usage_percent())),
            StatisticKind::CemeteryBuried => Some(f64::from(self.cemetery_buried)),
            StatisticKind::CemeteryCapacity => Some(f64::from(self.cemetery_capacity)),
            StatisticKind::CemeteryUsagePercent => Some(f64::from(self.cemetery_usage_percent())),
            StatisticKind::CrematoriumDeceased => Some(f64::from(self.crematorium_deceased)),
            StatisticKind::CrematoriumCapacity => Some(f64::from(self.crematorium_capacity)),
            StatisticKind::CrematoriumUsagePercent => {
                Some(f64::from(self.crematorium_usage_percent()))
            }
            StatisticKind::ResidentialZoned => Some(f64::from(self.residential_zoned)),
            StatisticKind::CommercialZoned => Some(f64::from(self.commercial_zoned)),
            StatisticKind::IndustrialZoned => Some(f64::from(self.industrial_zoned)),
            StatisticKind::OfficeZoned => Some(f64::from(self.office_zoned)),
            StatisticKind::ZonedTotal => Some(f64::from(self.zoned_total())),
            StatisticKind::ResidentialZonedPercent => {
                Some(f64::from(self.residential_zoned_percent()))
            }
            StatisticKind::CommercialZonedPercent => {
                Some(f64::from(self.commercial_zoned_percent()))
            }
            StatisticKind::IndustrialZonedPercent => {
                Some(f64::from(self.industrial_zoned_percent()))
            }
            StatisticKind::OfficeZonedPercent => Some(f64::from(self.office_zoned_percent())),
            StatisticKind::ResidentialLevel1 => Some(f64::from(self.residential_level1)),
            StatisticKind::ResidentialLevel2 => Some(f64::from(self.residential_level2)),
            StatisticKind::ResidentialLevel3 => Some(f64::from(self.residential_level3)),
            StatisticKind::ResidentialLevel4 => Some(f64::from(self.residential_level4)),
            StatisticKind::ResidentialLevel5 => Some(f64::from(self.residential_level5)),
            StatisticKind::ResidentialAverageLevel => {
                Some(f64::from(self.residential_average_level()))
            }
            StatisticKind::CommercialLevel1 => Some(f64::from(self.commercial_level1)),
            StatisticKind::CommercialLevel2 => Some(f64::from(self.commercial_level2)),
            StatisticKind::CommercialLevel3 => Some(f64::from(self.commercial_level3)),
            StatisticKind::CommercialAverageLevel => {
                Some(f64::from(self.commercial_average_level()))
            }
            StatisticKind::IndustrialLevel1 => Some(f64::from(self.industrial_level1)),
            StatisticKind::IndustrialLevel2 => Some(f64::from(self.industrial_level2)),
            StatisticKind::IndustrialLevel3 => Some(f64::from(self.industrial_level3)),
            StatisticKind::IndustrialAverageLevel => {
                Some(f64::from(self.industrial_average_level()))
            }
            StatisticKind::OfficeLevel1 => Some(f64::from(self.office_level1)),
            StatisticKind::OfficeLevel2 => Some(f64::from(self.office_level2)),
            StatisticKind::OfficeLevel3 => Some(f64::from(self.office_level3)),
            StatisticKind::OfficeAverageLevel => Some(f64::from(self.office_average_level())),
            StatisticKind::ResidentialBuildings => Some(f64::from(self.residential_buildings())),
            StatisticKind::CommercialBuildings => Some(f64::from(self.commercial_buildings())),
            StatisticKind::IndustrialBuildings => Some(f64::from(self.industrial_buildings())),
            StatisticKind::OfficeBuildings => Some(f64::from(self.office_buildings())),
            StatisticKind::ZoneBuildingsTotal => Some(f64::from(self.zone_buildings_total())),
            StatisticKind::AbandonedBuildings => Some(f64::from(self.abandoned_buildings)),
            StatisticKind::ResidentialDemand => Some(f64::from(self.residential_demand)),
            StatisticKind::CommercialDemand => Some(f64::from(self.commercial_demand)),
            StatisticKind::WorkplaceDemand => Some(f64::from(self.workplace_demand)),
            StatisticKind::TrafficAverageFlow => Some(f64::from(self.traffic_average_flow)),
            StatisticKind::ActiveVehicles => Some(f64::from(self.active_vehicles)),
            StatisticKind::GroundPollution => Some(f64::from(self.ground_pollution)),
            StatisticKind::DrinkingWaterPollution => Some(f64::from(self.drinking_water_pollution)),
            StatisticKind::NoisePollution => Some(f64::from(self.noise_pollution)),
            StatisticKind::FireHazard => Some(f64::from(self.fire_hazard)),
            StatisticKind::BuildingsOnFire => Some(f64::from(self.buildings_on_fire)),
            StatisticKind::CrimeRate => Some(f64::from(self.crime_rate)),
            StatisticKind::DetainedCriminals => Some(f64::from(self.detained_criminals)),
            StatisticKind::JailCapacity => Some(f64::from(self.jail_capacity)),
            StatisticKind::JailUsagePercent => Some(f64::from(self.jail_usage_percent())),
            StatisticKind::BusResidents => Some(f64::from(self.bus_residents)),
            StatisticKind::BusTourists => Some(f64::from(self.bus_tourists)),
            StatisticKind::BusTotal => Some(f64::from(self.bus_total())),
            StatisticKind::MetroResidents => Some(f64::from(self.metro_residents)),
            StatisticKind::MetroTourists => Some(f64::from(self.metro_tourists)),
            StatisticKind::MetroTotal => Some(f64::from(self.metro_total())),
            StatisticKind::TrainResidents => Some(f64::from(self.train_residents)),
            StatisticKind::TrainTourists => Some(f64::from(self.train_tourists)),
            StatisticKind::TrainTotal => Some(f64::from(self.train_total())),
            StatisticKind::TramResidents => self.tram_residents.map(f64::from),
            StatisticKind::TramTourists => self.tram_tourists.map(f64::from),
            StatisticKind::TramTotal => self.tram_total().map(f64::from),
            StatisticKind::FerryResidents => self.ferry_residents.map(f64::from),
            StatisticKind::FerryTourists => self.ferry_tourists.map(f64::from),
            StatisticKind::FerryTotal => self.ferry_total().map(f64::from),
            StatisticKind::PublicTransportTotal => Some(f64::from(self.public_transport_total())),
            StatisticKind::Population => Some(f64::from(self.population)),
            StatisticKind::Children => Some(f64::from(self.children)),
            StatisticKind::Teens => Some(f64::from(self.teens)),
            StatisticKind::YoungAdults => Some(f64::from(self.young_adults)),
            StatisticKind::Adults => Some(f64::from(self.adults)),
            StatisticKind::Seniors => Some(f64::from(self.seniors)),
            StatisticKind::ChildrenPercent => Some(f64::from(self.children_percent())),
            StatisticKind::TeensPercent => Some(f64::from(self.teens_percent())),
            StatisticKind::YoungAdultsPercent => Some(f64::from(self.young_adults_percent())),
            StatisticKind::AdultsPercent => Some(f64::from(self.adults_percent())),
            StatisticKind::SeniorsPercent => Some(f64::from(self.seniors_percent())),
            StatisticKind::BirthRate => Some(f64::from(self.birth_rate)),
            StatisticKind::DeathRate => Some(f64::from(self.death_rate)),
            StatisticKind::OccupiedHouseholds => Some(f64::from(self.occupied_households)),
            StatisticKind::AvailableHouseholds => Some(f64::from(self.available_households)),
            StatisticKind::HouseholdsTotal => Some(f64::from(self.households_total())),
            StatisticKind::OccupiedHouseholdsPercent => {
                Some(f64::from(self.occupied_households_percent()))
            }
            StatisticKind::EligibleWorkers => Some(f64::from(self.eligible_workers)),
            StatisticKind::Unemployed => Some(f64::from(self.unemployed)),
            StatisticKind::UnemploymentPercent => Some(f64::from(self.unemployment_percent())),
            StatisticKind::JobsAvailable => Some(f64::from(self.jobs_available)),
            StatisticKind::JobsFilled => Some(f64::from(self.jobs_filled)),
            StatisticKind::JobsFilledPercent => Some(f64::from(self.jobs_filled_percent())),
            StatisticKind::ImportsGoods => Some(f64::from(self.imports_goods)),
            StatisticKind::ImportsForestry => Some(f64::from(self.imports_forestry)),
            StatisticKind::ImportsFarming => Some(f64::from(self.imports_farming)),
            StatisticKind::ImportsOre => Some(f64::from(self.imports_ore)),
            StatisticKind::ImportsOil => Some(f64::from(self.imports_oil)),
            StatisticKind::ImportsTotal => Some(f64::from(self.imports_total())),
            StatisticKind::ExportsGoods => Some(f64::from(self.exports_goods)),
            StatisticKind::ExportsForestry => Some(f64::from(self.exports_forestry)),
            StatisticKind::ExportsFarming => Some(f64::from(self.exports_farming)),
            StatisticKind::ExportsOre => Some(f64::from(self.exports_ore)),
            StatisticKind::ExportsOil => Some(f64::from(self.exports_oil)),
            StatisticKind::ExportsTotal => Some(f64::from(self.exports_total())),
            StatisticKind::AverageLandValue => Some(f64::from(self.average_land_value)),
            StatisticKind::HeatingConsumption => self.heating_consumption.map(f64::from),
            StatisticKind::HeatingProduction => self.heating_production.map(f64::from),
            StatisticKind::HeatingConsumptionPercent => {
                self.heating_consumption_percent().map(f64::from)
            }
            StatisticKind::CityAttractiveness => Some(f64::from(self.city_attractiveness)),
            StatisticKind::LowWealthTourists => Some(f64::from(self.low_wealth_tourists)),
            StatisticKind::MediumWealthTourists => Some(f64::from(self.medium_wealth_tourists)),
            StatisticKind::HighWealthTourists => Some(f64::from(self.high_wealth_tourists)),
            StatisticKind::TouristsTotal => Some(f64::from(self.tourists_total())),
            StatisticKind::ResidentialLowTaxRate => Some(f64::from(self.residential_low_tax_rate)),
            StatisticKind::ResidentialHighTaxRate => {
                Some(f64::from(self.residential_high_tax_rate))
            }
            StatisticKind::CommercialLowTaxRate => Some(f64::from(self.commercial_low_tax_rate)),
            StatisticKind::CommercialHighTaxRate => Some(f64::from(self.commercial_high_tax_rate)),
            StatisticKind::IndustrialTaxRate => Some(f64::from(self.industrial_tax_rate)),
            StatisticKind::OfficeTaxRate => Some(f64::from(self.office_tax_rate)),
            StatisticKind::TotalIncome => Some(self.total_income as f64),
            StatisticKind::TotalExpenses => Some(self.total_expenses as f64),
            StatisticKind::Profit => Some(self.profit() as f64),
            StatisticKind::BankBalance => Some(self.bank_balance as f64),
            StatisticKind::LoanBalance => Some(self.loan_balance as f64),
            StatisticKind::IncomePerCapita => self.income_per_capita().map(f64::from),
            StatisticKind::ResidentialLowIncome => Some(self.residential_low_income as f64),
            StatisticKind::ResidentialHighIncome => Some(self.residential_high_income as f64),
            StatisticKind::ResidentialLowEcoIncome => {
                self.residential_low_eco_income.map(|v| v as f64)
            }
            StatisticKind::ResidentialHighEcoIncome => {
                self.residential_high_eco_income.map(|v| v as f64)
            }
            StatisticKind::ResidentialIncomeTotal => Some(self.residential_income_total() as f64),
            StatisticKind::CommercialLowIncome => Some(self.commercial_low_income as f64),
            StatisticKind::CommercialHighIncome => Some(self.commercial_high_income as f64),
            StatisticKind::CommercialLeisureIncome => {
                self.commercial_leisure_income.map(|v| v as f64)
            }
            StatisticKind::CommercialTourismIncome => {
                self.commercial_tourism_income.map(|v| v as f64)
            }
            StatisticKind::CommercialEcoIncome => self.commercial_eco_income.map(|v| v as f64),
            StatisticKind::CommercialIncomeTotal => Some(self.commercial_income_total() as f64),
            StatisticKind::IndustrialGenericIncome => Some(self.industrial_generic_income as f64),
            StatisticKind::IndustrialForestryIncome => Some(self.industrial_forestry_income as f64),
            StatisticKind::IndustrialFarmingIncome => Some(self.industrial_farming_income as f64),
            StatisticKind::IndustrialOreIncome => Some(self.industrial_ore_income as f64),
            StatisticKind::IndustrialOilIncome => Some(self.industrial_oil_income as f64),
            StatisticKind::IndustrialIncomeTotal => Some(self.industrial_income_total() as f64),
            StatisticKind::OfficeGenericIncome => Some(self.office_generic_income as f64),
            StatisticKind::OfficeItClusterIncome => self.office_it_cluster_income.map(|v| v as f64),
            StatisticKind::OfficeIncomeTotal => Some(self.office_income_total() as f64),
            StatisticKind::RoadExpenses => Some(self.road_expenses as f64),
            StatisticKind::ElectricityExpenses => Some(self.electricity_expenses as f64),
            StatisticKind::WaterExpenses => Some(self.water_expenses as f64),
            StatisticKind::GarbageExpenses => Some(self.garbage_expenses as f64),
            StatisticKind::HealthcareExpenses => Some(self.healthcare_expenses as f64),
            StatisticKind::FireExpenses => Some(self.fire_expenses as f64),
            StatisticKind::PoliceExpenses => Some(self.police_expenses as f64),
            StatisticKind::EducationExpenses => Some(self.education_expenses as f64),
            StatisticKind::TransportExpenses => Some(self.transport_expenses as f64),
            StatisticKind::ParkExpenses => Some(self.park_expenses as f64),
            StatisticKind::PolicyExpenses => Some(self.policy_expenses as f64),
            StatisticKind::LoanExpenses => Some(self.loan_expenses as f64),
            StatisticKind::ServiceExpensesTotal => Some(self.service_expenses_total() as f64),
            StatisticKind::ParkAreas => self.park_areas.map(f64::from),
            StatisticKind::ParkVisitors => self.park_visitors.map(f64::from),
            StatisticKind::CampusStudents => self.campus_students.map(f64::from),
            StatisticKind::CampusCapacity => self.campus_capacity.map(f64::from),
            StatisticKind::CampusUsagePercent => self.campus_usage_percent().map(f64::from),
            StatisticKind::BuildingsInUse => Some(f64::from(self.buildings_in_use)),
            StatisticKind::BuildingsCapacity => Some(f64::from(self.buildings_capacity)),
            StatisticKind::BuildingsUsagePercent => Some(f64::from(self.buildings_usage_percent())),
            StatisticKind::CitizensInUse => Some(f64::from(self.citizens_in_use)),
            StatisticKind::CitizensCapacity => Some(f64::from(self.citizens_capacity)),
            StatisticKind::CitizensUsagePercent => Some(f64::from(self.citizens_usage_percent())),
            StatisticKind::VehiclesInUse => Some(f64::from(self.vehicles_in_use)),
            StatisticKind::VehiclesCapacity => Some(f64::from(self.vehicles_capacity)),
            StatisticKind::VehiclesUsagePercent => Some(f64::from(self.vehicles_usage_percent())),
            StatisticKind::NetworkSegmentsInUse => Some(f64::from(self.network_segments_in_use)),
            StatisticKind::NetworkSegmentsCapacity => {
                Some(f64::from(self.network_segments_capacity))
            }
            StatisticKind::NetworkSegmentsUsagePercent => {
                Some(f64::from(self.network_segments_usage_percent()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn test_value_reads_base_and_derived_fields() {
        let mut s = Snapshot::new(NaiveDateTime::default());
        s.population = 4_000;
        s.seniors = 1_000;
        s.bank_balance = -75_000;
        assert_eq!(s.value(StatisticKind::Population), Some(4_000.0));
        assert_eq!(s.value(StatisticKind::SeniorsPercent), Some(25.0));
        assert_eq!(s.value(StatisticKind::BankBalance), Some(-75_000.0));
    }

    #[test]
    fn test_value_none_for_missing_pack_data() {
        let mut s = Snapshot::new(NaiveDateTime::default());
        assert_eq!(s.value(StatisticKind::TramResidents), None);
        assert_eq!(s.value(StatisticKind::TramTotal), None);
        s.tram_residents = Some(12);
        assert_eq!(s.value(StatisticKind::TramTotal), Some(12.0));
    }

    #[test]
    fn test_every_statistic_readable_on_empty_snapshot() {
        let s = Snapshot::new(NaiveDateTime::default());
        for kind in StatisticKind::ALL {
            if let Some(v) = s.value(kind) {
                assert!(v.is_finite(), "{:?} produced {}", kind, v);
            }
        }
    }
}
