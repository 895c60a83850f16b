// ---------------------------------------------------------------------------
// snapshot_codec – Fixed-order binary layout of a single Snapshot
// ---------------------------------------------------------------------------
//
// Record layout (little-endian):
//   timestamp: seconds since epoch (i64) + sub-second nanos (u32)
//   every base field, in the permanent order below
//   nullable fields: 0u8 when absent, 1u8 followed by the value when present
//
// Derived fields are never written. The order below is part of the save
// format: append new fields at the end and bump CURRENT_FORMAT_VERSION.

mod wire;

#[cfg(test)]
mod tests_roundtrip;
#[cfg(test)]
mod tests_truncation;

pub use wire::{SnapshotReader, SnapshotWriter};

use statistics::Snapshot;

use crate::save_error::SaveError;

/// Version of the snapshot record layout written by this build.
pub const CURRENT_FORMAT_VERSION: u32 = 1;

/// Appends `s` to `w`.
pub fn write_snapshot(w: &mut SnapshotWriter, s: &Snapshot) {
    w.write_timestamp(s.snapshot_date);

    // Electricity
    w.write_i32(s.electricity_consumption);
    w.write_i32(s.electricity_production);

    // Water
    w.write_i32(s.water_consumption);
    w.write_i32(s.water_pumping_capacity);

    // Water Tank
    w.write_opt_i64(s.water_tank_reserved);
    w.write_opt_i64(s.water_tank_storage_capacity);

    // Sewage
    w.write_i32(s.sewage_production);
    w.write_i32(s.sewage_drain_capacity);

    // Landfill
    w.write_i64(s.landfill_storage);
    w.write_i64(s.landfill_capacity);

    // Garbage
    w.write_i32(s.garbage_production);
    w.write_i32(s.garbage_processing_capacity);
    w.write_u32(s.garbage_uncollected);

    // Education
    w.write_u32(s.elementary_eligible);
    w.write_u32(s.elementary_capacity);
    w.write_u32(s.high_school_eligible);
    w.write_u32(s.high_school_capacity);
    w.write_u32(s.university_eligible);
    w.write_u32(s.university_capacity);
    w.write_u32(s.library_users);
    w.write_u32(s.library_capacity);

    // Education Level
    w.write_u32(s.uneducated);
    w.write_u32(s.educated);
    w.write_u32(s.well_educated);
    w.write_u32(s.highly_educated);

    // Happiness
    w.write_u8(s.average_happiness);
    w.write_u8(s.residential_happiness);
    w.write_u8(s.commercial_happiness);
    w.write_u8(s.industrial_happiness);
    w.write_u8(s.office_happiness);

    // Healthcare
    w.write_u8(s.average_health);
    w.write_u32(s.sick_citizens);
    w.write_u32(s.hospital_patients);
    w.write_u32(s.hospital_capacity);

    // Deathcare
    w.write_u32(s.cemetery_buried);
    w.write_u32(s.cemetery_capacity);
    w.write_u32(s.crematorium_deceased);
    w.write_u32(s.crematorium_capacity);

    // Zoning
    w.write_u32(s.residential_zoned);
    w.write_u32(s.commercial_zoned);
    w.write_u32(s.industrial_zoned);
    w.write_u32(s.office_zoned);

    // Zone Level
    w.write_u32(s.residential_level1);
    w.write_u32(s.residential_level2);
    w.write_u32(s.residential_level3);
    w.write_u32(s.residential_level4);
    w.write_u32(s.residential_level5);
    w.write_u32(s.commercial_level1);
    w.write_u32(s.commercial_level2);
    w.write_u32(s.commercial_level3);
    w.write_u32(s.industrial_level1);
    w.write_u32(s.industrial_level2);
    w.write_u32(s.industrial_level3);
    w.write_u32(s.office_level1);
    w.write_u32(s.office_level2);
    w.write_u32(s.office_level3);

    // Zone Buildings
    w.write_u32(s.abandoned_buildings);

    // Zone Demand
    w.write_u8(s.residential_demand);
    w.write_u8(s.commercial_demand);
    w.write_u8(s.workplace_demand);

    // Traffic
    w.write_u8(s.traffic_average_flow);
    w.write_u32(s.active_vehicles);

    // Pollution
    w.write_u8(s.ground_pollution);
    w.write_u8(s.drinking_water_pollution);
    w.write_u8(s.noise_pollution);

    // Fire Safety
    w.write_u8(s.fire_hazard);
    w.write_u32(s.buildings_on_fire);

    // Crime
    w.write_u8(s.crime_rate);
    w.write_u32(s.detained_criminals);
    w.write_u32(s.jail_capacity);

    // Public Transportation
    w.write_u32(s.bus_residents);
    w.write_u32(s.bus_tourists);
    w.write_u32(s.metro_residents);
    w.write_u32(s.metro_tourists);
    w.write_u32(s.train_residents);
    w.write_u32(s.train_tourists);
    w.write_opt_u32(s.tram_residents);
    w.write_opt_u32(s.tram_tourists);
    w.write_opt_u32(s.ferry_residents);
    w.write_opt_u32(s.ferry_tourists);

    // Population
    w.write_u32(s.population);
    w.write_u32(s.children);
    w.write_u32(s.teens);
    w.write_u32(s.young_adults);
    w.write_u32(s.adults);
    w.write_u32(s.seniors);
    w.write_u32(s.birth_rate);
    w.write_u32(s.death_rate);

    // Households
    w.write_u32(s.occupied_households);
    w.write_u32(s.available_households);

    // Employment
    w.write_u32(s.eligible_workers);
    w.write_u32(s.unemployed);
    w.write_u32(s.jobs_available);
    w.write_u32(s.jobs_filled);

    // Outside Connections
    w.write_u32(s.imports_goods);
    w.write_u32(s.imports_forestry);
    w.write_u32(s.imports_farming);
    w.write_u32(s.imports_ore);
    w.write_u32(s.imports_oil);
    w.write_u32(s.exports_goods);
    w.write_u32(s.exports_forestry);
    w.write_u32(s.exports_farming);
    w.write_u32(s.exports_ore);
    w.write_u32(s.exports_oil);

    // Land Value
    w.write_u32(s.average_land_value);

    // Heating
    w.write_opt_i32(s.heating_consumption);
    w.write_opt_i32(s.heating_production);

    // Tourism
    w.write_u32(s.city_attractiveness);
    w.write_u32(s.low_wealth_tourists);
    w.write_u32(s.medium_wealth_tourists);
    w.write_u32(s.high_wealth_tourists);

    // Tax Rate
    w.write_u8(s.residential_low_tax_rate);
    w.write_u8(s.residential_high_tax_rate);
    w.write_u8(s.commercial_low_tax_rate);
    w.write_u8(s.commercial_high_tax_rate);
    w.write_u8(s.industrial_tax_rate);
    w.write_u8(s.office_tax_rate);

    // City Economy
    w.write_i64(s.total_income);
    w.write_i64(s.total_expenses);
    w.write_i64(s.bank_balance);
    w.write_i64(s.loan_balance);

    // Residential Income
    w.write_i64(s.residential_low_income);
    w.write_i64(s.residential_high_income);
    w.write_opt_i64(s.residential_low_eco_income);
    w.write_opt_i64(s.residential_high_eco_income);

    // Commercial Income
    w.write_i64(s.commercial_low_income);
    w.write_i64(s.commercial_high_income);
    w.write_opt_i64(s.commercial_leisure_income);
    w.write_opt_i64(s.commercial_tourism_income);
    w.write_opt_i64(s.commercial_eco_income);

    // Industrial Income
    w.write_i64(s.industrial_generic_income);
    w.write_i64(s.industrial_forestry_income);
    w.write_i64(s.industrial_farming_income);
    w.write_i64(s.industrial_ore_income);
    w.write_i64(s.industrial_oil_income);

    // Office Income
    w.write_i64(s.office_generic_income);
    w.write_opt_i64(s.office_it_cluster_income);

    // Service Expenses
    w.write_i64(s.road_expenses);
    w.write_i64(s.electricity_expenses);
    w.write_i64(s.water_expenses);
    w.write_i64(s.garbage_expenses);
    w.write_i64(s.healthcare_expenses);
    w.write_i64(s.fire_expenses);
    w.write_i64(s.police_expenses);
    w.write_i64(s.education_expenses);
    w.write_i64(s.transport_expenses);
    w.write_i64(s.park_expenses);
    w.write_i64(s.policy_expenses);
    w.write_i64(s.loan_expenses);

    // Park Areas
    w.write_opt_u32(s.park_areas);
    w.write_opt_u32(s.park_visitors);

    // Campus
    w.write_opt_u32(s.campus_students);
    w.write_opt_u32(s.campus_capacity);

    // Game Limits
    w.write_u32(s.buildings_in_use);
    w.write_u32(s.buildings_capacity);
    w.write_u32(s.citizens_in_use);
    w.write_u32(s.citizens_capacity);
    w.write_u32(s.vehicles_in_use);
    w.write_u32(s.vehicles_capacity);
    w.write_u32(s.network_segments_in_use);
    w.write_u32(s.network_segments_capacity);}

/// Reads one record written by [`write_snapshot`].
///
/// `format_version` is the version the data was written with. Only version 1
/// exists, so the layout does not branch on it yet; data from a newer build
/// is rejected.
pub fn read_snapshot(
    r: &mut SnapshotReader<'_>,
    format_version: u32,
) -> Result<Snapshot, SaveError> {
    if format_version > CURRENT_FORMAT_VERSION {
        return Err(SaveError::VersionMismatch {
            expected_max: CURRENT_FORMAT_VERSION,
            found: format_version,
        });
    }
    let mut s = Snapshot::new(r.read_timestamp()?);

    // Electricity
    s.electricity_consumption = r.read_i32()?;
    s.electricity_production = r.read_i32()?;

    // Water
    s.water_consumption = r.read_i32()?;
    s.water_pumping_capacity = r.read_i32()?;

    // Water Tank
    s.water_tank_reserved = r.read_opt_i64()?;
    s.water_tank_storage_capacity = r.read_opt_i64()?;

    // Sewage
    s.sewage_production = r.read_i32()?;
    s.sewage_drain_capacity = r.read_i32()?;

    // Landfill
    s.landfill_storage = r.read_i64()?;
    s.landfill_capacity = r.read_i64()?;

    // Garbage
    s.garbage_production = r.read_i32()?;
    s.garbage_processing_capacity = r.read_i32()?;
    s.garbage_uncollected = r.read_u32()?;

    // Education
    s.elementary_eligible = r.read_u32()?;
    s.elementary_capacity = r.read_u32()?;
    s.high_school_eligible = r.read_u32()?;
    s.high_school_capacity = r.read_u32()?;
    s.university_eligible = r.read_u32()?;
    s.university_capacity = r.read_u32()?;
    s.library_users = r.read_u32()?;
    s.library_capacity = r.read_u32()?;

    // Education Level
    s.uneducated = r.read_u32()?;
    s.educated = r.read_u32()?;
    s.well_educated = r.read_u32()?;
    s.highly_educated = r.read_u32()?;

    // Happiness
    s.average_happiness = r.read_u8()?;
    s.residential_happiness = r.read_u8()?;
    s.commercial_happiness = r.read_u8()?;
    s.industrial_happiness = r.read_u8()?;
    s.office_happiness = r.read_u8()?;

    // Healthcare
    s.average_health = r.read_u8()?;
    s.sick_citizens = r.read_u32()?;
    s.hospital_patients = r.read_u32()?;
    s.hospital_capacity = r.read_u32()?;

    // Deathcare
    s.cemetery_buried = r.read_u32()?;
    s.cemetery_capacity = r.read_u32()?;
    s.crematorium_deceased = r.read_u32()?;
    s.crematorium_capacity = r.read_u32()?;

    // Zoning
    s.residential_zoned = r.read_u32()?;
    s.commercial_zoned = r.read_u32()?;
    s.industrial_zoned = r.read_u32()?;
    s.office_zoned = r.read_u32()?;

    // Zone Level
    s.residential_level1 = r.read_u32()?;
    s.residential_level2 = r.read_u32()?;
    s.residential_level3 = r.read_u32()?;
    s.residential_level4 = r.read_u32()?;
    s.residential_level5 = r.read_u32()?;
    s.commercial_level1 = r.read_u32()?;
    s.commercial_level2 = r.read_u32()?;
    s.commercial_level3 = r.read_u32()?;
    s.industrial_level1 = r.read_u32()?;
    s.industrial_level2 = r.read_u32()?;
    s.industrial_level3 = r.read_u32()?;
    s.office_level1 = r.read_u32()?;
    s.office_level2 = r.read_u32()?;
    s.office_level3 = r.read_u32()?;

    // Zone Buildings
    s.abandoned_buildings = r.read_u32()?;

    // Zone Demand
    s.residential_demand = r.read_u8()?;
    s.commercial_demand = r.read_u8()?;
    s.workplace_demand = r.read_u8()?;

    // Traffic
    s.traffic_average_flow = r.read_u8()?;
    s.active_vehicles = r.read_u32()?;

    // Pollution
    s.ground_pollution = r.read_u8()?;
    s.drinking_water_pollution = r.read_u8()?;
    s.noise_pollution = r.read_u8()?;

    // Fire Safety
    s.fire_hazard = r.read_u8()?;
    s.buildings_on_fire = r.read_u32()?;

    // Crime
    s.crime_rate = r.read_u8()?;
    s.detained_criminals = r.read_u32()?;
    s.jail_capacity = r.read_u32()?;

    // Public Transportation
    s.bus_residents = r.read_u32()?;
    s.bus_tourists = r.read_u32()?;
    s.metro_residents = r.read_u32()?;
    s.metro_tourists = r.read_u32()?;
    s.train_residents = r.read_u32()?;
    s.train_tourists = r.read_u32()?;
    s.tram_residents = r.read_opt_u32()?;
    s.tram_tourists = r.read_opt_u32()?;
    s.ferry_residents = r.read_opt_u32()?;
    s.ferry_tourists = r.read_opt_u32()?;

    // Population
    s.population = r.read_u32()?;
    s.children = r.read_u32()?;
    s.teens = r.read_u32()?;
    s.young_adults = r.read_u32()?;
    s.adults = r.read_u32()?;
    s.seniors = r.read_u32()?;
    s.birth_rate = r.read_u32()?;
    s.death_rate = r.read_u32()?;

    // Households
    s.occupied_households = r.read_u32()?;
    s.available_households = r.read_u32()?;

    // Employment
    s.eligible_workers = r.read_u32()?;
    s.unemployed = r.read_u32()?;
    s.jobs_available = r.read_u32()?;
    s.jobs_filled = r.read_u32()?;

    // Outside Connections
    s.imports_goods = r.read_u32()?;
    s.imports_forestry = r.read_u32()?;
    s.imports_farming = r.read_u32()?;
    s.imports_ore = r.read_u32()?;
    s.imports_oil = r.read_u32()?;
    s.exports_goods = r.read_u32()?;
    s.exports_forestry = r.read_u32()?;
    s.exports_farming = r.read_u32()?;
    s.exports_ore = r.read_u32()?;
    s.exports_oil = r.read_u32()?;

    // Land Value
    s.average_land_value = r.read_u32()?;

    // Heating
    s.heating_consumption = r.read_opt_i32()?;
    s.heating_production = r.read_opt_i32()?;

    // Tourism
    s.city_attractiveness = r.read_u32()?;
    s.low_wealth_tourists = r.read_u32()?;
    s.medium_wealth_tourists = r.read_u32()?;
    s.high_wealth_tourists = r.read_u32()?;

    // Tax Rate
    s.residential_low_tax_rate = r.read_u8()?;
    s.residential_high_tax_rate = r.read_u8()?;
    s.commercial_low_tax_rate = r.read_u8()?;
    s.commercial_high_tax_rate = r.read_u8()?;
    s.industrial_tax_rate = r.read_u8()?;
    s.office_tax_rate = r.read_u8()?;

    // City Economy
    s.total_income = r.read_i64()?;
    s.total_expenses = r.read_i64()?;
    s.bank_balance = r.read_i64()?;
    s.loan_balance = r.read_i64()?;

    // Residential Income
    s.residential_low_income = r.read_i64()?;
    s.residential_high_income = r.read_i64()?;
    s.residential_low_eco_income = r.read_opt_i64()?;
    s.residential_high_eco_income = r.read_opt_i64()?;

    // Commercial Income
    s.commercial_low_income = r.read_i64()?;
    s.commercial_high_income = r.read_i64()?;
    s.commercial_leisure_income = r.read_opt_i64()?;
    s.commercial_tourism_income = r.read_opt_i64()?;
    s.commercial_eco_income = r.read_opt_i64()?;

    // Industrial Income
    s.industrial_generic_income = r.read_i64()?;
    s.industrial_forestry_income = r.read_i64()?;
    s.industrial_farming_income = r.read_i64()?;
    s.industrial_ore_income = r.read_i64()?;
    s.industrial_oil_income = r.read_i64()?;

    // Office Income
    s.office_generic_income = r.read_i64()?;
    s.office_it_cluster_income = r.read_opt_i64()?;

    // Service Expenses
    s.road_expenses = r.read_i64()?;
    s.electricity_expenses = r.read_i64()?;
    s.water_expenses = r.read_i64()?;
    s.garbage_expenses = r.read_i64()?;
    s.healthcare_expenses = r.read_i64()?;
    s.fire_expenses = r.read_i64()?;
    s.police_expenses = r.read_i64()?;
    s.education_expenses = r.read_i64()?;
    s.transport_expenses = r.read_i64()?;
    s.park_expenses = r.read_i64()?;
    s.policy_expenses = r.read_i64()?;
    s.loan_expenses = r.read_i64()?;

    // Park Areas
    s.park_areas = r.read_opt_u32()?;
    s.park_visitors = r.read_opt_u32()?;

    // Campus
    s.campus_students = r.read_opt_u32()?;
    s.campus_capacity = r.read_opt_u32()?;

    // Game Limits
    s.buildings_in_use = r.read_u32()?;
    s.buildings_capacity = r.read_u32()?;
    s.citizens_in_use = r.read_u32()?;
    s.citizens_capacity = r.read_u32()?;
    s.vehicles_in_use = r.read_u32()?;
    s.vehicles_capacity = r.read_u32()?;
    s.network_segments_in_use = r.read_u32()?;
    s.network_segments_capacity = r.read_u32()?;
    Ok(s)
}

/// Encodes a single snapshot record.
pub fn serialize_snapshot(s: &Snapshot) -> Vec<u8> {
    let mut w = SnapshotWriter::new();
    write_snapshot(&mut w, s);
    w.into_bytes()
}

/// Decodes a single snapshot record, rejecting trailing bytes.
pub fn deserialize_snapshot(bytes: &[u8], format_version: u32) -> Result<Snapshot, SaveError> {
    let mut r = SnapshotReader::new(bytes);
    let snapshot = read_snapshot(&mut r, format_version)?;
    if !r.is_empty() {
        return Err(SaveError::TrailingBytes(r.remaining()));
    }
    Ok(snapshot)
}
