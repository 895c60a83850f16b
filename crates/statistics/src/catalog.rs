//! Categories and statistics shown by the host UI.
//!
//! The catalog types are plain data; [`crate::registry::StatisticsRegistry`]
//! owns the one instance built at startup.

use bevy::color::Color;
use serde::{Deserialize, Serialize};

use crate::colors::{ColorTable, StatisticColor};

mod statistic_kind;

pub use statistic_kind::StatisticKind;

pub const UNITS_NONE: &str = "";
pub const UNITS_PERCENT: &str = "%";
pub const UNITS_MW: &str = "MW";
pub const UNITS_WATER: &str = "m³/wk";
pub const UNITS_AMOUNT: &str = "units";
pub const UNITS_LEVEL: &str = "level";
pub const UNITS_MONEY: &str = "₡";
pub const UNITS_MONEY_WEEKLY: &str = "₡/wk";
pub const UNITS_LAND_VALUE: &str = "₡/m²";

/// A named group of related statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CategoryKind {
    Electricity,
    Water,
    WaterTank,
    Sewage,
    Landfill,
    Garbage,
    Education,
    EducationLevel,
    Happiness,
    Healthcare,
    Deathcare,
    Zoning,
    ZoneLevel,
    ZoneBuildings,
    ZoneDemand,
    Traffic,
    Pollution,
    FireSafety,
    Crime,
    PublicTransportation,
    Population,
    Households,
    Employment,
    OutsideConnections,
    LandValue,
    Heating,
    Tourism,
    TaxRate,
    CityEconomy,
    ResidentialIncome,
    CommercialIncome,
    IndustrialIncome,
    OfficeIncome,
    ServiceExpenses,
    ParkAreas,
    Campus,
    GameLimits,
}

impl CategoryKind {
    pub const COUNT: usize = 37;

    pub const ALL: [CategoryKind; Self::COUNT] = [
        Self::Electricity,
        Self::Water,
        Self::WaterTank,
        Self::Sewage,
        Self::Landfill,
        Self::Garbage,
        Self::Education,
        Self::EducationLevel,
        Self::Happiness,
        Self::Healthcare,
        Self::Deathcare,
        Self::Zoning,
        Self::ZoneLevel,
        Self::ZoneBuildings,
        Self::ZoneDemand,
        Self::Traffic,
        Self::Pollution,
        Self::FireSafety,
        Self::Crime,
        Self::PublicTransportation,
        Self::Population,
        Self::Households,
        Self::Employment,
        Self::OutsideConnections,
        Self::LandValue,
        Self::Heating,
        Self::Tourism,
        Self::TaxRate,
        Self::CityEconomy,
        Self::ResidentialIncome,
        Self::CommercialIncome,
        Self::IndustrialIncome,
        Self::OfficeIncome,
        Self::ServiceExpenses,
        Self::ParkAreas,
        Self::Campus,
        Self::GameLimits,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Electricity => "Electricity",
            Self::Water => "Water",
            Self::WaterTank => "Water Tank",
            Self::Sewage => "Sewage",
            Self::Landfill => "Landfill",
            Self::Garbage => "Garbage",
            Self::Education => "Education",
            Self::EducationLevel => "Education Level",
            Self::Happiness => "Happiness",
            Self::Healthcare => "Healthcare",
            Self::Deathcare => "Deathcare",
            Self::Zoning => "Zoning",
            Self::ZoneLevel => "Zone Level",
            Self::ZoneBuildings => "Zone Buildings",
            Self::ZoneDemand => "Zone Demand",
            Self::Traffic => "Traffic",
            Self::Pollution => "Pollution",
            Self::FireSafety => "Fire Safety",
            Self::Crime => "Crime",
            Self::PublicTransportation => "Public Transportation",
            Self::Population => "Population",
            Self::Households => "Households",
            Self::Employment => "Employment",
            Self::OutsideConnections => "Outside Connections",
            Self::LandValue => "Land Value",
            Self::Heating => "Heating",
            Self::Tourism => "Tourism",
            Self::TaxRate => "Tax Rate",
            Self::CityEconomy => "City Economy",
            Self::ResidentialIncome => "Residential Income",
            Self::CommercialIncome => "Commercial Income",
            Self::IndustrialIncome => "Industrial Income",
            Self::OfficeIncome => "Office Income",
            Self::ServiceExpenses => "Service Expenses",
            Self::ParkAreas => "Park Areas",
            Self::Campus => "Campus",
            Self::GameLimits => "Game Limits",
        }
    }
}

/// Static description of a statistic, before it is placed in a category.
#[derive(Debug, Clone)]
pub struct StatisticSpec {
    pub kind: StatisticKind,
    pub name_part1: &'static str,
    pub name_part2: &'static str,
    pub units: &'static str,
    pub color: StatisticColor,
}

/// One selectable, colored statistic inside a category.
#[derive(Debug, Clone)]
pub struct Statistic {
    pub kind: StatisticKind,
    /// Owning category.
    pub category: CategoryKind,
    pub name_part1: &'static str,
    pub name_part2: &'static str,
    pub units: &'static str,
    pub color_source: StatisticColor,
    /// `color_source` resolved against the current color table.
    pub color: Color,
    pub selected: bool,
}

impl Statistic {
    pub fn new(spec: StatisticSpec, category: CategoryKind) -> Self {
        Self {
            kind: spec.kind,
            category,
            name_part1: spec.name_part1,
            name_part2: spec.name_part2,
            units: spec.units,
            color_source: spec.color,
            color: spec.color.resolve(&ColorTable::default()),
            selected: false,
        }
    }

    /// Returns true if the color changed.
    pub fn resolve_color(&mut self, colors: &ColorTable) -> bool {
        let color = self.color_source.resolve(colors);
        if color == self.color {
            return false;
        }
        self.color = color;
        true
    }

    /// Display label, e.g. `"Electricity Consumption (MW)"`. Empty parts are
    /// skipped.
    pub fn label(&self) -> String {
        let mut label = String::new();
        for part in [self.name_part1, self.name_part2] {
            if part.is_empty() {
                continue;
            }
            if !label.is_empty() {
                label.push(' ');
            }
            label.push_str(part);
        }
        if !self.units.is_empty() {
            if !label.is_empty() {
                label.push(' ');
            }
            label.push('(');
            label.push_str(self.units);
            label.push(')');
        }
        label
    }
}

#[derive(Debug, Clone)]
pub struct Category {
    pub kind: CategoryKind,
    pub name: &'static str,
    pub statistics: Vec<Statistic>,
    /// Whether the category is expanded in the UI tree.
    pub expanded: bool,
}

impl Category {
    pub fn new(kind: CategoryKind, specs: Vec<StatisticSpec>) -> Self {
        Self {
            kind,
            name: kind.display_name(),
            statistics: specs
                .into_iter()
                .map(|spec| Statistic::new(spec, kind))
                .collect(),
            expanded: false,
        }
    }

    pub fn selected_count(&self) -> usize {
        self.statistics.iter().filter(|s| s.selected).count()
    }
}
