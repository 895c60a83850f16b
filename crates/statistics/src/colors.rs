//! Display colors for statistics.
//!
//! Zone-related statistics reuse the engine's zone colors so the graphs match
//! the in-game info views. Everything else cycles through a fixed palette.

use bevy::prelude::*;

use crate::host::ZoneKind;

/// The engine's zone color table.
///
/// The host inserts this resource and flips `ready` once the engine has loaded
/// its info-view colors. The registry refuses to build before that.
#[derive(Resource, Debug, Clone)]
pub struct ColorTable {
    pub ready: bool,
    pub residential: Color,
    pub commercial: Color,
    pub industrial: Color,
    pub office: Color,
}

impl Default for ColorTable {
    fn default() -> Self {
        Self {
            ready: false,
            residential: Color::srgb_u8(0x4A, 0xB0, 0x3B),
            commercial: Color::srgb_u8(0x3F, 0x7F, 0xD8),
            industrial: Color::srgb_u8(0xE6, 0xC4, 0x2E),
            office: Color::srgb_u8(0x2E, 0xC4, 0xC4),
        }
    }
}

impl ColorTable {
    /// Default zone colors, already marked ready.
    pub fn loaded() -> Self {
        Self {
            ready: true,
            ..Default::default()
        }
    }

    pub fn zone(&self, zone: ZoneKind) -> Color {
        match zone {
            ZoneKind::Residential => self.residential,
            ZoneKind::Commercial => self.commercial,
            ZoneKind::Industrial => self.industrial,
            ZoneKind::Office => self.office,
        }
    }
}

/// Where a statistic's series color comes from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatisticColor {
    Fixed(Color),
    /// A slot of the engine color table, looked up on every refresh.
    Engine(ZoneKind),
}

impl StatisticColor {
    pub fn resolve(self, colors: &ColorTable) -> Color {
        match self {
            StatisticColor::Fixed(color) => color,
            StatisticColor::Engine(zone) => colors.zone(zone),
        }
    }
}

const PALETTE: [(u8, u8, u8); 12] = [
    (0xE5, 0x39, 0x35),
    (0x1E, 0x88, 0xE5),
    (0x43, 0xA0, 0x47),
    (0xFB, 0x8C, 0x00),
    (0x8E, 0x24, 0xAA),
    (0x00, 0xAC, 0xC1),
    (0xC0, 0xCA, 0x33),
    (0xD8, 0x1B, 0x60),
    (0x6D, 0x4C, 0x41),
    (0x54, 0x6E, 0x7A),
    (0xFD, 0xD8, 0x35),
    (0x39, 0x49, 0xAB),
];

/// Palette entry `index`, wrapping around.
pub fn fixed(index: usize) -> StatisticColor {
    let (r, g, b) = PALETTE[index % PALETTE.len()];
    StatisticColor::Fixed(Color::srgb_u8(r, g, b))
}

pub fn engine(zone: ZoneKind) -> StatisticColor {
    StatisticColor::Engine(zone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_not_ready() {
        assert!(!ColorTable::default().ready);
        assert!(ColorTable::loaded().ready);
    }

    #[test]
    fn test_fixed_wraps() {
        assert_eq!(fixed(0), fixed(PALETTE.len()));
        assert_ne!(fixed(0), fixed(1));
    }

    #[test]
    fn test_engine_color_follows_table() {
        let mut colors = ColorTable::loaded();
        let office = engine(ZoneKind::Office);
        assert_eq!(office.resolve(&colors), colors.office);

        colors.office = Color::srgb(0.1, 0.2, 0.3);
        assert_eq!(office.resolve(&colors), Color::srgb(0.1, 0.2, 0.3));
        assert_eq!(fixed(3).resolve(&colors), fixed(3).resolve(&ColorTable::default()));
    }
}
