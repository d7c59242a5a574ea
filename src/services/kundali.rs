//! Kundali assembly.
//!
//! Orchestrates the ephemeris backend and house bucketing into a single
//! computed chart that both the JSON and PDF endpoints consume.

use std::collections::BTreeMap;

use crate::ephemeris::Ephemeris;
use crate::models::{BirthInfo, Graha, JulianDay, Language};

use super::houses::house_number;

/// One graha with its computed ecliptic longitude in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrahaPosition {
    pub graha: Graha,
    pub longitude: f64,
}

/// Ascendant longitude with its derived sign placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ascendant {
    /// Ecliptic longitude in degrees, [0, 360).
    pub longitude: f64,
}

impl Ascendant {
    /// Zodiac sign index in [1, 12].
    pub fn sign_index(&self) -> u8 {
        (self.longitude / 30.0).floor() as u8 + 1
    }

    /// Degrees into the occupied sign, [0, 30).
    pub fn degree_in_sign(&self) -> f64 {
        self.longitude % 30.0
    }
}

/// A placeholder mahadasha period. Real dasha computation is out of
/// scope; the service ships a static two-entry demo table.
#[derive(Debug, Clone, PartialEq)]
pub struct DashaPeriod {
    pub name: String,
    pub start: &'static str,
    pub end: &'static str,
}

/// Fully computed chart for one birth request.
#[derive(Debug, Clone)]
pub struct KundaliChart {
    pub info: BirthInfo,
    pub julian_day: JulianDay,
    /// Nine graha positions in traditional order.
    pub positions: [GrahaPosition; 9],
    pub ascendant: Ascendant,
    pub dasha: [DashaPeriod; 2],
}

impl KundaliChart {
    /// House number occupied by the given position.
    pub fn house_of(&self, position: &GrahaPosition) -> u8 {
        house_number(position.longitude, self.ascendant.longitude)
    }

    /// Planets bucketed per house. Every house 1..=12 is present, empty
    /// houses map to an empty list.
    pub fn house_table(&self) -> BTreeMap<u8, Vec<GrahaPosition>> {
        let mut houses: BTreeMap<u8, Vec<GrahaPosition>> =
            (1..=12).map(|h| (h, Vec::new())).collect();
        for position in &self.positions {
            houses
                .entry(self.house_of(position))
                .or_default()
                .push(*position);
        }
        houses
    }
}

/// Compute the full kundali chart for a validated birth request.
pub fn compute_kundali(ephemeris: &dyn Ephemeris, info: BirthInfo) -> KundaliChart {
    let julian_day = info.julian_day();
    let longitudes = ephemeris.graha_longitudes(julian_day);

    let positions = Graha::ALL.map(|graha| GrahaPosition {
        graha,
        longitude: longitudes.get(graha),
    });

    let ascendant = Ascendant {
        longitude: ephemeris.ascendant(julian_day, info.latitude, info.longitude),
    };

    let dasha = mahadasha_placeholder(info.lang);

    KundaliChart {
        info,
        julian_day,
        positions,
        ascendant,
        dasha,
    }
}

/// Static two-entry mahadasha demo table with localized planet names.
fn mahadasha_placeholder(lang: Language) -> [DashaPeriod; 2] {
    [
        DashaPeriod {
            name: format!("Mahadasha - {}", Graha::Sun.localized_name(lang)),
            start: "2025-01-01",
            end: "2031-01-01",
        },
        DashaPeriod {
            name: format!("Mahadasha - {}", Graha::Moon.localized_name(lang)),
            start: "2031-01-01",
            end: "2041-01-01",
        },
    ]
}
