//! Ephemeris adapter.
//!
//! Thin wrapper over the `astro` ephemeris library exposing exactly what
//! the kundali service needs: geocentric ecliptic longitudes for the
//! nine grahas and the ecliptic longitude of the ascendant. All angles
//! cross this boundary in degrees, normalized to [0, 360).
//!
//! Longitudes are tropical; no ayanamsa is applied.

use astro::{angle, ecliptic, lunar, planet, sun};

use crate::models::{Graha, JulianDay};

/// Computation backend for planetary longitudes and the ascendant.
///
/// Handlers hold this behind `Arc<dyn Ephemeris>` so tests can swap in
/// a fixed-output backend.
pub trait Ephemeris: Send + Sync {
    /// Geocentric ecliptic longitudes in degrees for all nine grahas.
    fn graha_longitudes(&self, jd: JulianDay) -> GrahaPositions;

    /// Ecliptic longitude of the ascendant in degrees, for an observer
    /// at the given geographic latitude/longitude (degrees, east positive).
    fn ascendant(&self, jd: JulianDay, latitude: f64, longitude: f64) -> f64;
}

/// Longitudes for the nine grahas, indexed in [`Graha::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrahaPositions {
    longitudes: [f64; 9],
}

impl GrahaPositions {
    /// Build from a longitude array in [`Graha::ALL`] order.
    pub fn new(longitudes: [f64; 9]) -> Self {
        Self { longitudes }
    }

    /// Longitude in degrees for one graha.
    pub fn get(&self, graha: Graha) -> f64 {
        self.longitudes[graha as usize]
    }

    /// Iterate grahas with their longitudes, in traditional order.
    pub fn iter(&self) -> impl Iterator<Item = (Graha, f64)> + '_ {
        Graha::ALL.iter().map(move |&g| (g, self.get(g)))
    }
}

/// Production ephemeris backed by the `astro` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct AstroEphemeris;

impl AstroEphemeris {
    /// Geocentric ecliptic longitude of a planet, from heliocentric
    /// coordinates of the planet and of the Earth.
    fn planet_geocent_long(body: &planet::Planet, jd: f64) -> f64 {
        let (l, b, r) = planet::heliocent_coords(body, jd);
        let (l0, b0, r0) = planet::heliocent_coords(&planet::Planet::Earth, jd);

        let x = r * b.cos() * l.cos() - r0 * b0.cos() * l0.cos();
        let y = r * b.cos() * l.sin() - r0 * b0.cos() * l0.sin();

        angle::limit_to_360(y.atan2(x).to_degrees())
    }
}

impl Ephemeris for AstroEphemeris {
    fn graha_longitudes(&self, jd: JulianDay) -> GrahaPositions {
        let jd_val = jd.value();

        let (sun_pos, _) = sun::geocent_ecl_pos(jd_val);
        let (moon_pos, _) = lunar::geocent_ecl_pos(jd_val);

        // Rahu is the mean ascending node of the lunar orbit; Ketu is
        // the descending node, exactly opposite.
        let rahu = mean_lunar_node(jd.julian_cent());
        let ketu = angle::limit_to_360(rahu + 180.0);

        GrahaPositions::new([
            angle::limit_to_360(sun_pos.long.to_degrees()),
            angle::limit_to_360(moon_pos.long.to_degrees()),
            Self::planet_geocent_long(&planet::Planet::Mars, jd_val),
            Self::planet_geocent_long(&planet::Planet::Mercury, jd_val),
            Self::planet_geocent_long(&planet::Planet::Jupiter, jd_val),
            Self::planet_geocent_long(&planet::Planet::Venus, jd_val),
            Self::planet_geocent_long(&planet::Planet::Saturn, jd_val),
            rahu,
            ketu,
        ])
    }

    fn ascendant(&self, jd: JulianDay, latitude: f64, longitude: f64) -> f64 {
        // Local sidereal time = Greenwich mean sidereal time + east longitude.
        let theta = astro::time::mn_sidr(jd.value()) + longitude.to_radians();
        let eps = ecliptic::mn_oblq_IAU(jd.value());
        let phi = latitude.to_radians();

        // Ecliptic longitude rising on the eastern horizon (Meeus eq. 33.4):
        // tan(asc) = -cos(theta) / (sin(theta) cos(eps) + tan(phi) sin(eps))
        let asc = (-theta.cos()).atan2(theta.sin() * eps.cos() + phi.tan() * eps.sin());

        angle::limit_to_360(asc.to_degrees())
    }
}

/// Mean ascending node of the lunar orbit in degrees (Meeus, eq. 47.7),
/// from Julian centuries since J2000.0.
fn mean_lunar_node(jc: f64) -> f64 {
    angle::limit_to_360(
        125.044_547_9 - 1_934.136_289_1 * jc + 0.002_075_4 * jc * jc
            + jc.powi(3) / 467_441.0
            - jc.powi(4) / 60_616_000.0,
    )
}
