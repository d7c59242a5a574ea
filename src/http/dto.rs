//! Data Transfer Objects for the HTTP API.
//!
//! The birth request is accepted both as a JSON body (POST) and as
//! query parameters (GET); both deserialize into [`BirthRequest`] and
//! are validated into the domain [`BirthInfo`] type.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::models::{BirthInfo, ChartStyle, HouseSystem, Language};
use crate::services::KundaliChart;

use super::error::AppError;

/// Incoming birth data, as sent by the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BirthRequest {
    /// Person's name; used for the report header and filename.
    #[serde(default)]
    pub name: String,
    /// Birth date, `YYYY-MM-DD`.
    pub date: String,
    /// Birth time, `HH:MM` (24h, treated as UT).
    pub time: String,
    /// Geographic latitude in degrees.
    pub lat: f64,
    /// Geographic longitude in degrees.
    pub lon: f64,
    /// Output language (default: hi).
    #[serde(default)]
    pub lang: Language,
    /// Chart style (default: north).
    #[serde(default)]
    pub style: ChartStyle,
    /// House system code (default: P).
    #[serde(default)]
    pub hsys: HouseSystem,
}

impl BirthRequest {
    /// Validate the raw request into a domain `BirthInfo`.
    pub fn into_birth_info(self) -> Result<BirthInfo, AppError> {
        let date = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .map_err(|_| AppError::InvalidDate(self.date.clone()))?;
        let time = NaiveTime::parse_from_str(&self.time, "%H:%M")
            .map_err(|_| AppError::InvalidTime(self.time.clone()))?;
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(AppError::InvalidLatitude(self.lat));
        }
        if !(-180.0..=180.0).contains(&self.lon) {
            return Err(AppError::InvalidLongitude(self.lon));
        }
        Ok(BirthInfo {
            name: self.name,
            birth: NaiveDateTime::new(date, time),
            latitude: self.lat,
            longitude: self.lon,
            lang: self.lang,
            style: self.style,
            hsys: self.hsys,
        })
    }
}

/// Liveness response for `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LivenessResponse {
    /// Service name
    pub service: String,
    /// Status of the service
    pub status: String,
    /// Crate version
    pub version: String,
}

/// Ascendant summary in the kundali response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AscendantDto {
    /// Ecliptic longitude in degrees
    pub longitude: f64,
    /// Degrees into the occupied sign
    pub degree_in_sign: f64,
    /// Zodiac sign index in [1, 12]
    pub sign_index: u8,
}

/// One planet listed under a house.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HouseGrahaDto {
    /// Localized planet name
    pub name: String,
    /// Ecliptic longitude in degrees
    pub longitude: f64,
}

/// One mahadasha period entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashaDto {
    pub name: String,
    pub start: String,
    pub end: String,
}

/// Full kundali result returned by `GET|POST /kundali`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KundaliResponse {
    pub name: String,
    /// Birth instant, ISO 8601
    pub date_time: String,
    pub julian_day: f64,
    pub lang: Language,
    pub style: ChartStyle,
    pub hsys: HouseSystem,
    /// Localized planet name -> longitude in degrees
    pub graha_positions: BTreeMap<String, f64>,
    pub ascendant: AscendantDto,
    /// House number ("1".."12") -> planets occupying it
    pub houses: BTreeMap<u8, Vec<HouseGrahaDto>>,
    /// Static localized horoscope sentence
    pub rashifal: String,
    /// Placeholder mahadasha periods
    pub dasha: Vec<DashaDto>,
}

fn round4(v: f64) -> f64 {
    (v * 1e4).round() / 1e4
}

fn round6(v: f64) -> f64 {
    (v * 1e6).round() / 1e6
}

impl From<&KundaliChart> for KundaliResponse {
    fn from(chart: &KundaliChart) -> Self {
        let info = &chart.info;
        let lang = info.lang;

        let graha_positions = chart
            .positions
            .iter()
            .map(|p| (p.graha.localized_name(lang).to_string(), round6(p.longitude)))
            .collect();

        let houses = chart
            .house_table()
            .into_iter()
            .map(|(house, positions)| {
                let entries = positions
                    .into_iter()
                    .map(|p| HouseGrahaDto {
                        name: p.graha.localized_name(lang).to_string(),
                        longitude: round4(p.longitude),
                    })
                    .collect();
                (house, entries)
            })
            .collect();

        KundaliResponse {
            name: info.name.clone(),
            date_time: info.birth.format("%Y-%m-%dT%H:%M:%S").to_string(),
            julian_day: chart.julian_day.value(),
            lang,
            style: info.style,
            hsys: info.hsys,
            graha_positions,
            ascendant: AscendantDto {
                longitude: round6(chart.ascendant.longitude),
                degree_in_sign: round4(chart.ascendant.degree_in_sign()),
                sign_index: chart.ascendant.sign_index(),
            },
            houses,
            rashifal: lang.rashifal().to_string(),
            dasha: chart
                .dasha
                .iter()
                .map(|d| DashaDto {
                    name: d.name.clone(),
                    start: d.start.to_string(),
                    end: d.end.to_string(),
                })
                .collect(),
        }
    }
}
