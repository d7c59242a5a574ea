//! Domain model types: grahas, request enumerations, and time values.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub mod graha;
pub mod time;

pub use graha::Graha;
pub use time::JulianDay;

/// Output language for localized planet names and the rashifal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Hindi
    #[default]
    Hi,
    /// Marathi
    Mr,
    /// English
    En,
}

const RASHIFAL_HI: &str = "यह एक डेमो राशिफल है।";
const RASHIFAL_MR: &str = "हा एक डेमो राशिभविष्य आहे.";
const RASHIFAL_EN: &str = "This is a demo horoscope.";

impl Language {
    /// Two-letter language code as used in requests and responses.
    pub fn code(self) -> &'static str {
        match self {
            Language::Hi => "hi",
            Language::Mr => "mr",
            Language::En => "en",
        }
    }

    /// The static demo rashifal sentence for this language.
    pub fn rashifal(self) -> &'static str {
        match self {
            Language::Hi => RASHIFAL_HI,
            Language::Mr => RASHIFAL_MR,
            Language::En => RASHIFAL_EN,
        }
    }
}

/// Chart rendering topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChartStyle {
    /// North Indian diamond layout.
    #[default]
    North,
    /// South Indian 4x3 grid layout.
    South,
}

impl ChartStyle {
    /// Lowercase style code as used in requests and responses.
    pub fn code(self) -> &'static str {
        match self {
            ChartStyle::North => "north",
            ChartStyle::South => "south",
        }
    }
}

/// House system code accepted in requests.
///
/// The code is validated and echoed back; house bucketing is always
/// equal 30-degree sectors from the ascendant, and the ascendant itself
/// does not depend on the house system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum HouseSystem {
    #[default]
    #[serde(rename = "P")]
    Placidus,
    #[serde(rename = "K")]
    Koch,
    #[serde(rename = "E")]
    Equal,
    #[serde(rename = "W")]
    WholeSign,
}

impl HouseSystem {
    /// Single-letter code for display.
    pub fn code(self) -> char {
        match self {
            HouseSystem::Placidus => 'P',
            HouseSystem::Koch => 'K',
            HouseSystem::Equal => 'E',
            HouseSystem::WholeSign => 'W',
        }
    }
}

/// Validated birth data for one kundali computation.
///
/// Produced from the HTTP request DTO; the instant is interpreted as UT.
#[derive(Debug, Clone)]
pub struct BirthInfo {
    pub name: String,
    pub birth: NaiveDateTime,
    /// Geographic latitude in degrees, north positive.
    pub latitude: f64,
    /// Geographic longitude in degrees, east positive.
    pub longitude: f64,
    pub lang: Language,
    pub style: ChartStyle,
    pub hsys: HouseSystem,
}

impl BirthInfo {
    /// Julian Day of the birth instant.
    pub fn julian_day(&self) -> JulianDay {
        JulianDay::from_datetime(self.birth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes_round_trip() {
        for (lang, code) in [
            (Language::Hi, "\"hi\""),
            (Language::Mr, "\"mr\""),
            (Language::En, "\"en\""),
        ] {
            assert_eq!(serde_json::to_string(&lang).unwrap(), code);
            let back: Language = serde_json::from_str(code).unwrap();
            assert_eq!(back, lang);
        }
    }

    #[test]
    fn test_language_default_is_hindi() {
        assert_eq!(Language::default(), Language::Hi);
    }

    #[test]
    fn test_unknown_language_rejected() {
        assert!(serde_json::from_str::<Language>("\"fr\"").is_err());
    }

    #[test]
    fn test_chart_style_codes() {
        assert_eq!(serde_json::to_string(&ChartStyle::North).unwrap(), "\"north\"");
        let back: ChartStyle = serde_json::from_str("\"south\"").unwrap();
        assert_eq!(back, ChartStyle::South);
    }

    #[test]
    fn test_house_system_codes() {
        assert_eq!(serde_json::to_string(&HouseSystem::Placidus).unwrap(), "\"P\"");
        let back: HouseSystem = serde_json::from_str("\"W\"").unwrap();
        assert_eq!(back, HouseSystem::WholeSign);
        assert_eq!(HouseSystem::default().code(), 'P');
    }

    #[test]
    fn test_rashifal_per_language() {
        assert_eq!(Language::En.rashifal(), "This is a demo horoscope.");
        assert_ne!(Language::Hi.rashifal(), Language::Mr.rashifal());
    }
}
