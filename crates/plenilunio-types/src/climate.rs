use crate::season::SeasonId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A display-ready value from the climate service. The service sends some
/// fields as preformatted text (`"24–31°C"`) and others as bare numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReadingValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for ReadingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // f64's Display already drops a trailing ".0"
            ReadingValue::Number(n) => write!(f, "{}", n),
            ReadingValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for ReadingValue {
    fn from(s: &str) -> Self {
        ReadingValue::Text(s.to_string())
    }
}

impl From<f64> for ReadingValue {
    fn from(n: f64) -> Self {
        ReadingValue::Number(n)
    }
}

/// Point-in-time climate snapshot for one selection. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveClimateReading {
    pub cycle: String,
    pub temperature_range: ReadingValue,
    pub precipitation_today: ReadingValue,
    pub humidity: ReadingValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precipitation_avg: Option<f64>,
}

/// Body of `GET /api/v1/climate/{season_id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClimateResponse {
    pub climate: LiveClimateReading,
    #[serde(default)]
    pub season_id: Option<SeasonId>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_value_number_display() {
        assert_eq!(ReadingValue::Number(2.0).to_string(), "2");
        assert_eq!(ReadingValue::Number(12.5).to_string(), "12.5");
        assert_eq!(ReadingValue::from("78%").to_string(), "78%");
    }

    #[test]
    fn test_climate_response_full_envelope() {
        let json = r#"{
            "season_id": 3,
            "location": "Leticia, Amazonas - Colombia",
            "date": "2025-03-14",
            "climate": {
                "cycle": "Seca",
                "precipitation_today": 2,
                "precipitation_avg": 1.75,
                "temperature_range": "24–31°C",
                "humidity": "78%"
            }
        }"#;
        let response: ClimateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.season_id, Some(SeasonId::from("3")));
        assert_eq!(response.date, NaiveDate::from_ymd_opt(2025, 3, 14));
        assert_eq!(response.climate.cycle, "Seca");
        assert_eq!(response.climate.precipitation_today, ReadingValue::Number(2.0));
        assert_eq!(response.climate.precipitation_avg, Some(1.75));
    }

    #[test]
    fn test_climate_response_minimal_envelope() {
        let json = r#"{"climate": {"cycle": "Transición ⛅", "temperature_range": "22-30°C",
            "precipitation_today": "4.2", "humidity": 81}}"#;
        let response: ClimateResponse = serde_json::from_str(json).unwrap();
        assert!(response.location.is_none());
        assert_eq!(response.climate.humidity.to_string(), "81");
        assert_eq!(response.climate.precipitation_today.to_string(), "4.2");
    }

    #[test]
    fn test_climate_response_without_climate_is_rejected() {
        let json = r#"{"season_id": 1, "location": "Leticia"}"#;
        assert!(serde_json::from_str::<ClimateResponse>(json).is_err());
    }
}
