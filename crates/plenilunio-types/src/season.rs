use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Season identifier.
///
/// The bundled catalog writes ids as strings (`"1"`) but hand-edited
/// catalogs often use bare integers. Both deserialize to the same id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SeasonId(String);

impl SeasonId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of the id, if it is one. Used for natural ordering.
    pub fn as_number(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl fmt::Display for SeasonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for SeasonId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for SeasonId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u64> for SeasonId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for SeasonId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SeasonIdVisitor;

        impl Visitor<'_> for SeasonIdVisitor {
            type Value = SeasonId;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a season id as string or integer")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<SeasonId, E> {
                Ok(SeasonId::from(v))
            }

            fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<SeasonId, E> {
                Ok(SeasonId(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<SeasonId, E> {
                Ok(SeasonId::from(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<SeasonId, E> {
                Ok(SeasonId(v.to_string()))
            }
        }

        deserializer.deserialize_any(SeasonIdVisitor)
    }
}

/// One seasonal period of the calendar, as authored in the static catalog.
///
/// Everything except `id` is optional on the wire; absent fields come back
/// empty and render as such.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonRecord {
    pub id: SeasonId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub months: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cosmovision: Cosmovision,
    #[serde(default)]
    pub climate: StaticClimate,
    #[serde(default)]
    pub practices: Vec<Practice>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cosmovision {
    #[serde(default)]
    pub spirit: String,
    #[serde(default)]
    pub biosemiotic_meaning: String,
    /// Order is meaningful and preserved on render.
    #[serde(default)]
    pub natural_signs: Vec<String>,
}

/// Descriptive climate text bundled with a season, shown when no live
/// reading is available.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StaticClimate {
    #[serde(default)]
    pub temperature: String,
    #[serde(default)]
    pub precipitation: String,
    #[serde(default)]
    pub humidity: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Practice {
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub biosemiotic_quote: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_id_accepts_string_and_integer() {
        let from_str: SeasonId = serde_json::from_str("\"3\"").unwrap();
        let from_int: SeasonId = serde_json::from_str("3").unwrap();
        assert_eq!(from_str, from_int);
        assert_eq!(from_int.as_number(), Some(3));
    }

    #[test]
    fn test_season_id_non_numeric() {
        let id = SeasonId::new("creciente");
        assert_eq!(id.as_number(), None);
        assert_eq!(id.to_string(), "creciente");
    }

    #[test]
    fn test_season_id_display_pads() {
        assert_eq!(format!("{:<4}|", SeasonId::from("3")), "3   |");
    }

    #[test]
    fn test_record_missing_optional_fields_default_to_empty() {
        let record: SeasonRecord = serde_json::from_str(r#"{"id": 7, "name": "Friaje"}"#).unwrap();
        assert_eq!(record.id.as_str(), "7");
        assert_eq!(record.name, "Friaje");
        assert!(record.months.is_empty());
        assert!(record.cosmovision.natural_signs.is_empty());
        assert!(record.climate.humidity.is_empty());
        assert!(record.practices.is_empty());
    }

    #[test]
    fn test_record_without_id_is_rejected() {
        let result: serde_json::Result<SeasonRecord> = serde_json::from_str(r#"{"name": "x"}"#);
        assert!(result.is_err());
    }
}
