use crate::view_models::{
    ClimateViewModel, CosmovisionViewModel, ErrorViewModel, PlaceholderViewModel,
    PracticeViewModel, SeasonViewModel,
};
use plenilunio_types::{LiveClimateReading, SeasonId, SeasonRecord};

/// Where the live readings are measured.
pub const LIVE_CLIMATE_LOCATION: &str = "Leticia, Amazonas - Colombia";

pub const PLACEHOLDER_MESSAGE: &str = "Despertando la API del Amazonas...";
pub const PLACEHOLDER_HINT: &str = "Puede tardar hasta 60 segundos en la primera carga";
pub const ERROR_TITLE: &str = "❌ Error al cargar el calendario";

/// Build the season panel. The live reading, when present, fully replaces the
/// record's static climate text; the two are never mixed.
pub fn present_season(
    record: &SeasonRecord,
    reading: Option<&LiveClimateReading>,
) -> SeasonViewModel {
    let climate = match reading {
        Some(reading) => ClimateViewModel::Live {
            location: LIVE_CLIMATE_LOCATION.to_string(),
            cycle: reading.cycle.clone(),
            temperature_range: reading.temperature_range.clone(),
            precipitation_today: reading.precipitation_today.clone(),
            humidity: reading.humidity.clone(),
        },
        None => ClimateViewModel::Static {
            temperature: record.climate.temperature.clone(),
            precipitation: record.climate.precipitation.clone(),
            humidity: record.climate.humidity.clone(),
        },
    };

    let practices = record
        .practices
        .iter()
        .map(|practice| PracticeViewModel {
            icon: practice.icon.clone(),
            name: practice.name.clone(),
            description: practice.description.clone(),
            quote: practice.biosemiotic_quote.clone(),
        })
        .collect();

    SeasonViewModel {
        id: record.id.clone(),
        name: record.name.clone(),
        months: record.months.clone(),
        description: record.description.clone(),
        cosmovision: CosmovisionViewModel {
            spirit: record.cosmovision.spirit.clone(),
            biosemiotic_meaning: record.cosmovision.biosemiotic_meaning.clone(),
        },
        natural_signs: record.cosmovision.natural_signs.clone(),
        climate,
        practices,
    }
}

pub fn present_placeholder(season_id: &SeasonId) -> PlaceholderViewModel {
    PlaceholderViewModel {
        season_id: season_id.clone(),
        message: PLACEHOLDER_MESSAGE.to_string(),
        hint: PLACEHOLDER_HINT.to_string(),
    }
}

pub fn present_error(detail: impl Into<String>) -> ErrorViewModel {
    ErrorViewModel {
        title: ERROR_TITLE.to_string(),
        detail: detail.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plenilunio_types::{Cosmovision, Practice, ReadingValue, StaticClimate};

    fn record() -> SeasonRecord {
        SeasonRecord {
            id: SeasonId::from("2"),
            name: "Aguas Altas".to_string(),
            months: "Feb–Mar".to_string(),
            description: "El río entra al bosque.".to_string(),
            cosmovision: Cosmovision {
                spirit: "Bufeo".to_string(),
                biosemiotic_meaning: "Fruto y pez conversan.".to_string(),
                natural_signs: vec!["b".to_string(), "a".to_string(), "c".to_string()],
            },
            climate: StaticClimate {
                temperature: "23–29°C".to_string(),
                precipitation: "Muy alta".to_string(),
                humidity: "90%".to_string(),
            },
            practices: vec![
                Practice {
                    icon: "🐟".to_string(),
                    name: "Pesca".to_string(),
                    description: "En el igapó.".to_string(),
                    biosemiotic_quote: "El árbol alimenta al pez.".to_string(),
                },
                Practice {
                    icon: "🐟".to_string(),
                    name: "Pesca".to_string(),
                    description: "En el igapó.".to_string(),
                    biosemiotic_quote: "El árbol alimenta al pez.".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_static_climate_without_reading() {
        let vm = present_season(&record(), None);
        assert_eq!(
            vm.climate,
            ClimateViewModel::Static {
                temperature: "23–29°C".to_string(),
                precipitation: "Muy alta".to_string(),
                humidity: "90%".to_string(),
            }
        );
    }

    #[test]
    fn test_live_climate_replaces_static() {
        let reading = LiveClimateReading {
            cycle: "Seca".to_string(),
            temperature_range: ReadingValue::from("24–31°C"),
            precipitation_today: ReadingValue::Number(2.0),
            humidity: ReadingValue::from("78%"),
            precipitation_avg: None,
        };
        let vm = present_season(&record(), Some(&reading));
        match vm.climate {
            ClimateViewModel::Live {
                location,
                cycle,
                precipitation_today,
                ..
            } => {
                assert_eq!(location, LIVE_CLIMATE_LOCATION);
                assert_eq!(cycle, "Seca");
                assert_eq!(precipitation_today, ReadingValue::Number(2.0));
            }
            other => panic!("expected live climate, got {:?}", other),
        }
    }

    #[test]
    fn test_order_and_duplicates_preserved() {
        let vm = present_season(&record(), None);
        assert_eq!(vm.natural_signs, vec!["b", "a", "c"]);
        assert_eq!(vm.practices.len(), 2);
        assert_eq!(vm.practices[0], vm.practices[1]);
    }

    #[test]
    fn test_error_keeps_detail() {
        let vm = present_error("HTTP error! status: 404");
        assert_eq!(vm.title, ERROR_TITLE);
        assert_eq!(vm.detail, "HTTP error! status: 404");
    }
}
