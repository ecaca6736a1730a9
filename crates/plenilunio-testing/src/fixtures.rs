//! Fixtures for sample data generation and placement.

use anyhow::Result;
use plenilunio_types::{LiveClimateReading, ReadingValue, SeasonCatalog, SeasonRecord};
use std::fs;
use std::path::{Path, PathBuf};

/// Three-season catalog. Season "1" carries the full set of fields; the
/// others are intentionally sparse.
pub const SAMPLE_CATALOG_JSON: &str = r#"[
  {
    "id": "1",
    "name": "Creciente",
    "months": "Jan–Feb",
    "description": "Los ríos comienzan a subir.",
    "cosmovision": {
      "spirit": "Yacumama",
      "biosemiotic_meaning": "El agua despierta.",
      "natural_signs": ["Floración del aguaje", "Canto del paujil"]
    },
    "climate": {
      "temperature": "22–30°C",
      "precipitation": "Alta",
      "humidity": "85%"
    },
    "practices": [
      {
        "icon": "🐟",
        "name": "Pesca",
        "description": "Pesca con anzuelo en las orillas.",
        "biosemiotic_quote": "El río habla."
      }
    ]
  },
  {
    "id": "2",
    "name": "Aguas Altas",
    "months": "Mar–May",
    "description": "El bosque se inunda.",
    "climate": {
      "temperature": "23–31°C",
      "precipitation": "Muy alta",
      "humidity": "90%"
    }
  },
  {
    "id": 3,
    "name": "Llena",
    "months": "May–Jun"
  }
]"#;

/// Parsed form of [`SAMPLE_CATALOG_JSON`].
pub fn sample_records() -> Vec<SeasonRecord> {
    serde_json::from_str(SAMPLE_CATALOG_JSON).expect("sample catalog is valid JSON")
}

pub fn sample_catalog() -> SeasonCatalog {
    SeasonCatalog::from_records(sample_records())
}

/// Reading as the climate service reports it during the dry cycle.
pub fn sample_reading() -> LiveClimateReading {
    LiveClimateReading {
        cycle: "Seca".to_string(),
        temperature_range: ReadingValue::from("24–31°C"),
        precipitation_today: ReadingValue::Number(2.0),
        humidity: ReadingValue::from("78%"),
        precipitation_avg: None,
    }
}

/// Reading with a distinguishable cycle name, for telling responses apart.
pub fn reading_with_cycle(cycle: &str) -> LiveClimateReading {
    LiveClimateReading {
        cycle: cycle.to_string(),
        ..sample_reading()
    }
}

/// Full `/api/v1/climate/{id}` response body for [`sample_reading`].
pub fn sample_climate_body(season_id: &str) -> String {
    serde_json::json!({
        "season_id": season_id,
        "location": "Leticia, Amazonas - Colombia",
        "date": "2025-03-14",
        "climate": sample_reading(),
    })
    .to_string()
}

/// Write [`SAMPLE_CATALOG_JSON`] into `dir` and return its path.
pub fn write_catalog(dir: &Path) -> Result<PathBuf> {
    write_catalog_as(dir, "seasons.json", SAMPLE_CATALOG_JSON)
}

pub fn write_catalog_as(dir: &Path, name: &str, contents: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(name);
    fs::write(&path, contents)?;
    Ok(path)
}
