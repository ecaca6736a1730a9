use plenilunio_types::*;

const CATALOG: &str = r#"[
  {
    "id": "1",
    "name": "Creciente",
    "months": "Jan–Feb",
    "description": "Los ríos comienzan a subir.",
    "cosmovision": {
      "spirit": "Yakumama",
      "biosemiotic_meaning": "El agua habla a los peces.",
      "natural_signs": ["Subida del río", "Canto del sapo", "Floración del aguaje"]
    },
    "climate": { "temperature": "24–30°C", "precipitation": "Alta", "humidity": "90%" },
    "practices": [
      { "icon": "🛶", "name": "Pesca", "description": "Redes en las cochas.", "biosemiotic_quote": "El río da." }
    ]
  },
  { "id": 2, "name": "Llena", "months": "Mar–Apr" }
]"#;

#[test]
fn test_catalog_indexes_all_records() {
    let catalog = SeasonCatalog::from_json_slice(CATALOG.as_bytes()).unwrap();
    assert_eq!(catalog.len(), 2);

    let first = catalog.get(&SeasonId::from("1")).unwrap();
    assert_eq!(first.months, "Jan–Feb");
    assert_eq!(
        first.cosmovision.natural_signs,
        vec!["Subida del río", "Canto del sapo", "Floración del aguaje"]
    );
    assert_eq!(first.practices[0].icon, "🛶");
}

#[test]
fn test_catalog_unknown_id() {
    let catalog = SeasonCatalog::from_json_slice(CATALOG.as_bytes()).unwrap();
    assert!(catalog.get(&SeasonId::from("99")).is_none());
}

#[test]
fn test_catalog_records_follow_id_order() {
    let catalog = SeasonCatalog::from_json_slice(CATALOG.as_bytes()).unwrap();
    let names: Vec<&str> = catalog.records().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Creciente", "Llena"]);
}

#[test]
fn test_malformed_catalog_reports_json_error() {
    let err = SeasonCatalog::from_json_slice(b"[{\"id\": 1,").unwrap_err();
    assert!(err.to_string().starts_with("JSON error:"));
}
