use super::view_models::{SeasonListEntry, SeasonListViewModel};
use plenilunio_types::SeasonCatalog;

/// Catalog entries in id order.
pub fn present_season_list(catalog: &SeasonCatalog) -> SeasonListViewModel {
    let seasons = catalog
        .records()
        .into_iter()
        .map(|record| SeasonListEntry {
            id: record.id.clone(),
            name: record.name.clone(),
            months: record.months.clone(),
        })
        .collect();

    SeasonListViewModel { seasons }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_follows_catalog_order() {
        let catalog = SeasonCatalog::from_json_slice(
            br#"[{"id": "10", "name": "Diez"}, {"id": 2, "name": "Dos", "months": "Feb"}]"#,
        )
        .unwrap();

        let vm = present_season_list(&catalog);

        let names: Vec<&str> = vm.seasons.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Dos", "Diez"]);
        assert_eq!(vm.seasons[0].months, "Feb");
    }
}
