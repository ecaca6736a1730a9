use std::fmt;

use plenilunio_engine::formatters::Escaped;

use crate::presentation::view_models::SeasonListViewModel;

/// Season controls, tagged by id for the selection script.
pub struct SeasonNavView<'a> {
    data: &'a SeasonListViewModel,
}

impl<'a> SeasonNavView<'a> {
    pub fn new(data: &'a SeasonListViewModel) -> Self {
        Self { data }
    }
}

impl fmt::Display for SeasonNavView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, r#"<nav class="grid grid-cols-2 md:grid-cols-4 gap-3">"#)?;
        for season in &self.data.seasons {
            writeln!(
                f,
                r#"  <button class="season-btn" data-season="{}" tabindex="0">{} <span class="text-xs">{}</span></button>"#,
                Escaped(season.id.as_str()),
                Escaped(&season.name),
                Escaped(&season.months)
            )?;
        }
        writeln!(f, "</nav>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::SeasonListEntry;
    use plenilunio_types::SeasonId;

    #[test]
    fn test_nav_buttons_carry_season_id() {
        let vm = SeasonListViewModel {
            seasons: vec![SeasonListEntry {
                id: SeasonId::from("4"),
                name: "Inicio de Vaciante".to_string(),
                months: "Jul".to_string(),
            }],
        };

        let out = SeasonNavView::new(&vm).to_string();

        assert!(out.contains(r#"data-season="4""#));
        assert!(out.contains("Inicio de Vaciante"));
    }
}
