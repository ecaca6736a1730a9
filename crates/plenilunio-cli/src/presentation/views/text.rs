use std::fmt;

use owo_colors::OwoColorize;
use plenilunio_engine::formatters::{
    LIVE_CLIMATE_HEADING, STATIC_CLIMATE_HEADING, precipitation_today_label,
};
use plenilunio_engine::{ClimateViewModel, ErrorViewModel, PlaceholderViewModel, SeasonViewModel};
use plenilunio_types::SeasonId;

use crate::presentation::view_models::SeasonListViewModel;

fn write_heading(f: &mut fmt::Formatter, text: &str, enable_color: bool) -> fmt::Result {
    if enable_color {
        writeln!(f, "{}", text.bold().yellow())
    } else {
        writeln!(f, "{}", text)
    }
}

fn write_field(f: &mut fmt::Formatter, label: &str, value: &str, enable_color: bool) -> fmt::Result {
    if enable_color {
        writeln!(f, "  {} {}", format!("{}:", label).dimmed(), value)
    } else {
        writeln!(f, "  {}: {}", label, value)
    }
}

// --------------------------------------------------------
// Season Text View
// --------------------------------------------------------

pub struct SeasonTextView<'a> {
    data: &'a SeasonViewModel,
    enable_color: bool,
}

impl<'a> SeasonTextView<'a> {
    pub fn new(data: &'a SeasonViewModel, enable_color: bool) -> Self {
        Self { data, enable_color }
    }

    fn render_header(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.enable_color {
            writeln!(f, "{}  {}", self.data.name.bold().green(), self.data.months.cyan())?;
        } else {
            writeln!(f, "{}  {}", self.data.name, self.data.months)?;
        }
        writeln!(f, "{}", "-".repeat(60))?;
        if !self.data.description.is_empty() {
            writeln!(f, "{}", self.data.description)?;
        }
        writeln!(f)
    }

    fn render_cosmovision(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_heading(f, "Cosmovisión y Biosemiótica", self.enable_color)?;
        write_field(f, "Espíritu", &self.data.cosmovision.spirit, self.enable_color)?;
        write_field(
            f,
            "Biosemiótica",
            &self.data.cosmovision.biosemiotic_meaning,
            self.enable_color,
        )?;
        writeln!(f)?;

        write_heading(f, "Signos Naturales", self.enable_color)?;
        for (i, sign) in self.data.natural_signs.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, sign)?;
        }
        writeln!(f)
    }

    fn render_climate(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.data.climate {
            ClimateViewModel::Live {
                location,
                cycle,
                temperature_range,
                precipitation_today,
                humidity,
            } => {
                write_heading(f, LIVE_CLIMATE_HEADING, self.enable_color)?;
                writeln!(f, "  {}", location)?;
                write_field(f, "Ciclo", cycle, self.enable_color)?;
                write_field(f, "Temperatura", &temperature_range.to_string(), self.enable_color)?;
                write_field(
                    f,
                    "Lluvia",
                    &precipitation_today_label(precipitation_today),
                    self.enable_color,
                )?;
                write_field(f, "Humedad", &humidity.to_string(), self.enable_color)?;
            }
            ClimateViewModel::Static {
                temperature,
                precipitation,
                humidity,
            } => {
                write_heading(f, STATIC_CLIMATE_HEADING, self.enable_color)?;
                write_field(f, "Temperatura", temperature, self.enable_color)?;
                write_field(f, "Lluvia", precipitation, self.enable_color)?;
                write_field(f, "Humedad", humidity, self.enable_color)?;
            }
        }
        writeln!(f)
    }

    fn render_practices(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_heading(f, "Prácticas Tradicionales", self.enable_color)?;
        for practice in &self.data.practices {
            writeln!(f, "  {} {}", practice.icon, practice.name)?;
            writeln!(f, "     {}", practice.description)?;
            if self.enable_color {
                writeln!(f, "     {}", format!("\"{}\"", practice.quote).italic())?;
            } else {
                writeln!(f, "     \"{}\"", practice.quote)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for SeasonTextView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.render_header(f)?;
        self.render_cosmovision(f)?;
        self.render_climate(f)?;
        self.render_practices(f)
    }
}

// --------------------------------------------------------
// Placeholder / Error Views
// --------------------------------------------------------

pub struct PlaceholderTextView<'a> {
    data: &'a PlaceholderViewModel,
}

impl<'a> PlaceholderTextView<'a> {
    pub fn new(data: &'a PlaceholderViewModel) -> Self {
        Self { data }
    }
}

impl fmt::Display for PlaceholderTextView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "⏳ {}", self.data.message)?;
        writeln!(f, "   {}", self.data.hint)
    }
}

pub struct ErrorTextView<'a> {
    data: &'a ErrorViewModel,
    enable_color: bool,
}

impl<'a> ErrorTextView<'a> {
    pub fn new(data: &'a ErrorViewModel, enable_color: bool) -> Self {
        Self { data, enable_color }
    }
}

impl fmt::Display for ErrorTextView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.enable_color {
            writeln!(f, "{}", self.data.title.red().bold())?;
        } else {
            writeln!(f, "{}", self.data.title)?;
        }
        writeln!(f, "{}", self.data.detail)
    }
}

// --------------------------------------------------------
// Controls Bar View
// --------------------------------------------------------

/// One row of season controls, the selected one bracketed.
pub struct ControlsBarView<'a> {
    controls: &'a [SeasonId],
    selected: Option<&'a SeasonId>,
    enable_color: bool,
}

impl<'a> ControlsBarView<'a> {
    pub fn new(controls: &'a [SeasonId], selected: Option<&'a SeasonId>, enable_color: bool) -> Self {
        Self {
            controls,
            selected,
            enable_color,
        }
    }
}

impl fmt::Display for ControlsBarView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, control) in self.controls.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            if Some(control) == self.selected {
                if self.enable_color {
                    write!(f, "{}", format!("[{}]", control).reversed())?;
                } else {
                    write!(f, "[{}]", control)?;
                }
            } else {
                write!(f, " {} ", control)?;
            }
        }
        writeln!(f)
    }
}

// --------------------------------------------------------
// Season List View
// --------------------------------------------------------

pub struct SeasonListView<'a> {
    data: &'a SeasonListViewModel,
}

impl<'a> SeasonListView<'a> {
    pub fn new(data: &'a SeasonListViewModel) -> Self {
        Self { data }
    }
}

impl fmt::Display for SeasonListView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.seasons.is_empty() {
            return writeln!(f, "No seasons in catalog.");
        }

        writeln!(f, "{:<4} {:<24} MONTHS", "ID", "NAME")?;
        writeln!(f, "{}", "-".repeat(60))?;
        for season in &self.data.seasons {
            writeln!(f, "{:<4} {:<24} {}", season.id, season.name, season.months)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plenilunio_engine::{CosmovisionViewModel, PracticeViewModel};
    use plenilunio_types::ReadingValue;

    fn season(climate: ClimateViewModel) -> SeasonViewModel {
        SeasonViewModel {
            id: SeasonId::from("3"),
            name: "Llena".to_string(),
            months: "May–Jun".to_string(),
            description: "El bosque está inundado.".to_string(),
            cosmovision: CosmovisionViewModel {
                spirit: "Yacumama".to_string(),
                biosemiotic_meaning: "El agua lo cubre todo.".to_string(),
            },
            natural_signs: vec!["Peces en el bosque".to_string(), "Aves migran".to_string()],
            climate,
            practices: vec![PracticeViewModel {
                icon: "🛶".to_string(),
                name: "Navegación".to_string(),
                description: "Canoas entre los árboles.".to_string(),
                quote: "El río entra al bosque.".to_string(),
            }],
        }
    }

    #[test]
    fn test_live_climate_text() {
        let vm = season(ClimateViewModel::Live {
            location: "Leticia, Amazonas - Colombia".to_string(),
            cycle: "Seca".to_string(),
            temperature_range: ReadingValue::from("24–31°C"),
            precipitation_today: ReadingValue::Number(2.0),
            humidity: ReadingValue::from("78%"),
        });

        let out = SeasonTextView::new(&vm, false).to_string();

        assert!(out.starts_with("Llena  May–Jun\n"));
        assert!(out.contains(LIVE_CLIMATE_HEADING));
        assert!(out.contains("  Lluvia: 2 mm hoy\n"));
        assert!(out.contains("  1. Peces en el bosque\n  2. Aves migran\n"));
        assert!(out.contains("\"El río entra al bosque.\""));
    }

    #[test]
    fn test_static_climate_text() {
        let vm = season(ClimateViewModel::Static {
            temperature: "23–31°C".to_string(),
            precipitation: "Alta".to_string(),
            humidity: "85%".to_string(),
        });

        let out = SeasonTextView::new(&vm, false).to_string();

        assert!(out.contains(&format!("{}\n", STATIC_CLIMATE_HEADING)));
        assert!(!out.contains(LIVE_CLIMATE_HEADING));
        assert!(out.contains("  Lluvia: Alta\n"));
    }

    #[test]
    fn test_controls_bar_marks_selected() {
        let controls = vec![SeasonId::from("1"), SeasonId::from("2"), SeasonId::from("3")];
        let selected = SeasonId::from("2");

        let out = ControlsBarView::new(&controls, Some(&selected), false).to_string();

        assert_eq!(out, " 1  [2]  3 \n");
    }
}
