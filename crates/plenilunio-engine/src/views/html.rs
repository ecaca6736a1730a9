use std::fmt;

use crate::formatters::{
    Escaped, LIVE_CLIMATE_HEADING, STATIC_CLIMATE_HEADING, precipitation_today_label,
};
use crate::view_models::{
    ClimateViewModel, ErrorViewModel, PlaceholderViewModel, PracticeViewModel, SeasonViewModel,
};

const SECTION_HEADING: &str = "text-xl font-semibold text-orange-400 uppercase tracking-wide mb-4 pb-2 border-b-2 border-orange-400/30";
const CARD_LABEL: &str = "text-xs font-semibold text-gray-300 uppercase tracking-wide mb-2";
const CARD_VALUE: &str = "text-lg font-medium text-amber-400";

// --------------------------------------------------------
// Season View (header + content)
// --------------------------------------------------------

/// Full season panel: the header slots followed by the content region.
pub struct SeasonView<'a> {
    data: &'a SeasonViewModel,
}

impl<'a> SeasonView<'a> {
    pub fn new(data: &'a SeasonViewModel) -> Self {
        Self { data }
    }
}

impl fmt::Display for SeasonView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, r#"<header data-season-id="{}">"#, Escaped(self.data.id.as_str()))?;
        writeln!(
            f,
            r#"  <h2 id="season-name">{}</h2>"#,
            Escaped(&self.data.name)
        )?;
        writeln!(
            f,
            r#"  <p id="season-months">{}</p>"#,
            Escaped(&self.data.months)
        )?;
        writeln!(f, "</header>")?;
        writeln!(f, r#"<div id="season-content">"#)?;
        write!(f, "{}", SeasonContentView::new(self.data))?;
        writeln!(f, "</div>")
    }
}

// --------------------------------------------------------
// Season Content View
// --------------------------------------------------------

/// Inner markup of the `season-content` region.
pub struct SeasonContentView<'a> {
    data: &'a SeasonViewModel,
}

impl<'a> SeasonContentView<'a> {
    pub fn new(data: &'a SeasonViewModel) -> Self {
        Self { data }
    }

    fn render_cosmovision(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, r#"<div class="mb-6">"#)?;
        writeln!(
            f,
            r#"  <h3 class="{}"><i class="fa-solid fa-spa"></i> Cosmovisión y Biosemiótica</h3>"#,
            SECTION_HEADING
        )?;
        writeln!(f, r#"  <div class="space-y-3">"#)?;
        writeln!(
            f,
            r#"    <p class="bg-slate-800/40 p-4 rounded-lg border-l-4 border-purple-400 text-gray-300"><strong class="text-purple-300">Espíritu:</strong> {}</p>"#,
            Escaped(&self.data.cosmovision.spirit)
        )?;
        writeln!(
            f,
            r#"    <p class="bg-slate-800/40 p-4 rounded-lg border-l-4 border-cyan-400 text-gray-300"><strong class="text-cyan-300">Biosemiótica:</strong> {}</p>"#,
            Escaped(&self.data.cosmovision.biosemiotic_meaning)
        )?;
        writeln!(f, "  </div>")?;
        writeln!(f, "</div>")
    }

    fn render_natural_signs(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, r#"<div class="mb-6">"#)?;
        writeln!(f, r#"  <h3 class="{}">Signos Naturales</h3>"#, SECTION_HEADING)?;
        writeln!(f, r#"  <ul class="space-y-2">"#)?;
        for sign in &self.data.natural_signs {
            writeln!(
                f,
                r#"    <li class="bg-slate-800/40 p-3 rounded-lg border-l-4 border-amber-400 text-gray-300">{}</li>"#,
                Escaped(sign)
            )?;
        }
        writeln!(f, "  </ul>")?;
        writeln!(f, "</div>")
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
                writeln!(f, r#"<div class="mb-6" data-climate="live">"#)?;
                writeln!(f, r#"  <h3 class="{}">{}</h3>"#, SECTION_HEADING, LIVE_CLIMATE_HEADING)?;
                writeln!(
                    f,
                    r#"  <div class="bg-blue-900/20 p-4 rounded-lg border border-cyan-400/30">"#
                )?;
                writeln!(f, r#"    <div class="mb-4">"#)?;
                writeln!(
                    f,
                    r#"      <p class="text-cyan-300 text-sm mb-2"><i class="fa-solid fa-earth-americas"></i> {}</p>"#,
                    Escaped(location)
                )?;
                writeln!(
                    f,
                    r#"      <p class="text-amber-400 text-lg font-semibold">{}</p>"#,
                    Escaped(cycle)
                )?;
                writeln!(f, "    </div>")?;
                writeln!(f, r#"    <div class="grid grid-cols-1 sm:grid-cols-3 gap-4">"#)?;
                write_card(f, "Temperatura", &temperature_range.to_string())?;
                write_card(f, "Lluvia", &precipitation_today_label(precipitation_today))?;
                write_card(f, "Humedad", &humidity.to_string())?;
                writeln!(f, "    </div>")?;
                writeln!(f, "  </div>")?;
                writeln!(f, "</div>")
            }
            ClimateViewModel::Static {
                temperature,
                precipitation,
                humidity,
            } => {
                writeln!(f, r#"<div class="mb-6" data-climate="static">"#)?;
                writeln!(f, r#"  <h3 class="{}">{}</h3>"#, SECTION_HEADING, STATIC_CLIMATE_HEADING)?;
                writeln!(f, r#"  <div class="grid grid-cols-1 sm:grid-cols-3 gap-4">"#)?;
                write_card(f, "Temperatura", temperature)?;
                write_card(f, "Lluvia", precipitation)?;
                write_card(f, "Humedad", humidity)?;
                writeln!(f, "  </div>")?;
                writeln!(f, "</div>")
            }
        }
    }

    fn render_practices(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "<div>")?;
        writeln!(f, r#"  <h3 class="{}">Prácticas Tradicionales</h3>"#, SECTION_HEADING)?;
        for practice in &self.data.practices {
            write!(f, "{}", PracticeView::new(practice))?;
        }
        writeln!(f, "</div>")
    }
}

impl fmt::Display for SeasonContentView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            r#"<p class="text-base md:text-lg leading-relaxed text-gray-100 italic text-justify mb-6">{}</p>"#,
            Escaped(&self.data.description)
        )?;
        self.render_cosmovision(f)?;
        self.render_natural_signs(f)?;
        self.render_climate(f)?;
        self.render_practices(f)
    }
}

fn write_card(f: &mut fmt::Formatter, label: &str, value: &str) -> fmt::Result {
    writeln!(
        f,
        r#"      <div class="bg-slate-800/60 p-4 rounded-lg border border-blue-900/30 text-center">"#
    )?;
    writeln!(f, r#"        <p class="{}">{}</p>"#, CARD_LABEL, label)?;
    writeln!(f, r#"        <p class="{}">{}</p>"#, CARD_VALUE, Escaped(value))?;
    writeln!(f, "      </div>")
}

// --------------------------------------------------------
// Practice View
// --------------------------------------------------------

pub struct PracticeView<'a> {
    data: &'a PracticeViewModel,
}

impl<'a> PracticeView<'a> {
    pub fn new(data: &'a PracticeViewModel) -> Self {
        Self { data }
    }
}

impl fmt::Display for PracticeView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            r#"  <div class="bg-amber-900/15 border border-amber-900/30 rounded-xl p-6 mb-4">"#
        )?;
        writeln!(f, r#"    <div class="flex items-center gap-4 mb-4">"#)?;
        writeln!(f, r#"      <span class="text-4xl">{}</span>"#, Escaped(&self.data.icon))?;
        writeln!(
            f,
            r#"      <h4 class="text-xl font-semibold text-amber-400 uppercase tracking-wide">{}</h4>"#,
            Escaped(&self.data.name)
        )?;
        writeln!(f, "    </div>")?;
        writeln!(
            f,
            r#"    <p class="leading-relaxed text-gray-300 mb-4 text-justify">{}</p>"#,
            Escaped(&self.data.description)
        )?;
        writeln!(
            f,
            r#"    <blockquote class="bg-amber-400/10 border-l-4 border-amber-400 p-4 rounded-r-lg italic text-gray-300">{}</blockquote>"#,
            Escaped(&self.data.quote)
        )?;
        writeln!(f, "  </div>")
    }
}

// --------------------------------------------------------
// Placeholder View
// --------------------------------------------------------

pub struct PlaceholderView<'a> {
    data: &'a PlaceholderViewModel,
}

impl<'a> PlaceholderView<'a> {
    pub fn new(data: &'a PlaceholderViewModel) -> Self {
        Self { data }
    }
}

impl fmt::Display for PlaceholderView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, r#"<div class="text-center text-amber-400 py-8">"#)?;
        writeln!(f, r#"  <i class="fa-solid fa-spinner fa-spin text-4xl mb-4"></i>"#)?;
        writeln!(f, r#"  <p class="text-lg">{}</p>"#, Escaped(&self.data.message))?;
        writeln!(
            f,
            r#"  <p class="text-sm text-gray-400 mt-2">{}</p>"#,
            Escaped(&self.data.hint)
        )?;
        writeln!(f, "</div>")
    }
}

// --------------------------------------------------------
// Error View
// --------------------------------------------------------

pub struct ErrorView<'a> {
    data: &'a ErrorViewModel,
}

impl<'a> ErrorView<'a> {
    pub fn new(data: &'a ErrorViewModel) -> Self {
        Self { data }
    }
}

impl fmt::Display for ErrorView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, r#"<div class="text-center text-red-400">"#)?;
        writeln!(f, r#"  <p class="text-xl mb-4">{}</p>"#, Escaped(&self.data.title))?;
        writeln!(f, r#"  <p class="text-sm">{}</p>"#, Escaped(&self.data.detail))?;
        writeln!(f, "</div>")
    }
}
