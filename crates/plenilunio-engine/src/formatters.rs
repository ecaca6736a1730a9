use plenilunio_types::ReadingValue;
use std::fmt;

pub const LIVE_CLIMATE_HEADING: &str = "📡 Datos Climáticos en Tiempo Real";
pub const STATIC_CLIMATE_HEADING: &str = "Datos Climáticos";

/// `2` -> `2 mm hoy`
pub fn precipitation_today_label(value: &ReadingValue) -> String {
    format!("{} mm hoy", value)
}

/// Writes `text` with the five HTML-significant characters escaped.
pub struct Escaped<'a>(pub &'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut last = 0;
        for (i, c) in self.0.char_indices() {
            let replacement = match c {
                '&' => "&amp;",
                '<' => "&lt;",
                '>' => "&gt;",
                '"' => "&quot;",
                '\'' => "&#39;",
                _ => continue,
            };
            f.write_str(&self.0[last..i])?;
            f.write_str(replacement)?;
            last = i + c.len_utf8();
        }
        f.write_str(&self.0[last..])
    }
}
