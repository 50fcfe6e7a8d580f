//! Text helpers shared by the API client and the view

use crate::state::Unit;

const ICON_URL_BASE: &str = "https://openweathermap.org/img/wn";

/// Uppercase the first character of every space-separated word.
///
/// Splits on single spaces only, so runs of spaces survive as empty words
/// and punctuation is left alone: `"light rain"` becomes `"Light Rain"`,
/// `"N/A"` stays `"N/A"`.
pub fn title_case(text: &str) -> String {
    text.split(' ')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Large icon URL for an OpenWeather icon code
pub fn icon_url(icon_code: &str) -> String {
    format!("{ICON_URL_BASE}/{icon_code}@4x.png")
}

/// Temperature exactly as received, followed by the unit suffix.
pub fn format_temperature(value: f64, unit: Unit) -> String {
    format!("{}{}", value, unit.suffix())
}

/// Label for the unit toggle, naming the unit it switches to
pub fn toggle_label(current: Unit) -> String {
    format!("Switch to {}", current.toggle().suffix())
}

/// Convert to Celsius for colour selection
pub fn to_celsius(value: f64, unit: Unit) -> f64 {
    match unit {
        Unit::Metric => value,
        Unit::Imperial => (value - 32.0) * 5.0 / 9.0,
    }
}

/// Terminal glyph for an OpenWeather icon code (`01d`, `10n`, ...)
pub fn condition_glyph(icon_code: &str) -> &'static str {
    match icon_code.get(..2) {
        Some("01") => "\u{2600}\u{fe0f}", // clear
        Some("02") => "\u{26c5}", // few clouds
        Some("03") | Some("04") => "\u{2601}\u{fe0f}", // clouds
        Some("09") => "\u{1f327}\u{fe0f}", // shower rain
        Some("10") => "\u{1f326}\u{fe0f}", // rain
        Some("11") => "\u{26c8}\u{fe0f}", // thunderstorm
        Some("13") => "\u{2744}\u{fe0f}", // snow
        Some("50") => "\u{1f32b}\u{fe0f}", // mist
        _ => "\u{1f321}\u{fe0f}",
    }
}
