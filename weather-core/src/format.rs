//! Presentation helpers for the rendered page. Pure functions, no I/O.

use chrono::{DateTime, Utc};

use crate::model::Units;

/// Format a temperature to one decimal with the unit suffix.
pub fn format_temperature(value: f64, units: Units) -> String {
    format!("{:.1}{}", value, units.temperature_suffix())
}

/// Uppercase the first letter, leave the rest untouched.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// URL of the provider-hosted icon image for an icon identifier.
pub fn icon_url(icon: &str) -> String {
    format!("http://openweathermap.org/img/wn/{icon}@2x.png")
}

/// Long-form UTC date/time for an observation timestamp, e.g.
/// "June 1, 2026, 1:05 PM". Out-of-range timestamps fall back to a fixed
/// placeholder instead of failing the page.
pub fn format_observed(unix_seconds: i64) -> String {
    match DateTime::<Utc>::from_timestamp(unix_seconds, 0) {
        Some(dt) => dt.format("%B %-d, %Y, %-I:%M %p UTC").to_string(),
        None => "unknown".to_string(),
    }
}
