//! HTML rendering for the current-conditions page.
//!
//! Rendering is total: the payload has already passed validation, but every
//! field access still has a fallback so a partial payload degrades to
//! placeholders instead of a panic.

use weather_core::format::{capitalize_first, format_observed, format_temperature, icon_url};
use weather_core::{CurrentConditions, Location, UNITS};

pub fn render(location: &Location, conditions: &CurrentConditions) -> String {
    let condition = conditions.weather.first();

    let description = condition
        .map(|c| capitalize_first(&c.description))
        .unwrap_or_else(|| "Unknown".to_string());
    let icon = condition
        .map(|c| icon_url(&c.icon))
        .unwrap_or_default();

    let temperature = conditions
        .main
        .as_ref()
        .map(|m| format_temperature(m.temp, UNITS))
        .unwrap_or_else(|| "–".to_string());
    let feels_like = conditions
        .main
        .as_ref()
        .map(|m| format_temperature(m.feels_like, UNITS))
        .unwrap_or_else(|| "–".to_string());

    let updated_at = conditions
        .dt
        .map(format_observed)
        .unwrap_or_else(|| "unknown".to_string());

    let raw_json = serde_json::to_string_pretty(conditions)
        .unwrap_or_else(|_| "{}".to_string());

    let icon_img = if icon.is_empty() {
        String::new()
    } else {
        format!(r#"<img src="{}" alt="" />"#, escape_html(&icon))
    };

    format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8" />
<title>Current Conditions — {city}</title>
<style>
body {{ padding: 1.5rem; font-family: system-ui, sans-serif; line-height: 1.8; }}
.muted {{ color: hsl(220, 23%, 60%); }}
.conditions {{ display: flex; flex-direction: row; gap: 2rem; align-items: center; }}
.temperature {{ font-size: 2rem; }}
.summary {{ font-size: 1.2rem; font-weight: 400; }}
.updated {{ font-size: 0.85rem; }}
.raw {{ background-color: hsl(220, 54%, 96%); padding: 0.5rem 1.5rem 1rem 1.5rem; border-radius: 0.25rem; }}
</style>
</head>
<body>
<main>
<h1>Current Weather</h1>
<p>
For {city} {postal_code}, {country_code}<br />
<span class="muted">(LAT: {lat}, LON: {lon})</span>
</p>
<h2>Current Conditions</h2>
<div class="conditions">
{icon_img}
<div class="temperature">{temperature}</div>
</div>
<p class="summary">
{description}. Feels like {feels_like}.<br />
<span class="muted updated">updated at {updated_at}</span>
</p>
</main>
<section class="raw">
<h2>Raw Data</h2>
<pre>{raw_json}</pre>
</section>
</body>
</html>
"#,
        city = escape_html(location.city),
        postal_code = escape_html(location.postal_code),
        country_code = escape_html(location.country_code),
        lat = location.latitude,
        lon = location.longitude,
        temperature = escape_html(&temperature),
        description = escape_html(&description),
        feels_like = escape_html(&feels_like),
        updated_at = escape_html(&updated_at),
        raw_json = escape_html(&raw_json),
    )
}

/// Minimal escaping for text interpolated into the document.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
