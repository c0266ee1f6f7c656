//! HTML trip report composed for the fleet inbox.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::entry::TripEntry;

pub const REPORT_SUBJECT: &str = "Nový záznam o jízdě služebním autem";

const CZECH_MONTHS_GENITIVE: [&str; 12] = [
    "ledna",
    "února",
    "března",
    "dubna",
    "května",
    "června",
    "července",
    "srpna",
    "září",
    "října",
    "listopadu",
    "prosince",
];

const UNKNOWN_DURATION: &str = "Neznámá";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripReport {
    pub subject: String,
    pub html: String,
}

/// `2025-03-05` → `5. března 2025`; anything unparsable is returned verbatim.
pub fn format_czech_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d") {
        Ok(d) => format!("{}. {} {}", d.day(), CZECH_MONTHS_GENITIVE[d.month0() as usize], d.year()),
        Err(_) => date.to_string(),
    }
}

/// Human-readable trip length, e.g. `2 dny, 3 h 15 min` or `9 h 15 min`.
pub fn trip_duration(entry: &TripEntry) -> String {
    let parse = |date: &str, time: &str| {
        NaiveDateTime::parse_from_str(&format!("{}T{}", date.trim(), time.trim()), "%Y-%m-%dT%H:%M").ok()
    };

    let (Some(start), Some(end)) = (
        parse(&entry.date_start, &entry.time_start),
        parse(&entry.date_end, &entry.time_end),
    ) else {
        return UNKNOWN_DURATION.to_string();
    };

    let total_minutes = (end - start).num_minutes();
    if total_minutes < 0 {
        return UNKNOWN_DURATION.to_string();
    }

    let days = total_minutes / (24 * 60);
    let hours = (total_minutes / 60) % 24;
    let minutes = total_minutes % 60;

    if days > 0 {
        format!("{days} {}, {hours} h {minutes} min", day_word(days))
    } else {
        format!("{hours} h {minutes} min")
    }
}

fn day_word(days: i64) -> &'static str {
    match days {
        1 => "den",
        2..=4 => "dny",
        _ => "dní",
    }
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

const STYLE: &str = r#"
  body { font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; background-color: #f0f2f5; margin: 0; padding: 0; }
  .container { max-width: 600px; margin: 20px auto; background-color: #ffffff; border-radius: 8px; overflow: hidden; box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1); }
  .header { background-color: #004990; color: white; padding: 20px 25px; text-align: center; }
  .header h1 { margin: 0; font-size: 24px; font-weight: 600; }
  .content { padding: 25px; }
  .section { margin-bottom: 25px; border-bottom: 1px solid #eaeaea; padding-bottom: 15px; }
  .section:last-child { border-bottom: none; margin-bottom: 0; padding-bottom: 0; }
  .section-title { font-size: 18px; color: #004990; margin-bottom: 15px; font-weight: 600; }
  .info-row { display: flex; flex-wrap: wrap; margin-bottom: 10px; }
  .info-item { width: 48%; margin-bottom: 15px; }
  .label { font-weight: 600; color: #555; font-size: 14px; display: block; margin-bottom: 5px; }
  .value { color: #333; font-size: 16px; }
  .highlight { background-color: #f8f9fa; border-left: 3px solid #0072b0; padding: 10px 15px; margin: 15px 0; }
  .map-link { display: inline-block; margin-top: 10px; color: #0072b0; text-decoration: none; font-weight: 500; }
  .footer { text-align: center; padding: 15px; font-size: 12px; color: #777; background-color: #f8f9fa; }
  @media only screen and (max-width: 620px) {
    .container { width: 100% !important; padding: 10px !important; }
    .info-item { width: 100% !important; }
  }
"#;

struct Item<'a> {
    label: &'a str,
    value: String,
}

fn item(label: &str, value: impl Into<String>) -> Item<'_> {
    Item {
        label,
        value: value.into(),
    }
}

fn section(out: &mut String, title: &str, items: &[Item<'_>], highlight: Option<Item<'_>>, trailer: &str) {
    out.push_str(&format!(
        r#"<div class="section"><div class="section-title">{title}</div><div class="info-row">"#
    ));
    for it in items {
        out.push_str(&format!(
            r#"<div class="info-item"><span class="label">{}</span><span class="value">{}</span></div>"#,
            it.label,
            escape_html(&it.value)
        ));
    }
    out.push_str("</div>");
    if let Some(h) = highlight {
        out.push_str(&format!(
            r#"<div class="highlight"><span class="label">{}</span><span class="value">{}</span></div>"#,
            h.label,
            escape_html(&h.value)
        ));
    }
    out.push_str(trailer);
    out.push_str("</div>");
}

/// Render the e-mail for a validated trip entry.
pub fn compose_report(entry: &TripEntry) -> TripReport {
    let mut html = format!(
        r#"<!DOCTYPE html><html><head><meta charset="UTF-8"><meta name="viewport" content="width=device-width, initial-scale=1.0"><title>Záznam o jízdě služebním autem</title><style>{STYLE}</style></head><body><div class="container"><div class="header"><h1>Záznam o jízdě služebním autem</h1></div><div class="content">"#
    );

    section(
        &mut html,
        "Informace o řidiči a vozidle",
        &[item("Řidič", entry.name.as_str()), item("Vozidlo", entry.vehicle.as_str())],
        None,
        "",
    );

    section(
        &mut html,
        "Informace o trase",
        &[item("Cíl cesty", entry.destination.as_str()), item("Účel jízdy", entry.purpose.as_str())],
        None,
        "",
    );

    section(
        &mut html,
        "Časové údaje",
        &[
            item(
                "Datum a čas odjezdu",
                format!("{}, {}", format_czech_date(&entry.date_start), entry.time_start),
            ),
            item(
                "Datum a čas příjezdu",
                format!("{}, {}", format_czech_date(&entry.date_end), entry.time_end),
            ),
        ],
        Some(item("Celková doba jízdy", trip_duration(entry))),
        "",
    );

    section(
        &mut html,
        "Stav tachometru",
        &[
            item("Stav na začátku", format!("{} km", entry.km_start)),
            item("Stav na konci", format!("{} km", entry.km_end)),
        ],
        Some(item("Celkem ujeto", format!("{} km", entry.distance_km()))),
        "",
    );

    if let Some(coords) = &entry.coordinates {
        let map_link = format!(
            r#"<a href="https://mapy.cz/zakladni?x={}&amp;y={}&amp;z=15" target="_blank" class="map-link">Zobrazit na mapě</a>"#,
            escape_html(&coords.lng),
            escape_html(&coords.lat)
        );
        section(
            &mut html,
            "GPS Souřadnice",
            &[item("Souřadnice", format!("{}, {}", coords.lat, coords.lng))],
            None,
            &map_link,
        );
    }

    html.push_str(
        r#"</div><div class="footer">&copy; 2025 Poppe + Potthoff - Automaticky generovaný email</div></div></body></html>"#,
    );

    TripReport {
        subject: REPORT_SUBJECT.to_string(),
        html,
    }
}
