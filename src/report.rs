//! Human-readable rendering of colony state.

use formica_core::{Settings, MONTH, WEEK, YEAR};
use formica_data::ColonySnapshot;

/// Formats a day count as `~ Y years, M months, W weeks, D days`.
#[must_use]
pub fn days_to_string(days: u64) -> String {
    let (year, month, week) = (u64::from(YEAR), u64::from(MONTH), u64::from(WEEK));
    let years = days / year;
    let remaining = days % year;
    let months = remaining / month;
    let remaining = remaining % month;
    let weeks = remaining / week;
    let remaining = remaining % week;
    format!("~ {years} years, {months} months, {weeks} weeks, {remaining} days")
}

/// Status rows shown while and after a colony runs.
#[must_use]
pub fn status_rows(snapshot: &ColonySnapshot) -> Vec<(&'static str, String)> {
    vec![
        ("Total Time", days_to_string(snapshot.day)),
        ("Days", snapshot.day.to_string()),
        ("Eggs", snapshot.egg_count.to_string()),
        ("Ants", snapshot.ant_count.to_string()),
        ("Workers", snapshot.worker_count.to_string()),
        ("Food", format!("{:.2}", snapshot.food)),
        (
            "Queen",
            if snapshot.queen_alive { "Alive" } else { "Deceased" }.to_string(),
        ),
        ("Dead Ants", snapshot.dead_ant_count.to_string()),
    ]
}

/// One row per parameter, with `snake_case` keys turned into `Title Case`.
#[must_use]
pub fn settings_rows(settings: &Settings) -> Vec<(String, String)> {
    settings
        .to_map()
        .into_iter()
        .map(|(key, value)| (title_case(&key), value.to_string()))
        .collect()
}

fn title_case(key: &str) -> String {
    key.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders rows as a two-column, left-aligned text table.
#[must_use]
pub fn render_table<K: AsRef<str>, V: AsRef<str>>(rows: &[(K, V)]) -> String {
    let width = rows
        .iter()
        .map(|(key, _)| key.as_ref().chars().count())
        .max()
        .unwrap_or(0);
    rows.iter()
        .map(|(key, value)| format!("{:<width$}  {}", key.as_ref(), value.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}
