//! Grid table rendering for route summaries

use application::RoutePlan;

/// Header row of the summary table
const HEADERS: [&str; 2] = ["Field", "Value"];

/// Render two-column rows as a bordered grid
///
/// ```text
/// +--------+----------+
/// | Field  | Value    |
/// +========+==========+
/// | Origin | Santiago |
/// +--------+----------+
/// ```
pub fn render_grid(rows: &[(&str, String)]) -> String {
    let key_width = rows
        .iter()
        .map(|(key, _)| key.chars().count())
        .chain(std::iter::once(HEADERS[0].len()))
        .max()
        .unwrap_or_default();
    let value_width = rows
        .iter()
        .map(|(_, value)| value.chars().count())
        .chain(std::iter::once(HEADERS[1].len()))
        .max()
        .unwrap_or_default();

    let border = |fill: &str| {
        format!(
            "+{}+{}+",
            fill.repeat(key_width + 2),
            fill.repeat(value_width + 2)
        )
    };
    let line = |key: &str, value: &str| {
        format!("| {key:<key_width$} | {value:<value_width$} |")
    };

    let mut lines = vec![border("-"), line(HEADERS[0], HEADERS[1]), border("=")];
    for (key, value) in rows {
        lines.push(line(key, value));
        lines.push(border("-"));
    }
    lines.join("\n")
}

/// Summary rows for a computed plan
pub fn plan_rows(plan: &RoutePlan) -> Vec<(&'static str, String)> {
    vec![
        ("Origin", plan.origin.to_string()),
        ("Destination", plan.destination.to_string()),
        ("Travel mode", plan.mode.label().to_string()),
        ("Distance (km)", format!("{:.2}", plan.route.distance_km())),
        ("Distance (miles)", format!("{:.2}", plan.route.distance_miles())),
        ("Duration", plan.route.formatted_duration()),
    ]
}

/// Full human-readable report: the grid followed by the narrative
pub fn render_plan(plan: &RoutePlan) -> String {
    let narrative = plan.route.narrative();
    let narrative = if narrative.is_empty() {
        "(no instructions)".to_string()
    } else {
        narrative
    };
    format!(
        "{}\n\nTrip narrative:\n{narrative}",
        render_grid(&plan_rows(plan))
    )
}
