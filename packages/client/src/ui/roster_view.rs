//! Terminal projection of the roster.

use crate::domain::Roster;

/// Render the roster as table lines. Row numbers are 1-based.
pub fn render_roster(roster: &Roster) -> Vec<String> {
    if roster.is_empty() {
        return vec!["(no servers, use /add to add one)".to_string()];
    }

    let name_width = roster
        .rows()
        .iter()
        .map(|entry| entry.name.len())
        .max()
        .unwrap_or(0)
        .max("Name".len());
    let url_width = roster
        .rows()
        .iter()
        .map(|entry| entry.url.len())
        .max()
        .unwrap_or(0)
        .max("URL".len());

    let mut lines = vec![format!(
        "{:>3}  {:<name_width$}  {:<url_width$}  {:<17}  Action",
        "#", "Name", "URL", "Status"
    )];
    for (i, entry) in roster.rows().iter().enumerate() {
        lines.push(format!(
            "{:>3}  {:<name_width$}  {:<url_width$}  {:<17}  [{}]",
            i + 1,
            entry.name,
            entry.url,
            entry.status.label(),
            entry.control().label(),
        ));
    }
    lines
}
