//! HTML rendering of tournament cards, used by the export front-end
//!
//! Everything user-supplied goes through [`escape_html`] (or [`escape_attr`]
//! for attribute values) before it is embedded in markup.

use crate::Tournament;

/// Shown in place of a blank tournament name
pub const NO_NAME_PLACEHOLDER: &str = "No Tournament Name";

/// Escape text for safe embedding in markup.
/// The ampersand must be replaced first
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

/// Escape text for an attribute context (e.g. a link URL in `href`).
/// Quotes are already covered by [`escape_html`]
pub fn escape_attr(s: &str) -> String {
    escape_html(s)
}

/// One tournament card. Remarks and link blocks are rendered only when non-empty
pub fn render_card(tournament: &Tournament) -> String {
    let name = match tournament.name.trim() {
        "" => NO_NAME_PLACEHOLDER,
        trimmed => trimmed,
    };

    let mut card = String::new();
    card.push_str("<div class=\"tournament-card\">\n");
    card.push_str(&format!("  <h3>{}</h3>\n", escape_html(name)));
    card.push_str(&format!("  <p class=\"date\">{}</p>\n", escape_html(&tournament.formatted_date())));
    card.push_str(&format!("  <p class=\"day\">{}</p>\n", escape_html(&tournament.day)));
    card.push_str(&format!("  <p class=\"time\">{}</p>\n", escape_html(&tournament.time)));
    card.push_str(&format!("  <p><strong>Organizer:</strong> {}</p>\n", escape_html(&tournament.organizer)));
    card.push_str(&format!("  <p><strong>Location:</strong> {}</p>\n", escape_html(&tournament.location)));
    if !tournament.remarks.is_empty() {
        card.push_str(&format!("  <p class=\"remarks\"><strong>Remarks:</strong> {}</p>\n", escape_html(&tournament.remarks)));
    }
    if !tournament.link.is_empty() {
        card.push_str(&format!(
            "  <a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">View Event</a>\n",
            escape_attr(&tournament.link)
        ));
    }
    card.push_str("</div>\n");
    card
}

/// The card collection, in projection order
pub fn render_cards(tournaments: &[&Tournament]) -> String {
    tournaments.iter().map(|t| render_card(t)).collect()
}

/// A complete, self-contained page around the card collection
pub fn render_page(tournaments: &[&Tournament], summary: &str) -> String {
    let mut page = String::new();
    page.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    page.push_str("  <meta charset=\"utf-8\">\n");
    page.push_str("  <title>Upcoming Tournaments</title>\n");
    page.push_str("</head>\n<body>\n");
    if !summary.is_empty() {
        page.push_str(&format!("<p class=\"result-count\">{}</p>\n", escape_html(summary)));
    }
    if tournaments.is_empty() {
        page.push_str("<p class=\"no-results\">No tournaments found.</p>\n");
    } else {
        page.push_str(&render_cards(tournaments));
    }
    page.push_str("</body>\n</html>\n");
    page
}
