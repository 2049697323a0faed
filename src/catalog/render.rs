//! Plain-text rendering of trail listings.

use std::fmt::Write;

use crate::catalog::pager::Pages;
use crate::catalog::record::TrailRecord;

/// Shown in place of a page when nothing matched.
pub const NO_MATCHES: &str = "No trails match the search criteria.";

/// Renders one record as a block of labelled lines and a separator.
pub fn render_record(record: &TrailRecord) -> String {
    let attributes = &record.attributes;
    format!(
        "Trail Name: {}\nLocation: {}\nDistance: {} miles\nElevation Gain: {} feet\nDifficulty: {}/3\n{}\n",
        record.name,
        attributes.location,
        attributes.distance,
        attributes.elevation_gain,
        attributes.difficulty,
        "-".repeat(40),
    )
}

/// Returns the page label, e.g. `Page 2 of 3`.
///
/// An empty listing still reads as one page.
pub fn page_label(index: usize, total_pages: usize) -> String {
    format!("Page {} of {}", index + 1, total_pages.max(1))
}

/// Renders page `index` of `pages` followed by its label.
pub fn render_page(pages: &Pages<'_, &TrailRecord>, index: usize) -> String {
    let mut out = String::new();
    match pages.page(index) {
        Some(records) if !records.is_empty() => {
            for record in records {
                out.push_str(&render_record(record));
            }
        }
        _ => {
            out.push_str(NO_MATCHES);
            out.push('\n');
        }
    }
    // Writing to a String cannot fail
    let _ = writeln!(out, "{}", page_label(index, pages.total_pages()));
    out
}
