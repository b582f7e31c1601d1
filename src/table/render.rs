//! Text rendering of the table and the selection.

use comfy_table::{Cell, ContentArrangement, Table, presets::UTF8_FULL};

use super::TableState;
use crate::{Artwork, SelectionSet};

const HEADER: [&str; 8] = [
    "Sel",
    "ID",
    "Title",
    "Place of Origin",
    "Artist",
    "Inscriptions",
    "Start",
    "End",
];

/// Cut `text` to at most `max` characters, ending with an ellipsis when cut.
/// Newlines are flattened so each row stays on one line.
fn truncate(text: &str, max: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if max == 0 || flat.chars().count() <= max {
        return flat;
    }
    let mut out: String = flat.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn year(value: Option<i64>) -> String {
    value.map(|y| y.to_string()).unwrap_or_default()
}

fn artwork_row(artwork: &Artwork, selected: bool, width: usize) -> Vec<Cell> {
    let text = |value: &Option<String>| truncate(value.as_deref().unwrap_or(""), width);
    vec![
        Cell::new(if selected { "[x]" } else { "[ ]" }),
        Cell::new(artwork.id),
        Cell::new(truncate(&artwork.title, width)),
        Cell::new(text(&artwork.place_of_origin)),
        Cell::new(text(&artwork.artist_display)),
        Cell::new(text(&artwork.inscriptions)),
        Cell::new(year(artwork.date_start)),
        Cell::new(year(artwork.date_end)),
    ]
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(HEADER.iter().map(|h| Cell::new(*h)).collect::<Vec<_>>());
    table
}

/// Render the current page with selection markers and a pagination footer
pub fn render_page(state: &TableState, max_cell_width: usize) -> String {
    if state.artworks().is_empty() {
        return "No artworks found".to_string();
    }

    let mut table = new_table();
    for artwork in state.artworks() {
        let selected = state.selection().contains(artwork.id);
        table.add_row(artwork_row(artwork, selected, max_cell_width));
    }

    let shown_from = state.first() + 1;
    let shown_to = state.first() + state.artworks().len() as u64;
    format!(
        "{table}\n  Page {} of {} | rows {}-{} of {} | Selected: {}",
        state.current_page(),
        state.total_pages(),
        shown_from,
        shown_to,
        state.total_records(),
        state.selection().len()
    )
}

/// Render every selected artwork
pub fn render_selection(selection: &SelectionSet, max_cell_width: usize) -> String {
    if selection.is_empty() {
        return "No artworks selected".to_string();
    }

    let mut table = new_table();
    for artwork in selection {
        table.add_row(artwork_row(artwork, true, max_cell_width));
    }
    format!("{table}\n  Selected: {}", selection.len())
}
