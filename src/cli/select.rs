//! Select command implementation

use anyhow::{Result, bail};

use artgrid::api::ArtworkClient;
use artgrid::config::Config;
use artgrid::table::{TableState, render_selection};

use super::print_notifications;

/// Select the first `count` artworks of the dataset and print them
pub fn select_command(config: &Config, count: usize, rows: Option<u32>) -> Result<()> {
    if count == 0 {
        bail!("Count must be at least 1");
    }

    let client = ArtworkClient::from_settings(&config.api);
    let mut state = TableState::new(rows.unwrap_or(config.table.page_size));

    // The first page supplies the total record count that bounds the request
    if !state.load_page(&client, 1) {
        print_notifications(&state.take_notifications());
        bail!("Could not load the first page");
    }

    let result = state.select_multiple(&client, count);
    println!(
        "{}",
        render_selection(state.selection(), config.table.max_cell_width)
    );
    print_notifications(&state.take_notifications());

    match result {
        Some(result) if result.error.is_some() => bail!("Selection stopped early"),
        Some(result) if result.shortfall() > 0 => {
            println!(
                "Dataset exhausted: {} of {} requested artworks selected",
                result.added, result.requested
            );
            Ok(())
        }
        _ => Ok(()),
    }
}
