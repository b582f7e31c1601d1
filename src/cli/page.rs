//! Page command implementation

use anyhow::{Result, bail};

use artgrid::api::ArtworkClient;
use artgrid::config::Config;
use artgrid::table::{TableState, render_page};

use super::print_notifications;

/// Fetch one page and print it as a table
pub fn page_command(config: &Config, page: u32, rows: Option<u32>) -> Result<()> {
    if page == 0 {
        bail!("Pages start at 1");
    }

    let client = ArtworkClient::from_settings(&config.api);
    let mut state = TableState::new(rows.unwrap_or(config.table.page_size));

    let loaded = state.load_page(&client, page);
    print_notifications(&state.take_notifications());
    if !loaded {
        bail!("Could not load page {}", page);
    }

    println!("{}", render_page(&state, config.table.max_cell_width));
    Ok(())
}
