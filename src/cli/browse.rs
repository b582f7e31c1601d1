//! Interactive browse session
//!
//! Reads one command per line from stdin and keeps the table state (current
//! page, selection) for the lifetime of the session.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use artgrid::api::{ArtworkClient, PageSource};
use artgrid::config::Config;
use artgrid::table::{TableState, render_page, render_selection};

use super::print_notifications;

const HELP: &str = "\
Commands:
  n            next page
  p            previous page
  g <page>     go to page
  r <rows>     set rows per page
  t <id>       toggle selection of a row on this page
  a            select all rows on this page
  s <count>    select <count> more artworks across pages
  c            clear the selection
  l            list the selection
  h            show this help
  q            quit";

/// One parsed line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Next,
    Prev,
    Goto(u32),
    Rows(u32),
    Toggle(u64),
    SelectPage,
    SelectCount(usize),
    Clear,
    List,
    Help,
    Quit,
}

impl BrowseCommand {
    /// Parse a command line. Returns an error message for unknown or malformed input.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let mut parts = line.split_whitespace();
        let Some(cmd) = parts.next() else {
            return Ok(None);
        };
        let arg = parts.next();

        fn number<T: std::str::FromStr>(cmd: &str, arg: Option<&str>) -> Result<T, String> {
            let arg = arg.ok_or_else(|| format!("`{cmd}` needs a number"))?;
            arg.parse()
                .map_err(|_| format!("`{arg}` is not a valid number"))
        }

        let command = match cmd {
            "n" | "next" => Self::Next,
            "p" | "prev" => Self::Prev,
            "g" | "goto" => Self::Goto(number(cmd, arg)?),
            "r" | "rows" => Self::Rows(number(cmd, arg)?),
            "t" | "toggle" => Self::Toggle(number(cmd, arg)?),
            "a" | "all" => Self::SelectPage,
            "s" | "select" => Self::SelectCount(number(cmd, arg)?),
            "c" | "clear" => Self::Clear,
            "l" | "list" => Self::List,
            "h" | "help" | "?" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            other => return Err(format!("Unknown command `{other}` (h for help)")),
        };
        Ok(Some(command))
    }
}

/// Apply one command. Returns false when the session should end.
fn apply<S: PageSource>(
    state: &mut TableState,
    source: &S,
    command: BrowseCommand,
    width: usize,
    out: &mut impl Write,
) -> Result<bool> {
    let redraw = match command {
        BrowseCommand::Next => state.next_page(source),
        BrowseCommand::Prev => state.prev_page(source),
        BrowseCommand::Goto(page)
            if page == 0 || (state.total_pages() > 0 && page > state.total_pages()) =>
        {
            writeln!(out, "Page must be between 1 and {}", state.total_pages())?;
            false
        }
        BrowseCommand::Goto(page) => state.load_page(source, page),
        BrowseCommand::Rows(0) => {
            writeln!(out, "Rows must be at least 1")?;
            false
        }
        BrowseCommand::Rows(rows) => state.set_rows(source, rows),
        BrowseCommand::Toggle(id) => {
            match state.toggle_row(id) {
                Some(true) => writeln!(out, "Selected {id}")?,
                Some(false) => writeln!(out, "Deselected {id}")?,
                None => writeln!(out, "No artwork {id} on this page")?,
            }
            true
        }
        BrowseCommand::SelectPage => {
            let added = state.select_all_on_page();
            writeln!(out, "Selected {added} rows on this page")?;
            true
        }
        BrowseCommand::SelectCount(count) => {
            writeln!(
                out,
                "Selecting {} more (at most {})...",
                count,
                state.max_selectable()
            )?;
            state.select_multiple(source, count);
            true
        }
        BrowseCommand::Clear => {
            state.clear_selection();
            true
        }
        BrowseCommand::List => {
            writeln!(out, "{}", render_selection(state.selection(), width))?;
            false
        }
        BrowseCommand::Help => {
            writeln!(out, "{HELP}")?;
            false
        }
        BrowseCommand::Quit => return Ok(false),
    };

    if redraw {
        writeln!(out, "{}", render_page(state, width))?;
    }
    Ok(true)
}

/// Run the interactive session until `q` or end of input
pub fn browse_command(config: &Config, rows: Option<u32>) -> Result<()> {
    let client = ArtworkClient::from_settings(&config.api);
    let width = config.table.max_cell_width;
    let mut state = TableState::new(rows.unwrap_or(config.table.page_size));

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    if state.load_page(&client, 1) {
        writeln!(stdout, "{}", render_page(&state, width))?;
    }
    print_notifications(&state.take_notifications());
    writeln!(stdout, "Type h for help.")?;

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read input")?;
        let command = match BrowseCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(msg) => {
                eprintln!("{msg}");
                continue;
            }
        };

        let keep_going = apply(&mut state, &client, command, width, &mut stdout)?;
        print_notifications(&state.take_notifications());
        stdout.flush()?;
        if !keep_going {
            break;
        }
    }

    Ok(())
}
