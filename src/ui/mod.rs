pub mod footer;
pub mod header;
pub mod help;
pub mod interface_table;
pub mod stats_table;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

use crate::app::{App, AppMode};

/// Fixed header height: two file-path lines plus the status line.
pub const HEADER_HEIGHT: u16 = 3;

/// Fixed statistics pane height: column header plus the 14 statistic rows.
pub const STATS_HEIGHT: u16 = 15;

/// How many interface rows fit for a given terminal height.
pub fn interface_rows(total_height: u16) -> usize {
    let fixed = HEADER_HEIGHT + STATS_HEIGHT + 1 /* footer */ + 1 /* table header */;
    let available = total_height.saturating_sub(fixed) as usize;
    available.max(5)
}

/// Render the complete UI
pub fn draw(f: &mut Frame, app: &App) {
    let size = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT), // file paths + status
            Constraint::Min(5),                // interface table
            Constraint::Length(STATS_HEIGHT),  // statistics table
            Constraint::Length(1),             // footer (F-key bar)
        ])
        .split(size);

    header::draw_header(f, app, chunks[0]);
    interface_table::draw_interface_table(f, app, chunks[1]);
    stats_table::draw_stats_table(f, app, chunks[2]);
    footer::draw_footer(f, app, chunks[3]);

    if app.mode == AppMode::Help {
        help::draw_help(f);
    }
}
