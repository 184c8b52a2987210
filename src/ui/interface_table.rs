use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;

/// Column headers: Index, then Description taking the remaining width.
const INDEX_WIDTH: usize = 8;

/// Draw the discovered-interfaces table.
pub fn draw_interface_table(f: &mut Frame, app: &App, area: Rect) {
    if area.height < 2 {
        return;
    }

    // Column header row with a full-width colored background.
    let header_area = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: 1,
    };
    let header = format!(
        "{:<width$}{}",
        "Index",
        "Description",
        width = INDEX_WIDTH
    );
    let header = format!("{:<w$}", header, w = area.width as usize);
    f.render_widget(
        Paragraph::new(header).style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        header_area,
    );

    let visible = (area.height - 1) as usize;
    let rows = app
        .interfaces
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(visible);

    let mut lines = Vec::with_capacity(visible);
    for (i, entry) in rows {
        let text = format!(
            "{:<width$}{}",
            entry.index,
            entry.description,
            width = INDEX_WIDTH
        );
        let style = if i == app.selected_index {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default().fg(Color::White)
        };
        // Pad to full width so the selection bar spans the line.
        let text = format!("{:<w$}", text, w = area.width as usize);
        lines.push(Line::from(Span::styled(text, style)));
    }

    let body_area = Rect {
        x: area.x,
        y: area.y + 1,
        width: area.width,
        height: area.height - 1,
    };
    f.render_widget(Paragraph::new(lines), body_area);
}
