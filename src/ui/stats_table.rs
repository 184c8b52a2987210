use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;

const DESCRIPTION_WIDTH: usize = 28;

/// Draw the statistics table for the selected interface.
pub fn draw_stats_table(f: &mut Frame, app: &App, area: Rect) {
    if area.height < 2 {
        return;
    }

    let header_area = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: 1,
    };
    let header = format!(
        "{:<width$}{}",
        "Description",
        "Value",
        width = DESCRIPTION_WIDTH
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

    let body_area = Rect {
        x: area.x,
        y: area.y + 1,
        width: area.width,
        height: area.height - 1,
    };

    if app.stats.is_empty() {
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "No interface selected.",
                Style::default().fg(Color::DarkGray),
            ))),
            body_area,
        );
        return;
    }

    let mut lines = Vec::with_capacity(app.stats.len());
    for row in app.stats.iter().take(body_area.height as usize) {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<width$}", row.description, width = DESCRIPTION_WIDTH),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled(row.value.as_str(), Style::default().fg(Color::White)),
        ]));
    }
    f.render_widget(Paragraph::new(lines), body_area);
}
