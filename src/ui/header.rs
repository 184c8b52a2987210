use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{App, AppMode};

/// Draw the two walk-file path lines and the status line.
pub fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::with_capacity(3);
    lines.push(path_line(
        "First walk file:  ",
        &app.first_path,
        app.mode == AppMode::EditFirstPath,
        app,
    ));
    lines.push(path_line(
        "Second walk file: ",
        &app.second_path,
        app.mode == AppMode::EditSecondPath,
        app,
    ));
    lines.push(status_line(app));

    f.render_widget(Paragraph::new(lines), area);
}

fn path_line<'a>(label: &'a str, path: &'a str, editing: bool, app: &'a App) -> Line<'a> {
    let label_span = Span::styled(
        label,
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    );
    if editing {
        Line::from(vec![
            label_span,
            Span::styled(
                app.edit_buffer.as_str(),
                Style::default().fg(Color::Black).bg(Color::Cyan),
            ),
            Span::styled("█", Style::default().fg(Color::Cyan)),
        ])
    } else {
        Line::from(vec![
            label_span,
            Span::styled(path, Style::default().fg(Color::White)),
        ])
    }
}

fn status_line(app: &App) -> Line<'_> {
    if app.mode == AppMode::SaveAs {
        return Line::from(vec![
            Span::styled(
                "Save stats to: ",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                app.edit_buffer.as_str(),
                Style::default().fg(Color::Black).bg(Color::Cyan),
            ),
            Span::styled("█", Style::default().fg(Color::Cyan)),
        ]);
    }

    match &app.status {
        Some(status) => {
            let style = if status.is_error {
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Line::from(Span::styled(status.text.as_str(), style))
        }
        None => Line::from(""),
    }
}
