use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{App, AppMode};

/// F-key definitions: (key_label, description)
const FKEYS_NORMAL: &[(&str, &str)] = &[
    ("F1", "Help  "),
    ("F2", "File1 "),
    ("F3", "File2 "),
    ("F5", "Show  "),
    ("Enter", "Stats "),
    ("F6", "Save  "),
    ("F10", "Quit "),
];

const FKEYS_EDIT: &[(&str, &str)] = &[
    ("Esc", "Cancel   "),
    ("Enter", "Accept"),
    ("F10", "Quit "),
];

/// Draw the bottom F-key bar (key in black-on-cyan, description on dark)
pub fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    // Full-width dark background first
    let bg_fill = " ".repeat(area.width as usize);
    f.render_widget(
        Paragraph::new(bg_fill).style(Style::default().bg(Color::Indexed(234))),
        area,
    );

    let fkeys = match app.mode {
        AppMode::EditFirstPath | AppMode::EditSecondPath | AppMode::SaveAs => FKEYS_EDIT,
        _ => FKEYS_NORMAL,
    };

    let mut spans: Vec<Span> = Vec::new();
    for (key, desc) in fkeys {
        spans.push(Span::styled(
            key.to_string(),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            desc.to_string(),
            Style::default()
                .fg(Color::Indexed(252))
                .bg(Color::Indexed(234)),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
