use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, AppMode};
use crate::export;

/// Handle a single key input event.
pub fn handle_input(app: &mut App, key: KeyEvent) {
    match app.mode {
        AppMode::Normal => handle_normal_mode(app, key),
        AppMode::EditFirstPath | AppMode::EditSecondPath => handle_edit_path_mode(app, key),
        AppMode::SaveAs => handle_save_as_mode(app, key),
        AppMode::Help => handle_help_mode(app, key),
    }
}

// ── Normal mode ─────────────────────────────────────────────────────────

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        // ── Quit ──
        KeyCode::F(10) | KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }

        // ── Navigation ──
        KeyCode::Up => app.select_prev(),
        KeyCode::Down => app.select_next(),
        KeyCode::Char('k') => app.select_prev(),
        KeyCode::Char('j') => app.select_next(),
        KeyCode::PageUp => app.page_up(),
        KeyCode::PageDown => app.page_down(),
        KeyCode::Home => app.select_first(),
        KeyCode::End => app.select_last(),

        // ── Help ──
        KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('h') => app.mode = AppMode::Help,

        // ── F2/F3 — edit the walk file paths ──
        KeyCode::F(2) | KeyCode::Char('1') => {
            app.edit_buffer = app.first_path.clone();
            app.mode = AppMode::EditFirstPath;
        }
        KeyCode::F(3) | KeyCode::Char('2') => {
            app.edit_buffer = app.second_path.clone();
            app.mode = AppMode::EditSecondPath;
        }

        // ── F5 / r — (re)load both walk files and show interfaces ──
        KeyCode::F(5) | KeyCode::Char('r') => app.show_interfaces(),

        // ── Enter / Space — calculate stats for the selected interface ──
        KeyCode::Enter | KeyCode::Char(' ') => app.select_interface(),

        // ── F6 / s — save the stats table as JSON ──
        KeyCode::F(6) | KeyCode::Char('s') => {
            app.edit_buffer = export::default_file_name();
            app.mode = AppMode::SaveAs;
        }

        _ => {}
    }
}

// ── Path editing (F2/F3) ────────────────────────────────────────────────

fn handle_edit_path_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.mode = AppMode::Normal,
        KeyCode::Enter => {
            let path = app.edit_buffer.trim().to_string();
            if !path.is_empty() {
                match app.mode {
                    AppMode::EditFirstPath => app.first_path = path,
                    _ => app.second_path = path,
                }
            }
            app.mode = AppMode::Normal;
        }
        KeyCode::Backspace => {
            app.edit_buffer.pop();
        }
        KeyCode::Char(c) => app.edit_buffer.push(c),
        _ => {}
    }
}

// ── Save-as (F6) ────────────────────────────────────────────────────────

fn handle_save_as_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.mode = AppMode::Normal,
        KeyCode::Enter => {
            let file_name = app.edit_buffer.trim().to_string();
            if !file_name.is_empty() {
                app.export_stats(&file_name);
            }
            app.mode = AppMode::Normal;
        }
        KeyCode::Backspace => {
            app.edit_buffer.pop();
        }
        KeyCode::Char(c) => app.edit_buffer.push(c),
        _ => {}
    }
}

// ── Help ────────────────────────────────────────────────────────────────

fn handle_help_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('q') | KeyCode::Char('?') => {
            app.mode = AppMode::Normal;
        }
        _ => {}
    }
}
