use std::path::PathBuf;

use log::warn;

use crate::export;
use crate::walk::parser::{
    build_interface_snapshot, find_interfaces, InterfaceEntry, ParseError,
};
use crate::walk::reader::read_walk_file;
use crate::walk::stats::{calculate_statistics, CalcError, StatRow};

/// Which view/mode the app is currently in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Normal,
    EditFirstPath,  // F2: edit the first walk file path
    EditSecondPath, // F3: edit the second walk file path
    SaveAs,         // F6: edit the export file name
    Help,
}

/// A one-line status message shown under the file paths.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// Main application state
pub struct App {
    pub mode: AppMode,
    pub should_quit: bool,

    // Walk file paths, editable in-app
    pub first_path: String,
    pub second_path: String,

    // Text-entry scratch for the Edit*/SaveAs modes
    pub edit_buffer: String,

    // Loaded walk lines; both files are read fully before any parsing
    pub walk1: Option<Vec<String>>,
    pub walk2: Option<Vec<String>>,

    // Interface table state
    pub interfaces: Vec<InterfaceEntry>,
    pub selected_index: usize,
    pub scroll_offset: usize,
    pub visible_rows: usize,

    // Statistics for the most recently selected interface
    pub stats: Vec<StatRow>,

    pub status: Option<StatusMessage>,
}

impl App {
    pub fn new(first_path: String, second_path: String) -> Self {
        Self {
            mode: AppMode::Normal,
            should_quit: false,
            first_path,
            second_path,
            edit_buffer: String::new(),
            walk1: None,
            walk2: None,
            interfaces: Vec::new(),
            selected_index: 0,
            scroll_offset: 0,
            visible_rows: 10,
            stats: Vec::new(),
            status: Some(StatusMessage::info(
                "Press F5 to load the walk files and show interfaces.",
            )),
        }
    }

    /// Re-read both walk files and rebuild the interface table.
    ///
    /// Each invocation starts from scratch: no state is retained from a
    /// previous run.
    pub fn show_interfaces(&mut self) {
        self.interfaces.clear();
        self.stats.clear();
        self.selected_index = 0;
        self.scroll_offset = 0;
        self.walk1 = None;
        self.walk2 = None;

        let walk1 = match read_walk_file(&PathBuf::from(&self.first_path)) {
            Ok(lines) => lines,
            Err(e) => {
                self.status = Some(StatusMessage::error(format!("{e:#}")));
                return;
            }
        };
        let walk2 = match read_walk_file(&PathBuf::from(&self.second_path)) {
            Ok(lines) => lines,
            Err(e) => {
                self.status = Some(StatusMessage::error(format!("{e:#}")));
                return;
            }
        };

        match find_interfaces(&walk1, &walk2) {
            Ok(interfaces) if interfaces.is_empty() => {
                self.status = Some(StatusMessage::error(
                    "No interfaces found in the walk files.",
                ));
            }
            Ok(interfaces) => {
                self.interfaces = interfaces;
                self.status = Some(StatusMessage::info(
                    "Select an interface and press Enter for details.",
                ));
            }
            Err(ParseError::IncompatibleWalks) => {
                self.status = Some(StatusMessage::error(
                    "Walk files are not compatible with each other!",
                ));
                return;
            }
            Err(e) => {
                // MalformedIndex is handled inside the scan; anything else
                // surfacing here is still just a message to the user.
                self.status = Some(StatusMessage::error(e.to_string()));
                return;
            }
        }

        self.walk1 = Some(walk1);
        self.walk2 = Some(walk2);
    }

    /// Build both snapshots for the selected interface and calculate the
    /// statistics table. Each selection is a fresh, independent call.
    pub fn select_interface(&mut self) {
        let (Some(walk1), Some(walk2)) = (&self.walk1, &self.walk2) else {
            return;
        };
        let Some(entry) = self.interfaces.get(self.selected_index) else {
            return;
        };

        let snap1 = build_interface_snapshot(walk1, entry.index);
        let snap2 = build_interface_snapshot(walk2, entry.index);
        if !snap1.found.interface_present() {
            warn!("interface {} not present in the first walk", entry.index);
        }
        if !snap2.found.interface_present() {
            warn!("interface {} not present in the second walk", entry.index);
        }

        // Order the pair by sysUpTime ascending before calculating.
        let result = if snap1.sys_up_time < snap2.sys_up_time {
            calculate_statistics(&snap1, &snap2)
        } else if snap1.sys_up_time > snap2.sys_up_time {
            calculate_statistics(&snap2, &snap1)
        } else {
            Err(CalcError::IdenticalTimestamps)
        };

        match result {
            Ok(rows) => {
                self.stats = rows;
                self.status = Some(StatusMessage::info(format!(
                    "Statistics for interface {} ({}). F6 saves them as JSON.",
                    entry.index, entry.description
                )));
            }
            Err(CalcError::SpeedMismatch { .. }) => {
                self.stats = vec![StatRow {
                    description: "Interface Speeds".to_string(),
                    value: "Do Not Match".to_string(),
                }];
                self.status = Some(StatusMessage::error(
                    "Interface speeds do not match between the walks.",
                ));
            }
            Err(CalcError::IdenticalTimestamps) => {
                self.stats = vec![StatRow {
                    description: "Unable to calculate utilization".to_string(),
                    value: "the time stamps on the two files are identical".to_string(),
                }];
                self.status = Some(StatusMessage::error(
                    "The time stamps on the two walk files are identical.",
                ));
            }
        }
    }

    /// Write the current statistics table to a JSON file.
    pub fn export_stats(&mut self, file_name: &str) {
        if self.stats.is_empty() {
            self.status = Some(StatusMessage::error("Select an interface first."));
            return;
        }
        match export::write_json(&self.stats, &PathBuf::from(file_name)) {
            Ok(()) => {
                self.status = Some(StatusMessage::info(format!("Saved stats to {file_name}.")));
            }
            Err(e) => {
                self.status = Some(StatusMessage::error(format!("{e:#}")));
            }
        }
    }

    // ── Interface table navigation ──────────────────────────────────────

    /// Move selection up
    pub fn select_prev(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            if self.selected_index < self.scroll_offset {
                self.scroll_offset = self.selected_index;
            }
        }
    }

    /// Move selection down
    pub fn select_next(&mut self) {
        let max = self.interfaces.len().saturating_sub(1);
        if self.selected_index < max {
            self.selected_index += 1;
            if self.selected_index >= self.scroll_offset + self.visible_rows {
                self.scroll_offset = self.selected_index - self.visible_rows + 1;
            }
        }
    }

    /// Page up
    pub fn page_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(self.visible_rows);
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        }
    }

    /// Page down
    pub fn page_down(&mut self) {
        let max = self.interfaces.len().saturating_sub(1);
        self.selected_index = (self.selected_index + self.visible_rows).min(max);
        if self.selected_index >= self.scroll_offset + self.visible_rows {
            self.scroll_offset = self.selected_index - self.visible_rows + 1;
        }
    }

    /// Home
    pub fn select_first(&mut self) {
        self.selected_index = 0;
        self.scroll_offset = 0;
    }

    /// End
    pub fn select_last(&mut self) {
        if !self.interfaces.is_empty() {
            let last = self.interfaces.len() - 1;
            self.selected_index = last;
            if last >= self.visible_rows {
                self.scroll_offset = last - self.visible_rows + 1;
            }
        }
    }
}
