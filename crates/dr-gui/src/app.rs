//! Application state and the actions behind each control.

use std::path::PathBuf;

use dr_core::{
    MAX_TARGET, MIN_TARGET, ProbabilityTable, ReachConfig, ReachError, Reachability,
    TargetNumber, export_csv, format, reachability,
};

use crate::theme::Theme;

/// Number selected when the window opens.
pub const DEFAULT_SELECTION: u32 = 60;
/// Export path used when none is given on the command line.
pub const DEFAULT_EXPORT_PATH: &str = "day_probabilities.csv";

/// Severity of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// Something completed.
    Info,
    /// Waiting for the user to confirm.
    Warning,
    /// Something failed; the app keeps running.
    Error,
}

/// One-line message shown at the bottom of the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    /// Severity.
    pub kind: StatusKind,
    /// Text to show.
    pub message: String,
}

/// Everything the window shows, and the actions that change it.
pub struct AppState {
    /// Day range and display precision.
    pub config: ReachConfig,
    /// Probability of every number, for the chart.
    pub table: ProbabilityTable,
    /// Insight text, computed once from the table.
    pub insight_lines: Vec<String>,
    /// Window heading.
    pub heading: String,
    /// Number chosen in the dropdown.
    pub selected: TargetNumber,
    /// Result of the last check, if any.
    pub result: Option<Reachability>,
    /// Whether the dark palette is active.
    pub dark_mode: bool,
    /// Where "Export All to CSV" writes.
    pub export_path: PathBuf,
    /// Last status message.
    pub status: Option<Status>,
    /// Whether the app should quit.
    pub should_quit: bool,
    confirm_overwrite: bool,
}

impl AppState {
    /// Create the initial state.
    pub fn new(config: ReachConfig, heading: String, export_path: PathBuf) -> Self {
        let table = config.table();
        let insight_lines = format::insight_lines(&table.insights(), &config);
        let selected = TargetNumber::new(DEFAULT_SELECTION).unwrap_or(TargetNumber::MIN);
        Self {
            config,
            table,
            insight_lines,
            heading,
            selected,
            result: None,
            dark_mode: false,
            export_path,
            status: None,
            should_quit: false,
            confirm_overwrite: false,
        }
    }

    /// Active palette.
    pub fn theme(&self) -> &'static Theme {
        Theme::for_mode(self.dark_mode)
    }

    /// Dropdown labels, one per number.
    pub fn labels() -> Vec<String> {
        TargetNumber::all().map(|t| t.to_string()).collect()
    }

    /// Zero-based dropdown index of the selection.
    pub fn selected_index(&self) -> usize {
        (self.selected.get() - MIN_TARGET) as usize
    }

    /// Select the number at a zero-based dropdown index.
    pub fn select_index(&mut self, index: usize) {
        let number = u32::try_from(index)
            .ok()
            .and_then(|i| i.checked_add(MIN_TARGET));
        if let Some(target) = number.and_then(|n| TargetNumber::new(n).ok()) {
            self.selected = target;
            self.confirm_overwrite = false;
        }
    }

    /// Move the selection up or down, stopping at the ends.
    pub fn step_selection(&mut self, delta: i64) {
        let last = i64::from(MAX_TARGET - MIN_TARGET);
        let index = (self.selected_index() as i64 + delta).clamp(0, last);
        self.select_index(index as usize);
    }

    /// Compute reachability of the selected number.
    pub fn check(&mut self) {
        self.result = Some(reachability(self.selected, self.config.days));
        self.confirm_overwrite = false;
    }

    /// Lines for the result panel.
    pub fn result_lines(&self) -> Vec<String> {
        match &self.result {
            Some(result) => format::summary_lines(result, &self.config),
            None => vec!["Choose a number then click \"Check Probability\"".to_string()],
        }
    }

    /// Whether the next export click will replace an existing file.
    pub fn awaiting_overwrite(&self) -> bool {
        self.confirm_overwrite
    }

    /// Write the table to the export path.
    ///
    /// An existing file is only replaced on the click after a warning.
    pub fn export(&mut self) {
        let overwrite = self.confirm_overwrite;
        self.confirm_overwrite = false;
        self.status = Some(
            match export_csv(&self.table, &self.export_path, &self.config, overwrite) {
                Ok(()) => Status {
                    kind: StatusKind::Info,
                    message: format!("CSV exported to: {}", self.export_path.display()),
                },
                Err(ReachError::ExportExists(path)) => {
                    self.confirm_overwrite = true;
                    Status {
                        kind: StatusKind::Warning,
                        message: format!(
                            "{} already exists. Click Export again to overwrite it.",
                            path.display()
                        ),
                    }
                }
                Err(e) => {
                    tracing::error!(error = %e, "export failed");
                    Status {
                        kind: StatusKind::Error,
                        message: format!("Failed to save CSV: {e}"),
                    }
                }
            },
        );
    }

    /// Switch between light and dark palettes.
    pub fn toggle_dark(&mut self) {
        self.dark_mode = !self.dark_mode;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn app_in(dir: &TempDir) -> AppState {
        AppState::new(
            ReachConfig::default(),
            "Heading".into(),
            dir.path().join("out.csv"),
        )
    }

    #[test]
    fn starts_on_sixty_without_result() {
        let dir = TempDir::new().unwrap();
        let app = app_in(&dir);
        assert_eq!(app.selected.get(), 60);
        assert_eq!(app.selected_index(), 59);
        assert!(app.result.is_none());
        assert!(app.result_lines()[0].contains("Check Probability"));
        assert_eq!(app.insight_lines.len(), 3);
    }

    #[test]
    fn check_computes_selected() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);
        app.select_index(11);
        app.check();
        let lines = app.result_lines();
        assert_eq!(lines[0], "Number 12 is reachable by 6 day(s) out of 31.");
        assert_eq!(lines[2], "Days: [1, 2, 3, 4, 6, 12]");
    }

    #[test]
    fn selection_is_bounded() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);
        app.select_index(65);
        assert_eq!(app.selected.get(), 60);
        app.step_selection(100);
        assert_eq!(app.selected.get(), 65);
        app.step_selection(-200);
        assert_eq!(app.selected.get(), 1);
        app.step_selection(1);
        assert_eq!(app.selected.get(), 2);
    }

    #[test]
    fn labels_cover_range() {
        let labels = AppState::labels();
        assert_eq!(labels.len(), 65);
        assert_eq!(labels[0], "1");
        assert_eq!(labels[64], "65");
    }

    #[test]
    fn export_writes_then_asks_before_overwrite() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);

        app.export();
        assert_eq!(app.status.as_ref().unwrap().kind, StatusKind::Info);
        assert_eq!(dr_core::import_csv(&app.export_path).unwrap().len(), 65);

        std::fs::write(&app.export_path, "edited").unwrap();
        app.export();
        assert_eq!(app.status.as_ref().unwrap().kind, StatusKind::Warning);
        assert!(app.awaiting_overwrite());
        assert_eq!(std::fs::read_to_string(&app.export_path).unwrap(), "edited");

        app.export();
        assert_eq!(app.status.as_ref().unwrap().kind, StatusKind::Info);
        assert!(!app.awaiting_overwrite());
        assert_eq!(dr_core::import_csv(&app.export_path).unwrap().len(), 65);
    }

    #[test]
    fn other_actions_cancel_pending_overwrite() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);
        std::fs::write(&app.export_path, "edited").unwrap();
        app.export();
        assert!(app.awaiting_overwrite());
        app.check();
        assert!(!app.awaiting_overwrite());
    }

    #[test]
    fn export_failure_keeps_app_usable() {
        let dir = TempDir::new().unwrap();
        let mut app = AppState::new(
            ReachConfig::default(),
            "Heading".into(),
            dir.path().join("missing").join("out.csv"),
        );
        app.export();
        let status = app.status.clone().unwrap();
        assert_eq!(status.kind, StatusKind::Error);
        assert!(status.message.starts_with("Failed to save CSV"));
        app.check();
        assert!(app.result.is_some());
    }

    #[test]
    fn dark_mode_toggles_theme() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);
        assert_eq!(app.theme(), &crate::theme::LIGHT);
        app.toggle_dark();
        assert_eq!(app.theme(), &crate::theme::DARK);
        app.toggle_dark();
        assert!(!app.dark_mode);
    }
}
