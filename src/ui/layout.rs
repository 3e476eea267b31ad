//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::constants::{FORM_PANE_HEIGHT, STATUS_BAR_HEIGHT};

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Calculate the main layout areas (form on top, table below, status bar last)
    #[must_use]
    pub fn main_layout(area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(FORM_PANE_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(STATUS_BAR_HEIGHT),
            ])
            .split(area)
            .to_vec()
    }

    /// Calculate the field rows inside the form pane.
    ///
    /// Three bordered input rows, each followed by a one-line error row:
    /// `[title, title_error, due_date, due_date_error, category, category_error]`.
    #[must_use]
    pub fn form_layout(area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(area)
            .to_vec()
    }

    /// Column widths for the task table (title, due date, category, delete hint)
    #[must_use]
    pub fn table_widths() -> [Constraint; 4] {
        [
            Constraint::Min(20),
            Constraint::Length(12),
            Constraint::Length(14),
            Constraint::Length(10),
        ]
    }

}
