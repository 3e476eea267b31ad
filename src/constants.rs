//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Title length bounds, counted in characters
pub const TITLE_MIN_CHARS: usize = 3;
pub const TITLE_MAX_CHARS: usize = 50;

// Default category set, used when the config file does not provide one
pub const DEFAULT_CATEGORIES: &[&str] = &["Work", "Personal", "Errands", "Study"];

// UI Messages
pub const EMPTY_TASKS_MESSAGE: &str = "No tasks yet.";
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";

// Status Messages
pub const STATUS_TASK_CREATED: &str = "✅ Task created";
pub const STATUS_TASK_DELETED: &str = "✅ Task deleted";
pub const STATUS_TASK_NOT_FOUND: &str = "❌ No such task";

// Form field titles
pub const FIELD_TITLE: &str = "Title";
pub const FIELD_DUE_DATE: &str = "Due Date";
pub const FIELD_DUE_DATE_HINT: &str = "Due Date (YYYY-MM-DD)";
pub const FIELD_CATEGORY: &str = "Category";

// Placeholder shown while no category has been picked
pub const CATEGORY_UNSET: &str = "(select with ←/→)";

// UI Layout Constants
/// Height of the quick-add form pane in rows, borders included
pub const FORM_PANE_HEIGHT: u16 = 14;
/// Height of the status bar in rows
pub const STATUS_BAR_HEIGHT: u16 = 1;
