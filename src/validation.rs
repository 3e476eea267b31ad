//! Field validation for task input.
//!
//! Validation is expressed as pure functions from raw field values to a
//! structured per-field result, decoupled from any widget code. The form
//! component runs [`validate_draft`] on submission and renders whatever
//! errors come back next to the offending fields.

use thiserror::Error;

use crate::constants::{TITLE_MAX_CHARS, TITLE_MIN_CHARS};
use crate::task::TaskDraft;
use crate::utils::date;

/// A single field-level validation failure.
///
/// The `Display` form of each variant is the exact message shown to the
/// user beneath the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Title should be at least 3 characters.")]
    TitleTooShort,
    #[error("Title should be at most 50 characters.")]
    TitleTooLong,
    #[error("Invalid date. The format should be YYYY-MM-DD.")]
    InvalidDate,
    #[error("Category is required.")]
    CategoryRequired,
}

/// Per-field outcome of validating a draft as a unit.
///
/// `None` means the field passed. All three rules are evaluated
/// independently so every failing field surfaces at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub title: Option<FieldError>,
    pub due_date: Option<FieldError>,
    pub category: Option<FieldError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.title.is_none() && self.due_date.is_none() && self.category.is_none()
    }
}

/// Title must be between 3 and 50 characters inclusive.
pub fn validate_title(title: &str) -> Result<(), FieldError> {
    let length = title.chars().count();
    if length < TITLE_MIN_CHARS {
        return Err(FieldError::TitleTooShort);
    }
    if length > TITLE_MAX_CHARS {
        return Err(FieldError::TitleTooLong);
    }
    Ok(())
}

/// Due date must be the canonical YYYY-MM-DD form of a real calendar date.
pub fn validate_due_date(due_date: &str) -> Result<(), FieldError> {
    if date::is_canonical_ymd(due_date) {
        Ok(())
    } else {
        Err(FieldError::InvalidDate)
    }
}

/// Category must be non-empty and one of the configured values.
pub fn validate_category(category: &str, allowed: &[String]) -> Result<(), FieldError> {
    if category.is_empty() || !allowed.iter().any(|c| c == category) {
        return Err(FieldError::CategoryRequired);
    }
    Ok(())
}

/// Validate a whole draft against the configured category set.
pub fn validate_draft(draft: &TaskDraft, allowed_categories: &[String]) -> ValidationReport {
    ValidationReport {
        title: validate_title(&draft.title).err(),
        due_date: validate_due_date(&draft.due_date).err(),
        category: validate_category(&draft.category, allowed_categories).err(),
    }
}
