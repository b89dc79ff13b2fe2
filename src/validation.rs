//! Validation helpers shared by the timer and the task list
//!
//! This module contains the only validation rules the widgets enforce:
//! task text must be non-empty after trimming, and timer durations must be
//! positive whole minutes.

use thiserror::Error;

/// A rejected user input
///
/// The `Display` text is the message shown to the user in a blocking alert.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A new task was submitted with empty or whitespace-only text
    #[error("Please enter a task!")]
    EmptyTask,
    /// An edited task was saved with empty or whitespace-only text
    #[error("Task cannot be empty!")]
    EmptyEdit,
    /// A timer duration was zero or too large to represent in seconds
    #[error("Invalid {field} duration: {minutes} minute(s). Use a positive number of minutes")]
    InvalidDuration { field: &'static str, minutes: u32 },
    /// An unknown task filter name
    #[error("Invalid filter '{0}'. Valid filters: all, active, completed")]
    InvalidFilter(String),
}

/// Trim task text and reject it if nothing is left
///
/// # Arguments
/// * `text` - Raw text as typed by the user
/// * `on_empty` - Error returned for empty input (differs between add and edit)
///
/// # Returns
/// The trimmed text
pub fn normalize_task_text(text: &str, on_empty: ValidationError) -> Result<String, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(on_empty);
    }
    Ok(trimmed.to_string())
}

/// Convert a duration in minutes to seconds, rejecting zero
///
/// # Arguments
/// * `field` - Name of the setting, used in the error message
/// * `minutes` - Duration in whole minutes
pub fn minutes_to_seconds(field: &'static str, minutes: u32) -> Result<u32, ValidationError> {
    if minutes == 0 {
        return Err(ValidationError::InvalidDuration { field, minutes });
    }
    minutes
        .checked_mul(60)
        .ok_or(ValidationError::InvalidDuration { field, minutes })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_task_text_trims() {
        assert_eq!(
            normalize_task_text("  buy milk \n", ValidationError::EmptyTask),
            Ok("buy milk".to_string())
        );
    }

    #[test]
    fn test_normalize_task_text_rejects_blank() {
        assert_eq!(
            normalize_task_text("", ValidationError::EmptyTask),
            Err(ValidationError::EmptyTask)
        );
        assert_eq!(
            normalize_task_text(" \t ", ValidationError::EmptyEdit),
            Err(ValidationError::EmptyEdit)
        );
    }

    #[test]
    fn test_minutes_to_seconds() {
        assert_eq!(minutes_to_seconds("work", 25), Ok(1500));
        assert!(matches!(
            minutes_to_seconds("work", 0),
            Err(ValidationError::InvalidDuration { field: "work", .. })
        ));
        assert!(minutes_to_seconds("work", u32::MAX).is_err());
    }

    #[test]
    fn test_error_messages_are_user_facing() {
        assert_eq!(ValidationError::EmptyTask.to_string(), "Please enter a task!");
        assert_eq!(ValidationError::EmptyEdit.to_string(), "Task cannot be empty!");
    }
}
