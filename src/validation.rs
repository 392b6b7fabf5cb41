//! Input validation for seating configurations.
//!
//! Checks a configuration for inconsistencies before allocation. Detects:
//! - Non-positive layout dimensions
//! - Pinned or disabled seats outside the seat universe
//! - Pinned seats that are also disabled
//! - Pinned or distanced names missing from the roster
//! - Duplicate roster names
//!
//! The checks are advisory. The allocator never calls them and tolerates
//! every condition listed here by omission.

use crate::models::SeatingConfig;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// `rows` or `cols` is zero.
    InvalidDimensions,
    /// A pinned or disabled seat index is not below the seat count.
    SeatOutOfRange,
    /// A seat is both pinned and disabled.
    PinnedSeatDisabled,
    /// A pinned or distanced name is not on the roster.
    UnknownPerson,
    /// Two roster entries share a name and cannot be told apart.
    DuplicateName,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a seating configuration.
///
/// Checks:
/// 1. `rows > 0` and `cols > 0`
/// 2. Roster names are unique
/// 3. Pinned seats are in range and not disabled
/// 4. Disabled seats are in range
/// 5. Pinned and distanced names appear on the roster
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_config(config: &SeatingConfig) -> ValidationResult {
    let mut errors = Vec::new();
    let layout = config.seat_layout();
    let total = layout.total_seats();

    if !layout.is_well_formed() {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidDimensions,
            format!(
                "Layout dimensions must be positive (rows={}, cols={})",
                config.rows, config.cols
            ),
        ));
    }

    let mut roster = HashSet::new();
    for name in &config.people {
        if !roster.insert(name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate name on roster: {name}"),
            ));
        }
    }

    for (&seat, name) in &config.pre_assigned {
        if seat >= total {
            errors.push(ValidationError::new(
                ValidationErrorKind::SeatOutOfRange,
                format!("Pinned seat {seat} for '{name}' is outside {total} seats"),
            ));
        }
        if config.disabled_seats.contains(&seat) {
            errors.push(ValidationError::new(
                ValidationErrorKind::PinnedSeatDisabled,
                format!("Seat {seat} is pinned to '{name}' but disabled"),
            ));
        }
        if !roster.contains(name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownPerson,
                format!("Pinned name '{name}' is not on the roster"),
            ));
        }
    }

    for &seat in &config.disabled_seats {
        if seat >= total {
            errors.push(ValidationError::new(
                ValidationErrorKind::SeatOutOfRange,
                format!("Disabled seat {seat} is outside {total} seats"),
            ));
        }
    }

    for name in &config.distanced_names {
        if !roster.contains(name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownPerson,
                format!("Distanced name '{name}' is not on the roster"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
