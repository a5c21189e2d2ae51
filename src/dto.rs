//! Request types for the logging and habit flows.
//!
//! Conventions:
//! - `*Request` → deserialized from the presentation layer
//! - Validation is expressed via `validator` derive macros; failures map to
//!   `AppError::Validation` at the store boundary

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::models::mood::EmotionTag;

/// Create a mood entry. At most 3 tags, each from the emotion vocabulary.
#[derive(Debug, Deserialize, Validate)]
pub struct LogMoodRequest {
    #[validate(range(min = 0.0, max = 100.0, message = "Intensity must be between 0 and 100"))]
    pub intensity: f64,

    #[validate(
        length(max = 3, message = "At most 3 emotion tags per entry"),
        custom = "validate_emotion_tags"
    )]
    pub tags: Vec<String>,

    /// Truncated to 140 characters at write time; never rejected for length.
    pub note: Option<String>,

    /// Entry source tag. Default: "manual"
    pub source: Option<String>,
}

/// Edit an existing entry: rewrites intensity, tags, and note while the
/// identifier, source, and timestamp stay put. The 3-tag cap applies at
/// creation only.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateMoodRequest {
    #[validate(range(min = 0.0, max = 100.0, message = "Intensity must be between 0 and 100"))]
    pub intensity: f64,

    #[validate(custom = "validate_emotion_tags")]
    pub tags: Vec<String>,

    pub note: Option<String>,
}

/// Create a custom habit tracker.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateHabitRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    pub icon: Option<String>,

    pub color: Option<String>,

    pub unit: Option<String>,

    #[validate(range(min = 0.0, message = "Target must not be negative"))]
    pub target_value: Option<f64>,
}

/// Field-wise habit update; omitted fields keep their current values.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateHabitRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,

    pub icon: Option<String>,

    pub color: Option<String>,

    pub unit: Option<String>,

    #[validate(range(min = 0.0, message = "Target must not be negative"))]
    pub target_value: Option<f64>,

    pub is_active: Option<bool>,
}

fn validate_emotion_tags(tags: &Vec<String>) -> Result<(), ValidationError> {
    for tag in tags {
        if EmotionTag::from_label(tag).is_none() {
            return Err(ValidationError::new("unknown_emotion_tag"));
        }
    }
    Ok(())
}
