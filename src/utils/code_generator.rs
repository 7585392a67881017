//! Shortcode generation and validation utilities.

use crate::error::AppError;
use rand::Rng;
use rand::distr::Alphanumeric;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

/// Length of generated shortcodes.
pub const CODE_LENGTH: usize = 6;

static CUSTOM_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]+$").expect("static regex"));

/// Generates a random shortcode.
///
/// Each of the [`CODE_LENGTH`] characters is drawn uniformly from the 62
/// ASCII letters and digits, giving 62^6 possible codes.
pub fn generate_code() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(CODE_LENGTH)
        .map(char::from)
        .collect()
}

/// Validates a caller-supplied shortcode.
///
/// The code must be non-empty and consist only of ASCII letters and digits.
/// Callers trim surrounding whitespace before validating.
///
/// # Errors
///
/// Returns [`AppError::InvalidInput`] if the code contains anything else.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if !CUSTOM_CODE_REGEX.is_match(code) {
        return Err(AppError::invalid_input(
            "Invalid shortcode",
            json!({ "shortcode": code, "reason": "must match ^[a-zA-Z0-9]+$" }),
        ));
    }

    Ok(())
}
