//! Input validation helpers
//!
//! Required-field and format checks the admin and checkout forms run before
//! submitting. The backend re-validates everything; these only stop obviously
//! incomplete payloads from leaving the client.

use chrono::NaiveDate;

use crate::error::{ValidationError, ValidationResult};

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: venue, outlet, event, offer, organization
pub const MAX_NAME_LEN: usize = 200;

/// Long-form descriptions
pub const MAX_DESCRIPTION_LEN: usize = 5000;

/// Short identifiers: phone, PAN, coupon code, etc.
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// URLs / image paths
pub const MAX_URL_LEN: usize = 2048;

/// Addresses
pub const MAX_ADDRESS_LEN: usize = 500;

// ── Generic helpers ─────────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> ValidationResult {
    if value.trim().is_empty() {
        return Err(ValidationError::required(field));
    }
    check_len(value, field, max_len)
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> ValidationResult {
    match value {
        Some(v) => check_len(v, field, max_len),
        None => Ok(()),
    }
}

fn check_len(value: &str, field: &str, max_len: usize) -> ValidationResult {
    let len = value.chars().count();
    if len > max_len {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            len,
            max: max_len,
        });
    }
    Ok(())
}

// ── Format helpers ──────────────────────────────────────────────────

/// Lowercase ASCII alphanumerics separated by single hyphens
pub fn validate_slug(value: &str, field: &str) -> ValidationResult {
    validate_required_text(value, field, MAX_NAME_LEN)?;
    let well_formed = !value.starts_with('-')
        && !value.ends_with('-')
        && !value.contains("--")
        && value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if !well_formed {
        return Err(ValidationError::invalid(
            field,
            "use lowercase letters, digits and single hyphens",
        ));
    }
    Ok(())
}

pub fn validate_email(value: &str, field: &str) -> ValidationResult {
    validate_required_text(value, field, MAX_EMAIL_LEN)?;
    let valid = match value.trim().split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    };
    if !valid {
        return Err(ValidationError::invalid(field, "not a valid email address"));
    }
    Ok(())
}

/// 10-digit mobile number, optionally prefixed with `+91`
pub fn validate_phone(value: &str, field: &str) -> ValidationResult {
    validate_required_text(value, field, MAX_SHORT_TEXT_LEN)?;
    let trimmed = value.trim();
    let digits = trimmed.strip_prefix("+91").unwrap_or(trimmed).trim();
    if digits.len() != 10 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::invalid(field, "must be a 10-digit mobile number"));
    }
    Ok(())
}

/// One-time password: 4 to 6 digits
pub fn validate_otp(value: &str, field: &str) -> ValidationResult {
    validate_required_text(value, field, MAX_SHORT_TEXT_LEN)?;
    let otp = value.trim();
    if !(4..=6).contains(&otp.len()) || !otp.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::invalid(field, "must be 4 to 6 digits"));
    }
    Ok(())
}

/// Bank IFSC: 4 letters, a literal `0`, then 6 alphanumerics
pub fn validate_ifsc(value: &str, field: &str) -> ValidationResult {
    validate_required_text(value, field, MAX_SHORT_TEXT_LEN)?;
    let code = value.trim().as_bytes();
    let valid = code.len() == 11
        && code[..4].iter().all(u8::is_ascii_uppercase)
        && code[4] == b'0'
        && code[5..].iter().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit());
    if !valid {
        return Err(ValidationError::invalid(field, "not a valid IFSC code"));
    }
    Ok(())
}

/// GSTIN: 15 uppercase alphanumerics starting with a 2-digit state code
pub fn validate_gstin(value: &str, field: &str) -> ValidationResult {
    validate_required_text(value, field, MAX_SHORT_TEXT_LEN)?;
    let code = value.trim().as_bytes();
    let valid = code.len() == 15
        && code[..2].iter().all(u8::is_ascii_digit)
        && code
            .iter()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit());
    if !valid {
        return Err(ValidationError::invalid(field, "not a valid GSTIN"));
    }
    Ok(())
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(value: &str, field: &str) -> ValidationResult<NaiveDate> {
    if value.trim().is_empty() {
        return Err(ValidationError::required(field));
    }
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError::invalid(field, "expected a date as YYYY-MM-DD"))
}

/// `end` must not fall before `start`
pub fn validate_date_range(start: NaiveDate, end: NaiveDate, field: &str) -> ValidationResult {
    if end < start {
        return Err(ValidationError::invalid(field, "must not be before the start date"));
    }
    Ok(())
}
