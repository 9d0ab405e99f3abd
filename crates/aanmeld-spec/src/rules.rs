use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

/// How a field failed its rule; the caller picks the matching message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// Required but empty/unset.
    Missing,
    /// Present but malformed.
    Invalid,
}

static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static pattern"));

static PHONE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9()\-]+$").expect("static pattern"));

/// Required free text: trimmed length must reach `min_len`.
pub fn required_text(value: &str, min_len: usize) -> Result<(), Violation> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Violation::Missing);
    }
    if trimmed.chars().count() < min_len {
        return Err(Violation::Invalid);
    }
    Ok(())
}

/// Minimal email shape check: `local@domain.tld`, no whitespace, no second `@`.
/// Deliberately not RFC 5322.
pub fn email_shape(value: &str) -> Result<(), Violation> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Violation::Missing);
    }
    if EMAIL_SHAPE.is_match(trimmed) {
        Ok(())
    } else {
        Err(Violation::Invalid)
    }
}

/// Canonical phone rule: strip whitespace, allow an optional leading `+` and
/// interspersed `-`/parentheses, and demand at least 8 digits.
pub fn phone_shape(value: &str) -> Result<(), Violation> {
    let stripped: String = value.chars().filter(|ch| !ch.is_whitespace()).collect();
    if stripped.is_empty() {
        return Err(Violation::Missing);
    }
    let digits = stripped.chars().filter(char::is_ascii_digit).count();
    if PHONE_SHAPE.is_match(&stripped) && digits >= 8 {
        Ok(())
    } else {
        Err(Violation::Invalid)
    }
}

/// Required single-select: any non-empty value passes; membership in the
/// allowed choice list is checked by the validation engine.
pub fn required_choice(value: &str) -> Result<(), Violation> {
    if value.trim().is_empty() {
        Err(Violation::Missing)
    } else {
        Ok(())
    }
}

/// ISO date whose derived whole-year age must land in 16..=120.
pub fn plausible_birth_date(value: &str, today: NaiveDate) -> Result<(), Violation> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Violation::Missing);
    }
    let Ok(birth) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") else {
        return Err(Violation::Invalid);
    };
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    if (16..=120).contains(&age) {
        Ok(())
    } else {
        Err(Violation::Invalid)
    }
}

/// Optional amount: empty is permitted, anything else must parse as a number.
pub fn optional_numeric(value: &str) -> Result<(), Violation> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(());
    }
    match trimmed.parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => Ok(()),
        _ => Err(Violation::Invalid),
    }
}
