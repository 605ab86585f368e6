//! Field validation rules
//!
//! Every rule maps a raw input value to a verdict: an empty string when the
//! value is acceptable, or a human-readable message otherwise. Rules are pure
//! and only ever look at the single value they are given.

use crate::state::FieldName;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

static PAN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").expect("PAN pattern compiles"));

const MIN_PASSWORD_LENGTH: usize = 8;
const PHONE_DIGITS: usize = 10;
const AADHAR_DIGITS: usize = 12;

/// A rule turns a raw value into an error message, empty when valid
pub type Rule = fn(&str) -> String;

/// A single field failing its rule
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FieldValidationError {
    pub field: FieldName,
    pub message: String,
}

/// Look up the rule for a field
pub fn rule_for(field: FieldName) -> Rule {
    match field {
        FieldName::FirstName => first_name,
        FieldName::LastName => last_name,
        FieldName::Username => username,
        FieldName::Email => email,
        FieldName::Password => password,
        FieldName::CountryCode => derived,
        FieldName::PhoneNumber => phone_number,
        FieldName::Country => country,
        FieldName::City => city,
        FieldName::PanNumber => pan_number,
        FieldName::AadharNumber => aadhar_number,
    }
}

/// Validate a value for a field given by its wire name.
///
/// Names that are not registration fields are always valid.
#[allow(dead_code)]
pub fn validate(name: &str, value: &str) -> String {
    match name.parse::<FieldName>() {
        Ok(field) => rule_for(field)(value),
        Err(_) => String::new(),
    }
}

/// Typed counterpart of [`validate`]
pub fn validate_field(field: FieldName, value: &str) -> Result<(), FieldValidationError> {
    let message = rule_for(field)(value);
    if message.is_empty() {
        Ok(())
    } else {
        Err(FieldValidationError { field, message })
    }
}

/// Turn a camel-case name into a label: `firstName` -> `First Name`
pub fn humanize(name: &str) -> String {
    let mut label = String::with_capacity(name.len() + 2);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            label.push(' ');
        }
        label.push(c);
    }

    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => label,
    }
}

fn required_text(name: &str, value: &str) -> String {
    if value.trim().is_empty() {
        format!("{} is required", humanize(name))
    } else {
        String::new()
    }
}

fn required_choice(message: &str, value: &str) -> String {
    if value.is_empty() {
        message.to_string()
    } else {
        String::new()
    }
}

fn first_name(value: &str) -> String {
    required_text("firstName", value)
}

fn last_name(value: &str) -> String {
    required_text("lastName", value)
}

fn username(value: &str) -> String {
    required_text("username", value)
}

fn country(value: &str) -> String {
    required_choice("Country is required", value)
}

fn city(value: &str) -> String {
    required_choice("City is required", value)
}

fn derived(_value: &str) -> String {
    String::new()
}

fn email(value: &str) -> String {
    if value.trim().is_empty() {
        return "Email is required".to_string();
    }
    if !EMAIL_PATTERN.is_match(value) {
        return "Please enter a valid email address".to_string();
    }
    String::new()
}

fn password(value: &str) -> String {
    if value.is_empty() {
        return "Password is required".to_string();
    }
    if value.chars().count() < MIN_PASSWORD_LENGTH {
        return format!("Password must be at least {MIN_PASSWORD_LENGTH} characters long");
    }
    let has_lower = value.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = value.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    if !(has_lower && has_upper && has_digit) {
        return "Password must contain at least one uppercase letter, one lowercase letter, and one number"
            .to_string();
    }
    String::new()
}

fn phone_number(value: &str) -> String {
    if value.trim().is_empty() {
        return "Phone number is required".to_string();
    }
    if digit_count(value) != PHONE_DIGITS {
        return "Please enter a valid 10-digit phone number".to_string();
    }
    String::new()
}

fn pan_number(value: &str) -> String {
    if value.trim().is_empty() {
        return "PAN number is required".to_string();
    }
    if !PAN_PATTERN.is_match(&value.to_uppercase()) {
        return "Please enter a valid PAN number (e.g., ABCDE1234F)".to_string();
    }
    String::new()
}

fn aadhar_number(value: &str) -> String {
    if value.trim().is_empty() {
        return "Aadhar number is required".to_string();
    }
    if digit_count(value) != AADHAR_DIGITS {
        return "Please enter a valid 12-digit Aadhar number".to_string();
    }
    String::new()
}

/// Number of ASCII digits left once everything else is stripped
fn digit_count(value: &str) -> usize {
    value.chars().filter(|c| c.is_ascii_digit()).count()
}
