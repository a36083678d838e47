//! Field rules shared by every validation profile.
//!
//! Each rule is a pure predicate over the raw string value of one field. An
//! empty value is only ever judged by [`Rule::Required`]; every other rule
//! treats an empty value as "not supplied" and stays silent.

use std::num::IntErrorKind;

use uuid::Uuid;

use crate::{
    domain::value_objects::{E164_REFERENCE_URL, PhoneNumber},
    presentation::http::validators::FieldErrors,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required,
    /// E.164 phone number.
    PhoneNumber,
    /// Minimum length in characters.
    MinLength(usize),
    /// Maximum length in characters.
    MaxLength(usize),
    /// ASCII digits with an optional leading `-`.
    Numeric,
    /// Lower bound of a numeric value; skipped when the value is not numeric.
    Min(i64),
    /// Upper bound of a numeric value; skipped when the value is not numeric.
    Max(i64),
    /// Exact, case-sensitive match against a fixed set.
    OneOf(&'static [&'static str]),
    /// Hyphenated UUID of any version.
    Uuid,
}

impl Rule {
    /// Returns the failure message, or `None` when `value` satisfies the rule.
    pub fn check(&self, field: &str, value: &str) -> Option<String> {
        let passed = match self {
            Rule::Required => !value.is_empty(),
            Rule::PhoneNumber => PhoneNumber::is_valid(value),
            Rule::MinLength(min) => value.chars().count() >= *min,
            Rule::MaxLength(max) => value.chars().count() <= *max,
            Rule::Numeric => parse_integer(value).is_some(),
            Rule::Min(min) => parse_integer(value).is_none_or(|number| number >= *min),
            Rule::Max(max) => parse_integer(value).is_none_or(|number| number <= *max),
            Rule::OneOf(allowed) => allowed.iter().any(|candidate| *candidate == value),
            Rule::Uuid => value.len() == 36 && Uuid::try_parse(value).is_ok(),
        };

        if passed {
            None
        } else {
            Some(self.message(field))
        }
    }

    fn message(&self, field: &str) -> String {
        match self {
            Rule::Required => format!("The {field} field is required"),
            Rule::PhoneNumber => format!(
                "The '{field}' field must be a valid E.164 phone number: {E164_REFERENCE_URL}"
            ),
            Rule::MinLength(min) => format!("The {field} field must be minimum {min} char"),
            Rule::MaxLength(max) => format!("The {field} field must be maximum {max} char"),
            Rule::Numeric => format!("The {field} field must be numeric"),
            Rule::Min(min) => format!("The {field} field must be minimum {min}"),
            Rule::Max(max) => format!("The {field} field must be maximum {max}"),
            Rule::OneOf(allowed) => {
                format!("The {field} field must be one of {}", allowed.join(", "))
            }
            Rule::Uuid => format!("The {field} field must contain valid UUID"),
        }
    }
}

/// Runs `rules` against one field and records every failure under `field`.
pub fn apply(errors: &mut FieldErrors, field: &str, value: &str, rules: &[Rule]) {
    if value.is_empty() {
        if rules.contains(&Rule::Required) {
            errors.add(field, Rule::Required.message(field));
        }
        return;
    }

    for rule in rules {
        if let Some(message) = rule.check(field, value) {
            errors.add(field, message);
        }
    }
}

/// Parses a value accepted by [`Rule::Numeric`].
///
/// Values beyond the `i64` range saturate, so they still fail the matching
/// bound instead of being reported as non-numeric.
pub fn parse_integer(value: &str) -> Option<i64> {
    let digits = value.strip_prefix('-').unwrap_or(value);
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }

    match value.parse::<i64>() {
        Ok(number) => Some(number),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}
