/**
 * Field Validator
 *
 * This module provides the declarative field checks used by every request
 * payload before it reaches a handler.
 *
 * # Model
 *
 * A payload implements [`Validator`] and runs a list of independent checks
 * against its own fields. Each check evaluates a condition and, when the
 * condition does not hold, records a `(field, message)` problem in an
 * [`Evaluator`]. No check short-circuits another, so a single pass reports
 * every failing field at once.
 *
 * The evaluator never raises an error itself. Callers inspect
 * [`Evaluator::is_valid`] or take the accumulated [`Problems`].
 */

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

/// Field name → human-readable problem description.
///
/// An empty map means the payload is valid.
pub type Problems = BTreeMap<String, String>;

/// Shape check for email addresses.
pub static EMAIL_RX: Lazy<Regex> = Lazy::new(|| {
    // Hardcoded pattern, always valid.
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("hardcoded email regex is invalid")
});

/// Ambient values a payload may need while validating itself.
#[derive(Debug, Clone, Copy)]
pub struct ValidationContext {
    /// The instant time-relative rules are evaluated against
    pub now: DateTime<Utc>,
}

impl ValidationContext {
    /// Context evaluated at the current wall-clock time
    pub fn now() -> Self {
        Self { now: Utc::now() }
    }

    /// Context evaluated at a fixed instant
    pub fn at(now: DateTime<Utc>) -> Self {
        Self { now }
    }
}

impl Default for ValidationContext {
    fn default() -> Self {
        Self::now()
    }
}

/// A request type that can check its own fields.
pub trait Validator {
    /// Run every declared check and return the accumulated problems.
    fn validate(&self, ctx: &ValidationContext) -> Evaluator;
}

/// Accumulates field problems across independent checks.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Evaluator {
    problems: Problems,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` for `field` unless `ok` holds.
    ///
    /// The first problem recorded for a field is kept.
    pub fn check_field(&mut self, ok: bool, field: &str, message: &str) {
        if ok {
            return;
        }
        self.problems
            .entry(field.to_string())
            .or_insert_with(|| message.to_string());
    }

    pub fn is_valid(&self) -> bool {
        self.problems.is_empty()
    }

    pub fn problems(&self) -> &Problems {
        &self.problems
    }

    pub fn into_problems(self) -> Problems {
        self.problems
    }
}

/// True when the value has at least one non-whitespace character.
pub fn not_blank(value: &str) -> bool {
    !value.trim().is_empty()
}

/// True when the value has at least `n` characters (not bytes).
pub fn min_chars(value: &str, n: usize) -> bool {
    value.chars().count() >= n
}

/// True when the value has at most `n` characters (not bytes).
pub fn max_chars(value: &str, n: usize) -> bool {
    value.chars().count() <= n
}

/// True when the value's UTF-8 encoding is at most `n` bytes.
pub fn max_bytes(value: &str, n: usize) -> bool {
    value.len() <= n
}

pub fn matches(value: &str, rx: &Regex) -> bool {
    rx.is_match(value)
}
