// ============================
// crates/backend-lib/src/validation/mod.rs
// ============================
//! Field validation for the login form.
//!
//! Only two field kinds exist, so the rules are a plain match over
//! [`FieldKind`] rather than a validator combinator.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Shape an email must have: exactly one `@`, no spaces anywhere.
pub const EMAIL_PATTERN: &str = "[^ @]*@[^ @]*";

/// Inline message shown under an invalid email after submission.
pub const EMAIL_ERROR_MESSAGE: &str = "Please enter a valid email.";
/// Inline message shown under an invalid password after submission.
pub const PASSWORD_ERROR_MESSAGE: &str = "Please enter a valid password.";

// The pattern must match the whole value, not a substring of it.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^(?:{EMAIL_PATTERN})$")).expect("email pattern is a valid regex")
});

/// The two fields of the login form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Email,
    Password,
}

impl FieldKind {
    /// Element id (and form field name) of the input
    pub fn id(self) -> &'static str {
        match self {
            FieldKind::Email => "email",
            FieldKind::Password => "password",
        }
    }

    /// Element id of the inline error node
    pub fn error_id(self) -> &'static str {
        match self {
            FieldKind::Email => "email-error",
            FieldKind::Password => "password-error",
        }
    }

    pub fn error_message(self) -> &'static str {
        match self {
            FieldKind::Email => EMAIL_ERROR_MESSAGE,
            FieldKind::Password => PASSWORD_ERROR_MESSAGE,
        }
    }

    /// Run every rule of this field kind against `value`
    pub fn validate(self, value: &str) -> FieldErrors {
        match self {
            FieldKind::Email => validate_email(value),
            FieldKind::Password => validate_password(value),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Details of a failed pattern rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMismatch {
    pub required_pattern: &'static str,
    pub actual_value: String,
}

/// Which rules a field currently violates.
///
/// Each rule is tracked independently, so a value can fail `pattern` without
/// failing `required`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub required: bool,
    pub pattern: Option<PatternMismatch>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        !self.required && self.pattern.is_none()
    }

    pub fn has_required(&self) -> bool {
        self.required
    }

    pub fn has_pattern(&self) -> bool {
        self.pattern.is_some()
    }
}

/// Whether `value` has the simplified email shape
pub fn matches_email_pattern(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Validate an email: non-empty, and the pattern when non-empty
pub fn validate_email(value: &str) -> FieldErrors {
    if value.is_empty() {
        // An empty value is reported as missing only; the pattern rule
        // does not apply to it.
        return FieldErrors {
            required: true,
            pattern: None,
        };
    }

    let pattern = (!matches_email_pattern(value)).then(|| PatternMismatch {
        required_pattern: EMAIL_PATTERN,
        actual_value: value.to_string(),
    });

    FieldErrors {
        required: false,
        pattern,
    }
}

/// Validate a password: non-empty
pub fn validate_password(value: &str) -> FieldErrors {
    FieldErrors {
        required: value.is_empty(),
        pattern: None,
    }
}
