// ============================
// crates/backend-lib/src/form.rs
// ============================
//! In-memory form model: two fields and their derived validity.

use crate::validation::{FieldErrors, FieldKind};

/// A single input together with its current violations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    kind: FieldKind,
    value: String,
    errors: FieldErrors,
}

impl Field {
    fn new(kind: FieldKind) -> Self {
        let value = String::new();
        let errors = kind.validate(&value);
        Self {
            kind,
            value,
            errors,
        }
    }

    fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.errors = self.kind.validate(&self.value);
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Email and password fields.
///
/// Validity is recomputed on every write, so reads never see stale errors.
/// A fresh model is empty and therefore invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormModel {
    email: Field,
    password: Field,
}

impl Default for FormModel {
    fn default() -> Self {
        Self::new()
    }
}

impl FormModel {
    pub fn new() -> Self {
        Self {
            email: Field::new(FieldKind::Email),
            password: Field::new(FieldKind::Password),
        }
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email.set(value);
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password.set(value);
    }

    pub fn set_field(&mut self, kind: FieldKind, value: impl Into<String>) {
        match kind {
            FieldKind::Email => self.set_email(value),
            FieldKind::Password => self.set_password(value),
        }
    }

    pub fn field(&self, kind: FieldKind) -> &Field {
        match kind {
            FieldKind::Email => &self.email,
            FieldKind::Password => &self.password,
        }
    }

    pub fn email(&self) -> &str {
        self.email.value()
    }

    pub fn password(&self) -> &str {
        self.password.value()
    }

    pub fn errors(&self, kind: FieldKind) -> &FieldErrors {
        self.field(kind).errors()
    }

    /// True iff neither field has an active violation
    pub fn is_valid(&self) -> bool {
        self.email.is_valid() && self.password.is_valid()
    }
}
