// =========================
// tests/unit/form_tests.rs
// =========================
//! Unit tests for the form model
use login_form::validation::FieldKind;
use login_form::FormModel;

#[test]
fn test_empty_form_is_invalid() {
    let form = FormModel::new();

    assert!(!form.is_valid());
    assert!(form.errors(FieldKind::Email).required);
    assert!(form.errors(FieldKind::Password).required);
}

#[test]
fn test_email_format() {
    let mut form = FormModel::new();
    form.set_email("test");

    let errors = form.errors(FieldKind::Email);
    assert!(!errors.required);
    assert!(errors.pattern.is_some());
    assert!(!form.field(FieldKind::Email).is_valid());
}

#[test]
fn test_email_format_correctly() {
    let mut form = FormModel::new();
    form.set_email("test@test.com");

    let errors = form.errors(FieldKind::Email);
    assert!(form.field(FieldKind::Email).is_valid());
    assert!(!errors.required);
    assert!(errors.pattern.is_none());
}

#[test]
fn test_malformed_emails_report_pattern_not_required() {
    for email in ["test", "te st@x", "a@b@c", "no-at-sign.com", "x@ y"] {
        let mut form = FormModel::new();
        form.set_email(email);

        let errors = form.errors(FieldKind::Email);
        assert!(errors.pattern.is_some(), "{email:?} should fail the pattern");
        assert!(!errors.required, "{email:?} is not empty");
    }
}

#[test]
fn test_valid_credentials_make_form_valid() {
    let mut form = FormModel::new();
    form.set_email("test@test.com");
    form.set_password("123456");

    assert!(form.is_valid());
}
