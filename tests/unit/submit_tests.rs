// ===========================
// tests/unit/submit_tests.rs
// ===========================
//! Unit tests for the submission controller
use crate::test_utils::RecordingAuth;
use login_form::validation::FieldKind;
use login_form::LoginForm;

#[tokio::test]
async fn test_no_messages_before_submit() {
    let auth = RecordingAuth::succeeding();
    let mut form = LoginForm::new(auth);
    form.set_email("test");

    assert!(!form.submitted());
    assert!(form.visible_error(FieldKind::Email).is_none());
    assert!(form.visible_error(FieldKind::Password).is_none());
}

#[tokio::test]
async fn test_messages_match_invalid_fields_after_submit() {
    let auth = RecordingAuth::succeeding();

    let mut both = LoginForm::new(auth.clone());
    both.on_submit();
    assert_eq!(
        both.visible_error(FieldKind::Email),
        Some("Please enter a valid email.")
    );
    assert_eq!(
        both.visible_error(FieldKind::Password),
        Some("Please enter a valid password.")
    );

    let mut email_only = LoginForm::new(auth.clone());
    email_only.set_password("123456");
    email_only.on_submit();
    assert!(email_only.visible_error(FieldKind::Email).is_some());
    assert!(email_only.visible_error(FieldKind::Password).is_none());

    let mut password_only = LoginForm::new(auth.clone());
    password_only.set_email("test@test.com");
    password_only.on_submit();
    assert!(password_only.visible_error(FieldKind::Email).is_none());
    assert!(password_only.visible_error(FieldKind::Password).is_some());

    assert!(auth.calls().is_empty());
}

#[tokio::test]
async fn test_valid_submit_invokes_login_with_values() {
    let auth = RecordingAuth::succeeding();
    let mut form = LoginForm::new(auth.clone());
    form.set_email("test@test.com");
    form.set_password("123456");

    form.on_submit().unwrap().finished().await;

    assert_eq!(
        auth.calls(),
        vec![("test@test.com".to_string(), "123456".to_string())]
    );
}

#[tokio::test]
async fn test_repeated_submit_is_not_deduplicated() {
    let auth = RecordingAuth::failing();
    let mut form = LoginForm::new(auth.clone());
    form.set_email("test@test.com");
    form.set_password("123456");

    form.on_submit().unwrap().finished().await;
    form.on_submit().unwrap().finished().await;

    assert_eq!(auth.calls().len(), 2);
    assert!(form.submitted());
    assert!(form.visible_error(FieldKind::Email).is_none());
}

#[tokio::test]
async fn test_invalid_submit_never_logs_in() {
    let auth = RecordingAuth::succeeding();
    let mut form = LoginForm::new(auth.clone());
    form.set_email("test@test.com");

    for _ in 0..3 {
        assert!(form.on_submit().is_none());
    }
    assert!(auth.calls().is_empty());
}
