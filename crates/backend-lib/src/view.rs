// ============================
// crates/backend-lib/src/view.rs
// ============================
//! HTML rendering of the login form.
use crate::controller::LoginForm;
use crate::validation::FieldKind;
use maud::{html, Markup, DOCTYPE};

/// The form element alone, for embedding
pub fn login_form(form: &LoginForm) -> Markup {
    html! {
        form id="login-form" action="/" method="post" novalidate {
            div class="field" {
                label for=(FieldKind::Email.id()) { "Email" }
                input type="email" id=(FieldKind::Email.id()) name=(FieldKind::Email.id())
                    value=(form.form().email()) placeholder="you@example.com";
                (field_error(form, FieldKind::Email))
            }

            div class="field" {
                label for=(FieldKind::Password.id()) { "Password" }
                // The password is never written back into the page.
                input type="password" id=(FieldKind::Password.id()) name=(FieldKind::Password.id());
                (field_error(form, FieldKind::Password))
            }

            button type="submit" { "Login" }
        }
    }
}

fn field_error(form: &LoginForm, kind: FieldKind) -> Markup {
    html! {
        @if let Some(message) = form.visible_error(kind) {
            div id=(kind.error_id()) class="error" { (message) }
        }
    }
}

/// Complete document around [`login_form`]
pub fn login_page(form: &LoginForm) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "Login" }
            }
            body {
                h1 { "Login" }
                (login_form(form))
            }
        }
    }
}
