// SPDX-License-Identifier: MIT

//! Screen declarations for the account surface.
//!
//! Each screen lists its fields and toggle controls; the shared binding table
//! decides which controls actually do anything on which screen.

use crate::models::binding::ToggleBinding;
use crate::ui::components::form::FormModel;
use crate::ui::components::password_field::{FieldModel, ToggleControlModel};

/// The four account screens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScreenKind {
    Login,
    SignUp,
    Profile,
    ResetPassword,
}

impl ScreenKind {
    pub const ALL: [ScreenKind; 4] = [
        ScreenKind::Login,
        ScreenKind::SignUp,
        ScreenKind::Profile,
        ScreenKind::ResetPassword,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ScreenKind::Login => "Login",
            ScreenKind::SignUp => "Sign up",
            ScreenKind::Profile => "Profile",
            ScreenKind::ResetPassword => "Reset password",
        }
    }
}

/// Login: username and password.
pub fn login_form(bindings: &[ToggleBinding]) -> FormModel {
    FormModel::new(
        ScreenKind::Login.title(),
        vec![
            FieldModel::text("username", "Username", "Your user name"),
            FieldModel::password("password", "Password", ""),
        ],
        vec![ToggleControlModel::new("toggle_login", "password")],
        bindings,
    )
}

/// Sign up: contact details plus the initial password.
///
/// Reuses the input id `password`; ids are unique per screen only, so the
/// login pair stays inactive here and vice versa.
pub fn signup_form(bindings: &[ToggleBinding]) -> FormModel {
    FormModel::new(
        ScreenKind::SignUp.title(),
        vec![
            FieldModel::text("name", "Name", "Full name"),
            FieldModel::text("email", "E-mail", "name@example.com"),
            FieldModel::text("username", "Username", "Pick a user name"),
            FieldModel::password("password", "Password", ""),
        ],
        vec![ToggleControlModel::new("toggle_signup", "password")],
        bindings,
    )
}

/// Profile: editable account details.
pub fn profile_form(bindings: &[ToggleBinding]) -> FormModel {
    FormModel::new(
        ScreenKind::Profile.title(),
        vec![
            FieldModel::text("name", "Name", ""),
            FieldModel::text("email", "E-mail", ""),
            FieldModel::password("user_password", "Password", ""),
        ],
        vec![ToggleControlModel::new("toggle_profile", "user_password")],
        bindings,
    )
}

/// Reset password: new password and its confirmation, each with its own toggle.
pub fn reset_password_form(bindings: &[ToggleBinding]) -> FormModel {
    FormModel::new(
        ScreenKind::ResetPassword.title(),
        vec![
            FieldModel::password("new_password", "New password", ""),
            FieldModel::password("new_password_confirm", "Confirm password", ""),
        ],
        vec![
            ToggleControlModel::new("toggle_new_password", "new_password"),
            ToggleControlModel::new("toggle_confirm_password", "new_password_confirm"),
        ],
        bindings,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::binding::default_bindings;

    #[test]
    fn each_screen_activates_only_its_own_pairs() {
        let bindings = default_bindings();

        assert_eq!(login_form(&bindings).active_toggles(), 1);
        assert_eq!(signup_form(&bindings).active_toggles(), 1);
        assert_eq!(profile_form(&bindings).active_toggles(), 1);
        assert_eq!(reset_password_form(&bindings).active_toggles(), 2);
    }

    #[test]
    fn login_skips_the_signup_pair_despite_matching_input_id() {
        let form = login_form(&default_bindings());

        // `toggle_signup` -> `password` has a resolvable input here, but the
        // control is not declared on this screen.
        assert!(form.field("password").is_some());
        assert_eq!(form.active_toggles(), 1);
        assert_eq!(form.controls().len(), 1);
        assert_eq!(form.controls()[0].id(), "toggle_login");
    }

    #[test]
    fn screens_build_without_feedback_when_a_binding_never_resolves() {
        let mut bindings = default_bindings();
        bindings.push(ToggleBinding {
            control: "toggle_login",
            input: "no_such_field",
        });

        let form = login_form(&bindings);

        assert_eq!(form.active_toggles(), 1);
    }
}
