// SPDX-License-Identifier: MIT

//! Root Model-View-Update kernel wiring screens, forms, and messages.

use crate::models::binding::{ToggleBinding, default_bindings};
use crate::ui::components::form::{self, FormModel, FormMsg};
use crate::ui::screens::{
    ScreenKind, login_form, profile_form, reset_password_form, signup_form,
};

/// Top-level application state: one form per screen plus the active screen.
pub struct AppModel {
    /// Screen currently shown in the central panel.
    pub screen: ScreenKind,
    pub login: FormModel,
    pub signup: FormModel,
    pub profile: FormModel,
    pub reset: FormModel,
    /// Latest status message to display.
    pub status: Option<String>,
}

impl Default for AppModel {
    fn default() -> Self {
        Self::with_bindings(&default_bindings())
    }
}

impl AppModel {
    /// Build every screen's form against the given binding table.
    ///
    /// Called once at startup; forms are never rebuilt afterwards.
    pub fn with_bindings(bindings: &[ToggleBinding]) -> Self {
        Self {
            screen: ScreenKind::Login,
            login: login_form(bindings),
            signup: signup_form(bindings),
            profile: profile_form(bindings),
            reset: reset_password_form(bindings),
            status: None,
        }
    }

    pub fn form(&self, screen: ScreenKind) -> &FormModel {
        match screen {
            ScreenKind::Login => &self.login,
            ScreenKind::SignUp => &self.signup,
            ScreenKind::Profile => &self.profile,
            ScreenKind::ResetPassword => &self.reset,
        }
    }

    pub fn form_mut(&mut self, screen: ScreenKind) -> &mut FormModel {
        match screen {
            ScreenKind::Login => &mut self.login,
            ScreenKind::SignUp => &mut self.signup,
            ScreenKind::Profile => &mut self.profile,
            ScreenKind::ResetPassword => &mut self.reset,
        }
    }
}

/// Application messages routed through the update function.
pub enum Msg {
    SwitchScreen(ScreenKind),
    Form(ScreenKind, FormMsg),
}

/// Update the application model.
pub fn update(model: &mut AppModel, msg: Msg) {
    match msg {
        Msg::SwitchScreen(screen) => {
            tracing::debug!(screen = screen.title(), "switching screen");
            model.screen = screen;
            model.status = Some(format!("{} form", screen.title()));
        }
        Msg::Form(screen, m) => form::update(model.form_mut(screen), m),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::binding::InputKind;

    #[test]
    fn switch_screen_updates_model_and_status() {
        let mut model = AppModel::default();

        update(&mut model, Msg::SwitchScreen(ScreenKind::Profile));

        assert_eq!(model.screen, ScreenKind::Profile);
        assert_eq!(model.status.as_deref(), Some("Profile form"));
    }

    #[test]
    fn form_messages_route_to_the_addressed_screen() {
        let mut model = AppModel::default();

        update(
            &mut model,
            Msg::Form(ScreenKind::Login, FormMsg::VisibilityToggled { toggle: 0 }),
        );

        assert_eq!(
            model.login.field("password").unwrap().kind(),
            InputKind::Text
        );
        assert_eq!(
            model.signup.field("password").unwrap().kind(),
            InputKind::Password
        );
    }

    #[test]
    fn field_state_survives_switching_screens() {
        let mut model = AppModel::default();

        update(
            &mut model,
            Msg::Form(
                ScreenKind::Login,
                FormMsg::ValueChanged {
                    field: 0,
                    text: "ada".to_string(),
                },
            ),
        );
        update(&mut model, Msg::SwitchScreen(ScreenKind::SignUp));
        update(&mut model, Msg::SwitchScreen(ScreenKind::Login));

        assert_eq!(
            model.login.field("username").unwrap().value().as_str(),
            "ada"
        );
    }

    #[test]
    fn reset_screen_toggles_each_field_independently() {
        let mut model = AppModel::default();

        update(
            &mut model,
            Msg::Form(
                ScreenKind::ResetPassword,
                FormMsg::VisibilityToggled { toggle: 1 },
            ),
        );

        let reset = &model.reset;
        assert_eq!(
            reset.field("new_password").unwrap().kind(),
            InputKind::Password
        );
        assert_eq!(
            reset.field("new_password_confirm").unwrap().kind(),
            InputKind::Text
        );
    }
}
