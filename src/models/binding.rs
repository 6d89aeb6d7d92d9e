// SPDX-License-Identifier: MIT

//! Toggle binding table and visibility domain types.

/// Pairs a toggle control id with the input id it reveals.
///
/// Pairing is declarative: controls and inputs are declared by the screens,
/// and this table is what wires them together at startup. A pair whose ids do
/// not both resolve on a screen is skipped there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleBinding {
    pub control: &'static str,
    pub input: &'static str,
}

/// The binding table applied to every screen at startup.
///
/// Two entries target the same input id (`password`); ids are unique within a
/// screen, not across screens, so each screen activates only its own pair.
pub fn default_bindings() -> Vec<ToggleBinding> {
    vec![
        ToggleBinding {
            control: "toggle_new_password",
            input: "new_password",
        },
        ToggleBinding {
            control: "toggle_confirm_password",
            input: "new_password_confirm",
        },
        ToggleBinding {
            control: "toggle_login",
            input: "password",
        },
        ToggleBinding {
            control: "toggle_signup",
            input: "password",
        },
        ToggleBinding {
            control: "toggle_profile",
            input: "user_password",
        },
    ]
}

/// Rendering kind of a form input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    /// Characters are masked while typing.
    Password,
    /// Plain single-line text.
    Text,
}

impl InputKind {
    /// Visibility flip rule: password becomes text; anything else becomes password.
    pub fn flipped(self) -> Self {
        match self {
            InputKind::Password => InputKind::Text,
            _ => InputKind::Password,
        }
    }

    /// Whether the editor should mask its characters.
    pub fn masks(self) -> bool {
        matches!(self, InputKind::Password)
    }
}

/// Icon marker state for a toggle control.
///
/// The two memberships are tracked independently; a click inverts both, and
/// nothing forces them to stay complementary if one is changed on its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconState {
    pub eye: bool,
    pub eye_slash: bool,
}

impl Default for IconState {
    fn default() -> Self {
        Self {
            eye: true,
            eye_slash: false,
        }
    }
}

impl IconState {
    /// Invert both memberships.
    pub fn invert(&mut self) {
        self.eye = !self.eye;
        self.eye_slash = !self.eye_slash;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_lists_all_five_pairs() {
        let bindings = default_bindings();

        assert_eq!(bindings.len(), 5);
        assert_eq!(bindings[0].control, "toggle_new_password");
        assert_eq!(bindings[4].input, "user_password");
    }

    #[test]
    fn flip_rule_maps_password_to_text_and_back() {
        assert_eq!(InputKind::Password.flipped(), InputKind::Text);
        assert_eq!(InputKind::Text.flipped(), InputKind::Password);
    }

    #[test]
    fn icon_invert_flips_both_memberships_independently() {
        let mut icon = IconState {
            eye: false,
            eye_slash: false,
        };

        icon.invert();

        // No guard restores complementarity; both flip on their own.
        assert!(icon.eye);
        assert!(icon.eye_slash);
    }

    #[test]
    fn icon_double_invert_restores_initial_state() {
        let mut icon = IconState::default();

        icon.invert();
        icon.invert();

        assert_eq!(icon, IconState::default());
    }
}
