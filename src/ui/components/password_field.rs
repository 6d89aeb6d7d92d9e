// SPDX-License-Identifier: MIT

//! Field row widgets: a maskable single-line editor and its eye-icon control.

use eframe::egui;

use crate::models::binding::{IconState, InputKind};
use crate::models::password::Password;

/// Text buffer of a field, redacted or plain depending on how it was declared.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    Plain(String),
    Secret(Password),
}

impl FieldValue {
    pub fn as_str(&self) -> &str {
        match self {
            FieldValue::Plain(text) => text,
            FieldValue::Secret(password) => password.as_str(),
        }
    }

    fn set(&mut self, text: String) {
        match self {
            FieldValue::Secret(password) => password.set(text),
            _ => *self = FieldValue::Plain(text),
        }
    }
}

/// One declared form input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldModel {
    id: &'static str,
    label: &'static str,
    hint: &'static str,
    kind: InputKind,
    value: FieldValue,
}

impl FieldModel {
    /// Declare a plain text input.
    pub fn text(id: &'static str, label: &'static str, hint: &'static str) -> Self {
        Self {
            id,
            label,
            hint,
            kind: InputKind::Text,
            value: FieldValue::Plain(String::new()),
        }
    }

    /// Declare a masked password input.
    pub fn password(id: &'static str, label: &'static str, hint: &'static str) -> Self {
        Self {
            id,
            label,
            hint,
            kind: InputKind::Password,
            value: FieldValue::Secret(Password::default()),
        }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn kind(&self) -> InputKind {
        self.kind
    }

    pub fn value(&self) -> &FieldValue {
        &self.value
    }

    /// Apply the visibility flip rule to this field's kind.
    pub fn flip_kind(&mut self) {
        self.kind = self.kind.flipped();
    }

    pub fn set_value(&mut self, text: String) {
        self.value.set(text);
    }
}

/// One declared toggle control, anchored to the field row it is drawn beside.
///
/// The anchor places the icon; whether a click does anything is decided by the
/// binding table, not by the anchor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToggleControlModel {
    id: &'static str,
    anchor: &'static str,
    icon: IconState,
}

impl ToggleControlModel {
    pub fn new(id: &'static str, anchor: &'static str) -> Self {
        Self {
            id,
            anchor,
            icon: IconState::default(),
        }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn anchor(&self) -> &'static str {
        self.anchor
    }

    pub fn icon(&self) -> IconState {
        self.icon
    }

    pub fn invert_icon(&mut self) {
        self.icon.invert();
    }
}

/// Draw the editor for a field. Returns the new text when edited this frame.
pub fn input_view(ui: &mut egui::Ui, field: &FieldModel) -> Option<String> {
    let mut text = field.value().as_str().to_string();
    let response = ui.add(
        egui::TextEdit::singleline(&mut text)
            .hint_text(field.hint)
            .password(field.kind().masks())
            .desired_width(220.0),
    );

    response.changed().then_some(text)
}

/// Draw the eye icon for a toggle control.
///
/// Inactive controls (no resolved binding) are drawn disabled. Returns true
/// when an active control was clicked.
pub fn control_view(ui: &mut egui::Ui, control: &ToggleControlModel, active: bool) -> bool {
    let button = egui::Button::new(
        egui::RichText::new(icon_glyph(control.icon())).color(egui::Color32::from_gray(140)),
    )
    .frame(false);

    let response = ui
        .add_enabled(active, button)
        .on_hover_text("Toggle visibility");

    active && response.clicked()
}

/// Pick the Phosphor glyph for the icon memberships. The open eye wins when
/// both are set; neither set falls back to the closed eye.
fn icon_glyph(icon: IconState) -> &'static str {
    if icon.eye {
        egui_phosphor::regular::EYE
    } else if icon.eye_slash {
        egui_phosphor::regular::EYE_SLASH
    } else {
        egui_phosphor::regular::EYE_CLOSED
    }
}
