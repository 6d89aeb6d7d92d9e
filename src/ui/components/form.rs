// SPDX-License-Identifier: MIT

//! Form component: declared fields plus toggle controls, wired together by the
//! binding table at construction time.

use eframe::egui;

use crate::models::binding::ToggleBinding;
use crate::ui::components::password_field::{self, FieldModel, ToggleControlModel};

/// An active control/input pair, by index into the form's declarations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ResolvedToggle {
    control: usize,
    field: usize,
}

/// UI model for one screen's form, kept free of side effects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormModel {
    title: &'static str,
    fields: Vec<FieldModel>,
    controls: Vec<ToggleControlModel>,
    toggles: Vec<ResolvedToggle>,
}

/// Messages emitted by the form view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormMsg {
    ValueChanged { field: usize, text: String },
    VisibilityToggled { toggle: usize },
}

impl FormModel {
    /// Build the form and resolve the binding table against its declarations.
    ///
    /// A binding becomes an active toggle only when both its control id and
    /// its input id resolve here; anything else is skipped without feedback.
    /// The table is not consulted again after construction.
    pub fn new(
        title: &'static str,
        fields: Vec<FieldModel>,
        controls: Vec<ToggleControlModel>,
        bindings: &[ToggleBinding],
    ) -> Self {
        let mut toggles = Vec::new();
        for binding in bindings {
            let control = controls.iter().position(|c| c.id() == binding.control);
            let field = fields.iter().position(|f| f.id() == binding.input);
            if let (Some(control), Some(field)) = (control, field) {
                toggles.push(ResolvedToggle { control, field });
            }
        }

        Self {
            title,
            fields,
            controls,
            toggles,
        }
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn fields(&self) -> &[FieldModel] {
        &self.fields
    }

    pub fn controls(&self) -> &[ToggleControlModel] {
        &self.controls
    }

    /// Number of active toggles on this form.
    pub fn active_toggles(&self) -> usize {
        self.toggles.len()
    }

    /// Look up a declared field by id.
    pub fn field(&self, id: &str) -> Option<&FieldModel> {
        self.fields.iter().find(|f| f.id() == id)
    }

    /// Toggle index wired to the given control, if its binding resolved.
    fn toggle_for_control(&self, control: usize) -> Option<usize> {
        self.toggles.iter().position(|t| t.control == control)
    }
}

/// Apply a message to the form model.
pub fn update(model: &mut FormModel, msg: FormMsg) {
    match msg {
        FormMsg::ValueChanged { field, text } => {
            if let Some(field) = model.fields.get_mut(field) {
                field.set_value(text);
            }
        }
        FormMsg::VisibilityToggled { toggle } => {
            let Some(toggle) = model.toggles.get(toggle).copied() else {
                return;
            };
            if let Some(field) = model.fields.get_mut(toggle.field) {
                field.flip_kind();
            }
            if let Some(control) = model.controls.get_mut(toggle.control) {
                control.invert_icon();
            }
        }
    }
}

/// Render the form and return any messages triggered by user interaction.
pub fn view(ui: &mut egui::Ui, model: &FormModel) -> Vec<FormMsg> {
    let mut msgs = Vec::new();

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        egui::Grid::new((model.title(), "fields"))
            .num_columns(2)
            .spacing(egui::vec2(8.0, 10.0))
            .min_col_width(140.0)
            .show(ui, |ui| {
                for (index, field) in model.fields().iter().enumerate() {
                    ui.label(field.label());
                    render_field_row(ui, model, index, &mut msgs);
                    ui.end_row();
                }
            });
    });

    msgs
}

/// Render one field's editor plus any controls anchored to it.
fn render_field_row(ui: &mut egui::Ui, model: &FormModel, index: usize, msgs: &mut Vec<FormMsg>) {
    let field = &model.fields()[index];

    ui.horizontal(|ui| {
        if let Some(text) = password_field::input_view(ui, field) {
            msgs.push(FormMsg::ValueChanged { field: index, text });
        }

        for (control_index, control) in model.controls().iter().enumerate() {
            if control.anchor() != field.id() {
                continue;
            }
            let toggle = model.toggle_for_control(control_index);
            if password_field::control_view(ui, control, toggle.is_some())
                && let Some(toggle) = toggle
            {
                msgs.push(FormMsg::VisibilityToggled { toggle });
            }
        }
    });
}
