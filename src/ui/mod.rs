// SPDX-License-Identifier: MIT

//! Top-level egui application shell for the account screens.
//! Handles layout, the screen switcher, and wiring form views into the MVU loop.

pub mod components;
pub mod screens;

use eframe::egui;

use crate::mvu::{self, AppModel, Msg};
use crate::ui::components::form;
use crate::ui::screens::ScreenKind;

/// Stateful egui application presenting the account forms.
#[derive(Default)]
pub struct PassToggleApp {
    model: AppModel,
    inbox: Vec<Msg>,
}

impl eframe::App for PassToggleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ensure_spacing(ctx);

        // Process pending messages until exhausted.
        let mut msgs = std::mem::take(&mut self.inbox);
        while let Some(msg) = msgs.pop() {
            mvu::update(&mut self.model, msg);
        }
        self.inbox = msgs;

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading("Account");
                ui.separator();
                self.render_screen_switcher(ui);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    self.render_theme_controls(ui);
                });
            });
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("status_panel")
            .resizable(false)
            .show(ctx, |ui| {
                self.render_status(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);

            egui::ScrollArea::vertical().show(ui, |ui| {
                let screen = self.model.screen;
                ui.label(egui::RichText::new(screen.title()).strong().size(16.0));
                ui.add_space(8.0);

                let form_msgs = form::view(ui, self.model.form(screen));
                self.inbox
                    .extend(form_msgs.into_iter().map(|m| Msg::Form(screen, m)));
                ui.add_space(8.0);
            });
        });
    }
}

impl PassToggleApp {
    fn ensure_spacing(&self, ctx: &egui::Context) {
        ctx.style_mut(|style| {
            style.spacing.item_spacing = egui::vec2(6.0, 6.0);
        });
    }

    fn render_theme_controls(&mut self, ui: &mut egui::Ui) {
        ui.add_space(2.0);
        egui::widgets::global_theme_preference_switch(ui);
    }

    /// Render segmented controls to pick the active screen.
    fn render_screen_switcher(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for screen in ScreenKind::ALL {
                let button =
                    egui::Button::new(screen.title()).selected(self.model.screen == screen);
                if ui.add(button).clicked() {
                    self.inbox.push(Msg::SwitchScreen(screen));
                }
            }
        });
    }

    /// Render latest status message when present.
    fn render_status(&self, ui: &mut egui::Ui) {
        if let Some(text) = &self.model.status {
            ui.label(egui::RichText::new(text).color(egui::Color32::from_gray(68)));
        }
    }
}
