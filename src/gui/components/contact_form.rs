//! Contact form: inputs, inline validation and the success panel

use eframe::egui;
use tracing::debug;

use crate::gui::constants::*;
use crate::view::{ContactForm, Field, FieldError, FormStatus, PageController, SubmitError};

/// Field contents and the last validation result, owned by the renderer
#[derive(Debug, Default)]
pub struct ContactFormView {
    form: ContactForm,
    errors: Vec<FieldError>,
}

impl ContactFormView {
    pub fn new() -> Self {
        Self::default()
    }

    fn field_error(&self, field: Field) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field() == field)
    }

    fn labelled_input(&mut self, ui: &mut egui::Ui, field: Field, hint: &str) {
        ui.label(egui::RichText::new(field.label()).color(TEXT_MUTED));
        let value = match field {
            Field::Name => &mut self.form.name,
            Field::Email => &mut self.form.email,
            Field::Message => &mut self.form.message,
        };
        let edit = match field {
            Field::Message => egui::TextEdit::multiline(value).desired_rows(4),
            _ => egui::TextEdit::singleline(value),
        };
        ui.add(edit.hint_text(hint).desired_width(f32::INFINITY));

        if let Some(error) = self.field_error(field) {
            ui.label(egui::RichText::new(error.to_string()).small().color(ERROR));
        }
        ui.add_space(ITEM_SPACING);
    }

    fn submit(&mut self, page: &mut PageController) {
        match page.submit_contact(&self.form) {
            Ok(_) => self.errors.clear(),
            Err(SubmitError::Invalid(errors)) => self.errors = errors,
            Err(err @ SubmitError::NotIdle(_)) => debug!(error = %err, "Submit click ignored"),
        }
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, page: &mut PageController) {
        egui::Frame::new()
            .fill(SURFACE)
            .stroke(egui::Stroke::new(1.0, BORDER))
            .corner_radius(12.0)
            .inner_margin(egui::Margin::same(PADDING as i8))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());

                if page.ui_state().form_status == FormStatus::Success {
                    ui.vertical_centered(|ui| {
                        ui.label(egui::RichText::new("✔").size(HERO_SIZE).color(ACCENT));
                        ui.label(egui::RichText::new("Message Sent!").strong().size(CARD_TITLE_SIZE).color(TEXT_STRONG));
                        ui.label("Thanks for reaching out. I'll get back to you within 24 hours.");
                        ui.add_space(ITEM_SPACING);
                        if ui.button("Send Another").clicked() && page.reset_contact() {
                            self.form.clear();
                        }
                    });
                    return;
                }

                let submitting = page.ui_state().form_status == FormStatus::Submitting;
                ui.add_enabled_ui(!submitting, |ui| {
                    self.labelled_input(ui, Field::Name, "John Doe");
                    self.labelled_input(ui, Field::Email, "john@company.com");
                    self.labelled_input(ui, Field::Message, "Tell me about your project...");
                });

                let label = if submitting { "Sending..." } else { "Send Message ➤" };
                ui.horizontal(|ui| {
                    let button = ui.add_enabled(page.can_submit(), egui::Button::new(label));
                    if submitting {
                        ui.spinner();
                    }
                    if button.clicked() {
                        self.submit(page);
                    }
                });
            });
    }
}
