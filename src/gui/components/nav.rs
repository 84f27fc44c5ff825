//! Top navigation bar with the collapsible mobile menu

use eframe::egui;

use crate::gui::constants::*;
use crate::view::{NavContext, PageController, Section};

fn nav_link(ui: &mut egui::Ui, section: Section, active: bool) -> bool {
    let color = if active { ACCENT } else { TEXT_MUTED };
    ui.add(egui::Button::new(egui::RichText::new(section.label()).color(color)).frame(false))
        .clicked()
}

fn brand(ui: &mut egui::Ui, name: &str) {
    let first = name.split_whitespace().next().unwrap_or(name);
    let initial = name
        .split_whitespace()
        .nth(1)
        .and_then(|last| last.chars().next())
        .map(String::from)
        .unwrap_or_default();

    ui.label(egui::RichText::new(">_").monospace().color(ACCENT).size(CARD_TITLE_SIZE));
    ui.label(egui::RichText::new(first).strong().color(TEXT_STRONG).size(CARD_TITLE_SIZE));
    ui.label(egui::RichText::new(initial).strong().color(ACCENT).size(CARD_TITLE_SIZE));
}

/// Renders the navigation bar. The bar collapses once the page is scrolled.
pub fn show(ctx: &egui::Context, page: &mut PageController, narrow: bool) {
    let state = page.ui_state();
    let (fill, stroke, padding) = if state.is_scrolled {
        (SURFACE, egui::Stroke::new(1.0, BORDER), NAV_PADDING_COLLAPSED)
    } else {
        (BACKGROUND, egui::Stroke::NONE, NAV_PADDING_EXPANDED)
    };
    let frame = egui::Frame::new()
        .fill(fill)
        .stroke(stroke)
        .inner_margin(egui::Margin::symmetric(PADDING as i8, padding as i8));

    let name = page.content().profile.name.clone();

    egui::TopBottomPanel::top("navigation").frame(frame).show(ctx, |ui| {
        ui.horizontal(|ui| {
            brand(ui, &name);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if narrow {
                    let icon = if state.is_mobile_menu_open { "✖" } else { "☰" };
                    if ui.button(icon).clicked() {
                        page.toggle_menu();
                    }
                    return;
                }

                if ui.button("Hire Me").clicked() {
                    page.scroll_to(Section::Contact);
                }
                ui.add_space(ITEM_SPACING);
                // Right-to-left layout: add links in reverse to keep page order
                for &section in Section::nav_links().iter().rev() {
                    if nav_link(ui, section, state.active_section == section) {
                        page.select_section(section, NavContext::Desktop);
                    }
                }
            });
        });

        if narrow && state.is_mobile_menu_open {
            ui.add_space(ITEM_SPACING);
            ui.separator();
            for &section in Section::nav_links() {
                if nav_link(ui, section, state.active_section == section) {
                    page.select_section(section, NavContext::Mobile);
                }
            }
        }
    });
}
