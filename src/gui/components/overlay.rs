//! Detail overlay for the selected project or article

use eframe::egui;

use crate::content::{Article, Project};
use crate::gui::constants::*;
use crate::view::{ActiveOverlay, OverlayView, PageController, ProjectLink};

enum OverlayAction {
    None,
    Close,
    Follow(ProjectLink),
}

/// Headed text blocks of the project write-up, in display order
fn write_up(project: &Project) -> [(&'static str, &str); 3] {
    [
        ("Project Overview", project.full_description.as_str()),
        ("Challenge", project.challenge.as_str()),
        ("Solution", project.solution.as_str()),
    ]
}

fn project_detail(ui: &mut egui::Ui, project: &Project) -> OverlayAction {
    let mut action = OverlayAction::None;

    ui.add(
        egui::Image::new(project.image.as_str())
            .max_height(OVERLAY_IMAGE_HEIGHT)
            .corner_radius(8.0),
    );
    ui.add_space(ITEM_SPACING);

    ui.label(egui::RichText::new(&project.kind).monospace().size(EYEBROW_SIZE).color(ACCENT));
    ui.label(egui::RichText::new(&project.title).strong().size(TITLE_SIZE).color(TEXT_STRONG));
    ui.label(egui::RichText::new(&project.client).color(TEXT_MUTED));
    ui.add_space(ITEM_SPACING);

    for (heading, body) in write_up(project) {
        ui.label(egui::RichText::new(heading).strong().color(TEXT_STRONG));
        ui.label(body);
        ui.add_space(ITEM_SPACING);
    }

    ui.label(egui::RichText::new("Technical Impact").strong().color(TEXT_STRONG));
    for item in &project.impact {
        ui.label(format!("✔ {item}"));
    }
    ui.add_space(ITEM_SPACING);

    ui.label(egui::RichText::new("Technologies").strong().color(TEXT_STRONG));
    ui.horizontal_wrapped(|ui| {
        for tech in &project.stack {
            ui.label(egui::RichText::new(tech).monospace().color(ACCENT));
        }
    });
    ui.add_space(CARD_SPACING);

    ui.horizontal(|ui| {
        if ui.button("Visit Live Site ↗").clicked() {
            action = OverlayAction::Follow(ProjectLink::LiveSite);
        }
        if ui.button("View Code").clicked() {
            action = OverlayAction::Follow(ProjectLink::Code);
        }
    });
    ui.label(egui::RichText::new("(Links open simulated external tabs)").small().color(TEXT_MUTED));

    action
}

fn article_detail(ui: &mut egui::Ui, article: &Article) {
    ui.horizontal_wrapped(|ui| {
        for tag in &article.tags {
            ui.label(egui::RichText::new(tag).small().color(ACCENT));
        }
    });
    ui.label(egui::RichText::new(&article.title).strong().size(TITLE_SIZE).color(TEXT_STRONG));
    ui.label(egui::RichText::new(format!("{} • {}", article.date, article.read_time)).color(TEXT_MUTED));
    ui.add_space(CARD_SPACING);

    for paragraph in &article.content {
        ui.label(egui::RichText::new(paragraph).size(16.0).color(TEXT));
        ui.add_space(ITEM_SPACING);
    }
}

/// Draws the overlay when one is open. Nothing is drawn otherwise.
pub fn show(ctx: &egui::Context, page: &mut PageController) {
    if page.ui_state().overlay == ActiveOverlay::None {
        return;
    }
    if page.overlay_view().is_none() {
        // Unknown target: drop the selection instead of showing an empty modal
        page.close_overlay();
        return;
    }

    let response = egui::Modal::new(egui::Id::new("detail_overlay")).show(ctx, |ui| {
        ui.set_max_width(OVERLAY_MAX_WIDTH);
        let mut action = OverlayAction::None;

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
            if ui.button("✖").clicked() {
                action = OverlayAction::Close;
            }
        });

        egui::ScrollArea::vertical().max_height(OVERLAY_MAX_HEIGHT).show(ui, |ui| match page.overlay_view() {
            Some(OverlayView::Project(project)) => {
                if let OverlayAction::Follow(link) = project_detail(ui, project) {
                    action = OverlayAction::Follow(link);
                }
            }
            Some(OverlayView::Article(article)) => article_detail(ui, article),
            None => {}
        });
        action
    });

    let action = if response.should_close() {
        OverlayAction::Close
    } else {
        response.inner
    };

    match action {
        OverlayAction::None => {}
        OverlayAction::Close => page.close_overlay(),
        OverlayAction::Follow(link) => {
            if let Some(url) = page.follow_project_link(link) {
                ctx.open_url(egui::OpenUrl::new_tab(url));
            }
        }
    }
}
