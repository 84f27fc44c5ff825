//! Page window implemented with egui/eframe

use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Result};
use chrono::Datelike;
use eframe::egui::scroll_area::ScrollSource;
use eframe::{egui, CreationContext, NativeOptions};
use tokio::runtime::Handle;
use tracing::info;

use super::components::{contact_form::ContactFormView, nav, overlay, sections};
use super::constants::*;
use crate::config::Settings;
use crate::content::Content;
use crate::view::scroll_spy::SectionLocator;
use crate::view::{FormStatus, PageController, Section};

/// Section tops measured while laying out the current frame,
/// relative to the top of the visible page area
#[derive(Debug, Default)]
struct SectionTops([Option<f32>; Section::ALL.len()]);

impl SectionTops {
    fn record(&mut self, section: Section, top: f32) {
        self.0[section as usize] = Some(top);
    }
}

impl SectionLocator for SectionTops {
    fn section_top(&self, section: Section) -> Option<f32> {
        self.0[section as usize]
    }
}

struct PortfolioApp {
    page: PageController,
    contact_form: ContactFormView,
    last_width: f32,
    year: i32,
}

fn copyright_line(name: &str, year: i32) -> String {
    format!("© {year} {name}. All rights reserved.")
}

impl PortfolioApp {
    fn new(cc: &CreationContext<'_>, page: PageController, initial_width: f32) -> Self {
        info!("Initializing page window");

        let mut visuals = egui::Visuals::dark();
        visuals.panel_fill = BACKGROUND;
        visuals.override_text_color = Some(TEXT);
        visuals.hyperlink_color = ACCENT;
        cc.egui_ctx.set_visuals(visuals);
        egui_extras::install_image_loaders(&cc.egui_ctx);

        Self {
            page,
            contact_form: ContactFormView::new(),
            last_width: initial_width,
            year: chrono::Local::now().year(),
        }
    }

    fn is_narrow(&self) -> bool {
        self.last_width < NARROW_LAYOUT_WIDTH
    }

    fn section(&mut self, ui: &mut egui::Ui, section: Section, content: &Content) {
        match section {
            Section::Home => sections::hero(ui, &mut self.page, content),
            Section::Expertise => sections::expertise(ui, &mut self.page, content),
            Section::Work => sections::work(ui, &mut self.page, content),
            Section::Blog => sections::blog(ui, &mut self.page, content),
            Section::Contact => {
                if self.is_narrow() {
                    sections::contact_info(ui, content);
                    ui.add_space(CARD_SPACING);
                    self.contact_form.ui(ui, &mut self.page);
                } else {
                    ui.columns(2, |columns| {
                        sections::contact_info(&mut columns[0], content);
                        self.contact_form.ui(&mut columns[1], &mut self.page);
                    });
                }
            }
        }
    }

    fn footer(&self, ui: &mut egui::Ui, content: &Content) {
        ui.separator();
        ui.horizontal_wrapped(|ui| {
            ui.label(
                egui::RichText::new(copyright_line(&content.profile.name, self.year))
                    .small()
                    .color(TEXT_MUTED),
            );
            for (network, url) in &content.profile.socials {
                ui.hyperlink_to(egui::RichText::new(network).small(), url);
            }
        });
        ui.add_space(PADDING);
    }

    /// Lays out every section inside the page scroll area and returns where
    /// each section anchor landed
    fn page_body(&mut self, ui: &mut egui::Ui, content: &Content) -> SectionTops {
        let request = self.page.take_scroll_request();
        let viewport_top = ui.clip_rect().top();
        let column_width = ui.available_width().min(CONTENT_MAX_WIDTH) - 2.0 * PADDING;
        let margin = ((ui.available_width() - column_width) / 2.0).max(0.0);

        let mut tops = SectionTops::default();
        ui.horizontal(|ui| {
            ui.add_space(margin);
            ui.vertical(|ui| {
                ui.set_width(column_width);
                ui.add_space(PADDING);

                for section in Section::ALL {
                    tops.record(section, ui.cursor().top() - viewport_top);
                    if request.is_some_and(|r| r.target == section) {
                        ui.scroll_to_cursor(Some(egui::Align::TOP));
                    }
                    self.section(ui, section, content);
                    ui.add_space(SECTION_SPACING);
                }

                self.footer(ui, content);
            });
        });
        tops
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.page.tick();
        if self.page.ui_state().form_status == FormStatus::Submitting {
            ctx.request_repaint_after(Duration::from_millis(SUBMIT_POLL_INTERVAL_MS));
        }

        let narrow = self.is_narrow();
        nav::show(ctx, &mut self.page, narrow);

        let content = self.page.shared_content();
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(BACKGROUND))
            .show(ctx, |ui| {
                self.last_width = ui.available_width();
                let source = if self.page.is_scroll_locked() {
                    ScrollSource::NONE
                } else {
                    ScrollSource::ALL
                };

                let output = egui::ScrollArea::vertical()
                    .id_salt("page")
                    .auto_shrink([false, false])
                    .scroll_source(source)
                    .show(ui, |ui| self.page_body(ui, &content));

                self.page.on_scroll(output.state.offset.y, &output.inner);
            });

        overlay::show(ctx, &mut self.page);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.page.teardown();
        info!("Page window exiting");
    }
}

pub fn run_gui(content: Arc<Content>, settings: &Settings, runtime: Handle) -> Result<()> {
    let title = format!("{} | {}", content.profile.name, content.profile.role);
    let width = f32::from(settings.window_width);
    let height = f32::from(settings.window_height);

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width, height])
            .with_min_inner_size([WINDOW_MIN_WIDTH, WINDOW_MIN_HEIGHT])
            .with_title(&title),
        ..Default::default()
    };

    let page = PageController::with_simulated_backend(content, settings, runtime);

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(PortfolioApp::new(cc, page, width)))),
    )
    .map_err(|err| anyhow!("Failed to launch page window: {err}"))
}
