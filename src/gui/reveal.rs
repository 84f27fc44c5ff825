//! Lazy-reveal wrapper for content blocks

use std::time::{Duration, Instant};

use eframe::egui;

use crate::view::{intersection_ratio, PageController, Rect};

fn to_rect(rect: egui::Rect) -> Rect {
    Rect::new(rect.min.x, rect.min.y, rect.width(), rect.height())
}

/// Render `add` as a reveal block keyed by `key`.
///
/// The block stays transparent until it first intersects the visible part of
/// the page, then fades in after `delay`. Its layout space is reserved from
/// the start so the intersection can be measured.
pub fn reveal<R>(
    ui: &mut egui::Ui,
    page: &mut PageController,
    key: &str,
    delay: Duration,
    add: impl FnOnce(&mut egui::Ui, &mut PageController) -> R,
) -> R {
    let now = Instant::now();
    let block = page.reveal_block(key, delay);
    let opacity = block.opacity(now);
    let animating = block.is_animating(now);

    let inner = ui.scope(|ui| {
        ui.set_opacity(opacity);
        add(ui, page)
    });

    let ratio = intersection_ratio(to_rect(inner.response.rect), to_rect(ui.clip_rect()));
    if page.report_intersection(key, ratio) || animating {
        ui.ctx().request_repaint();
    }

    inner.inner
}
