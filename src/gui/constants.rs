//! GUI-specific constants for layout, palette and intervals

use egui;

/// Window dimensions
pub const WINDOW_MIN_WIDTH: f32 = 360.0;
pub const WINDOW_MIN_HEIGHT: f32 = 480.0;

/// Below this width the navigation collapses into the mobile menu
pub const NARROW_LAYOUT_WIDTH: f32 = 768.0;

/// Layout spacing
pub const PADDING: f32 = 24.0;
pub const SECTION_SPACING: f32 = 96.0;
pub const ITEM_SPACING: f32 = 12.0;
pub const CARD_SPACING: f32 = 24.0;
pub const CONTENT_MAX_WIDTH: f32 = 960.0;

/// Project artwork heights
pub const PROJECT_IMAGE_HEIGHT: f32 = 220.0;
pub const OVERLAY_IMAGE_HEIGHT: f32 = 260.0;

/// Detail overlay bounds
pub const OVERLAY_MAX_WIDTH: f32 = 720.0;
pub const OVERLAY_MAX_HEIGHT: f32 = 560.0;

/// Navigation bar padding, expanded at the top of the page and collapsed once scrolled
pub const NAV_PADDING_EXPANDED: f32 = 20.0;
pub const NAV_PADDING_COLLAPSED: f32 = 10.0;

/// Palette
pub const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(2, 6, 23);
pub const SURFACE: egui::Color32 = egui::Color32::from_rgb(15, 23, 42);
pub const BORDER: egui::Color32 = egui::Color32::from_rgb(30, 41, 59);
pub const TEXT: egui::Color32 = egui::Color32::from_rgb(203, 213, 225);
pub const TEXT_STRONG: egui::Color32 = egui::Color32::from_rgb(241, 245, 249);
pub const TEXT_MUTED: egui::Color32 = egui::Color32::from_rgb(100, 116, 139);
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(52, 211, 153);
pub const ERROR: egui::Color32 = egui::Color32::from_rgb(248, 113, 113);

/// Type scale
pub const HERO_SIZE: f32 = 40.0;
pub const TITLE_SIZE: f32 = 28.0;
pub const CARD_TITLE_SIZE: f32 = 20.0;
pub const EYEBROW_SIZE: f32 = 12.0;

/// Repaint cadence while a submission is in flight
pub const SUBMIT_POLL_INTERVAL_MS: u64 = 50;
