//! egui renderer for the page

pub mod app;
pub mod components;
pub mod constants;
pub mod reveal;

pub use app::run_gui;
