//! View-state controllers for the page
//!
//! Everything here is renderer-agnostic: the GUI layer reports scroll offsets,
//! anchor positions, block intersections and clicks, and reads state back.
//! All mutation happens on the UI thread; only the contact submission runs
//! elsewhere, on the tokio runtime.

pub mod backend;
pub mod contact;
pub mod geometry;
pub mod navigation;
pub mod overlay;
pub mod page;
pub mod reveal;
pub mod scroll_spy;
pub mod section;

pub use contact::{ContactForm, Field, FieldError, FormStatus, SubmitError};
pub use geometry::{intersection_ratio, Rect};
pub use navigation::NavContext;
pub use overlay::{ActiveOverlay, OverlayView, ProjectLink};
pub use page::PageController;
pub use section::Section;
