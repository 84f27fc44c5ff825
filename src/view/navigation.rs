//! Navigation menu: mobile menu visibility and scroll-to-anchor requests

use tracing::{debug, info};

use super::section::Section;

/// Where a navigation link was activated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavContext {
    /// Inline links in the wide layout; there is no menu to close
    Desktop,
    /// Links inside the collapsible menu of the narrow layout
    Mobile,
}

/// Pending request for the renderer to bring an anchor into view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    pub target: Section,
}

#[derive(Debug, Clone, Default)]
pub struct NavigationMenu {
    mobile_open: bool,
    pending_scroll: Option<ScrollRequest>,
}

impl NavigationMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_mobile_open(&self) -> bool {
        self.mobile_open
    }

    pub fn toggle_menu(&mut self) {
        self.mobile_open = !self.mobile_open;
        debug!(open = self.mobile_open, "Mobile menu toggled");
    }

    /// Link activation: scroll to the section and report it as the section to
    /// activate. Closes the menu only when the link lives inside it.
    pub fn select_section(&mut self, section: Section, context: NavContext) -> Section {
        self.scroll_to(section);
        if context == NavContext::Mobile && self.mobile_open {
            self.mobile_open = false;
            debug!("Mobile menu closed after navigation");
        }
        info!(section = %section, ?context, "Section selected");
        section
    }

    /// Scroll without changing the active section (call-to-action buttons)
    pub fn scroll_to(&mut self, section: Section) {
        self.pending_scroll = Some(ScrollRequest { target: section });
    }

    /// Hand the pending request to the renderer; it is delivered once
    pub fn take_scroll_request(&mut self) -> Option<ScrollRequest> {
        self.pending_scroll.take()
    }
}
