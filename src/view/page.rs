//! Page-level coordinator.
//!
//! Owns every view-state cell and is the only thing that mutates them. The
//! renderer feeds it events (scroll offsets, intersections, clicks) and reads
//! back a [`UiState`] snapshot plus the pieces it needs to draw.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tracing::{debug, info};

use super::backend::{SimulatedBackend, SubmissionBackend};
use super::contact::{ContactForm, ContactFormMachine, FormStatus, SubmitError};
use super::navigation::{NavContext, NavigationMenu, ScrollRequest};
use super::overlay::{ActiveOverlay, LinkTemplates, ModalController, OverlayView, ProjectLink};
use super::reveal::{RevealBlock, Revealer};
use super::scroll_spy::{ScrollSpy, SectionLocator};
use super::section::Section;
use crate::config::Settings;
use crate::content::{ArticleId, Content, ProjectId};

/// Snapshot of the view state handed to presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiState {
    pub active_section: Section,
    pub is_scrolled: bool,
    pub is_mobile_menu_open: bool,
    pub overlay: ActiveOverlay,
    pub form_status: FormStatus,
}

pub struct PageController {
    content: Arc<Content>,
    scroll_spy: ScrollSpy,
    nav: NavigationMenu,
    modal: ModalController,
    form: ContactFormMachine,
    revealer: Revealer,
    blocks: BTreeMap<String, RevealBlock>,
    lock_scroll_on_overlay: bool,
    torn_down: bool,
}

impl PageController {
    pub fn new(
        content: Arc<Content>,
        settings: &Settings,
        backend: Arc<dyn SubmissionBackend>,
        runtime: Handle,
    ) -> Self {
        let links = LinkTemplates {
            live_site: settings.live_site_url.clone(),
            code: settings.code_url.clone(),
        };
        Self {
            content,
            scroll_spy: ScrollSpy::new(),
            nav: NavigationMenu::new(),
            modal: ModalController::new(links),
            form: ContactFormMachine::new(backend, runtime),
            revealer: Revealer::new(),
            blocks: BTreeMap::new(),
            lock_scroll_on_overlay: settings.lock_scroll_on_overlay,
            torn_down: false,
        }
    }

    /// Controller whose contact form completes after the configured delay
    /// without delivering anything
    pub fn with_simulated_backend(content: Arc<Content>, settings: &Settings, runtime: Handle) -> Self {
        let backend = SimulatedBackend::new(settings.submit_delay());
        Self::new(content, settings, Arc::new(backend), runtime)
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Shared handle to the dataset, for renderers that mutate the page while drawing it
    pub fn shared_content(&self) -> Arc<Content> {
        Arc::clone(&self.content)
    }

    pub fn ui_state(&self) -> UiState {
        UiState {
            active_section: self.scroll_spy.active(),
            is_scrolled: self.scroll_spy.is_scrolled(),
            is_mobile_menu_open: self.nav.is_mobile_open(),
            overlay: self.modal.current(),
            form_status: self.form.status(),
        }
    }

    // -- scroll spy -----------------------------------------------------------

    pub fn on_scroll(&mut self, offset_y: f32, locator: &impl SectionLocator) -> bool {
        if self.torn_down {
            debug!("Scroll event after teardown ignored");
            return false;
        }
        self.scroll_spy.on_scroll(offset_y, locator)
    }

    // -- navigation -----------------------------------------------------------

    pub fn toggle_menu(&mut self) {
        self.nav.toggle_menu();
    }

    pub fn select_section(&mut self, section: Section, context: NavContext) {
        let section = self.nav.select_section(section, context);
        self.scroll_spy.set_active(section);
    }

    pub fn scroll_to(&mut self, section: Section) {
        self.nav.scroll_to(section);
    }

    pub fn take_scroll_request(&mut self) -> Option<ScrollRequest> {
        self.nav.take_scroll_request()
    }

    // -- overlay --------------------------------------------------------------

    pub fn open_project(&mut self, id: ProjectId) {
        self.modal.open_project(id);
    }

    pub fn open_article(&mut self, id: ArticleId) {
        self.modal.open_article(id);
    }

    pub fn close_overlay(&mut self) {
        self.modal.close();
    }

    pub fn overlay_view(&self) -> Option<OverlayView<'_>> {
        self.modal.resolve(&self.content)
    }

    pub fn follow_project_link(&mut self, link: ProjectLink) -> Option<String> {
        self.modal.follow_link(link)
    }

    /// Background scrolling is inert while an overlay is up
    pub fn is_scroll_locked(&self) -> bool {
        self.lock_scroll_on_overlay && self.modal.is_open()
    }

    // -- contact form ---------------------------------------------------------

    pub fn submit_contact(&mut self, form: &ContactForm) -> Result<u64, SubmitError> {
        self.form.submit(form)
    }

    pub fn reset_contact(&mut self) -> bool {
        self.form.reset()
    }

    pub fn can_submit(&self) -> bool {
        self.form.can_submit()
    }

    /// Collect asynchronous completions. Called once per frame.
    pub fn tick(&mut self) -> bool {
        if self.torn_down {
            return false;
        }
        self.form.poll()
    }

    // -- reveal ---------------------------------------------------------------

    /// The reveal block mounted under `key`, registering it on first use
    pub fn reveal_block(&mut self, key: &str, delay: Duration) -> &RevealBlock {
        if !self.blocks.contains_key(key) {
            let block = self.revealer.observe(delay);
            self.blocks.insert(key.to_string(), block);
        }
        &self.blocks[key]
    }

    pub fn report_intersection(&mut self, key: &str, ratio: f32) -> bool {
        if self.torn_down {
            debug!(block = key, "Intersection after teardown ignored");
            return false;
        }
        match self.blocks.get(key) {
            Some(block) => self.revealer.notify(block.id(), ratio),
            None => {
                debug!(block = key, "Intersection for unmounted block ignored");
                false
            }
        }
    }

    // -- lifecycle ------------------------------------------------------------

    /// Release every subscription; later events become no-ops
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.form.dispose();
        let pending = self.revealer.pending_count();
        self.blocks.clear();
        self.torn_down = true;
        info!(released_observations = pending, "Page torn down");
    }
}
