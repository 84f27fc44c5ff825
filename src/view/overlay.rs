//! Singleton detail overlay for a project or an article.
//!
//! The selection is one tagged cell, so a project and an article can never be
//! open at the same time. Opening replaces whatever was shown; there is no
//! stack and no history.

use tracing::{debug, info, warn};

use crate::config::format_link;
use crate::content::{Article, ArticleId, Content, Project, ProjectId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveOverlay {
    #[default]
    None,
    Project(ProjectId),
    Article(ArticleId),
}

/// Resolved overlay, borrowing the entity from the dataset
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OverlayView<'a> {
    Project(&'a Project),
    Article(&'a Article),
}

/// Outbound destinations offered by an open project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectLink {
    LiveSite,
    Code,
}

/// Templates used to format project links
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTemplates {
    pub live_site: String,
    pub code: String,
}

impl LinkTemplates {
    pub fn format(&self, link: ProjectLink, id: ProjectId) -> String {
        match link {
            ProjectLink::LiveSite => format_link(&self.live_site, id),
            ProjectLink::Code => format_link(&self.code, id),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ModalController {
    current: ActiveOverlay,
    links: LinkTemplates,
}

impl ModalController {
    pub fn new(links: LinkTemplates) -> Self {
        Self {
            current: ActiveOverlay::None,
            links,
        }
    }

    pub fn current(&self) -> ActiveOverlay {
        self.current
    }

    pub fn is_open(&self) -> bool {
        self.current != ActiveOverlay::None
    }

    pub fn open(&mut self, target: ActiveOverlay) {
        if target == ActiveOverlay::None {
            self.close();
            return;
        }
        if self.is_open() {
            debug!(previous = ?self.current, next = ?target, "Replacing open overlay");
        }
        info!(overlay = ?target, "Overlay opened");
        self.current = target;
    }

    pub fn open_project(&mut self, id: ProjectId) {
        self.open(ActiveOverlay::Project(id));
    }

    pub fn open_article(&mut self, id: ArticleId) {
        self.open(ActiveOverlay::Article(id));
    }

    /// Idempotent: closing an already-closed overlay does nothing
    pub fn close(&mut self) {
        if self.is_open() {
            info!(overlay = ?self.current, "Overlay closed");
            self.current = ActiveOverlay::None;
        }
    }

    /// Look the open target up in the dataset. Unknown ids resolve to nothing.
    pub fn resolve<'a>(&self, content: &'a Content) -> Option<OverlayView<'a>> {
        let view = match self.current {
            ActiveOverlay::None => return None,
            ActiveOverlay::Project(id) => content.project(id).map(OverlayView::Project),
            ActiveOverlay::Article(id) => content.article(id).map(OverlayView::Article),
        };
        if view.is_none() {
            warn!(overlay = ?self.current, "Overlay target not found in content");
        }
        view
    }

    /// Follow one of the open project's outbound links.
    ///
    /// Closes the overlay and returns the formatted URL; does nothing when no
    /// project is open.
    pub fn follow_link(&mut self, link: ProjectLink) -> Option<String> {
        let ActiveOverlay::Project(id) = self.current else {
            debug!(?link, "Project link followed with no project open");
            return None;
        };
        let url = self.links.format(link, id);
        info!(project = id, ?link, url = %url, "Following project link");
        self.close();
        Some(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::links;

    fn controller() -> ModalController {
        ModalController::new(LinkTemplates {
            live_site: links::LIVE_SITE_TEMPLATE.to_string(),
            code: links::CODE_TEMPLATE.to_string(),
        })
    }

    #[test]
    fn test_open_and_close_project() {
        let content = Content::builtin().unwrap();
        let mut modal = controller();

        modal.open_project(2);
        assert_eq!(modal.current(), ActiveOverlay::Project(2));
        match modal.resolve(&content) {
            Some(OverlayView::Project(project)) => assert_eq!(project.id, 2),
            other => panic!("expected project overlay, got {other:?}"),
        }

        modal.close();
        assert_eq!(modal.current(), ActiveOverlay::None);
        assert!(modal.resolve(&content).is_none());
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut modal = controller();
        modal.close();
        assert_eq!(modal.current(), ActiveOverlay::None);

        modal.open_article(ArticleId(1));
        modal.close();
        modal.close();
        assert!(!modal.is_open());
    }

    #[test]
    fn test_open_replaces_previous_selection() {
        let content = Content::builtin().unwrap();
        let mut modal = controller();

        modal.open_project(1);
        modal.open_article(ArticleId(0));
        assert_eq!(modal.current(), ActiveOverlay::Article(ArticleId(0)));
        assert!(matches!(modal.resolve(&content), Some(OverlayView::Article(_))));

        // A single close dismisses everything; nothing was stacked underneath
        modal.close();
        assert!(!modal.is_open());
    }

    #[test]
    fn test_unknown_target_resolves_to_none() {
        let content = Content::builtin().unwrap();
        let mut modal = controller();

        modal.open_project(404);
        assert!(modal.is_open());
        assert!(modal.resolve(&content).is_none());
    }

    #[test]
    fn test_follow_link_closes_overlay() {
        let mut modal = controller();
        modal.open_project(3);

        let url = modal.follow_link(ProjectLink::LiveSite);
        assert_eq!(url.as_deref(), Some("https://live-demo.tanvirhossain.com/project-3"));
        assert!(!modal.is_open());

        modal.open_project(1);
        let url = modal.follow_link(ProjectLink::Code);
        assert_eq!(url.as_deref(), Some("https://github.com/tanvirh/repo-1"));
    }

    #[test]
    fn test_follow_link_without_project() {
        let mut modal = controller();
        assert_eq!(modal.follow_link(ProjectLink::Code), None);

        modal.open_article(ArticleId(2));
        assert_eq!(modal.follow_link(ProjectLink::LiveSite), None);
        assert!(modal.is_open());
    }
}
