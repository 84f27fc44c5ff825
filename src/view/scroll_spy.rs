//! Scroll-spy: derives the active navigation section and the header
//! collapse flag from the scroll position.

use tracing::debug;

use super::section::Section;
use crate::constants::scroll::{ACTIVE_BAND_BOTTOM, SCROLLED_THRESHOLD};

/// Answers where a section's anchor currently sits.
///
/// Returns the anchor's top edge relative to the viewport top, or `None` if
/// the layout has no element for that section.
pub trait SectionLocator {
    fn section_top(&self, section: Section) -> Option<f32>;
}

impl<F> SectionLocator for F
where
    F: Fn(Section) -> Option<f32>,
{
    fn section_top(&self, section: Section) -> Option<f32> {
        self(section)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollSpy {
    active: Section,
    is_scrolled: bool,
}

impl ScrollSpy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Section {
        self.active
    }

    pub fn is_scrolled(&self) -> bool {
        self.is_scrolled
    }

    /// Explicit activation from a navigation link
    pub fn set_active(&mut self, section: Section) {
        self.active = section;
    }

    /// Handle one scroll event. Returns true if any derived value changed.
    pub fn on_scroll(&mut self, offset_y: f32, locator: &impl SectionLocator) -> bool {
        let before = *self;

        self.is_scrolled = offset_y > SCROLLED_THRESHOLD;

        for section in Section::ALL {
            let Some(top) = locator.section_top(section) else {
                debug!(section = %section, "No anchor for section, skipping");
                continue;
            };
            if (0.0..=ACTIVE_BAND_BOTTOM).contains(&top) {
                self.active = section;
                break;
            }
        }

        let changed = before != *self;
        if changed {
            debug!(offset_y, active = %self.active, scrolled = self.is_scrolled, "Scroll spy updated");
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Locator backed by a fixed table of section tops
    fn tops(table: &[(Section, f32)]) -> impl SectionLocator + '_ {
        move |section: Section| table.iter().find(|(s, _)| *s == section).map(|(_, top)| *top)
    }

    #[test]
    fn test_initial_state() {
        let spy = ScrollSpy::new();
        assert_eq!(spy.active(), Section::Home);
        assert!(!spy.is_scrolled());
    }

    #[test]
    fn test_is_scrolled_threshold() {
        let mut spy = ScrollSpy::new();
        let none = tops(&[]);

        spy.on_scroll(0.0, &none);
        assert!(!spy.is_scrolled());

        spy.on_scroll(50.0, &none);
        assert!(!spy.is_scrolled()); // strictly greater than 50

        spy.on_scroll(50.5, &none);
        assert!(spy.is_scrolled());

        spy.on_scroll(80.0, &none);
        assert!(spy.is_scrolled());

        spy.on_scroll(10.0, &none);
        assert!(!spy.is_scrolled());
    }

    #[test]
    fn test_section_in_band_becomes_active() {
        let mut spy = ScrollSpy::new();
        let table = [
            (Section::Home, -1200.0),
            (Section::Expertise, -500.0),
            (Section::Work, 150.0),
            (Section::Blog, 900.0),
            (Section::Contact, 1600.0),
        ];

        assert!(spy.on_scroll(1300.0, &tops(&table)));
        assert_eq!(spy.active(), Section::Work);
    }

    #[test]
    fn test_first_match_wins() {
        let mut spy = ScrollSpy::new();
        // Both blog and contact are inside [0, 300]; list order decides
        let table = [
            (Section::Home, -2000.0),
            (Section::Expertise, -1500.0),
            (Section::Work, -800.0),
            (Section::Blog, 20.0),
            (Section::Contact, 250.0),
        ];

        spy.on_scroll(2100.0, &tops(&table));
        assert_eq!(spy.active(), Section::Blog);
    }

    #[test]
    fn test_band_edges_are_inclusive() {
        let mut spy = ScrollSpy::new();

        spy.on_scroll(600.0, &tops(&[(Section::Expertise, 0.0)]));
        assert_eq!(spy.active(), Section::Expertise);

        spy.on_scroll(900.0, &tops(&[(Section::Work, 300.0)]));
        assert_eq!(spy.active(), Section::Work);

        spy.on_scroll(950.0, &tops(&[(Section::Blog, 300.5), (Section::Contact, -0.5)]));
        assert_eq!(spy.active(), Section::Work);
    }

    #[test]
    fn test_no_match_keeps_previous_section() {
        let mut spy = ScrollSpy::new();
        spy.on_scroll(1300.0, &tops(&[(Section::Work, 150.0)]));
        assert_eq!(spy.active(), Section::Work);

        // Scrolled into the middle of a tall section: nothing in the band
        let table = [(Section::Work, -400.0), (Section::Blog, 500.0)];
        spy.on_scroll(1850.0, &tops(&table));
        assert_eq!(spy.active(), Section::Work);
    }

    #[test]
    fn test_missing_anchor_skipped() {
        let mut spy = ScrollSpy::new();
        // Expertise has no element; Work is the first locatable match
        let table = [(Section::Home, -900.0), (Section::Work, 100.0)];

        spy.on_scroll(1000.0, &tops(&table));
        assert_eq!(spy.active(), Section::Work);
    }

    #[test]
    fn test_unchanged_event_reports_no_change() {
        let mut spy = ScrollSpy::new();
        let table = [(Section::Home, 0.0)];
        assert!(!spy.on_scroll(0.0, &tops(&table)));
    }
}
