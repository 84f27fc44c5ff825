//! One-shot lazy reveal of content blocks.
//!
//! Every block registers an observation with the [`Revealer`] and holds the
//! returned handle. The first intersection at or above the threshold flips the
//! block visible and cancels the observation; nothing ever hides it again.
//! Dropping a block releases its handle, so a late intersection report for it
//! is a no-op instead of a write into disposed state.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};
use std::time::{Duration, Instant};
use tracing::debug;

use crate::constants::reveal::{FADE_DURATION_MS, THRESHOLD};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(u64);

/// Shared between a block and its pending registration
#[derive(Debug, Default)]
struct RevealCell {
    revealed_at: Cell<Option<Instant>>,
}

#[derive(Debug)]
struct Registration {
    threshold: f32,
    cell: Rc<RevealCell>,
}

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    pending: BTreeMap<BlockId, Registration>,
}

/// Viewport observer for reveal blocks
#[derive(Debug, Clone, Default)]
pub struct Revealer {
    registry: Rc<RefCell<Registry>>,
}

impl Revealer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a block at the default threshold.
    /// `delay` staggers the fade-in only; it never delays the trigger.
    pub fn observe(&self, delay: Duration) -> RevealBlock {
        self.observe_with_threshold(delay, THRESHOLD)
    }

    pub fn observe_with_threshold(&self, delay: Duration, threshold: f32) -> RevealBlock {
        let cell = Rc::new(RevealCell::default());

        let mut registry = self.registry.borrow_mut();
        let id = BlockId(registry.next_id);
        registry.next_id += 1;
        registry.pending.insert(
            id,
            Registration {
                threshold,
                cell: Rc::clone(&cell),
            },
        );

        RevealBlock {
            id,
            delay,
            cell,
            _observation: Observation {
                id,
                registry: Rc::downgrade(&self.registry),
            },
        }
    }

    /// Intersection report for a block. Returns true if it was revealed by this call.
    pub fn notify(&self, id: BlockId, ratio: f32) -> bool {
        self.notify_at(id, ratio, Instant::now())
    }

    pub fn notify_at(&self, id: BlockId, ratio: f32, now: Instant) -> bool {
        let mut registry = self.registry.borrow_mut();

        let Some(registration) = registry.pending.get(&id) else {
            debug!(block = ?id, "Intersection for unobserved block ignored");
            return false;
        };

        if ratio < registration.threshold {
            return false;
        }

        if let Some(registration) = registry.pending.remove(&id) {
            registration.cell.revealed_at.set(Some(now));
            debug!(block = ?id, ratio, "Block revealed");
        }
        true
    }

    /// Blocks still waiting for their first intersection
    pub fn pending_count(&self) -> usize {
        self.registry.borrow().pending.len()
    }
}

/// Releases a block's registration when dropped
#[derive(Debug)]
struct Observation {
    id: BlockId,
    registry: Weak<RefCell<Registry>>,
}

impl Drop for Observation {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            if registry.borrow_mut().pending.remove(&self.id).is_some() {
                debug!(block = ?self.id, "Pending observation cancelled on teardown");
            }
        }
    }
}

/// A content block taking part in lazy reveal
#[derive(Debug)]
pub struct RevealBlock {
    id: BlockId,
    delay: Duration,
    cell: Rc<RevealCell>,
    _observation: Observation,
}

impl RevealBlock {
    pub fn id(&self) -> BlockId {
        self.id
    }

    pub fn is_visible(&self) -> bool {
        self.cell.revealed_at.get().is_some()
    }

    /// Fade-in progress at `now`, 0.0 (hidden) to 1.0 (settled)
    pub fn opacity(&self, now: Instant) -> f32 {
        let Some(revealed_at) = self.cell.revealed_at.get() else {
            return 0.0;
        };
        let start = revealed_at + self.delay;
        if now <= start {
            return 0.0;
        }
        let fade = Duration::from_millis(FADE_DURATION_MS).as_secs_f32();
        ((now - start).as_secs_f32() / fade).min(1.0)
    }

    /// True while the fade has not settled yet (the renderer keeps repainting)
    pub fn is_animating(&self, now: Instant) -> bool {
        self.is_visible() && self.opacity(now) < 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_starts_hidden_and_pending() {
        let revealer = Revealer::new();
        let block = revealer.observe(Duration::ZERO);

        assert!(!block.is_visible());
        assert_eq!(block.opacity(Instant::now()), 0.0);
        assert_eq!(revealer.pending_count(), 1);
    }

    #[test]
    fn test_below_threshold_does_not_reveal() {
        let revealer = Revealer::new();
        let block = revealer.observe(Duration::ZERO);

        assert!(!revealer.notify(block.id(), 0.05));
        assert!(!block.is_visible());
        assert_eq!(revealer.pending_count(), 1);
    }

    #[test]
    fn test_reveal_at_threshold_cancels_observation() {
        let revealer = Revealer::new();
        let block = revealer.observe(Duration::ZERO);

        assert!(revealer.notify(block.id(), 0.1));
        assert!(block.is_visible());
        assert_eq!(revealer.pending_count(), 0);

        // Later reports no longer reach the block
        assert!(!revealer.notify(block.id(), 1.0));
    }

    #[test]
    fn test_visibility_is_monotonic() {
        let revealer = Revealer::new();
        let block = revealer.observe(Duration::ZERO);

        revealer.notify(block.id(), 0.5);
        // Scrolled back out of view
        revealer.notify(block.id(), 0.0);
        assert!(block.is_visible());
    }

    #[test]
    fn test_drop_releases_pending_observation() {
        let revealer = Revealer::new();
        let block = revealer.observe(Duration::ZERO);
        let id = block.id();
        let other = revealer.observe(Duration::ZERO);

        drop(block);
        assert_eq!(revealer.pending_count(), 1);

        // Stale callback for the disposed block is a no-op
        assert!(!revealer.notify(id, 1.0));
        assert!(!other.is_visible());
    }

    #[test]
    fn test_block_outliving_revealer() {
        let revealer = Revealer::new();
        let block = revealer.observe(Duration::ZERO);
        drop(revealer);

        // Dropping after the registry is gone must not panic
        assert!(!block.is_visible());
        drop(block);
    }

    #[test]
    fn test_delay_staggers_fade_not_trigger() {
        let revealer = Revealer::new();
        let block = revealer.observe(Duration::from_millis(300));
        let t0 = Instant::now();

        assert!(revealer.notify_at(block.id(), 0.2, t0));
        assert!(block.is_visible());

        assert_eq!(block.opacity(t0 + Duration::from_millis(300)), 0.0);
        let mid = block.opacity(t0 + Duration::from_millis(800));
        assert!((mid - 0.5).abs() < 1e-3);
        assert_eq!(block.opacity(t0 + Duration::from_millis(1300)), 1.0);

        assert!(block.is_animating(t0 + Duration::from_millis(800)));
        assert!(!block.is_animating(t0 + Duration::from_millis(2000)));
    }
}
