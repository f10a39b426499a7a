//! Reveal-on-scroll observer.
//!
//! # Responsibility
//! - Track elements tagged `reveal` that have not been shown yet.
//! - Add the `visible` class once an element crosses the threshold.
//!
//! # Invariants
//! - Reveal is one-way: `visible` is never removed by the observer.
//! - Revealed or detached elements stop being observed.
//! - Elements inserted by a render are only observed after
//!   `observe_reveal_elements` is called again.

use std::collections::BTreeSet;

use log::debug;

use super::{Document, NodeId};

/// Class marking elements that animate in on scroll.
pub const REVEAL_CLASS: &str = "reveal";
/// Class added when an element has been revealed.
pub const VISIBLE_CLASS: &str = "visible";
/// Visible fraction the site uses for its observer.
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.2;

/// Visibility report for one observed element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub target: NodeId,
    /// Fraction of the element inside the viewport, `0.0..=1.0`.
    pub ratio: f64,
    pub is_intersecting: bool,
}

impl IntersectionEntry {
    /// Entry for an element with `ratio` of its area visible.
    pub fn visible(target: NodeId, ratio: f64) -> Self {
        Self {
            target,
            ratio,
            is_intersecting: ratio > 0.0,
        }
    }
}

/// One shared observer instance per document.
#[derive(Debug, Clone)]
pub struct RevealObserver {
    threshold: f64,
    observed: BTreeSet<NodeId>,
}

impl Default for RevealObserver {
    fn default() -> Self {
        Self::new(DEFAULT_REVEAL_THRESHOLD)
    }
}

impl RevealObserver {
    /// Creates an observer; `threshold` is clamped to `0.0..=1.0`.
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_nan() {
            DEFAULT_REVEAL_THRESHOLD
        } else {
            threshold.clamp(0.0, 1.0)
        };
        Self {
            threshold,
            observed: BTreeSet::new(),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn observe(&mut self, node: NodeId) {
        self.observed.insert(node);
    }

    pub fn unobserve(&mut self, node: NodeId) {
        self.observed.remove(&node);
    }

    pub fn is_observing(&self, node: NodeId) -> bool {
        self.observed.contains(&node)
    }

    pub fn observed_count(&self) -> usize {
        self.observed.len()
    }

    /// Re-attaches to every `reveal` element currently in the document.
    ///
    /// Called after each render. Drops handles to elements that were removed
    /// and skips elements already revealed.
    pub fn observe_reveal_elements(&mut self, doc: &Document) {
        self.observed.retain(|node| doc.is_attached(*node));
        for node in doc.query_class(REVEAL_CLASS) {
            let revealed = doc
                .element(node)
                .is_some_and(|element| element.has_class(VISIBLE_CLASS));
            if !revealed {
                self.observed.insert(node);
            }
        }
        debug!(
            "event=reveal_observe module=reveal status=ok observed={}",
            self.observed.len()
        );
    }

    /// Applies a batch of intersection entries and returns how many elements
    /// were revealed.
    pub fn handle(&mut self, doc: &mut Document, entries: &[IntersectionEntry]) -> usize {
        let mut revealed = 0;
        for entry in entries {
            if !self.observed.contains(&entry.target) {
                continue;
            }
            if !entry.is_intersecting || entry.ratio < self.threshold {
                continue;
            }
            if let Some(element) = doc.element_mut(entry.target) {
                element.add_class(VISIBLE_CLASS);
                revealed += 1;
            }
            self.observed.remove(&entry.target);
        }
        revealed
    }
}

#[cfg(test)]
mod tests {
    use super::{IntersectionEntry, RevealObserver};

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(RevealObserver::new(3.0).threshold(), 1.0);
        assert_eq!(RevealObserver::new(-1.0).threshold(), 0.0);
        assert_eq!(RevealObserver::new(f64::NAN).threshold(), 0.2);
    }

    #[test]
    fn zero_ratio_entry_is_not_intersecting() {
        let mut doc = crate::dom::Document::new();
        let node = doc.create_element("div");
        assert!(!IntersectionEntry::visible(node, 0.0).is_intersecting);
    }
}
