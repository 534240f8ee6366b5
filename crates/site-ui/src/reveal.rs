//! Scroll reveal
//!
//! Cards start hidden and receive the `visible` class the first time enough
//! of them enters the viewport. Visibility is never taken back.

use crate::events::{Component, Event, EventKind, IntersectionEntry, Rect};
use crate::tokens::{class_names, scroll};
use gallery::CardId;
use std::collections::BTreeSet;

/// Intersection observer options
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    /// Visible fraction required, `0.0..=1.0`
    pub threshold: f64,
    /// Added to the viewport's bottom edge (negative shrinks it)
    pub root_margin_bottom: f64,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: scroll::REVEAL_THRESHOLD,
            root_margin_bottom: scroll::REVEAL_ROOT_MARGIN_BOTTOM,
        }
    }
}

impl RevealOptions {
    /// Compute the intersection entry of a card against the viewport
    pub fn evaluate(&self, target: CardId, element: Rect, viewport: Rect) -> IntersectionEntry {
        let root = Rect {
            height: (viewport.height + self.root_margin_bottom).max(0.0),
            ..viewport
        };

        let ratio = match element.intersection(&root) {
            None => 0.0,
            // Zero-area elements count as fully visible once inside the root
            Some(_) if element.area() == 0.0 => 1.0,
            Some(overlap) => (overlap.area() / element.area()).clamp(0.0, 1.0),
        };
        let touches = element.intersection(&root).is_some();

        let is_intersecting = if self.threshold <= 0.0 {
            touches
        } else {
            touches && ratio >= self.threshold
        };

        IntersectionEntry { target, is_intersecting, ratio }
    }
}

/// Reveal state of the observed cards
#[derive(Debug, Clone, Default)]
pub struct ScrollReveal {
    options: RevealOptions,
    observed: BTreeSet<CardId>,
    visible: BTreeSet<CardId>,
}

impl ScrollReveal {
    /// Observe the given cards
    pub fn new(cards: impl IntoIterator<Item = CardId>, options: RevealOptions) -> Self {
        Self { options, observed: cards.into_iter().collect(), visible: BTreeSet::new() }
    }

    /// Observer options
    pub fn options(&self) -> &RevealOptions {
        &self.options
    }

    /// Apply observer entries
    pub fn observe(&mut self, entries: &[IntersectionEntry]) {
        for entry in entries {
            if entry.is_intersecting
                && self.observed.contains(&entry.target)
                && self.visible.insert(entry.target)
            {
                tracing::trace!(card = %entry.target, "Card revealed");
            }
        }
    }

    /// Evaluate card geometry against the viewport and apply the result
    pub fn observe_layout(&mut self, layout: &[(CardId, Rect)], viewport: Rect) {
        let entries: Vec<_> = layout
            .iter()
            .map(|(card, rect)| self.options.evaluate(*card, *rect, viewport))
            .collect();
        self.observe(&entries);
    }

    /// Check if a card has been revealed
    pub fn is_visible(&self, card: CardId) -> bool {
        self.visible.contains(&card)
    }

    /// Number of revealed cards
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Class toggled on a card element
    pub fn class_for(&self, card: CardId) -> Option<&'static str> {
        self.is_visible(card).then_some(class_names::VISIBLE)
    }
}

impl Component for ScrollReveal {
    fn name(&self) -> &'static str {
        "scroll-reveal"
    }

    fn subscriptions(&self) -> &'static [EventKind] {
        &[EventKind::Intersection]
    }

    fn handle(&mut self, event: &Event) {
        if let Event::Intersection(entries) = event {
            self.observe(entries);
        }
    }

    fn teardown(&mut self) {
        self.observed.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Rect = Rect { x: 0.0, y: 0.0, width: 1280.0, height: 800.0 };

    fn card_at(y: f64) -> Rect {
        Rect::new(0.0, y, 400.0, 300.0)
    }

    #[test]
    fn test_fully_visible() {
        let entry = RevealOptions::default().evaluate(CardId(0), card_at(100.0), VIEWPORT);
        assert!(entry.is_intersecting);
        assert_eq!(entry.ratio, 1.0);
    }

    #[test]
    fn test_below_viewport() {
        let entry = RevealOptions::default().evaluate(CardId(0), card_at(900.0), VIEWPORT);
        assert!(!entry.is_intersecting);
        assert_eq!(entry.ratio, 0.0);
    }

    #[test]
    fn test_bottom_margin_shrinks_viewport() {
        // 40px of the card sit above the 800px fold, but the root ends at 750px
        let entry = RevealOptions::default().evaluate(CardId(0), card_at(760.0), VIEWPORT);
        assert!(!entry.is_intersecting);

        // 60px inside the shrunk root: 0.2 >= 0.1
        let entry = RevealOptions::default().evaluate(CardId(0), card_at(690.0), VIEWPORT);
        assert!(entry.is_intersecting);
        assert!((entry.ratio - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_below_threshold() {
        // 15px of 300px visible
        let entry = RevealOptions::default().evaluate(CardId(0), card_at(735.0), VIEWPORT);
        assert!(!entry.is_intersecting);
        assert!((entry.ratio - 0.05).abs() < 1e-9);
    }

    #[test]
    fn test_visibility_is_sticky() {
        let mut reveal = ScrollReveal::new([CardId(0), CardId(1)], RevealOptions::default());

        reveal.observe_layout(&[(CardId(0), card_at(100.0)), (CardId(1), card_at(900.0))], VIEWPORT);
        assert!(reveal.is_visible(CardId(0)));
        assert!(!reveal.is_visible(CardId(1)));

        reveal.observe_layout(&[(CardId(0), card_at(-900.0))], VIEWPORT);
        assert!(reveal.is_visible(CardId(0)));
        assert_eq!(reveal.class_for(CardId(0)), Some("visible"));
    }

    #[test]
    fn test_unobserved_cards_ignored() {
        let mut reveal = ScrollReveal::new([CardId(0)], RevealOptions::default());
        reveal.handle(&Event::Intersection(vec![IntersectionEntry {
            target: CardId(5),
            is_intersecting: true,
            ratio: 1.0,
        }]));
        assert_eq!(reveal.visible_count(), 0);
    }
}
