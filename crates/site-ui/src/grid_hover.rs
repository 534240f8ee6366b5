//! Grid dim-on-hover
//!
//! While the pointer is over one card every other card is dimmed.

use crate::events::{Component, Event, EventKind, HoverTarget};
use crate::tokens::class_names;
use gallery::CardId;
use std::collections::BTreeSet;

/// Dimming state of the card grid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridHover {
    cards: Vec<CardId>,
    dimmed: BTreeSet<CardId>,
}

impl GridHover {
    /// Track the given cards
    pub fn new(cards: Vec<CardId>) -> Self {
        Self { cards, dimmed: BTreeSet::new() }
    }

    /// Pointer entered a card
    pub fn enter(&mut self, card: CardId) {
        if !self.cards.contains(&card) {
            return;
        }
        self.dimmed = self.cards.iter().copied().filter(|other| *other != card).collect();
    }

    /// Pointer left a card
    pub fn leave(&mut self) {
        self.dimmed.clear();
    }

    /// Check if a card is dimmed
    pub fn is_dimmed(&self, card: CardId) -> bool {
        self.dimmed.contains(&card)
    }

    /// Dimmed cards
    pub fn dimmed(&self) -> impl Iterator<Item = CardId> + '_ {
        self.dimmed.iter().copied()
    }

    /// Class toggled on a card element
    pub fn class_for(&self, card: CardId) -> Option<&'static str> {
        self.is_dimmed(card).then_some(class_names::DIMMED)
    }
}

impl Component for GridHover {
    fn name(&self) -> &'static str {
        "grid-hover"
    }

    fn subscriptions(&self) -> &'static [EventKind] {
        &[EventKind::MouseEnter, EventKind::MouseLeave]
    }

    fn handle(&mut self, event: &Event) {
        match event {
            Event::MouseEnter(HoverTarget::Card(card)) => self.enter(*card),
            Event::MouseLeave(HoverTarget::Card(_)) => self.leave(),
            _ => {}
        }
    }

    fn teardown(&mut self) {
        self.leave();
    }
}
