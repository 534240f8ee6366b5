//! Page description
//!
//! The parts of the page the components hook into: which well-known
//! elements exist, and the attributes of every project card in grid order.

use crate::{Result, SiteError};
use gallery::CardAttributes;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// IDs of the elements the components attach to
pub mod element_ids {
    /// Particle container
    pub const PARTICLES: &str = "particles-bg";
    /// Custom cursor
    pub const CURSOR: &str = "custom-cursor";
    /// Preloader overlay
    pub const PRELOADER: &str = "preloader";
    /// Lightbox overlay
    pub const LIGHTBOX: &str = "lightbox";
    /// Lightbox content container
    pub const LIGHTBOX_CONTENT: &str = "lightbox-content";
    /// Lightbox close button
    pub const LIGHTBOX_CLOSE: &str = "lightbox-close";

    /// Every well-known element
    pub const ALL: [&str; 6] =
        [PARTICLES, CURSOR, PRELOADER, LIGHTBOX, LIGHTBOX_CONTENT, LIGHTBOX_CLOSE];
}

/// Page description
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageDocument {
    /// IDs of elements present on the page
    pub element_ids: BTreeSet<String>,
    /// Project cards in grid order
    pub cards: Vec<CardAttributes>,
}

impl PageDocument {
    /// Create an empty page
    pub fn new() -> Self {
        Self::default()
    }

    /// Page with every well-known element and the given cards
    pub fn complete(cards: Vec<CardAttributes>) -> Self {
        Self {
            element_ids: element_ids::ALL.iter().map(|id| id.to_string()).collect(),
            cards,
        }
    }

    /// Add an element
    pub fn with_element(mut self, id: impl Into<String>) -> Self {
        self.element_ids.insert(id.into());
        self
    }

    /// Remove an element
    pub fn without_element(mut self, id: &str) -> Self {
        self.element_ids.remove(id);
        self
    }

    /// Append a card
    pub fn with_card(mut self, card: CardAttributes) -> Self {
        self.cards.push(card);
        self
    }

    /// Check if an element is present
    pub fn has_element(&self, id: &str) -> bool {
        self.element_ids.contains(id)
    }

    /// Require every listed element
    pub fn require(&self, ids: &[&str]) -> Result<()> {
        match ids.iter().find(|id| !self.has_element(id)) {
            Some(missing) => Err(SiteError::MissingDomElement(missing.to_string())),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_page() {
        let page = PageDocument::complete(vec![CardAttributes::image("a.jpg")]);
        assert!(element_ids::ALL.iter().all(|id| page.has_element(id)));
        assert_eq!(page.cards.len(), 1);
    }

    #[test]
    fn test_require() {
        let page = PageDocument::new().with_element(element_ids::LIGHTBOX);
        assert!(page.require(&[element_ids::LIGHTBOX]).is_ok());

        let err = page.require(&[element_ids::LIGHTBOX, element_ids::LIGHTBOX_CLOSE]).unwrap_err();
        assert!(matches!(err, SiteError::MissingDomElement(id) if id == "lightbox-close"));
    }

    #[test]
    fn test_deserialize() {
        let page: PageDocument = serde_json::from_str(
            r#"{"elementIds":["lightbox"],"cards":[{"type":"image","src":"a.jpg"}]}"#,
        )
        .unwrap();
        assert!(page.has_element("lightbox"));
        assert_eq!(page.cards, vec![CardAttributes::image("a.jpg")]);
    }
}
