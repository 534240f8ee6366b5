//! Lightbox modal
//!
//! Clicking a card opens the lightbox with the card's image or video player.
//! Closing hides the overlay immediately and clears its content once the
//! fade-out transition has finished, so no player keeps running behind the
//! page.

use crate::events::{ClickTarget, Component, Event, EventKind, Key};
use crate::tokens::{class_names, duration};
use gallery::{CardId, Gallery, Markup, MediaItem};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use video_embed::VideoEmbedResolver;

/// Visible state of the lightbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxPhase {
    /// Hidden and empty
    Closed,
    /// Shown with content
    Open,
    /// Hidden, content waiting to be cleared
    Closing,
}

#[derive(Debug, Default)]
struct LightboxState {
    active: bool,
    content: Option<Markup>,
    scroll_locked: bool,
    /// Bumped on every open; a clear timer only applies to its own generation
    generation: u64,
}

/// Lightbox handle
///
/// Cloning shares the same underlying state.
#[derive(Debug, Clone)]
pub struct Lightbox {
    state: Arc<Mutex<LightboxState>>,
    gallery: Arc<Gallery>,
    resolver: VideoEmbedResolver,
    transition: Duration,
}

impl Lightbox {
    /// Create a closed lightbox for the given gallery
    pub fn new(gallery: Arc<Gallery>, resolver: VideoEmbedResolver) -> Self {
        Self {
            state: Arc::new(Mutex::new(LightboxState::default())),
            gallery,
            resolver,
            transition: Duration::from_millis(duration::LIGHTBOX_TRANSITION_MS),
        }
    }

    /// Set the close transition duration
    pub fn with_transition(mut self, transition: Duration) -> Self {
        self.transition = transition;
        self
    }

    /// Close transition duration
    pub fn transition(&self) -> Duration {
        self.transition
    }

    /// Open the lightbox with a media item
    ///
    /// Returns `false`, leaving the current content untouched, when the item
    /// produces no markup (an unresolvable video).
    pub fn open(&self, item: &MediaItem) -> bool {
        let Some(markup) = Markup::for_item(item, &self.resolver) else {
            return false;
        };

        let mut state = self.state.lock();
        state.generation += 1;
        state.content = Some(markup);
        state.active = true;
        state.scroll_locked = true;
        tracing::debug!(generation = state.generation, "Lightbox opened");
        true
    }

    /// Open the lightbox for a gallery card
    pub fn open_card(&self, id: CardId) -> bool {
        match self.gallery.item(id) {
            Some(item) => self.open(item),
            None => {
                tracing::debug!(card = %id, "Card has no media");
                false
            }
        }
    }

    /// Close the lightbox
    ///
    /// Content is cleared after the transition on the current tokio runtime,
    /// or immediately when there is none. The returned handle completes once
    /// the deferred clear has run.
    pub fn close(&self) -> Option<JoinHandle<()>> {
        let generation = {
            let mut state = self.state.lock();
            state.active = false;
            state.scroll_locked = false;
            state.generation
        };

        match tokio::runtime::Handle::try_current() {
            Ok(runtime) => {
                let state = Arc::clone(&self.state);
                let transition = self.transition;
                Some(runtime.spawn(async move {
                    tokio::time::sleep(transition).await;
                    clear_if_current(&state, generation);
                }))
            }
            Err(_) => {
                clear_if_current(&self.state, generation);
                None
            }
        }
    }

    /// Handle a key press; Escape closes
    pub fn handle_key(&self, key: &Key) {
        if *key == Key::Escape && self.phase() == LightboxPhase::Open {
            self.close();
        }
    }

    /// Handle a click
    pub fn handle_click(&self, target: ClickTarget) {
        match target {
            ClickTarget::Card(id) => {
                self.open_card(id);
            }
            ClickTarget::LightboxBackdrop | ClickTarget::LightboxClose => {
                if self.phase() == LightboxPhase::Open {
                    self.close();
                }
            }
            ClickTarget::LightboxContent | ClickTarget::Elsewhere => {}
        }
    }

    /// Current phase
    pub fn phase(&self) -> LightboxPhase {
        let state = self.state.lock();
        match (state.active, state.content.is_some()) {
            (true, _) => LightboxPhase::Open,
            (false, true) => LightboxPhase::Closing,
            (false, false) => LightboxPhase::Closed,
        }
    }

    /// Check if the overlay is shown
    pub fn is_active(&self) -> bool {
        self.state.lock().active
    }

    /// Check if page scrolling is locked
    pub fn is_scroll_locked(&self) -> bool {
        self.state.lock().scroll_locked
    }

    /// Current content
    pub fn content(&self) -> Option<Markup> {
        self.state.lock().content.clone()
    }

    /// Current content as HTML (empty when cleared)
    pub fn content_html(&self) -> String {
        self.state.lock().content.as_ref().map(Markup::to_html).unwrap_or_default()
    }

    /// Check if a video player is present
    pub fn has_playable_media(&self) -> bool {
        self.state.lock().content.as_ref().is_some_and(Markup::is_playable)
    }

    /// Class toggled on the overlay element
    pub fn class(&self) -> Option<&'static str> {
        self.is_active().then_some(class_names::ACTIVE)
    }
}

fn clear_if_current(state: &Mutex<LightboxState>, generation: u64) {
    let mut state = state.lock();
    if !state.active && state.generation == generation {
        state.content = None;
        tracing::debug!(generation, "Lightbox content cleared");
    }
}

impl Component for Lightbox {
    fn name(&self) -> &'static str {
        "lightbox"
    }

    fn subscriptions(&self) -> &'static [EventKind] {
        &[EventKind::Click, EventKind::KeyDown]
    }

    fn handle(&mut self, event: &Event) {
        match event {
            Event::Click(target) => self.handle_click(*target),
            Event::KeyDown(key) => self.handle_key(key),
            _ => {}
        }
    }

    fn teardown(&mut self) {
        let mut state = self.state.lock();
        state.active = false;
        state.scroll_locked = false;
        state.content = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gallery::CardAttributes;

    fn lightbox() -> Lightbox {
        let gallery = Gallery::from_cards(vec![
            CardAttributes::image("img/one.jpg"),
            CardAttributes::video_url("https://youtu.be/dQw4w9WgXcQ"),
            CardAttributes::video_url("https://example.com/video"),
            CardAttributes::default(),
        ]);
        Lightbox::new(Arc::new(gallery), VideoEmbedResolver::default())
    }

    #[test]
    fn test_starts_closed() {
        let lightbox = lightbox();
        assert_eq!(lightbox.phase(), LightboxPhase::Closed);
        assert!(lightbox.content().is_none());
        assert!(lightbox.class().is_none());
    }

    #[test]
    fn test_open_image() {
        let lightbox = lightbox();
        assert!(lightbox.open_card(CardId(0)));
        assert_eq!(lightbox.phase(), LightboxPhase::Open);
        assert!(lightbox.is_scroll_locked());
        assert_eq!(lightbox.content_html(), r#"<img src="img/one.jpg" alt="Project">"#);
        assert_eq!(lightbox.class(), Some("active"));
    }

    #[test]
    fn test_open_video() {
        let lightbox = lightbox();
        assert!(lightbox.open_card(CardId(1)));
        assert!(lightbox.has_playable_media());
        assert!(lightbox.content_html().contains("youtube-nocookie.com/embed/dQw4w9WgXcQ"));
    }

    #[test]
    fn test_unresolvable_video_does_not_open() {
        let lightbox = lightbox();
        assert!(!lightbox.open_card(CardId(2)));
        assert_eq!(lightbox.phase(), LightboxPhase::Closed);
        assert!(!lightbox.is_scroll_locked());
    }

    #[test]
    fn test_unresolvable_video_keeps_previous_content() {
        let lightbox = lightbox();
        lightbox.open_card(CardId(0));
        assert!(!lightbox.open_card(CardId(2)));
        assert_eq!(lightbox.content_html(), r#"<img src="img/one.jpg" alt="Project">"#);
    }

    #[test]
    fn test_inert_and_missing_cards() {
        let lightbox = lightbox();
        assert!(!lightbox.open_card(CardId(3)));
        assert!(!lightbox.open_card(CardId(42)));
        assert_eq!(lightbox.phase(), LightboxPhase::Closed);
    }

    #[test]
    fn test_close_without_runtime_clears_immediately() {
        let lightbox = lightbox();
        lightbox.open_card(CardId(1));
        assert!(lightbox.close().is_none());
        assert_eq!(lightbox.phase(), LightboxPhase::Closed);
        assert!(!lightbox.has_playable_media());
    }

    #[tokio::test(start_paused = true)]
    async fn test_close_clears_after_transition() {
        let lightbox = lightbox();
        lightbox.open_card(CardId(1));

        let clear = lightbox.close().unwrap();
        assert_eq!(lightbox.phase(), LightboxPhase::Closing);
        assert!(!lightbox.is_scroll_locked());
        assert!(lightbox.has_playable_media());

        clear.await.unwrap();
        assert_eq!(lightbox.phase(), LightboxPhase::Closed);
        assert!(!lightbox.has_playable_media());
        assert_eq!(lightbox.content_html(), "");
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_clear_keeps_reopened_content() {
        let lightbox = lightbox();
        lightbox.open_card(CardId(1));
        let stale = lightbox.close().unwrap();

        lightbox.open_card(CardId(0));
        stale.await.unwrap();

        assert_eq!(lightbox.phase(), LightboxPhase::Open);
        assert_eq!(lightbox.content_html(), r#"<img src="img/one.jpg" alt="Project">"#);
    }

    #[tokio::test(start_paused = true)]
    async fn test_escape_and_clicks() {
        let mut lightbox = lightbox();

        lightbox.handle(&Event::Click(ClickTarget::Card(CardId(0))));
        assert!(lightbox.is_active());

        lightbox.handle(&Event::Click(ClickTarget::LightboxContent));
        assert!(lightbox.is_active());

        lightbox.handle(&Event::KeyDown(Key::Other("Enter".to_string())));
        assert!(lightbox.is_active());

        lightbox.handle(&Event::KeyDown(Key::Escape));
        assert!(!lightbox.is_active());

        lightbox.handle(&Event::Click(ClickTarget::Card(CardId(0))));
        lightbox.handle(&Event::Click(ClickTarget::LightboxBackdrop));
        assert!(!lightbox.is_active());

        lightbox.handle(&Event::Click(ClickTarget::Card(CardId(0))));
        lightbox.handle(&Event::Click(ClickTarget::LightboxClose));
        assert!(!lightbox.is_active());
    }

    #[test]
    fn test_teardown_clears_everything() {
        let mut lightbox = lightbox();
        lightbox.open_card(CardId(1));
        lightbox.teardown();
        assert_eq!(lightbox.phase(), LightboxPhase::Closed);
        assert!(!lightbox.is_scroll_locked());
    }
}
