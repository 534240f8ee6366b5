//! Preloader overlay
//!
//! The overlay stays up until the window has loaded, then hides after a
//! short delay.

use crate::events::{Component, Event, EventKind};
use crate::tokens::{class_names, duration};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Preloader state
#[derive(Debug, Clone)]
pub struct Preloader {
    hidden: Arc<AtomicBool>,
    delay: Duration,
}

impl Default for Preloader {
    fn default() -> Self {
        Self::new(Duration::from_millis(duration::PRELOADER_DELAY_MS))
    }
}

impl Preloader {
    /// Create a visible preloader
    pub fn new(delay: Duration) -> Self {
        Self { hidden: Arc::new(AtomicBool::new(false)), delay }
    }

    /// Window finished loading; hides after the delay on the current tokio
    /// runtime, or immediately when there is none
    pub fn on_load(&self) -> Option<JoinHandle<()>> {
        match tokio::runtime::Handle::try_current() {
            Ok(runtime) => {
                let hidden = Arc::clone(&self.hidden);
                let delay = self.delay;
                Some(runtime.spawn(async move {
                    tokio::time::sleep(delay).await;
                    hidden.store(true, Ordering::Release);
                    tracing::debug!("Preloader hidden");
                }))
            }
            Err(_) => {
                self.hidden.store(true, Ordering::Release);
                None
            }
        }
    }

    /// Check if the overlay is hidden
    pub fn is_hidden(&self) -> bool {
        self.hidden.load(Ordering::Acquire)
    }

    /// Class toggled on the overlay element
    pub fn class(&self) -> Option<&'static str> {
        self.is_hidden().then_some(class_names::HIDDEN)
    }
}

impl Component for Preloader {
    fn name(&self) -> &'static str {
        "preloader"
    }

    fn subscriptions(&self) -> &'static [EventKind] {
        &[EventKind::Load]
    }

    fn handle(&mut self, event: &Event) {
        if let Event::Load = event {
            self.on_load();
        }
    }
}
