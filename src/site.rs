//! Site bootstrap
//!
//! [`Site::mount`] builds every component independently: a component whose
//! elements are missing is logged and skipped without affecting the rest.
//! Events are routed through the listener registry, and
//! [`Site::teardown`] detaches everything so the page can be mounted again.

use crate::config::SiteConfig;
use crate::document::{element_ids, PageDocument};
use crate::{Result, SiteError};
use gallery::Gallery;
use site_ui::{
    Component, CursorFollower, Event, GridHover, Lightbox, ListenerRegistry, ParticleField,
    Preloader, ScrollReveal, ScrollTracker,
};
use std::sync::Arc;
use video_embed::VideoEmbedResolver;

/// Mounted page
pub struct Site {
    config: SiteConfig,
    gallery: Arc<Gallery>,
    registry: ListenerRegistry,
    particles: Option<ParticleField>,
    cursor: Option<CursorFollower>,
    preloader: Option<Preloader>,
    reveal: Option<ScrollReveal>,
    grid: Option<GridHover>,
    scroll: Option<ScrollTracker>,
    lightbox: Option<Lightbox>,
    skipped: Vec<(&'static str, SiteError)>,
}

impl Site {
    /// Mount every component described by the page
    ///
    /// Fails only when the configuration itself is invalid.
    pub fn mount(document: &PageDocument, config: SiteConfig) -> Result<Self> {
        config.validate()?;

        let gallery = Arc::new(Gallery::from_cards(document.cards.iter().cloned()));
        let mut skipped = Vec::new();

        let particles = try_mount(&mut skipped, "particles", || {
            document.require(&[element_ids::PARTICLES])?;
            Ok(ParticleField::new(config.particle_count))
        });
        let cursor = try_mount(&mut skipped, "cursor", || {
            document.require(&[element_ids::CURSOR])?;
            Ok(CursorFollower::new(config.cursor_speed))
        });
        let preloader = try_mount(&mut skipped, "preloader", || {
            document.require(&[element_ids::PRELOADER])?;
            Ok(Preloader::new(config.preloader_delay()))
        });
        let reveal = try_mount(&mut skipped, "scroll-reveal", || {
            Ok(ScrollReveal::new(gallery.ids(), config.reveal_options()))
        });
        let grid = try_mount(&mut skipped, "grid-hover", || Ok(GridHover::new(gallery.ids())));
        let scroll = try_mount(&mut skipped, "scroll", || {
            Ok(ScrollTracker::new(config.scrolled_threshold))
        });
        let lightbox = try_mount(&mut skipped, "lightbox", || {
            document.require(&[
                element_ids::LIGHTBOX,
                element_ids::LIGHTBOX_CONTENT,
                element_ids::LIGHTBOX_CLOSE,
            ])?;
            let resolver = VideoEmbedResolver::new(config.embed.clone());
            Ok(Lightbox::new(Arc::clone(&gallery), resolver).with_transition(config.transition()))
        });

        let mut site = Self {
            config,
            gallery,
            registry: ListenerRegistry::new(),
            particles,
            cursor,
            preloader,
            reveal,
            grid,
            scroll,
            lightbox,
            skipped,
        };

        site.attach_all();
        tracing::info!(
            cards = site.gallery.len(),
            listeners = site.registry.len(),
            skipped = site.skipped.len(),
            "Site mounted"
        );
        Ok(site)
    }

    fn attach_all(&mut self) {
        let Self { registry, cursor, preloader, reveal, grid, scroll, lightbox, .. } = self;
        let components: [Option<&dyn Component>; 6] = [
            cursor.as_ref().map(|c| c as &dyn Component),
            preloader.as_ref().map(|c| c as &dyn Component),
            reveal.as_ref().map(|c| c as &dyn Component),
            grid.as_ref().map(|c| c as &dyn Component),
            scroll.as_ref().map(|c| c as &dyn Component),
            lightbox.as_ref().map(|c| c as &dyn Component),
        ];
        for component in components.into_iter().flatten() {
            registry.attach(component);
        }
    }

    fn component_mut(&mut self, name: &str) -> Option<&mut dyn Component> {
        let components: [Option<&mut dyn Component>; 6] = [
            self.cursor.as_mut().map(|c| c as &mut dyn Component),
            self.preloader.as_mut().map(|c| c as &mut dyn Component),
            self.reveal.as_mut().map(|c| c as &mut dyn Component),
            self.grid.as_mut().map(|c| c as &mut dyn Component),
            self.scroll.as_mut().map(|c| c as &mut dyn Component),
            self.lightbox.as_mut().map(|c| c as &mut dyn Component),
        ];
        components.into_iter().flatten().find(|c| c.name() == name)
    }

    /// Deliver an event to every listening component
    pub fn dispatch(&mut self, event: &Event) {
        let listeners = self.registry.listeners(event.kind()).to_vec();
        for name in listeners {
            if let Some(component) = self.component_mut(name) {
                component.handle(event);
            }
        }
    }

    /// Detach every listener and reset component state
    pub fn teardown(&mut self) {
        let names: Vec<&'static str> = [
            self.cursor.as_ref().map(|c| c.name()),
            self.preloader.as_ref().map(|c| c.name()),
            self.reveal.as_ref().map(|c| c.name()),
            self.grid.as_ref().map(|c| c.name()),
            self.scroll.as_ref().map(|c| c.name()),
            self.lightbox.as_ref().map(|c| c.name()),
        ]
        .into_iter()
        .flatten()
        .collect();

        let mut removed = 0;
        for name in names {
            if let Some(component) = self.component_mut(name) {
                component.teardown();
            }
            removed += self.registry.detach(name);
        }
        tracing::info!(listeners = removed, "Site torn down");
    }

    /// Check if any listener is attached
    pub fn is_mounted(&self) -> bool {
        !self.registry.is_empty()
    }

    /// Configuration in use
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Parsed gallery
    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    /// Listener registry
    pub fn registry(&self) -> &ListenerRegistry {
        &self.registry
    }

    /// Components that could not be mounted, with the reason
    pub fn skipped(&self) -> &[(&'static str, SiteError)] {
        &self.skipped
    }

    /// Background particles
    pub fn particles(&self) -> Option<&ParticleField> {
        self.particles.as_ref()
    }

    /// Custom cursor
    pub fn cursor(&self) -> Option<&CursorFollower> {
        self.cursor.as_ref()
    }

    /// Preloader
    pub fn preloader(&self) -> Option<&Preloader> {
        self.preloader.as_ref()
    }

    /// Scroll reveal
    pub fn reveal(&self) -> Option<&ScrollReveal> {
        self.reveal.as_ref()
    }

    /// Grid hover
    pub fn grid(&self) -> Option<&GridHover> {
        self.grid.as_ref()
    }

    /// Scroll tracker
    pub fn scroll(&self) -> Option<&ScrollTracker> {
        self.scroll.as_ref()
    }

    /// Lightbox
    pub fn lightbox(&self) -> Option<&Lightbox> {
        self.lightbox.as_ref()
    }
}

fn try_mount<T>(
    skipped: &mut Vec<(&'static str, SiteError)>,
    name: &'static str,
    build: impl FnOnce() -> Result<T>,
) -> Option<T> {
    match build() {
        Ok(component) => Some(component),
        Err(e) => {
            tracing::warn!(component = name, "Component not mounted: {}", e);
            skipped.push((name, e));
            None
        }
    }
}
