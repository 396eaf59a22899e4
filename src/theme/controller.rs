//! Theme controller: stored preference, system preference, and user toggles.
//!
//! DESIGN
//! ======
//! The root attribute is the rendered state and the only thing `toggle` reads.
//! The stored preference is consulted at startup and again every time a
//! system preference change arrives, never cached, so a choice made in
//! another tab is honored.
//!
//! TRADE-OFFS
//! ==========
//! Storage failures degrade to "no stored preference" on read and to a no-op
//! on write. The page keeps working in private/sandboxed contexts; the cost is
//! that a toggle may not survive a reload there.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use super::host::{PreferenceStore, RootElement, ToggleControl};
use super::model::{Theme, ThemeEvent};

/// Lifecycle misuse of [`ThemeController`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    #[error("theme controller already initialized")]
    AlreadyInitialized,
    #[error("theme controller used before initialization")]
    NotInitialized,
}

/// Owns the page-session theme state and the host handles it writes to.
#[derive(Debug)]
pub struct ThemeController<S, R, C> {
    store: S,
    root: R,
    control: C,
    initialized: bool,
}

impl<S, R, C> ThemeController<S, R, C>
where
    S: PreferenceStore,
    R: RootElement,
    C: ToggleControl,
{
    pub fn new(store: S, root: R, control: C) -> Self {
        Self { store, root, control, initialized: false }
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Pick the initial theme and render it without persisting anything.
    ///
    /// `system` is the OS preference observed at page load. A stored
    /// preference, when present, wins over it.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::AlreadyInitialized`] on a second call; the
    /// rendered state is left untouched in that case.
    pub fn init(&mut self, system: Theme) -> Result<Theme, ThemeError> {
        if self.initialized {
            return Err(ThemeError::AlreadyInitialized);
        }
        let theme = self.stored_preference().unwrap_or(system);
        log::debug!("theme init: {theme} (system={system})");
        self.render(theme);
        self.initialized = true;
        Ok(theme)
    }

    /// Flip the rendered theme and persist the result as an explicit choice.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::NotInitialized`] if called before [`Self::init`].
    pub fn toggle(&mut self) -> Result<Theme, ThemeError> {
        if !self.initialized {
            return Err(ThemeError::NotInitialized);
        }
        let next = match self.current() {
            Some(Theme::Dark) => Theme::Light,
            _ => Theme::Dark,
        };
        self.render(next);
        if let Err(e) = self.store.save(next) {
            log::warn!("theme preference not saved: {e}");
        }
        log::debug!("theme toggled to {next}");
        Ok(next)
    }

    /// Apply a platform notification.
    ///
    /// Returns `true` when the rendered state changed. Only
    /// [`ThemeEvent::SystemPreferenceChanged`] is acted upon, and only while
    /// no explicit user choice is stored.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::NotInitialized`] if called before [`Self::init`].
    pub fn handle(&mut self, event: &ThemeEvent) -> Result<bool, ThemeError> {
        if !self.initialized {
            return Err(ThemeError::NotInitialized);
        }
        let ThemeEvent::SystemPreferenceChanged { value } = *event else {
            return Ok(false);
        };
        if let Some(stored) = self.stored_preference() {
            log::debug!("system preference {value} ignored, stored preference is {stored}");
            return Ok(false);
        }
        self.render(value);
        Ok(true)
    }

    /// Rendered theme read back from the root attribute.
    #[must_use]
    pub fn current(&self) -> Option<Theme> {
        self.root.theme_attribute().as_deref().and_then(Theme::parse)
    }

    pub fn root(&self) -> &R {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut R {
        &mut self.root
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn control(&self) -> &C {
        &self.control
    }

    fn stored_preference(&self) -> Option<Theme> {
        match self.store.load() {
            Ok(stored) => stored,
            Err(e) => {
                log::warn!("theme preference unreadable, using system preference: {e}");
                None
            }
        }
    }

    fn render(&mut self, theme: Theme) {
        self.root.set_theme_attribute(theme.as_str());
        self.control.render_icon(theme.icon());
    }
}
