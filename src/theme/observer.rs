//! Marker-class projection of the rendered theme.
//!
//! Style rules can key off either `[data-theme="dark"]` or the marker class.
//! The observer is the only writer of the class and never writes the
//! attribute, so there is no feedback loop with the controller.

#[cfg(test)]
#[path = "observer_test.rs"]
mod observer_test;

use super::host::RootElement;
use super::model::{Theme, ThemeEvent};

/// Stateless mirror from the theme attribute to the marker class.
#[derive(Clone, Copy, Debug, Default)]
pub struct AttributeObserver;

impl AttributeObserver {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Re-read the attribute and project it. Returns whether the class is now set.
    pub fn sync<R: RootElement>(&self, root: &mut R) -> bool {
        let value = root.theme_attribute().as_deref().and_then(Theme::parse);
        self.apply(root, value)
    }

    /// Project a delivered attribute change. Other events are ignored.
    pub fn handle<R: RootElement>(&self, root: &mut R, event: &ThemeEvent) -> bool {
        match *event {
            ThemeEvent::AttributeChanged { new_value } => self.apply(root, new_value),
            ThemeEvent::SystemPreferenceChanged { .. } => root.has_marker_class(),
        }
    }

    fn apply<R: RootElement>(&self, root: &mut R, value: Option<Theme>) -> bool {
        let dark = value == Some(Theme::Dark);
        if root.has_marker_class() != dark {
            root.set_marker_class(dark);
        }
        dark
    }
}
