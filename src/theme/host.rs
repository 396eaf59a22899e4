//! Host seams the theme controller and observer drive.
//!
//! DESIGN
//! ======
//! The browser implementations (localStorage, the `<html>` element, the
//! injected `<button>`) sit behind these traits so reconciliation logic can be
//! exercised natively with in-memory fakes.

use super::model::{Icon, Theme};

/// Failure reading or writing the persisted preference.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage backend is reachable (disabled by policy, sandboxed frame).
    #[error("preference storage unavailable")]
    Unavailable,
    /// The backend rejected the call (quota, security error).
    #[error("preference storage access failed: {0}")]
    Access(String),
}

/// Key-value persistence for the explicit user choice.
pub trait PreferenceStore {
    /// Read the stored theme. `Ok(None)` means no explicit choice yet.
    fn load(&self) -> Result<Option<Theme>, StorageError>;

    /// Persist an explicit user choice.
    fn save(&mut self, theme: Theme) -> Result<(), StorageError>;
}

/// The document root carrying the rendered theme attribute and marker class.
pub trait RootElement {
    /// Raw value of the theme attribute, if set.
    fn theme_attribute(&self) -> Option<String>;

    fn set_theme_attribute(&mut self, value: &str);

    fn has_marker_class(&self) -> bool;

    /// Add (`true`) or remove (`false`) the marker class.
    fn set_marker_class(&mut self, present: bool);
}

/// The visible toggle control.
pub trait ToggleControl {
    fn render_icon(&mut self, icon: Icon);
}
