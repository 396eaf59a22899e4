//! Light/dark theme reconciliation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page has one visual mode, rendered as the `data-theme` attribute on the
//! document root. Three inputs compete for it: a stored user choice, the OS
//! color-scheme preference, and clicks on the toggle control. The controller
//! reconciles them; the observer mirrors the result onto a CSS marker class.
//!
//! Nothing in this module touches web-sys. Browser bindings for the host
//! seams live in `crate::browser::theme`.

pub mod controller;
#[cfg(test)]
mod fakes;
pub mod host;
pub mod model;
pub mod observer;

pub use controller::{ThemeController, ThemeError};
pub use host::{PreferenceStore, RootElement, StorageError, ToggleControl};
pub use model::{Icon, Theme, ThemeEvent};
pub use observer::AttributeObserver;
