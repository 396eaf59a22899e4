//! # site-enhancements
//!
//! Client-side enhancements for a small website, compiled to WebAssembly:
//! a light/dark theme toggle with a persisted preference, a countdown banner,
//! scroll-triggered fade-ins, decorative snowfall, and the weekly bulletin
//! download button.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Theme controller, marker-class observer, host seams |
//! | [`countdown`] | Time-remaining arithmetic and formatting |
//! | [`fade`] | Scroll-reveal bookkeeping |
//! | [`snow`] | Snowflake parameters and keyframes |
//! | [`bulletin`] | Bulletin text cleanup and error taxonomy |
//! | [`config`] | Typed page configuration with defaults |
//! | [`app`] | Page session startup with per-feature failure containment |
//! | `browser` | web-sys bindings (feature `browser`) |
//!
//! Everything outside `browser` is plain Rust and is tested natively.

pub mod app;
pub mod bulletin;
pub mod config;
pub mod countdown;
pub mod fade;
pub mod snow;
pub mod theme;

#[cfg(feature = "browser")]
pub mod browser;

#[cfg(feature = "browser")]
pub use browser::start;
