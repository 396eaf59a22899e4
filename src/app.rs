//! Page session: starts each enhancement once and contains its failures.
//!
//! ERROR HANDLING
//! ==============
//! A feature that cannot start (missing element, unavailable browser API) is
//! logged and recorded; the remaining features still start. There is no
//! global error state.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::fmt;

use crate::config::PageConfig;
use crate::theme::ThemeError;

/// Independently started page enhancements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Feature {
    ThemeObserver,
    Theme,
    Countdown,
    ScrollFade,
    Bulletin,
    Snow,
}

impl Feature {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::ThemeObserver => "theme-observer",
            Self::Theme => "theme",
            Self::Countdown => "countdown",
            Self::ScrollFade => "scroll-fade",
            Self::Bulletin => "bulletin",
            Self::Snow => "snow",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a feature did not start.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("no browser window available")]
    NoWindow,
    #[error("document is not available")]
    NoDocument,
    #[error("{what} element not found: {selector}")]
    MissingElement { what: &'static str, selector: String },
    #[error(transparent)]
    Theme(#[from] ThemeError),
    #[error("browser call failed: {0}")]
    Js(String),
}

/// Outcome of one startup attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Started,
    /// Already started earlier in this session.
    AlreadyStarted,
    /// Disabled by configuration.
    Disabled,
    Failed(SetupError),
}

/// Feature outcomes in the order they were attempted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StartupReport {
    pub outcomes: Vec<(Feature, Outcome)>,
}

impl StartupReport {
    #[must_use]
    pub fn started(&self) -> Vec<Feature> {
        self.outcomes
            .iter()
            .filter(|(_, o)| *o == Outcome::Started)
            .map(|(f, _)| *f)
            .collect()
    }

    #[must_use]
    pub fn failures(&self) -> Vec<(Feature, &SetupError)> {
        self.outcomes
            .iter()
            .filter_map(|(f, o)| match o {
                Outcome::Failed(e) => Some((*f, e)),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn is_started(&self, feature: Feature) -> bool {
        self.outcomes.iter().any(|(f, o)| *f == feature && *o == Outcome::Started)
    }
}

/// State owned by one page load.
#[derive(Debug)]
pub struct PageSession {
    config: PageConfig,
    report: StartupReport,
}

impl PageSession {
    #[must_use]
    pub fn new(config: PageConfig) -> Self {
        Self { config, report: StartupReport::default() }
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn report(&self) -> &StartupReport {
        &self.report
    }

    /// Run `setup` for `feature` unless it already started this session.
    ///
    /// Failures are logged and recorded, never propagated.
    pub fn start<F>(&mut self, feature: Feature, setup: F) -> Outcome
    where
        F: FnOnce(&PageConfig) -> Result<(), SetupError>,
    {
        let outcome = if self.report.is_started(feature) {
            log::debug!("{feature} already started");
            Outcome::AlreadyStarted
        } else {
            match setup(&self.config) {
                Ok(()) => {
                    log::debug!("{feature} started");
                    Outcome::Started
                }
                Err(e) => {
                    log::error!("{feature} not started: {e}");
                    Outcome::Failed(e)
                }
            }
        };
        self.record(feature, outcome)
    }

    /// Record a feature turned off by configuration.
    pub fn disable(&mut self, feature: Feature) -> Outcome {
        log::debug!("{feature} disabled by config");
        self.record(feature, Outcome::Disabled)
    }

    fn record(&mut self, feature: Feature, outcome: Outcome) -> Outcome {
        self.report.outcomes.push((feature, outcome.clone()));
        outcome
    }
}
