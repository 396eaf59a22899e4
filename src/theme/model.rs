//! Theme values and the typed events that drive transitions.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Visual mode of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Literal value used for the root attribute and for storage.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Map the `prefers-color-scheme: dark` media query result to a theme.
    #[must_use]
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    /// Parse a raw attribute or storage value. Unknown strings yield `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }

    /// Icon shown on the toggle while this theme is active.
    ///
    /// The icon advertises the mode a click switches to: a sun while dark,
    /// a moon while light.
    #[must_use]
    pub fn icon(self) -> Icon {
        match self {
            Self::Light => Icon::Moon,
            Self::Dark => Icon::Sun,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is neither `"light"` nor `"dark"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme value: {0:?}")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(UnknownTheme(other.to_owned())),
        }
    }
}

/// Semantic icon names understood by the icon renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Sun,
    Moon,
}

impl Icon {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Sun => "sun",
            Self::Moon => "moon",
        }
    }

    /// Placeholder markup the icon library replaces with an SVG.
    #[must_use]
    pub fn placeholder_html(self) -> String {
        format!(r#"<i data-feather="{}"></i>"#, self.name())
    }
}

/// Asynchronous notifications delivered by the platform after startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ThemeEvent {
    /// The OS color-scheme preference changed.
    SystemPreferenceChanged { value: Theme },
    /// The root theme attribute was written. `None` when the attribute is
    /// missing or holds an unrecognized value.
    AttributeChanged { new_value: Option<Theme> },
}
