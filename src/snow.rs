//! Decorative snowfall particle parameters.
//!
//! Flakes are plain absolutely positioned `<div>`s animated by a single CSS
//! keyframe rule; this module only decides each flake's size, opacity,
//! horizontal position and fall duration from uniform samples in `[0, 1)`.

#[cfg(test)]
#[path = "snow_test.rs"]
mod snow_test;

/// Keyframes shared by every flake.
pub const FALL_KEYFRAMES: &str = "@keyframes fall { to { transform: translateY(100vh); } }";

/// Class of the container appended to `<body>`.
pub const CONTAINER_CLASS: &str = "snow";

const MIN_SIZE_PX: f64 = 5.0;
const SIZE_SPREAD_PX: f64 = 10.0;
const MIN_OPACITY: f64 = 0.3;
const OPACITY_SPREAD: f64 = 0.7;
const MIN_FALL_SECS: f64 = 5.0;
const FALL_SPREAD_SECS: f64 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Snowflake {
    pub size_px: f64,
    pub opacity: f64,
    pub left_vw: f64,
    pub fall_secs: f64,
}

impl Snowflake {
    /// Build a flake from a source of uniform samples in `[0, 1)`.
    pub fn sample(mut random: impl FnMut() -> f64) -> Self {
        let mut unit = move || random().clamp(0.0, 1.0);
        Self {
            size_px: MIN_SIZE_PX + unit() * SIZE_SPREAD_PX,
            opacity: MIN_OPACITY + unit() * OPACITY_SPREAD,
            left_vw: unit() * 100.0,
            fall_secs: MIN_FALL_SECS + unit() * FALL_SPREAD_SECS,
        }
    }

    /// Inline style for the flake element.
    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "position: absolute; width: {size}px; height: {size}px; background-color: white; \
             border-radius: 50%; opacity: {opacity}; left: {left}vw; top: -10px; \
             pointer-events: none; animation: fall {secs}s linear infinite;",
            size = self.size_px,
            opacity = self.opacity,
            left = self.left_vw,
            secs = self.fall_secs,
        )
    }
}

/// Generate `count` flakes from one sample source.
pub fn snowfall(count: usize, mut random: impl FnMut() -> f64) -> Vec<Snowflake> {
    (0..count).map(|_| Snowflake::sample(&mut random)).collect()
}
