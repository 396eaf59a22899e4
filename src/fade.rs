//! Scroll-triggered reveal bookkeeping.
//!
//! Each observed element is revealed the first time it intersects the
//! viewport and is then dropped from observation.

#[cfg(test)]
#[path = "fade_test.rs"]
mod fade_test;

/// Pick the targets to reveal from one intersection callback batch.
///
/// Entries arrive as `(target, is_intersecting)`. Order is preserved and a
/// target listed more than once in the batch is returned once.
pub fn targets_to_reveal<T, I>(entries: I) -> Vec<T>
where
    T: PartialEq,
    I: IntoIterator<Item = (T, bool)>,
{
    let mut reveal = Vec::new();
    for (target, intersecting) in entries {
        if intersecting && !reveal.contains(&target) {
            reveal.push(target);
        }
    }
    reveal
}

/// Clamp an intersection ratio threshold into the range the browser accepts.
#[must_use]
pub fn clamp_threshold(threshold: f64) -> f64 {
    if threshold.is_nan() { 0.0 } else { threshold.clamp(0.0, 1.0) }
}
