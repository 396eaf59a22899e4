use super::*;

fn constant(value: f64) -> impl FnMut() -> f64 {
    move || value
}

#[test]
fn low_samples_give_minimum_flake() {
    let flake = Snowflake::sample(constant(0.0));
    assert_eq!(flake, Snowflake { size_px: 5.0, opacity: 0.3, left_vw: 0.0, fall_secs: 5.0 });
}

#[test]
fn high_samples_stay_within_upper_bounds() {
    let flake = Snowflake::sample(constant(0.999_999));
    assert!(flake.size_px < 15.0);
    assert!(flake.opacity < 1.0);
    assert!(flake.left_vw < 100.0);
    assert!(flake.fall_secs < 15.0);
}

#[test]
fn out_of_range_samples_are_clamped() {
    let flake = Snowflake::sample(constant(7.0));
    assert_eq!(flake.size_px, 15.0);
    assert_eq!(flake.left_vw, 100.0);
    let flake = Snowflake::sample(constant(-2.0));
    assert_eq!(flake.size_px, 5.0);
}

#[test]
fn samples_are_consumed_in_field_order() {
    let mut seq = [0.5, 0.0, 0.25, 1.0].into_iter();
    let flake = Snowflake::sample(move || seq.next().unwrap_or(0.0));
    assert_eq!(flake, Snowflake { size_px: 10.0, opacity: 0.3, left_vw: 25.0, fall_secs: 15.0 });
}

#[test]
fn style_contains_geometry_and_animation() {
    let flake = Snowflake { size_px: 8.0, opacity: 0.5, left_vw: 42.0, fall_secs: 9.0 };
    let style = flake.style();
    assert!(style.contains("width: 8px; height: 8px;"));
    assert!(style.contains("opacity: 0.5;"));
    assert!(style.contains("left: 42vw;"));
    assert!(style.contains("top: -10px;"));
    assert!(style.contains("animation: fall 9s linear infinite;"));
}

#[test]
fn snowfall_generates_requested_count() {
    assert_eq!(snowfall(50, constant(0.5)).len(), 50);
    assert!(snowfall(0, constant(0.5)).is_empty());
}

#[test]
fn keyframes_name_matches_flake_animation() {
    assert!(FALL_KEYFRAMES.starts_with("@keyframes fall"));
    assert!(FALL_KEYFRAMES.contains("translateY(100vh)"));
}
