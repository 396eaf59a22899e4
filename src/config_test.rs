use super::*;

#[test]
fn defaults_match_site_markup() {
    let cfg = PageConfig::default();
    assert_eq!(cfg.theme.storage_key, "theme");
    assert_eq!(cfg.theme.attribute, "data-theme");
    assert_eq!(cfg.theme.marker_class, "dark-theme-active");
    assert_eq!(cfg.theme.toggle_label, "Toggle dark mode");
    assert_eq!(cfg.countdown.element_id, "christmas-countdown");
    assert_eq!(cfg.countdown.target, AnnualDate { month: 12, day: 25 });
    assert_eq!(cfg.countdown.interval_ms, 1_000);
    assert_eq!(cfg.fade.selector, ".slide-up");
    assert_eq!(cfg.fade.class, "fade-in");
    assert_eq!(cfg.fade.threshold, 0.1);
    assert!(cfg.snow.enabled);
    assert_eq!(cfg.snow.flakes, 50);
    assert_eq!(cfg.bulletin.file_name, "Weekly_Bulletin.txt");
    assert_eq!(cfg.bulletin.trigger_selector, "[data-download-notes]");
}

#[test]
fn empty_object_yields_defaults() {
    assert_eq!(PageConfig::from_json("{}").unwrap(), PageConfig::default());
}

#[test]
fn partial_overrides_keep_other_defaults() {
    let cfg = PageConfig::from_json(
        r#"{
            "countdown": { "element_id": "easter-countdown", "target": { "month": 4, "day": 5 } },
            "snow": { "enabled": false }
        }"#,
    )
    .unwrap();

    assert_eq!(cfg.countdown.element_id, "easter-countdown");
    assert_eq!(cfg.countdown.target, AnnualDate { month: 4, day: 5 });
    assert_eq!(cfg.countdown.interval_ms, DEFAULT_COUNTDOWN_INTERVAL_MS);
    assert!(!cfg.snow.enabled);
    assert_eq!(cfg.snow.flakes, DEFAULT_SNOWFLAKE_COUNT);
    assert_eq!(cfg.theme, ThemeConfig::default());
}

#[test]
fn malformed_json_is_an_error() {
    let err = PageConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
    assert!(err.to_string().contains("invalid page config JSON"));
}

#[test]
fn mistyped_field_is_an_error() {
    let err = PageConfig::from_json(r#"{ "snow": { "flakes": "many" } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn impossible_countdown_target_is_rejected() {
    let err = PageConfig::from_json(r#"{ "countdown": { "target": { "month": 2, "day": 31 } } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidTarget { month: 2, day: 31 }));
}

#[test]
fn leap_day_countdown_target_is_rejected() {
    let err = PageConfig::from_json(r#"{ "countdown": { "target": { "month": 2, "day": 29 } } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidTarget { month: 2, day: 29 }));
}

#[test]
fn zero_countdown_interval_is_rejected() {
    let err = PageConfig::from_json(r#"{ "countdown": { "interval_ms": 0 } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::ZeroInterval));
    assert_eq!(PageConfig::from_json_or_default(r#"{ "countdown": { "interval_ms": 0 } }"#), PageConfig::default());
}

#[test]
fn from_json_or_default_recovers() {
    assert_eq!(PageConfig::from_json_or_default("42"), PageConfig::default());
    assert!(!PageConfig::from_json_or_default(r#"{"snow":{"enabled":false}}"#).snow.enabled);
}
