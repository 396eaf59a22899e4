use super::*;
use crate::theme::fakes::FakeRoot;

fn root(attribute: Option<&str>, marker: bool) -> FakeRoot {
    FakeRoot { attribute: attribute.map(str::to_owned), marker, attribute_writes: 0 }
}

#[test]
fn sync_adds_marker_for_dark() {
    let mut r = root(Some("dark"), false);
    assert!(AttributeObserver::new().sync(&mut r));
    assert!(r.marker);
}

#[test]
fn sync_removes_marker_for_light() {
    let mut r = root(Some("light"), true);
    assert!(!AttributeObserver::new().sync(&mut r));
    assert!(!r.marker);
}

#[test]
fn sync_removes_marker_for_missing_or_unknown_attribute() {
    for attribute in [None, Some("DARK"), Some("")] {
        let mut r = root(attribute, true);
        AttributeObserver::new().sync(&mut r);
        assert!(!r.marker, "attribute {attribute:?}");
    }
}

#[test]
fn sync_is_idempotent_and_never_writes_attribute() {
    let observer = AttributeObserver::new();
    let mut r = root(Some("dark"), false);
    observer.sync(&mut r);
    observer.sync(&mut r);

    assert!(r.marker);
    assert_eq!(r.attribute.as_deref(), Some("dark"));
    assert_eq!(r.attribute_writes, 0);
}

#[test]
fn handle_projects_attribute_changed_payload() {
    let observer = AttributeObserver::new();
    let mut r = root(None, false);

    assert!(observer.handle(&mut r, &ThemeEvent::AttributeChanged { new_value: Some(Theme::Dark) }));
    assert!(r.marker);
    assert!(!observer.handle(&mut r, &ThemeEvent::AttributeChanged { new_value: Some(Theme::Light) }));
    assert!(!r.marker);
}

#[test]
fn handle_ignores_system_preference_events() {
    let observer = AttributeObserver::new();
    let mut r = root(Some("light"), false);

    let marker = observer.handle(&mut r, &ThemeEvent::SystemPreferenceChanged { value: Theme::Dark });
    assert!(!marker);
    assert!(!r.marker);
}
