use crate::tests::common;
use crate::utils::{dom, storage, Theme, ThemeState, THEME_STORAGE_KEY};

#[test]
fn fresh_session_defaults_to_dark() {
    common::setup();
    common::reset_theme();

    let state = ThemeState::restore();
    assert_eq!(state.theme, Theme::Dark);
    // Restore adopts the default without persisting it; the key only
    // appears on the first toggle.
    assert_eq!(storage::read(THEME_STORAGE_KEY), None);
    assert_eq!(dom::root_marker(), Some(Theme::Dark));
}

#[test]
fn restore_adopts_stored_light() {
    common::setup();
    storage::write(THEME_STORAGE_KEY, "light");

    let state = ThemeState::restore();
    assert_eq!(state.theme, Theme::Light);
    assert_eq!(dom::root_marker(), Some(Theme::Light));
}

#[test]
fn restore_adopts_stored_dark() {
    common::setup();
    storage::write(THEME_STORAGE_KEY, "dark");

    let state = ThemeState::restore();
    assert_eq!(state.theme, Theme::Dark);
    assert_eq!(dom::root_marker(), Some(Theme::Dark));
}

#[test]
fn restore_falls_back_on_unrecognized_value() {
    common::setup();
    storage::write(THEME_STORAGE_KEY, "blue");

    let state = ThemeState::restore();
    assert_eq!(state.theme, Theme::Dark);
}

#[test]
fn toggle_persists_the_new_value() {
    common::setup();
    common::reset_theme();

    let mut state = ThemeState::restore();
    assert_eq!(state.theme, Theme::Dark);

    state.toggle();
    assert_eq!(state.theme, Theme::Light);
    assert_eq!(storage::read(THEME_STORAGE_KEY).as_deref(), Some("light"));
    assert_eq!(dom::root_marker(), Some(Theme::Light));
}

#[test]
fn double_toggle_returns_to_the_original_value() {
    common::setup();
    common::reset_theme();

    let mut state = ThemeState::restore();
    state.toggle();
    state.toggle();
    assert_eq!(state.theme, Theme::Dark);
    assert_eq!(storage::read(THEME_STORAGE_KEY).as_deref(), Some("dark"));
    assert_eq!(dom::root_marker(), Some(Theme::Dark));
}

#[test]
fn toggled_value_survives_a_new_session() {
    common::setup();
    common::reset_theme();

    let mut first_session = ThemeState::restore();
    first_session.toggle();
    assert_eq!(first_session.theme, Theme::Light);

    let second_session = ThemeState::restore();
    assert_eq!(second_session.theme, Theme::Light);
}

#[test]
fn marker_always_matches_current_value() {
    common::setup();
    common::reset_theme();

    let mut state = ThemeState::restore();
    for _ in 0..4 {
        state.toggle();
        assert_eq!(dom::root_marker(), Some(state.theme));
    }
}

#[test]
fn serde_representation_matches_storage_tokens() {
    assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
    assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"light\"");
    assert_eq!(
        serde_json::from_str::<Theme>("\"light\"").unwrap(),
        Theme::Light
    );
}
