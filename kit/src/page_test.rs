use super::*;

const KEYS: [&str; 12] = [
    "start",
    "foundation",
    "gti",
    "software",
    "proscale",
    "faq1",
    "faq2",
    "faq3",
    "faq4",
    "faq5",
    "faq6",
    "faq7",
];

fn toggle(state: &PageState, key: &str) -> PageState {
    reduce(state, &PageAction::ToggleAccordion(key.to_owned()))
}

// =============================================================
// Accordion
// =============================================================

#[test]
fn initial_state_is_closed_and_dark() {
    let state = PageState::default();
    assert_eq!(state.accordion(), &Accordion::Closed);
    assert_eq!(state.theme(), Theme::Dark);
}

#[test]
fn toggle_opens_closed_accordion() {
    let state = toggle(&PageState::default(), "a");
    assert_eq!(state.accordion(), &Accordion::OpenWith("a".to_owned()));
    assert!(state.is_open("a"));
}

#[test]
fn toggle_same_key_twice_closes() {
    let state = toggle(&toggle(&PageState::default(), "a"), "a");
    assert_eq!(state.accordion(), &Accordion::Closed);
}

#[test]
fn opening_another_key_closes_previous() {
    for a in KEYS {
        for b in KEYS {
            if a == b {
                continue;
            }
            let state = toggle(&toggle(&PageState::default(), a), b);
            assert_eq!(state.accordion().open_key(), Some(b));
            assert!(!state.is_open(a));
        }
    }
}

#[test]
fn at_most_one_key_open_after_any_sequence() {
    let mut state = PageState::default();
    for (i, key) in KEYS.iter().cycle().take(50).enumerate() {
        state = toggle(&state, key);
        if i % 3 == 0 {
            state = toggle(&state, key);
        }
        let open = KEYS.iter().filter(|k| state.is_open(k)).count();
        assert!(open <= 1);
    }
}

#[test]
fn unknown_keys_are_accepted() {
    let state = toggle(&PageState::default(), "no-such-panel");
    assert!(state.is_open("no-such-panel"));
    assert!(KEYS.iter().all(|k| !state.is_open(k)));
}

#[test]
fn toggle_leaves_input_untouched() {
    let before = PageState::default();
    let after = toggle(&before, "faq1");
    assert_eq!(before.accordion(), &Accordion::Closed);
    assert_ne!(before, after);
}

// =============================================================
// Theme
// =============================================================

#[test]
fn toggle_theme_twice_is_identity() {
    let state = PageState::new(Theme::Light);
    let twice = reduce(&reduce(&state, &PageAction::ToggleTheme), &PageAction::ToggleTheme);
    assert_eq!(twice, state);
}

#[test]
fn toggle_theme_keeps_accordion() {
    let state = toggle(&PageState::default(), "gti").toggle_theme();
    assert!(state.is_open("gti"));
    assert_eq!(state.theme(), Theme::Light);
}

#[test]
fn toggle_accordion_keeps_theme() {
    let state = PageState::new(Theme::Light).toggle_accordion("faq2");
    assert_eq!(state.theme(), Theme::Light);
}
