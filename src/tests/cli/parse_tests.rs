use crate::cli::{ModeArgs, usage};
use crate::exercise::Mode;

#[test]
fn mode_tokens_are_case_insensitive() {
    let modes = ModeArgs::from_tokens(["a", "B", "c", "d", "E"]);
    assert_eq!(modes.as_slice(), &Mode::ALL);
}

#[test]
fn unrecognised_tokens_are_ignored() {
    let modes = ModeArgs::from_tokens(["x", "d", "ab", "", "--verbose", "e"]);
    assert_eq!(modes.as_slice(), &[Mode::D, Mode::E]);
}

#[test]
fn order_and_repeats_are_kept() {
    let modes = ModeArgs::from_tokens(["e", "a", "e"]);
    assert_eq!(modes.as_slice(), &[Mode::E, Mode::A, Mode::E]);
    assert_eq!(modes.len(), 3);
}

#[test]
fn usage_lists_every_mode() {
    let text = usage("stanzaio");
    for mode in Mode::ALL {
        assert!(text.contains(mode.description()));
    }
}
