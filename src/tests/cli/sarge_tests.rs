use crate::cli::ModeArgs;
use crate::exercise::Mode;
use sarge::ArgumentType;

#[test]
fn mode_args_split_on_commas() {
    let parsed = <ModeArgs as ArgumentType>::from_value(Some("a, D,zz,e"))
        .expect("some")
        .expect("ok");
    assert_eq!(parsed.as_slice(), &[Mode::A, Mode::D, Mode::E]);
}

#[test]
fn mode_args_without_value_is_empty() {
    let parsed = <ModeArgs as ArgumentType>::from_value(None)
        .expect("some")
        .expect("ok");
    assert!(parsed.is_empty());
}
