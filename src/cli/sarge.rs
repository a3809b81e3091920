use std::convert::Infallible;

use sarge::ArgumentType;

use crate::cli::ModeArgs;

impl ArgumentType for ModeArgs {
    type Error = Infallible;

    const REPEATABLE: bool = true;

    fn from_value(val: Option<&str>) -> sarge::ArgResult<Self> {
        let modes = match val {
            None => ModeArgs::default(),
            Some(v) => ModeArgs::from_tokens(v.split(',').map(str::trim).filter(|s| !s.is_empty())),
        };

        Some(Ok(modes))
    }

    fn default_value() -> Option<Self> {
        Some(ModeArgs::default())
    }
}
