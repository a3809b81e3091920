//! Command-line helpers for stanzaio.
//!
//! The command surface is a list of case-insensitive mode tokens, one
//! letter per routine. Tokens that name no routine are skipped.
//!
//! # Example
//!
//! ```rust,ignore
//! use stanzaio::cli::ModeArgs;
//!
//! let modes = ModeArgs::from_tokens(std::env::args().skip(1));
//! for mode in modes.iter() {
//!     println!("{mode}: {}", mode.description());
//! }
//! ```

use tracing::debug;

use crate::exercise::Mode;

/// Modes selected on the command line, in the order given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModeArgs(Vec<Mode>);

impl ModeArgs {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse tokens, keeping recognised modes and skipping the rest.
    ///
    /// Repeated tokens run their routine repeatedly.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let modes = tokens
            .into_iter()
            .filter_map(|token| {
                let token = token.as_ref();
                let mode = Mode::from_token(token);
                if mode.is_none() {
                    debug!(token, "ignoring unrecognised mode token");
                }
                mode
            })
            .collect();
        Self(modes)
    }

    /// Add a mode.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.0.push(mode);
        self
    }

    pub fn as_slice(&self) -> &[Mode] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Mode> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Usage text listing every mode.
pub fn usage(bin: &str) -> String {
    let mut text = format!("Usage: {bin} <mode> [<mode> ...]\n\nModes (case-insensitive):\n");
    for mode in Mode::ALL {
        text.push_str(&format!("  {mode}  {}\n", mode.description()));
    }
    text
}

#[cfg(feature = "sarge")]
mod sarge;
