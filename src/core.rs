use std::io;

use thiserror::Error;

use crate::RootName;

/// Maximum length, in bytes, of a virtual root name.
///
/// Root names live in a 64-bit inline buffer, so they hold at most 8 bytes of text.
pub const MAX_ROOT_NAME_LEN: usize = 8;

/// Default text separating a root name from the rest of a virtual path.
pub const DEFAULT_MARKER: &str = ":/";

/// Default limit on how many roots a single resolution may chain through.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Errors produced while registering or resolving virtual roots.
#[derive(Debug, Error)]
pub enum Error {
    /// The name does not match `[a-zA-Z][A-Za-z0-9_.-]{1,7}`.
    #[error("invalid virtual root name: '{0}'")]
    InvalidName(String),

    #[error("virtual root name '{name}' is longer than {max} bytes")]
    NameTooLong { name: String, max: usize },

    #[error("invalid virtual root marker: '{0}'")]
    InvalidMarker(String),

    /// The program directory root may only be set once.
    #[error("virtual root '{0}' is already set")]
    AlreadySet(RootName),

    /// Resolution chained through more roots than allowed, most likely a cycle.
    #[error("virtual root '{root}' exceeds the resolution depth limit ({depth})")]
    CyclicRoot { root: RootName, depth: usize },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("invalid roots configuration: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
