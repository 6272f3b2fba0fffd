//! Virtual root names: a small inline string type and the registration grammar.

use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::str::FromStr;

use crate::core::{Error, MAX_ROOT_NAME_LEN, Result};

/// A virtual root name stored inline, without heap allocation.
///
/// `RootName` holds up to [`MAX_ROOT_NAME_LEN`] bytes of UTF-8 text. It is `Copy`, and
/// compares and hashes by its exact bytes, so it is cheap to use as a map key.
///
/// Any short text can be a `RootName` (including the empty name, which marks a path
/// as not virtual). Only names accepted by [`is_valid_root_name`] may be registered
/// by users; predefined names such as `$TMPDIR` are built directly.
///
/// ### Example
///
/// ```
/// use vroot_kit::RootName;
///
/// let name: RootName = "RSC".parse().unwrap();
/// assert_eq!(name, "RSC");
/// assert!("RESOURCES_DIR".parse::<RootName>().is_err());
/// ```
#[derive(Copy, Clone, Eq)]
pub struct RootName {
    bytes: [u8; MAX_ROOT_NAME_LEN],
    len: u8,
}

impl RootName {
    /// The empty name.
    pub const EMPTY: RootName = RootName {
        bytes: [0; MAX_ROOT_NAME_LEN],
        len: 0,
    };

    /// Creates a name from `name`.
    /// Returns an error if `name` is longer than [`MAX_ROOT_NAME_LEN`] bytes.
    pub fn new(name: &str) -> Result<Self> {
        if name.len() > MAX_ROOT_NAME_LEN {
            return Err(Error::NameTooLong {
                name: name.to_string(),
                max: MAX_ROOT_NAME_LEN,
            });
        }
        Ok(Self::from_static(name))
    }

    /// Const constructor used for the predefined names.
    /// Panics at compile time if `name` does not fit.
    pub(crate) const fn from_static(name: &str) -> Self {
        let src = name.as_bytes();
        assert!(src.len() <= MAX_ROOT_NAME_LEN);
        // The whole of `name` is copied, so `bytes[..len]` stays valid UTF-8.
        debug_assert!(std::str::from_utf8(src).is_ok());
        let mut bytes = [0; MAX_ROOT_NAME_LEN];
        let mut i = 0;
        while i < src.len() {
            bytes[i] = src[i];
            i += 1;
        }
        RootName {
            bytes,
            len: src.len() as u8,
        }
    }

    pub fn as_str(&self) -> &str {
        let bytes = &self.bytes[..self.len as usize];
        // SAFETY: `bytes` is always a copy of a whole `&str`, see `from_static`.
        unsafe { std::str::from_utf8_unchecked(bytes) }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Checks the name against the registration grammar, see [`is_valid_root_name`].
    pub fn is_valid(&self) -> bool {
        is_valid_root_name(self.as_str())
    }
}

/// Returns true if `name` may be registered as a user virtual root.
///
/// A valid name matches `[a-zA-Z][A-Za-z0-9_.-]{1,7}`, e.g. `RSC_VR`, `rsc.vr`, `rsc-VR`.
/// Names starting with `$` are reserved for predefined roots and always rejected.
pub fn is_valid_root_name(name: &str) -> bool {
    let bytes = name.as_bytes();
    if !(2..=MAX_ROOT_NAME_LEN).contains(&bytes.len()) {
        return false;
    }
    bytes[0].is_ascii_alphabetic()
        && bytes[1..]
            .iter()
            .all(|&b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'.' | b'-'))
}

impl Default for RootName {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl PartialEq for RootName {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl PartialEq<str> for RootName {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for RootName {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialOrd for RootName {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RootName {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_str().cmp(other.as_str())
    }
}

// Must agree with `str`'s hash so `Borrow<str>` lookups work.
impl Hash for RootName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state)
    }
}

impl Borrow<str> for RootName {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl Deref for RootName {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for RootName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<&str> for RootName {
    type Error = Error;

    fn try_from(name: &str) -> Result<Self> {
        Self::new(name)
    }
}

impl FromStr for RootName {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        Self::new(name)
    }
}

impl fmt::Display for RootName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for RootName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}
