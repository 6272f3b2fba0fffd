//! The virtual root marker and the scanner that finds it.

use std::fmt;

use crate::core::{DEFAULT_MARKER, Error, MAX_ROOT_NAME_LEN, Result};

/// Separator between a virtual root name and the rest of the path (`:/` by default).
///
/// A marker is a registry-wide setting: every path handled by one registry uses the same one.
#[derive(Clone, PartialEq, Eq)]
pub struct Marker {
    text: Box<str>,
}

impl Marker {
    /// Creates a marker. Empty text is rejected.
    pub fn new(text: &str) -> Result<Self> {
        if text.is_empty() {
            return Err(Error::InvalidMarker(text.to_string()));
        }
        Ok(Self { text: text.into() })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns the byte position of the marker in `path`, if `path` is virtual.
    ///
    /// Only the first `MAX_ROOT_NAME_LEN + marker length` bytes are scanned: a marker found
    /// further away would follow a name too long to be a root name. A marker found before
    /// position 2 is ignored, since a root name has at least 2 characters.
    pub fn find(&self, path: &str) -> Option<usize> {
        let marker = self.text.as_bytes();
        let window = path.len().min(MAX_ROOT_NAME_LEN + marker.len());
        let pos = path.as_bytes()[..window]
            .windows(marker.len())
            .position(|w| w == marker)?;
        (pos >= 2).then_some(pos)
    }

    /// Returns true if `path` starts with `<root name><marker>`.
    pub fn is_virtual(&self, path: &str) -> bool {
        self.find(path).is_some()
    }
}

impl Default for Marker {
    fn default() -> Self {
        Self {
            text: DEFAULT_MARKER.into(),
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl fmt::Debug for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.text, f)
    }
}

/// Returns true if `path` is virtual with respect to the default `:/` marker.
pub fn is_virtual_path(path: &str) -> bool {
    Marker::default().is_virtual(path)
}
