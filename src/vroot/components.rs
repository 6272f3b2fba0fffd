use crate::RootName;
use crate::vroot::marker::Marker;

/// A path split into its virtual root name and the remainder.
///
/// `subpath` borrows from the decomposed text. When the path is not virtual,
/// `virtual_root` is empty and `subpath` is the whole input.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PathComponents<'a> {
    pub virtual_root: RootName,
    pub subpath: &'a str,
}

impl<'a> PathComponents<'a> {
    /// Splits `path` around the first `marker` found in its scan window.
    pub fn extract(path: &'a str, marker: &Marker) -> Self {
        if let Some(pos) = marker.find(path) {
            // The scan window keeps `pos` within the name capacity.
            if let Ok(virtual_root) = RootName::new(&path[..pos]) {
                return Self {
                    virtual_root,
                    subpath: &path[pos + marker.len()..],
                };
            }
        }
        Self::concrete(path)
    }

    /// Components of a path that is not virtual.
    pub fn concrete(path: &'a str) -> Self {
        Self {
            virtual_root: RootName::EMPTY,
            subpath: path,
        }
    }

    pub fn is_virtual(&self) -> bool {
        !self.virtual_root.is_empty()
    }
}
