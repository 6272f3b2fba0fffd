//! Resolution of virtual paths into real paths.
//!
//! ### Algorithm
//! 1. Split the path into `(root name, subpath)`. A path that is not virtual is returned as is.
//! 2. If the root name is registered, resolve its target (targets may be virtual too) and
//!    join the subpath onto it.
//! 3. Else, if the root name is a dynamic predefined root (`$CURDIR`), join the subpath onto
//!    its target, queried anew on every call.
//! 4. Else the root is unknown and the path is returned unchanged, marker included.
//!
//! Chains longer than the registry's `max_depth` fail with [`Error::CyclicRoot`].

use std::path::{Path, PathBuf};

use crate::core::{Error, Result};
use crate::vroot::components::PathComponents;
use crate::vroot::predefined::PredefinedRoot;
use crate::vroot::registry::RootRegistry;

/// Turns virtual paths into real ones using the roots of a [`RootRegistry`].
///
/// A resolver only borrows the registry, so it is cheap to create one per use.
#[derive(Debug, Copy, Clone)]
pub struct Resolver<'r> {
    registry: &'r RootRegistry,
}

impl<'r> Resolver<'r> {
    pub fn new(registry: &'r RootRegistry) -> Self {
        Self { registry }
    }

    /// Returns the real path for `path`.
    ///
    /// Paths that are not virtual, or whose root is unknown, come back unchanged.
    /// Fails only if the root chain is too deep or the working directory cannot be read.
    pub fn resolve(&self, path: &str) -> Result<PathBuf> {
        let comps = self.registry.extract_components(path);
        if !comps.is_virtual() {
            return Ok(PathBuf::from(path));
        }
        Ok(self
            .resolve_at(&comps, 0)?
            .unwrap_or_else(|| PathBuf::from(path)))
    }

    /// Path flavour of [`resolve`](Self::resolve). Non UTF-8 paths are returned unchanged.
    pub fn resolve_path<P: AsRef<Path>>(&self, path: P) -> Result<PathBuf> {
        let path = path.as_ref();
        match path.to_str() {
            Some(text) => self.resolve(text),
            None => Ok(path.to_path_buf()),
        }
    }

    /// Replaces `path` by its real path. `path` is left untouched on error.
    pub fn resolve_into(&self, path: &mut PathBuf) -> Result<()> {
        let Some(text) = path.to_str() else {
            return Ok(());
        };
        let comps = self.registry.extract_components(text);
        if !comps.is_virtual() {
            return Ok(());
        }
        if let Some(real) = self.resolve_at(&comps, 0)? {
            *path = real;
        }
        Ok(())
    }

    /// Resolves already extracted components, skipping another marker scan.
    ///
    /// Components of a concrete path, and of an unknown root, resolve to their subpath.
    pub fn resolve_components(&self, comps: &PathComponents<'_>) -> Result<PathBuf> {
        if !comps.is_virtual() {
            return Ok(PathBuf::from(comps.subpath));
        }
        Ok(self
            .resolve_at(comps, 0)?
            .unwrap_or_else(|| PathBuf::from(comps.subpath)))
    }

    // `None` means the root is unknown.
    fn resolve_at(&self, comps: &PathComponents<'_>, depth: usize) -> Result<Option<PathBuf>> {
        let root = comps.virtual_root;
        if let Some(target) = self.registry.target(&root) {
            if depth >= self.registry.max_depth() {
                return Err(Error::CyclicRoot {
                    root,
                    depth: self.registry.max_depth(),
                });
            }
            if let Some(replacement) = PredefinedRoot::replacing(&root) {
                tracing::warn!(
                    "You are using a deprecated virtual root name: {}. You should use \"{}\" instead.",
                    root,
                    replacement.name()
                );
            }
            tracing::trace!("Resolving virtual root {} -> {}", root, target.display());

            let base = self.resolve_target(target, depth + 1)?;
            return Ok(Some(join_subpath(base, comps.subpath)));
        }
        let Some(dynamic) = PredefinedRoot::dynamic(&root) else {
            return Ok(None);
        };
        Ok(dynamic
            .dynamic_target()?
            .map(|base| join_subpath(base, comps.subpath)))
    }

    fn resolve_target(&self, target: &Path, depth: usize) -> Result<PathBuf> {
        let Some(text) = target.to_str() else {
            return Ok(target.to_path_buf());
        };
        let comps = self.registry.extract_components(text);
        if !comps.is_virtual() {
            return Ok(target.to_path_buf());
        }
        Ok(self
            .resolve_at(&comps, depth)?
            .unwrap_or_else(|| target.to_path_buf()))
    }
}

/// Appends `subpath` to `base` as path segments. An empty subpath leaves `base` as is.
fn join_subpath(base: PathBuf, subpath: &str) -> PathBuf {
    let subpath = subpath.trim_start_matches(std::path::is_separator);
    if subpath.is_empty() {
        return base;
    }
    base.join(subpath)
}
