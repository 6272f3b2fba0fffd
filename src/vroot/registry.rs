//! This module provides the registry mapping virtual root names to their target paths.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::core::{DEFAULT_MAX_DEPTH, Error, Result};
use crate::vroot::components::PathComponents;
use crate::vroot::marker::Marker;
use crate::vroot::name::{RootName, is_valid_root_name};
use crate::vroot::predefined::{
    CANONICAL_PROGRAM_DIR_VROOT, PROGRAM_DIR_VROOT, PredefinedRoot, TEMP_DIR_VROOT,
};
use crate::vroot::resolver::Resolver;

pub type VirtualRootMap = HashMap<RootName, PathBuf>;

/// A registry of virtual roots: symbolic names standing for directories.
///
/// Each entry maps a [`RootName`] to a target path. Targets are stored verbatim and
/// may themselves be virtual (`RSC` → `VROOT:/rsc`); they are resolved lazily by a
/// [`Resolver`].
///
/// ### Predefined roots
///
/// * `$TMPDIR` — stored at construction as the OS temp directory (plus its deprecated alias `$TMP`).
/// * `$CURDIR` — never stored; resolved to the working directory on every resolution.
/// * `$PGMDIR`, `$CPGMDIR` — absent until [`set_program_dir_root`](Self::set_program_dir_root)
///   is called, which also adds the deprecated alias `$PROGDIR`.
///
/// ### Thread Safety
///
/// Registration takes `&mut self` and there is no internal locking. Registries are meant to be
/// configured once at startup and read afterwards; if they must be changed while shared between
/// threads, wrap them in a `RwLock<RootRegistry>` at the application level.
///
/// ### Cycles
///
/// Registering roots that refer to each other (`A` → `B:/x`, `B` → `A:/y`) is allowed, but
/// resolving through them fails with [`Error::CyclicRoot`] once the chain exceeds `max_depth`.
///
/// ### Example
///
/// ```
/// use std::path::Path;
/// use vroot_kit::RootRegistry;
///
/// let mut roots = RootRegistry::new();
/// roots.set_virtual_root("VROOT", "/tmp").unwrap();
/// roots.set_virtual_root("RSC", "VROOT:/rsc").unwrap();
///
/// let path = roots.real_path("RSC:/images/logo.png").unwrap();
/// assert_eq!(path, Path::new("/tmp/rsc/images/logo.png"));
/// ```
#[derive(Debug, Clone)]
pub struct RootRegistry {
    roots: VirtualRootMap,
    marker: Marker,
    max_depth: usize,
}

impl RootRegistry {
    /// Creates a registry with the default `:/` marker.
    /// `$TMPDIR` and `$TMP` are set to the OS temp directory.
    pub fn new() -> Self {
        Self::with_marker(Marker::default())
    }

    pub fn with_marker(marker: Marker) -> Self {
        let temp_dir = std::env::temp_dir();
        let mut roots = VirtualRootMap::new();
        if let Some(alias) = PredefinedRoot::TempDir.deprecated_alias() {
            roots.insert(alias, temp_dir.clone());
        }
        roots.insert(TEMP_DIR_VROOT, temp_dir);

        Self {
            roots,
            marker,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Returns all stored roots. `$CURDIR` is never part of it.
    pub fn virtual_map(&self) -> &VirtualRootMap {
        &self.roots
    }

    pub fn marker(&self) -> &Marker {
        &self.marker
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Changes how many roots a single resolution may chain through.
    pub fn set_max_depth(&mut self, depth: usize) {
        self.max_depth = depth;
    }

    /// Returns the stored target of `name`, unresolved.
    pub fn target(&self, name: &RootName) -> Option<&Path> {
        self.roots.get(name).map(PathBuf::as_path)
    }

    /// Returns true if `name` is stored, or is a dynamic root such as `$CURDIR`.
    pub fn has_root(&self, name: &str) -> bool {
        self.roots.contains_key(name)
            || RootName::new(name).is_ok_and(|name| PredefinedRoot::dynamic(&name).is_some())
    }

    /// Registers `name` → `root_path`, replacing any previous target.
    ///
    /// `root_path` is stored as given; it may be virtual and may name a root that
    /// does not exist yet. `name` must satisfy [`is_valid_root_name`], which also
    /// excludes the reserved `$` names.
    pub fn set_virtual_root<P: AsRef<Path>>(&mut self, name: &str, root_path: P) -> Result<()> {
        if !is_valid_root_name(name) {
            return Err(Error::InvalidName(name.to_string()));
        }
        let name = RootName::new(name)?;
        let root_path = root_path.as_ref();
        tracing::debug!("Setting virtual root {} to {}", name, root_path.display());
        self.roots.insert(name, root_path.to_path_buf());
        Ok(())
    }

    /// Sets the program directory roots: `$PGMDIR`, its deprecated alias `$PROGDIR`, and
    /// `$CPGMDIR` holding the canonical form of `path`.
    ///
    /// May be called only once; later calls fail with [`Error::AlreadySet`] and leave the
    /// first registration intact. Fails with [`Error::Io`] if `path` cannot be canonicalized,
    /// in which case nothing is registered.
    pub fn set_program_dir_root<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        if self.roots.contains_key(&PROGRAM_DIR_VROOT) {
            return Err(Error::AlreadySet(PROGRAM_DIR_VROOT));
        }
        let path = path.as_ref();
        let canonical = path.canonicalize()?;
        tracing::info!(
            "Program directory virtual root set to {} ({})",
            path.display(),
            canonical.display()
        );

        if let Some(alias) = PredefinedRoot::ProgramDir.deprecated_alias() {
            self.roots.insert(alias, path.to_path_buf());
        }
        self.roots.insert(PROGRAM_DIR_VROOT, path.to_path_buf());
        self.roots.insert(CANONICAL_PROGRAM_DIR_VROOT, canonical);
        Ok(())
    }

    /// Returns true if `path` starts with `<root name><marker>` for this registry's marker.
    pub fn is_virtual(&self, path: &str) -> bool {
        self.marker.is_virtual(path)
    }

    /// Path flavour of [`is_virtual`](Self::is_virtual). Non UTF-8 paths are never virtual.
    pub fn is_virtual_path<P: AsRef<Path>>(&self, path: P) -> bool {
        path.as_ref().to_str().is_some_and(|p| self.is_virtual(p))
    }

    /// Splits `path` into its root name and subpath, see [`PathComponents`].
    pub fn extract_components<'a>(&self, path: &'a str) -> PathComponents<'a> {
        PathComponents::extract(path, &self.marker)
    }

    /// Returns a resolver reading from this registry.
    pub fn resolver(&self) -> Resolver<'_> {
        Resolver::new(self)
    }

    /// Resolves `path` into a real path. Shortcut for `self.resolver().resolve(path)`.
    pub fn real_path(&self, path: &str) -> Result<PathBuf> {
        self.resolver().resolve(path)
    }

    /// Resolves `path` in place. Shortcut for `self.resolver().resolve_into(path)`.
    pub fn convert_to_real_path(&self, path: &mut PathBuf) -> Result<()> {
        self.resolver().resolve_into(path)
    }
}

impl Default for RootRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vroot::predefined::RootKind;
    use tempdir::TempDir;

    fn name(s: &str) -> RootName {
        RootName::new(s).unwrap()
    }

    mod creations {
        use super::*;

        #[test]
        fn test_new_registry() {
            let roots = RootRegistry::new();
            assert_eq!(roots.virtual_map().len(), 2);
            assert_eq!(roots.target(&TEMP_DIR_VROOT), Some(std::env::temp_dir().as_path()));
            assert_eq!(roots.target(&name("$TMP")), Some(std::env::temp_dir().as_path()));
            assert_eq!(roots.marker().as_str(), ":/");
            assert_eq!(roots.max_depth(), DEFAULT_MAX_DEPTH);
        }

        #[test]
        fn test_with_marker() {
            let roots = RootRegistry::with_marker(Marker::new("::").unwrap());
            assert!(roots.is_virtual("RSC::file"));
            assert!(!roots.is_virtual("RSC:/file"));
        }

        #[test]
        fn test_predefined_roots_presence() {
            let roots = RootRegistry::new();
            assert!(roots.has_root("$CURDIR"));
            assert!(roots.has_root("$TMPDIR"));
            assert!(roots.has_root("$TMP"));
            assert!(!roots.has_root("$PGMDIR"));
            assert!(!roots.has_root("$CPGMDIR"));
            assert!(!roots.has_root("$PROGDIR"));
            assert!(!roots.virtual_map().contains_key("$CURDIR"));
        }

        #[test]
        fn test_has_root_dynamic_only_by_exact_name() {
            let roots = RootRegistry::new();
            for root in PredefinedRoot::ALL {
                let expected = root.kind() == RootKind::Dynamic;
                assert_eq!(roots.has_root(&root.name()), expected, "{}", root.name());
            }
            assert!(!roots.has_root("$CURDIRX"));
            assert!(!roots.has_root("$curdir"));
        }
    }

    mod set_virtual_root {
        use super::*;

        #[test]
        fn test_set_and_has_root() {
            let mut roots = RootRegistry::new();
            roots.set_virtual_root("VROOT", "/tmp").unwrap();
            roots.set_virtual_root("RSC", "VROOT:/rsc").unwrap();
            roots.set_virtual_root("IMAGES", "RSC:/images").unwrap();

            assert_eq!(roots.virtual_map().len(), 5);
            assert!(roots.has_root("VROOT"));
            assert!(!roots.has_root("VOID"));
        }

        #[test]
        fn test_target_stored_verbatim() {
            let mut roots = RootRegistry::new();
            roots.set_virtual_root("RSC", "MISSING:/rsc").unwrap();
            assert_eq!(roots.target(&name("RSC")), Some(Path::new("MISSING:/rsc")));
        }

        #[test]
        fn test_set_replaces() {
            let mut roots = RootRegistry::new();
            roots.set_virtual_root("RSC", "/a").unwrap();
            roots.set_virtual_root("RSC", "/b").unwrap();
            assert_eq!(roots.target(&name("RSC")), Some(Path::new("/b")));
            assert_eq!(roots.virtual_map().len(), 3);
        }

        #[test]
        fn test_invalid_names_rejected() {
            let mut roots = RootRegistry::new();
            for bad in ["$RSC", "$TMPDIR", "R", "_RA", "RESOURCES", ""] {
                let result = roots.set_virtual_root(bad, "/tmp");
                assert!(matches!(result, Err(Error::InvalidName(_))), "{bad}");
            }
            assert_eq!(roots.virtual_map().len(), 2);
        }
    }

    mod program_dir {
        use super::*;

        #[test]
        fn test_set_program_dir_root() {
            let temp_dir = TempDir::new("vroot_test").unwrap();
            let mut roots = RootRegistry::new();

            roots.set_program_dir_root(temp_dir.path()).unwrap();

            assert_eq!(roots.virtual_map().len(), 5);
            assert!(roots.has_root("$PGMDIR"));
            assert!(roots.has_root("$CPGMDIR"));
            assert!(roots.has_root("$PROGDIR"));
            assert_eq!(roots.target(&PROGRAM_DIR_VROOT), Some(temp_dir.path()));
            assert_eq!(
                roots.target(&CANONICAL_PROGRAM_DIR_VROOT),
                Some(temp_dir.path().canonicalize().unwrap().as_path())
            );
        }

        #[test]
        fn test_set_program_dir_root_twice() {
            let first = TempDir::new("vroot_first").unwrap();
            let second = TempDir::new("vroot_second").unwrap();
            let mut roots = RootRegistry::new();

            roots.set_program_dir_root(first.path()).unwrap();
            let result = roots.set_program_dir_root(second.path());

            assert!(matches!(result, Err(Error::AlreadySet(n)) if n == PROGRAM_DIR_VROOT));
            assert_eq!(roots.target(&PROGRAM_DIR_VROOT), Some(first.path()));
            assert_eq!(roots.virtual_map().len(), 5);
        }

        #[test]
        fn test_set_program_dir_root_missing_dir() {
            let temp_dir = TempDir::new("vroot_test").unwrap();
            let missing = temp_dir.path().join("missing");
            let mut roots = RootRegistry::new();

            let result = roots.set_program_dir_root(&missing);

            assert!(matches!(result, Err(Error::Io(_))));
            assert!(!roots.has_root("$PGMDIR"));
            assert_eq!(roots.virtual_map().len(), 2);
        }

        #[cfg(unix)]
        #[test]
        fn test_canonical_program_dir_follows_symlink() {
            let temp_dir = TempDir::new("vroot_test").unwrap();
            let real = temp_dir.path().join("real");
            let link = temp_dir.path().join("link");
            std::fs::create_dir(&real).unwrap();
            std::os::unix::fs::symlink(&real, &link).unwrap();

            let mut roots = RootRegistry::new();
            roots.set_program_dir_root(&link).unwrap();

            assert_eq!(roots.target(&PROGRAM_DIR_VROOT), Some(link.as_path()));
            assert_eq!(
                roots.target(&CANONICAL_PROGRAM_DIR_VROOT),
                Some(real.canonicalize().unwrap().as_path())
            );
        }
    }

    mod components {
        use super::*;

        #[test]
        fn test_extract_components() {
            let mut roots = RootRegistry::new();
            roots.set_virtual_root("RSC", "$CURDIR:/rsc").unwrap();

            assert!(roots.is_virtual_path(Path::new("RSC:/dir/file.txt")));
            let comps = roots.extract_components("RSC:/dir/file.txt");
            assert!(comps.is_virtual());
            assert_eq!(comps.virtual_root, "RSC");
            assert_eq!(Path::new(comps.subpath), Path::new("dir/file.txt"));
        }
    }
}
