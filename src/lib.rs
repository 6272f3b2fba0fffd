//! Virtual root paths for Rust.
//! Lets code name locations (install directory, temp directory, resource bundles) by stable
//! symbolic roots instead of hard-coded or environment-dependent absolute paths.
//!
//! ### Overview
//!
//! A *virtual path* starts with a root name followed by a marker, e.g. `RSC:/images/logo.png`.
//! A [`RootRegistry`] maps root names to target paths, which may themselves be virtual, and a
//! [`Resolver`] substitutes them recursively until a real path is produced.
//!
//! **Key ideas**:
//! - **Pure**: Resolution is a text transformation; paths are never checked for existence.
//! - **Remappable**: The host application sets roots at startup, in code or from a TOML file.
//! - **Predefined roots**: `$CURDIR`, `$TMPDIR`, `$PGMDIR` and `$CPGMDIR` are known out of the box.
//! - **Lenient**: Unknown roots are left untouched, so resolution can be deferred.
//! - **Safe**: Cyclic root definitions fail with an error instead of recursing forever.
//!
//! ### Example
//!
//! ```
//! use std::path::Path;
//! use vroot_kit::RootRegistry;
//!
//! let mut roots = RootRegistry::new();
//! roots.set_virtual_root("VROOT", "/tmp").unwrap();
//! roots.set_virtual_root("RSC", "VROOT:/rsc").unwrap();
//! roots.set_virtual_root("IMAGES", "RSC:/images").unwrap();
//!
//! assert_eq!(roots.real_path("IMAGES:/file").unwrap(), Path::new("/tmp/rsc/images/file"));
//! assert_eq!(roots.real_path("VIDEOS:/file").unwrap(), Path::new("VIDEOS:/file"));
//! ```

mod config;
mod core;
mod vroot;

pub use config::RootsConfig;
pub use crate::core::{DEFAULT_MARKER, DEFAULT_MAX_DEPTH, Error, MAX_ROOT_NAME_LEN, Result};
pub use vroot::*;
