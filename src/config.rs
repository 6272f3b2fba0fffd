//! Startup configuration for a [`RootRegistry`], read from TOML.
//!
//! ```toml
//! marker = ":/"
//! max_depth = 32
//! program_dir = "/opt/app"
//!
//! [roots]
//! RSC = "$PGMDIR:/rsc"
//! IMAGES = "RSC:/images"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::core::Result;
use crate::{Marker, RootRegistry};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RootsConfig {
    /// Marker separating root names from subpaths. Defaults to `:/`.
    #[serde(default)]
    pub marker: Option<String>,

    /// Maximum number of chained roots per resolution.
    #[serde(default)]
    pub max_depth: Option<usize>,

    /// Program directory, registered as `$PGMDIR` and `$CPGMDIR`.
    #[serde(default)]
    pub program_dir: Option<PathBuf>,

    /// User roots: name → target path (which may be virtual).
    #[serde(default)]
    pub roots: BTreeMap<String, PathBuf>,
}

impl RootsConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Reads and parses the configuration file at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Adds the configured roots to `registry`.
    ///
    /// The marker is not applied here since it must be chosen when the registry is built,
    /// see [`RootRegistry::from_config`].
    pub fn apply(&self, registry: &mut RootRegistry) -> Result<()> {
        if let Some(depth) = self.max_depth {
            registry.set_max_depth(depth);
        }
        if let Some(program_dir) = &self.program_dir {
            registry.set_program_dir_root(program_dir)?;
        }
        for (name, target) in &self.roots {
            registry.set_virtual_root(name, target)?;
        }
        Ok(())
    }
}

impl RootRegistry {
    /// Builds a registry from `config`.
    pub fn from_config(config: &RootsConfig) -> Result<Self> {
        let marker = match &config.marker {
            Some(text) => Marker::new(text)?,
            None => Marker::default(),
        };
        let mut registry = Self::with_marker(marker);
        config.apply(&mut registry)?;
        Ok(registry)
    }
}
