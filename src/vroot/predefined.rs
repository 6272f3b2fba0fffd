use std::io;
use std::path::PathBuf;

use crate::RootName;

/// How a predefined root obtains its target path.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RootKind {
    /// Stored in the registry once, at construction or when explicitly set.
    Static,
    /// Never stored; queried from the OS on every resolution.
    Dynamic,
}

/// The roots a registry knows about without user registration.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PredefinedRoot {
    /// `$CURDIR`: the process working directory.
    CurrentDir,
    /// `$TMPDIR`: the OS temp directory.
    TempDir,
    /// `$PGMDIR`: the program directory, supplied once by the host.
    ProgramDir,
    /// `$CPGMDIR`: canonical form of the program directory.
    CanonicalProgramDir,
}

pub const CURRENT_DIR_VROOT: RootName = RootName::from_static("$CURDIR");
pub const TEMP_DIR_VROOT: RootName = RootName::from_static("$TMPDIR");
pub const PROGRAM_DIR_VROOT: RootName = RootName::from_static("$PGMDIR");
pub const CANONICAL_PROGRAM_DIR_VROOT: RootName = RootName::from_static("$CPGMDIR");

#[deprecated(note = "use TEMP_DIR_VROOT (\"$TMPDIR\")")]
pub const OLD_TEMP_DIR_VROOT: RootName = RootName::from_static("$TMP");
#[deprecated(note = "use PROGRAM_DIR_VROOT (\"$PGMDIR\")")]
pub const OLD_PROGRAM_DIR_VROOT: RootName = RootName::from_static("$PROGDIR");

// Legacy spellings still accepted: (alias, replacement).
#[allow(deprecated)]
const DEPRECATED_ALIASES: [(RootName, PredefinedRoot); 2] = [
    (OLD_TEMP_DIR_VROOT, PredefinedRoot::TempDir),
    (OLD_PROGRAM_DIR_VROOT, PredefinedRoot::ProgramDir),
];

impl PredefinedRoot {
    pub const ALL: [PredefinedRoot; 4] = [
        PredefinedRoot::CurrentDir,
        PredefinedRoot::TempDir,
        PredefinedRoot::ProgramDir,
        PredefinedRoot::CanonicalProgramDir,
    ];

    pub fn name(self) -> RootName {
        match self {
            PredefinedRoot::CurrentDir => CURRENT_DIR_VROOT,
            PredefinedRoot::TempDir => TEMP_DIR_VROOT,
            PredefinedRoot::ProgramDir => PROGRAM_DIR_VROOT,
            PredefinedRoot::CanonicalProgramDir => CANONICAL_PROGRAM_DIR_VROOT,
        }
    }

    pub fn kind(self) -> RootKind {
        match self {
            PredefinedRoot::CurrentDir => RootKind::Dynamic,
            _ => RootKind::Static,
        }
    }

    /// Queries the target of a dynamic root.
    /// Returns `None` for static roots, whose targets live in the registry.
    pub fn dynamic_target(self) -> io::Result<Option<PathBuf>> {
        match self {
            PredefinedRoot::CurrentDir => std::env::current_dir().map(Some),
            _ => Ok(None),
        }
    }

    /// Looks up a dynamic root by name.
    pub fn dynamic(name: &RootName) -> Option<Self> {
        Self::from_name(name).filter(|root| root.kind() == RootKind::Dynamic)
    }

    /// The legacy name that still maps to this root, if any.
    pub fn deprecated_alias(self) -> Option<RootName> {
        DEPRECATED_ALIASES
            .iter()
            .find(|(_, root)| *root == self)
            .map(|(alias, _)| *alias)
    }

    /// Looks up a predefined root by its current name (aliases are not matched).
    pub fn from_name(name: &RootName) -> Option<Self> {
        Self::ALL.into_iter().find(|root| root.name() == *name)
    }

    /// If `name` is a deprecated alias, returns the root that replaces it.
    pub fn replacing(name: &RootName) -> Option<Self> {
        DEPRECATED_ALIASES
            .iter()
            .find(|(alias, _)| alias == name)
            .map(|(_, root)| *root)
    }
}
