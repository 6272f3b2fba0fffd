mod components;
mod marker;
mod name;
mod predefined;
mod registry;
mod resolver;

pub use components::PathComponents;
pub use marker::{Marker, is_virtual_path};
pub use name::{RootName, is_valid_root_name};
#[allow(deprecated)]
pub use predefined::{
    CANONICAL_PROGRAM_DIR_VROOT, CURRENT_DIR_VROOT, OLD_PROGRAM_DIR_VROOT, OLD_TEMP_DIR_VROOT,
    PROGRAM_DIR_VROOT, PredefinedRoot, RootKind, TEMP_DIR_VROOT,
};
pub use registry::{RootRegistry, VirtualRootMap};
pub use resolver::Resolver;
