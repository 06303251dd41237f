//! Filesystem helpers for portal-kit
//!
//! Provides normalized paths, one-shot manifest reads and discovery of the
//! workspace target root.

pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod path;
pub mod root;

pub use config::ConfigStore;
pub use constants::PACKAGE_MANIFEST;
pub use error::{Error, Result};
pub use path::NormalizedPath;
pub use root::{default_package_path, find_target_root, target_root};
