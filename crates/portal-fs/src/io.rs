//! One-shot file reads

use std::fs;

use crate::{Error, NormalizedPath, Result};

/// Read text content from a file.
///
/// The file handle is scoped to this call and released on both success and
/// failure. There is no retry: a failed read is returned as-is.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    tracing::debug!(path = %path, "reading file");
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}
