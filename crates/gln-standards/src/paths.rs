//! Standards directory path resolution.

use std::path::PathBuf;

/// Environment variable for overriding the standards directory.
pub const STANDARDS_ENV_VAR: &str = "GLN_STANDARDS_DIR";

/// Get the standards root directory.
///
/// Resolution order:
/// 1. `GLN_STANDARDS_DIR` environment variable
/// 2. `standards/` directory relative to workspace root
pub fn standards_root() -> PathBuf {
    if let Ok(root) = std::env::var(STANDARDS_ENV_VAR) {
        return PathBuf::from(root);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../standards")
}

/// Directory holding the per-feed field descriptors.
pub fn fields_path() -> PathBuf {
    standards_root().join("fields")
}
