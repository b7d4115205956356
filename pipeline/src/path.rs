//! Content path handling.
//!
//! Descriptor references are `/`-rooted against the content root and always
//! use forward slashes, regardless of host platform.

use std::path::{Path, PathBuf};

/// Resolve a `/`-rooted descriptor reference against the content root.
pub fn resolve(content_root: &Path, reference: &str) -> PathBuf {
    content_root.join(reference.trim_start_matches('/'))
}

/// Directory of `source_path` relative to the content root, with forward
/// slashes. Empty string for files directly under the root.
pub fn rel_dir(content_root: &Path, source_path: &Path) -> String {
    let rel = source_path.strip_prefix(content_root).unwrap_or(source_path);
    let dir = rel.parent().unwrap_or_else(|| Path::new(""));
    dir.to_string_lossy().replace('\\', "/")
}

/// Build a `/`-rooted reference for a file in the given root-relative
/// directory. Files at the root get a single leading slash.
pub fn component_path(rel_dir: &str, file_name: &str) -> String {
    if rel_dir.is_empty() {
        format!("/{file_name}")
    } else {
        format!("/{rel_dir}/{file_name}")
    }
}
