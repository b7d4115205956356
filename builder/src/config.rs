//! Build configuration loaded from `project.toml` at the content root.

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub project: ProjectInfo,
    pub build: BuildSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProjectInfo {
    pub name: String,
}

/// `[build]` section. Both settings are overridable from the command line.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BuildSection {
    /// Output directory, relative to the content root.
    pub output: Option<String>,
    /// Number of compile workers.
    pub workers: Option<usize>,
}

/// Load `project.toml` if present. An absent file is not an error.
pub fn load(content_root: &Path) -> Result<Option<ProjectConfig>, String> {
    let path = content_root.join("project.toml");
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(&path)
        .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    toml::from_str(&content)
        .map(Some)
        .map_err(|e| format!("failed to parse {}: {e}", path.display()))
}
