use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = ".doctestpp.toml";

/// Configuration for doctestpp
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Glob patterns for file names picked up when walking directories
    pub include: Vec<String>,
    /// Directory names to skip during walking
    pub exclude_dirs: Vec<String>,
    /// Code generation settings
    pub generate: GenerateConfig,
}

/// Code generation settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerateConfig {
    /// Test name whose body is emitted without SUITE/TEST wrapping
    pub verbatim_name: String,
    /// Spaces per indentation level
    pub indent_width: usize,
    /// Emit `#line` directives pointing back at the source
    pub line_directives: bool,
    /// Suite for tests that do not name one
    pub default_suite: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            include: ["*.h", "*.hh", "*.hpp", "*.hxx", "*.c", "*.cc", "*.cpp", "*.cxx"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            exclude_dirs: vec![],
            generate: GenerateConfig::default(),
        }
    }
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            verbatim_name: "__VERB__".into(),
            indent_width: 4,
            line_directives: true,
            default_suite: None,
        }
    }
}

impl Config {
    /// Load config from .doctestpp.toml, searching up from the given directory
    pub fn load(start_dir: &Path) -> Result<Self> {
        match find_config_file(start_dir) {
            Some(path) => Self::from_file(&path),
            None => Ok(Config::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }
}

/// Search for .doctestpp.toml from start_dir upward
fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut dir = start_dir.to_path_buf();
    loop {
        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !dir.pop() {
            return None;
        }
    }
}
