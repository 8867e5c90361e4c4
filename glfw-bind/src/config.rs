//! Library loader configuration
//!
//! Controls where the binding looks for the GLFW shared library. The defaults
//! reproduce the usual search: a bundled copy next to the executable first,
//! then whatever the system's dynamic loader finds.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for locating the GLFW shared library
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Load exactly this file and nothing else
    #[serde(default)]
    pub library_path: Option<PathBuf>,

    /// Directory holding a bundled copy (default: the executable's directory)
    #[serde(default)]
    pub bundled_dir: Option<PathBuf>,

    /// Whether to look for a bundled copy
    #[serde(default = "default_true")]
    pub search_bundled: bool,

    /// Whether to fall back to the system's library
    #[serde(default = "default_true")]
    pub search_system: bool,
}

fn default_true() -> bool {
    true
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            library_path: None,
            bundled_dir: None,
            search_bundled: true,
            search_system: true,
        }
    }
}

impl LoaderConfig {
    /// Create a loader configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: load only the library at `path`
    pub fn with_library_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.library_path = Some(path.into());
        self
    }

    /// Builder method: look for the bundled copy in `dir`
    pub fn with_bundled_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.bundled_dir = Some(dir.into());
        self
    }

    /// Builder method: enable or disable the bundled search
    pub fn with_bundled_search(mut self, enabled: bool) -> Self {
        self.search_bundled = enabled;
        self
    }

    /// Builder method: enable or disable the system fallback
    pub fn with_system_search(mut self, enabled: bool) -> Self {
        self.search_system = enabled;
        self
    }

    /// Directory searched for a bundled copy, if any
    pub fn effective_bundled_dir(&self) -> Option<PathBuf> {
        self.bundled_dir.clone().or_else(|| {
            std::env::current_exe()
                .ok()
                .and_then(|exe| exe.parent().map(Path::to_path_buf))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loader_config_builder() {
        let config = LoaderConfig::new()
            .with_bundled_dir("/opt/app/lib")
            .with_system_search(false);

        assert_eq!(config.bundled_dir, Some(PathBuf::from("/opt/app/lib")));
        assert!(config.search_bundled);
        assert!(!config.search_system);
        assert_eq!(config.effective_bundled_dir(), Some(PathBuf::from("/opt/app/lib")));
    }

    #[test]
    fn test_default_bundled_dir_is_executable_dir() {
        let config = LoaderConfig::default();
        let exe_dir = std::env::current_exe()
            .unwrap()
            .parent()
            .unwrap()
            .to_path_buf();
        assert_eq!(config.effective_bundled_dir(), Some(exe_dir));
    }
}
