use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const CONFIG_ENV: &str = "SYNK_CONFIG";
pub const CATALOG_ENV: &str = "SYNK_CATALOG";

fn default_lint_on_load() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CoreConfig {
    /// Authored catalog to use instead of the built-in one.
    #[serde(default, alias = "catalog")]
    pub catalog_path: Option<PathBuf>,

    #[serde(default = "default_lint_on_load")]
    pub lint_on_load: bool,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            lint_on_load: default_lint_on_load(),
        }
    }
}

impl CoreConfig {
    /// Reads `$SYNK_CONFIG` if set, then applies `$SYNK_CATALOG`.
    pub fn load() -> Self {
        let mut config = match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(Path::new(&path)),
            None => Self::default(),
        };

        if let Some(path) = std::env::var_os(CATALOG_ENV).filter(|p| !p.is_empty()) {
            config.catalog_path = Some(PathBuf::from(path));
        }

        config
    }

    /// Falls back to defaults when the file is missing or unparseable.
    pub fn from_file(path: &Path) -> Self {
        let data = match std::fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => {
                log::warn!("no config at {}: {e}; using defaults", path.display());
                return Self::default();
            }
        };

        match serde_json::from_str::<CoreConfig>(&data) {
            Ok(config) => {
                log::info!("loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("failed to parse config at {}: {e}; using defaults", path.display());
                Self::default()
            }
        }
    }
}
