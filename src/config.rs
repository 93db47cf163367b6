use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "contractmap.toml";

/// Where the two source trees live, relative to the repository root. The
/// defaults match the conventional layout; a `contractmap.toml` at the repo
/// root overrides them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractmapConfig {
    /// Frontend service directory holding the request-helper call sites
    #[serde(default = "default_frontend_dir")]
    pub frontend_dir: PathBuf,

    /// Backend Java source root; resource files are found under any
    /// `resource/` directory below it
    #[serde(default = "default_backend_dir")]
    pub backend_dir: PathBuf,
}

fn default_frontend_dir() -> PathBuf {
    PathBuf::from("frontend/src/services")
}

fn default_backend_dir() -> PathBuf {
    PathBuf::from("server/src/main/java")
}

impl Default for ContractmapConfig {
    fn default() -> Self {
        Self {
            frontend_dir: default_frontend_dir(),
            backend_dir: default_backend_dir(),
        }
    }
}

/// Load the repo's config file, falling back to defaults when it does not
/// exist. A malformed file is an error, not a silent fallback.
pub fn load_config(repo: &Path) -> Result<ContractmapConfig> {
    let path = repo.join(CONFIG_FILE_NAME);
    if !path.exists() {
        return Ok(ContractmapConfig::default());
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let config = toml::from_str(&content)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(config)
}
