use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "centrality.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CentralityConfig {
    #[serde(default)]
    pub compute: ComputeConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputeConfig {
    /// Worker threads for the source loop; `None` uses rayon's default.
    #[serde(default)]
    pub threads: Option<usize>,
    #[serde(default = "default_true")]
    pub normalize: bool,
}

impl Default for ComputeConfig {
    fn default() -> Self {
        Self {
            threads: None,
            normalize: default_true(),
        }
    }
}

impl ComputeConfig {
    /// Build a rayon pool honouring [`Self::threads`].
    ///
    /// # Errors
    ///
    /// Returns an error if the pool cannot be created.
    pub fn thread_pool(&self) -> Result<rayon::ThreadPool> {
        let mut builder = rayon::ThreadPoolBuilder::new().thread_name(|i| format!("centrality-{i}"));
        if let Some(threads) = self.threads {
            builder = builder.num_threads(threads);
        }
        builder.build().context("Failed to build worker thread pool")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Decimal places in pretty/text output.
    #[serde(default = "default_precision")]
    pub precision: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
        }
    }
}

const fn default_true() -> bool {
    true
}

const fn default_precision() -> usize {
    6
}

/// Parse a config file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML for
/// [`CentralityConfig`].
pub fn load_config(path: &Path) -> Result<CentralityConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str::<CentralityConfig>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

/// Locate the config file to use, if any.
///
/// Precedence: `explicit` → `<cwd>/centrality.toml` →
/// `<config_dir>/centrality/config.toml`.
#[must_use]
pub fn discover_config(explicit: Option<&Path>, cwd: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let local = cwd.join(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join("centrality/config.toml"))
        .filter(|path| path.exists())
}

/// Resolve and load the effective configuration; defaults when no file exists.
///
/// # Errors
///
/// Returns an error if a discovered (or explicitly named) file fails to load.
pub fn resolve_config(explicit: Option<&Path>, cwd: &Path) -> Result<CentralityConfig> {
    discover_config(explicit, cwd).map_or_else(|| Ok(CentralityConfig::default()), |path| load_config(&path))
}
