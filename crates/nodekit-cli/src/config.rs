//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `NODEKIT_<SECTION>__<KEY>`, e.g.
//!    `NODEKIT_INSTALL__PACKAGE_MANAGER=pnpm`
//! 3. Config file: `--config FILE`, else the user config file, else
//!    `.nodekit.toml` in the current directory
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

/// Per-directory config file name.
pub const LOCAL_CONFIG_FILE: &str = ".nodekit.toml";

const ENV_PREFIX: &str = "NODEKIT";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Answers used when a flag is not given.
    pub defaults: Defaults,
    pub install: InstallConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub framework: Option<String>,
    pub database: Option<String>,
    pub orm: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallConfig {
    pub package_manager: String,
    /// Never run the package manager.
    pub skip: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`.
    pub format: String,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            package_manager: "yarn".into(),
            skip: false,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then file, then environment.
    ///
    /// An explicit `config_file` must exist; the implicit locations are
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults = config::Config::try_from(&Self::default())
            .context("failed to build default configuration")?;

        let mut builder = config::Config::builder().add_source(defaults);

        builder = match config_file {
            Some(path) => builder.add_source(config::File::from(path.as_path()).required(true)),
            None => builder
                .add_source(config::File::from(Self::config_path()).required(false))
                .add_source(config::File::from(Path::new(LOCAL_CONFIG_FILE)).required(false)),
        };

        let settings = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("failed to read configuration")?;

        settings
            .try_deserialize()
            .context("configuration has invalid values")
    }

    /// Path to the user configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.nodekit.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "nodekit", "nodekit")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// File that `load` would read when no `--config` is given.
    pub fn active_path() -> Option<PathBuf> {
        [Self::config_path(), PathBuf::from(LOCAL_CONFIG_FILE)]
            .into_iter()
            .filter(|p| p.exists())
            .last()
    }

    /// Look up a dotted key, as shown by `nodekit config get`.
    pub fn get(&self, key: &str) -> Option<String> {
        let opt = |v: &Option<String>| v.clone().unwrap_or_default();
        match key {
            "defaults.framework" => Some(opt(&self.defaults.framework)),
            "defaults.database" => Some(opt(&self.defaults.database)),
            "defaults.orm" => Some(opt(&self.defaults.orm)),
            "install.package_manager" => Some(self.install.package_manager.clone()),
            "install.skip" => Some(self.install.skip.to_string()),
            "output.no_color" => Some(self.output.no_color.to_string()),
            "output.format" => Some(self.output.format.clone()),
            _ => None,
        }
    }

    pub const KEYS: [&'static str; 7] = [
        "defaults.framework",
        "defaults.database",
        "defaults.orm",
        "install.package_manager",
        "install.skip",
        "output.no_color",
        "output.format",
    ];
}
