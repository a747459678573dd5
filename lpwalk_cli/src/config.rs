use anyhow::{Context, Result};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use lpwalk_core::{NonDefaultKeyword, SpoolerCommands, TraversalOptions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable prefix, e.g. `LPWALK_PRINTER__DEFAULT=Office`
pub const ENV_PREFIX: &str = "LPWALK_";

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default)]
    pub printer: PrinterConfig,

    #[serde(default)]
    pub spooler: SpoolerCommands,

    #[serde(default)]
    pub staple: StapleConfig,

    #[serde(default)]
    pub discovery: DiscoveryConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct PrinterConfig {
    /// Printer used when `--printer` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct StapleConfig {
    /// Keyword the staple value must contain, e.g. "left"
    pub position: String,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DiscoveryConfig {
    pub follow_links: bool,
    pub sort_by_name: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    pub color_enabled: bool,
}

impl Default for StapleConfig {
    fn default() -> Self {
        Self {
            position: "left".to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color_enabled: true,
        }
    }
}

impl AppConfig {
    /// Staple policy described by the `[staple]` section
    pub fn staple_policy(&self) -> NonDefaultKeyword {
        NonDefaultKeyword::new(self.staple.position.clone())
    }

    /// Traversal options described by the `[discovery]` section
    pub fn traversal_options(&self, include_hidden: bool) -> TraversalOptions {
        TraversalOptions::new()
            .with_include_hidden(include_hidden)
            .with_follow_links(self.discovery.follow_links)
            .with_sort_by_name(self.discovery.sort_by_name)
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }

    /// Reject values that would only fail later, halfway through a run
    pub fn validate(&self) -> Result<()> {
        let commands = [
            ("spooler.list_command", &self.spooler.list_command),
            ("spooler.options_command", &self.spooler.options_command),
            ("spooler.submit_command", &self.spooler.submit_command),
            ("staple.position", &self.staple.position),
        ];
        for (key, value) in commands {
            if value.trim().is_empty() {
                anyhow::bail!("{key} must not be empty");
            }
        }

        if let Some(printer) = &self.printer.default
            && printer.trim().is_empty()
        {
            anyhow::bail!("printer.default must not be empty when set");
        }

        Ok(())
    }
}

/// Configuration manager that handles XDG-compliant paths and layered configuration
pub struct ConfigManager {
    config_path: PathBuf,
    required: bool,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    /// Create a new ConfigManager with default XDG-compliant paths
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
            required: false,
        }
    }

    /// Create a ConfigManager for a file the user named explicitly
    ///
    /// Unlike the default location, this file must exist.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            config_path: path,
            required: true,
        }
    }

    /// Get the configuration file path
    pub fn get_config_path(&self) -> &Path {
        &self.config_path
    }

    /// Get the default XDG-compliant configuration path
    fn default_config_path() -> PathBuf {
        // Check for XDG_CONFIG_HOME override first (Linux/macOS)
        #[cfg(not(target_os = "windows"))]
        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg_config).join("lpwalk/config.toml");
        }

        #[cfg(not(target_os = "windows"))]
        {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config/lpwalk/config.toml")
        }

        #[cfg(target_os = "windows")]
        {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("lpwalk\\config.toml")
        }
    }

    /// Load configuration with layered priority: ENV > File > Defaults
    ///
    /// CLI flags are applied on top by the caller.
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new();

        // Layer 1: Defaults
        figment = figment.merge(Serialized::defaults(AppConfig::default()));

        // Layer 2: Config file (if exists)
        if self.config_path.exists() {
            log::debug!("Loading configuration from {}", self.config_path.display());
            figment = figment.merge(Toml::file(&self.config_path));
        } else if self.required {
            anyhow::bail!(
                "Configuration file not found: {}",
                self.config_path.display()
            );
        }

        // Layer 3: Environment variables
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: AppConfig = figment.extract().context("Failed to load configuration")?;
        config.validate().context("Invalid configuration")?;
        Ok(config)
    }
}
