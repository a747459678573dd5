//! Layered configuration loading
//!
//! Each test runs inside a `figment::Jail`, which gives it a private working
//! directory and restores the environment afterwards.

use figment::Jail;
use lpwalk_cli::config::{AppConfig, ConfigManager};

const CONFIG: &str = r#"
[printer]
default = "Office"

[spooler]
submit_command = "lp-wrapper"

[discovery]
sort_by_name = true
"#;

#[test]
fn test_defaults_without_file() {
    Jail::expect_with(|jail| {
        let dir = jail.directory().display().to_string();
        jail.set_env("XDG_CONFIG_HOME", dir);

        let manager = ConfigManager::new();
        assert_eq!(
            manager.get_config_path(),
            jail.directory().join("lpwalk/config.toml")
        );
        assert_eq!(manager.load().unwrap(), AppConfig::default());
        Ok(())
    });
}

#[test]
fn test_file_overrides_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", CONFIG)?;

        let config = ConfigManager::with_path(jail.directory().join("config.toml"))
            .load()
            .unwrap();

        assert_eq!(config.printer.default.as_deref(), Some("Office"));
        assert_eq!(config.spooler.submit_command, "lp-wrapper");
        assert_eq!(config.spooler.list_command, "lpstat");
        assert!(config.discovery.sort_by_name);
        assert_eq!(config.staple.position, "left");
        Ok(())
    });
}

#[test]
fn test_environment_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", CONFIG)?;
        jail.set_env("LPWALK_PRINTER__DEFAULT", "Lab");
        jail.set_env("LPWALK_STAPLE__POSITION", "right");

        let config = ConfigManager::with_path(jail.directory().join("config.toml"))
            .load()
            .unwrap();

        assert_eq!(config.printer.default.as_deref(), Some("Lab"));
        assert_eq!(config.staple.position, "right");
        assert_eq!(config.spooler.submit_command, "lp-wrapper");
        Ok(())
    });
}

#[test]
fn test_default_location_is_optional_but_explicit_path_is_not() {
    Jail::expect_with(|jail| {
        let dir = jail.directory().display().to_string();
        jail.set_env("XDG_CONFIG_HOME", dir);
        assert!(ConfigManager::new().load().is_ok());

        let error = ConfigManager::with_path(jail.directory().join("absent.toml"))
            .load()
            .unwrap_err();
        assert!(error.to_string().contains("Configuration file not found"));
        Ok(())
    });
}

#[test]
fn test_invalid_values_are_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[spooler]\nlist_command = \"\"\n")?;

        let error = ConfigManager::with_path(jail.directory().join("config.toml"))
            .load()
            .unwrap_err();
        assert!(format!("{error:#}").contains("spooler.list_command must not be empty"));
        Ok(())
    });
}

#[test]
fn test_malformed_file() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[discovery]\nfollow_links = \"sometimes\"\n")?;

        let result = ConfigManager::with_path(jail.directory().join("config.toml")).load();
        assert!(result.is_err());
        Ok(())
    });
}
