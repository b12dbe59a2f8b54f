//! Integration tests for layered configuration loading.
//!
//! Uses figment::Jail for sandboxed working directory and env var changes.

use dex_config::{ConfigError, DexConfig};
use figment::Jail;

/// Point the user-global config lookup inside the jail.
fn isolate_global(jail: &mut Jail) {
    let dir = jail.directory().display().to_string();
    jail.set_env("XDG_CONFIG_HOME", dir);
}

#[test]
fn loads_api_config_from_project_toml() {
    Jail::expect_with(|jail| {
        isolate_global(jail);
        std::fs::create_dir_all(".dex").expect("create config dir");
        jail.create_file(
            ".dex/config.toml",
            r#"
[api]
base_url = "http://localhost:9000/api/v2/"
sprite_base_url = "http://localhost:9000/sprites"
user_agent = "dex-test"
timeout_secs = 3
"#,
        )?;

        let config = DexConfig::load().expect("config loads");
        assert_eq!(config.api.base_url(), "http://localhost:9000/api/v2");
        assert_eq!(config.api.sprite_base_url, "http://localhost:9000/sprites");
        assert_eq!(config.api.user_agent, "dex-test");
        assert_eq!(config.api.timeout_secs, 3);
        Ok(())
    });
}

#[test]
fn partial_sections_keep_defaults() {
    Jail::expect_with(|jail| {
        isolate_global(jail);
        std::fs::create_dir_all(".dex").expect("create config dir");
        jail.create_file(
            ".dex/config.toml",
            r"
[general]
default_page = 4
",
        )?;

        let config = DexConfig::load().expect("config loads");
        assert_eq!(config.general.default_page(), 4);
        assert_eq!(config.api.base_url(), "https://pokeapi.co/api/v2");
        assert_eq!(config.api.timeout_secs, 10);
        Ok(())
    });
}

#[test]
fn global_config_is_overridden_by_project_config() {
    Jail::expect_with(|jail| {
        isolate_global(jail);
        std::fs::create_dir_all("dex").expect("create config dir");
        jail.create_file(
            "dex/config.toml",
            r#"
[api]
user_agent = "from-global"
timeout_secs = 20
"#,
        )?;
        std::fs::create_dir_all(".dex").expect("create config dir");
        jail.create_file(
            ".dex/config.toml",
            r"
[api]
timeout_secs = 5
",
        )?;

        let config = DexConfig::load().expect("config loads");
        assert_eq!(config.api.user_agent, "from-global");
        assert_eq!(config.api.timeout_secs, 5);
        Ok(())
    });
}

#[test]
fn env_beats_toml() {
    Jail::expect_with(|jail| {
        isolate_global(jail);
        std::fs::create_dir_all(".dex").expect("create config dir");
        jail.create_file(
            ".dex/config.toml",
            r#"
[api]
base_url = "http://toml.example/api/v2"
"#,
        )?;
        jail.set_env("DEX_API__BASE_URL", "http://env.example/api/v2");
        jail.set_env("DEX_GENERAL__DEFAULT_PAGE", "7");

        let config = DexConfig::load().expect("config loads");
        assert_eq!(config.api.base_url(), "http://env.example/api/v2");
        assert_eq!(config.general.default_page(), 7);
        Ok(())
    });
}

#[test]
fn invalid_base_url_fails_validation() {
    Jail::expect_with(|jail| {
        isolate_global(jail);
        jail.set_env("DEX_API__BASE_URL", "pokeapi.co/api/v2");

        let err = DexConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        Ok(())
    });
}

#[test]
fn malformed_toml_is_a_figment_error() {
    Jail::expect_with(|jail| {
        isolate_global(jail);
        std::fs::create_dir_all(".dex").expect("create config dir");
        jail.create_file(".dex/config.toml", "[api\nbase_url = ")?;

        let err = DexConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}
