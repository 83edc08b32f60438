//! Layered configuration loading
//!
//! Sources, lowest precedence first:
//! 1. the preset for the selected environment
//! 2. `config.<environment>.toml`, when present
//! 3. `SHELF__<SECTION>__<KEY>` variables, e.g. `SHELF__SERVER__PORT`
//! 4. the well-known variables (`PORT`, `JWT_SECRET`, `DATA_DIR`, ...)

use anyhow::{Context, Result};
use config::{Config, File, FileFormat};

use shelf_shared::config::{AppConfig, Environment};

/// Load the configuration for the environment named by the process environment
pub fn load_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();
    let environment = Environment::from_env();
    load_for(environment, environment.config_file())
}

/// Load the configuration for `environment`, reading overrides from `config_file`
pub fn load_for(environment: Environment, config_file: &str) -> Result<AppConfig> {
    let preset = toml::to_string(&AppConfig::for_environment(environment))
        .context("Failed to serialize configuration preset")?;

    let mut app_config: AppConfig = Config::builder()
        .add_source(File::from_str(&preset, FileFormat::Toml))
        .add_source(File::new(config_file, FileFormat::Toml).required(false))
        .add_source(
            config::Environment::with_prefix("SHELF")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .context("Failed to build configuration")?
        .try_deserialize()
        .context("Failed to deserialize configuration")?;

    // The selected environment always wins over file contents
    app_config.environment = environment;
    app_config.merge_env();
    app_config.validate().map_err(anyhow::Error::msg)?;

    Ok(app_config)
}
