use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::init_logging;
pub use settings::{
    Config, DisplaySettings, IndicatorSettings, LoggingSettings, StatusThresholds,
};

/// Prefix of the environment variables that override file values,
/// e.g. `MACRODASH__INDICATORS__INFLATION_CEILING=5.0`.
pub const ENV_PREFIX: &str = "MACRODASH";

/// Loads the application configuration.
///
/// Sources are layered: built-in defaults, then the TOML file at `path` (if given),
/// then `MACRODASH__*` environment variables. The merged result is validated before it
/// is returned.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let mut builder = config::Config::builder();

    if let Some(path) = path {
        builder = builder.add_source(config::File::from(path).required(true));
    }

    let builder = builder
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("indicators.fx_lookbacks"),
        )
        .build()?;

    finish(builder)
}

/// Parses configuration from an in-memory TOML document, without consulting the environment.
pub fn load_config_from_str(toml: &str) -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::from_str(toml, config::FileFormat::Toml))
        .build()?;

    finish(builder)
}

fn finish(builder: config::Config) -> Result<Config, ConfigError> {
    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    config.validate()?;

    tracing::debug!(?config, "Configuration loaded.");
    Ok(config)
}
