//! Configuration for the Storefront catalog service.
//!
//! Values are layered, lowest priority first:
//!
//! 1. built-in defaults (`AppConfig::default()`)
//! 2. `config/default.{toml,yaml,json}`
//! 3. `config/{RUN_ENV}.{toml,yaml,json}` (`RUN_ENV` defaults to `debug`)
//! 4. environment variables prefixed with `STOREFRONT`, nested with `__`,
//!    e.g. `STOREFRONT__DATABASE__URL=sqlite://catalog.db`
//!
//! A `.env` file is loaded once before the environment is read.

use config::{Config, Environment, File};
use once_cell::sync::OnceCell;
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

pub mod models;
pub use models::*;

/// Environment variable prefix used for overrides.
pub const ENV_PREFIX: &str = "STOREFRONT";

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to build configuration: {0}")]
    Build(#[from] config::ConfigError),
}

/// Loads the configuration from the `config/` directory of the current
/// working directory, the environment and a `.env` file.
pub fn load_config() -> Result<AppConfig, ConfigLoadError> {
    load_config_from(Path::new("config"))
}

/// Same as [`load_config`], but reads the file layers from `config_dir`.
pub fn load_config_from(config_dir: &Path) -> Result<AppConfig, ConfigLoadError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());
    let default_path = config_dir.join("default");
    let env_path: PathBuf = config_dir.join(&run_env);

    debug!(
        "Loading configuration: default={}, env={}",
        default_path.display(),
        env_path.display()
    );

    let defaults = Config::try_from(&AppConfig::default())?;

    let builder = Config::builder()
        .add_source(defaults)
        .add_source(File::with_name(&default_path.to_string_lossy()).required(false))
        .add_source(File::with_name(&env_path.to_string_lossy()).required(false))
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));

    let config: AppConfig = builder.build()?.try_deserialize()?;
    Ok(config)
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Loads `.env` (or the file named by `DOTENV_OVERRIDE`) into the process
/// environment exactly once and returns the path that was used.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path = std::env::var("DOTENV_OVERRIDE").unwrap_or_else(|_| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}
