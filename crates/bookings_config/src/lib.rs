// --- File: crates/bookings_config/src/lib.rs ---
//! Configuration loading for the bookings client.
//!
//! Sources are layered in this order, later ones winning:
//!
//! 1. `<config dir>/default.{toml,yaml,json}` (optional)
//! 2. `<config dir>/<RUN_ENV>.{toml,yaml,json}` (optional, `RUN_ENV` defaults to `debug`)
//! 3. Environment variables `BOOKINGS__SECTION__KEY` (the `BOOKINGS` prefix
//!    can be replaced through `BOOKINGS_ENV_PREFIX`)
//!
//! The config directory is `BOOKINGS_CONFIG_DIR` or `./config`. A `.env` file
//! is read once before anything else.

use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

pub mod env_vars;
pub mod models;

pub use models::*;

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Loads the `.env` file into the process environment, at most once.
///
/// The path is taken from `DOTENV_OVERRIDE` when set, otherwise `.env` in the
/// working directory. A missing file is not an error.
///
/// Returns the path that was used.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path = env::var("DOTENV_OVERRIDE").unwrap_or_else(|_| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}

/// Loads the application configuration from the default locations.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());
    let config_dir = env::var("BOOKINGS_CONFIG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config"));

    load_config_from(&config_dir, &run_env, &env_vars::get_config_prefix())
}

/// Loads the configuration from an explicit directory, run environment and
/// environment variable prefix.
pub fn load_config_from(
    config_dir: &Path,
    run_env: &str,
    prefix: &str,
) -> Result<AppConfig, ConfigError> {
    let default_path = config_dir.join("default");
    let env_path = config_dir.join(run_env);

    debug!(
        default = %default_path.display(),
        env = %env_path.display(),
        "loading configuration"
    );

    let builder = Config::builder()
        .add_source(File::with_name(&default_path.to_string_lossy()).required(false))
        .add_source(File::with_name(&env_path.to_string_lossy()).required(false))
        .add_source(Environment::with_prefix(prefix).separator(env_vars::CONFIG_SEPARATOR));

    builder.build()?.try_deserialize()
}
