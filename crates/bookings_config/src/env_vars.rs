// --- File: crates/bookings_config/src/env_vars.rs ---
//! Environment variable naming for the bookings configuration.
//!
//! Every configuration path can be overridden from the environment. A path
//! such as `booking_service.base_url` maps to
//! `BOOKINGS__BOOKING_SERVICE__BASE_URL`.

use std::env;

/// The default prefix for configuration environment variables
pub const DEFAULT_PREFIX: &str = "BOOKINGS";

/// The separator for configuration environment variables
pub const CONFIG_SEPARATOR: &str = "__";

/// Variable that replaces [`DEFAULT_PREFIX`], e.g. to run two setups side by side
pub const PREFIX_ENV_VAR: &str = "BOOKINGS_ENV_PREFIX";

/// Get the prefix for configuration environment variables
pub fn get_config_prefix() -> String {
    env::var(PREFIX_ENV_VAR)
        .ok()
        .filter(|prefix| !prefix.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_PREFIX.to_string())
}

/// Convert a configuration path to an environment variable name
///
/// # Arguments
///
/// * `path` - The configuration path (e.g., "identity.email")
///
/// # Returns
///
/// The environment variable name (e.g., "BOOKINGS__IDENTITY__EMAIL")
pub fn config_path_to_env_var(path: &str) -> String {
    config_path_to_env_var_with_prefix(&get_config_prefix(), path)
}

/// Same as [`config_path_to_env_var`] with an explicit prefix.
pub fn config_path_to_env_var_with_prefix(prefix: &str, path: &str) -> String {
    let path = path.replace('.', CONFIG_SEPARATOR);
    format!("{}{}{}", prefix, CONFIG_SEPARATOR, path).to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_to_env_var() {
        assert_eq!(
            config_path_to_env_var_with_prefix("BOOKINGS", "booking_service.base_url"),
            "BOOKINGS__BOOKING_SERVICE__BASE_URL"
        );
        assert_eq!(
            config_path_to_env_var_with_prefix("BOOKINGS", "identity.email"),
            "BOOKINGS__IDENTITY__EMAIL"
        );
    }

    #[test]
    fn test_custom_prefix_is_uppercased() {
        assert_eq!(
            config_path_to_env_var_with_prefix("staging", "logging.level"),
            "STAGING__LOGGING__LEVEL"
        );
    }

    #[test]
    fn test_generic_prefix_variable_is_ignored() {
        // Conda, Termux and packaging shells export PREFIX as an install path.
        env::set_var("PREFIX", "/usr/local");

        assert_eq!(get_config_prefix(), DEFAULT_PREFIX);
        assert_eq!(
            config_path_to_env_var("identity.email"),
            "BOOKINGS__IDENTITY__EMAIL"
        );
    }
}
