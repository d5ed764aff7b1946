// --- File: crates/bookings_sync/src/identity.rs ---
use bookings_common::{IdentityProvider, UserIdentity};
use bookings_config::IdentityConfig;

/// Identity taken from configuration, for front ends without a login flow.
#[derive(Debug, Clone, Default)]
pub struct ConfiguredIdentity {
    email: Option<String>,
}

impl ConfiguredIdentity {
    pub fn new(config: &IdentityConfig) -> Self {
        // An empty value in a config file or env var means "not signed in".
        let email = config
            .email
            .as_deref()
            .map(str::trim)
            .filter(|email| !email.is_empty())
            .map(str::to_string);
        Self { email }
    }
}

impl IdentityProvider for ConfiguredIdentity {
    fn current_user(&self) -> UserIdentity {
        UserIdentity {
            email: self.email.clone(),
        }
    }
}
