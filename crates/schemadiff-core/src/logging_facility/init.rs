//! Logging initialization module

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output for development
    Development,
    /// JSON structured output for production
    Production,
    /// Test capture mode for deterministic testing
    Test,
}

impl std::str::FromStr for Profile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dev" | "development" => Ok(Profile::Development),
            "prod" | "production" => Ok(Profile::Production),
            "test" => Ok(Profile::Test),
            other => Err(format!("unknown logging profile '{}'", other)),
        }
    }
}

static INIT_ONCE: Once = Once::new();

/// Initialize the logging facility
///
/// Only the first call has any effect. `RUST_LOG` overrides the default
/// filter in every profile.
///
/// # Profiles
///
/// - **Development**: Human-readable logs at `schemadiff=debug`
/// - **Production**: JSON structured logs at `schemadiff=info`
/// - **Test**: Bare registry; capture is installed by `init_test_capture()`
///
/// # Example
///
/// ```
/// use schemadiff_core::logging_facility::{init, Profile};
///
/// init(Profile::Development);
/// ```
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| match profile {
        Profile::Development => tracing_subscriber::fmt()
            .with_env_filter(filter("schemadiff=debug"))
            .with_writer(std::io::stderr)
            .init(),
        Profile::Production => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter("schemadiff=info"))
            .with_writer(std::io::stderr)
            .init(),
        Profile::Test => tracing_subscriber::registry().init(),
    });
}

/// `RUST_LOG` when set and valid, otherwise `default`
fn filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_idempotent() {
        init(Profile::Test);
        init(Profile::Test);
        init(Profile::Test);
    }

    #[test]
    fn test_profile_from_str() {
        assert_eq!("dev".parse::<Profile>(), Ok(Profile::Development));
        assert_eq!("production".parse::<Profile>(), Ok(Profile::Production));
        assert!("loud".parse::<Profile>().is_err());
    }
}
