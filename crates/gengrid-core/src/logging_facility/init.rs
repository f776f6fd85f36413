//! Logging initialization module
//!
//! Provides a single initialization point for the logging facility.

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Profile {
    /// Warnings and errors only, human-readable
    #[default]
    Quiet,
    /// Human-readable output with debug level
    Development,
    /// JSON structured output with info level
    Production,
    /// Test capture mode for deterministic testing
    Test,
}

impl Profile {
    /// Filter directive used when `RUST_LOG` is not set
    ///
    /// `Test` has none: the capture layer records everything.
    pub fn default_directive(&self) -> Option<&'static str> {
        match self {
            Profile::Quiet => Some("gengrid=warn"),
            Profile::Development => Some("gengrid=debug"),
            Profile::Production => Some("gengrid=info"),
            Profile::Test => None,
        }
    }
}

static INIT_ONCE: Once = Once::new();

/// Initialize the logging facility
///
/// Only the first call installs a subscriber; later calls are no-ops.
///
/// # Profiles
///
/// - **Quiet**: Human-readable logs, warnings and above
/// - **Development**: Human-readable logs with debug level
/// - **Production**: JSON structured logs with info level
/// - **Test**: Bare registry, see [`init_test_capture`](super::init_test_capture)
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| match profile {
        Profile::Quiet | Profile::Development => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(env_filter(profile))
                .init();
        }
        Profile::Production => {
            tracing_subscriber::fmt()
                .json()
                .with_writer(std::io::stderr)
                .with_env_filter(env_filter(profile))
                .init();
        }
        Profile::Test => {
            // Test capture installs its own layer via init_test_capture()
            tracing_subscriber::registry().init();
        }
    });
}

/// `RUST_LOG` when set, otherwise the profile's default directive
fn env_filter(profile: Profile) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(profile.default_directive().unwrap_or_default()))
}
