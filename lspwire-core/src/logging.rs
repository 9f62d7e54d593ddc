//! Logging setup
//!
//! Codecs emit `tracing` events and never install a subscriber themselves.
//! Applications (a language server, a test harness, a replay tool) call
//! [`init_logging`] once at startup to route those events somewhere.
//!
//! # Events
//!
//! - `trace`: each untagged alternative matched or rejected
//! - `debug`: untagged exhaustion, unknown discriminators, optional fields over
//!   codecs that accept `null`
//! - `error`: a duplicate discriminator or wire key, right before the codec
//!   under construction panics
//!
//! # Output
//!
//! Logs go to **stderr**. A language server speaks the protocol over stdout,
//! so writing logs there would corrupt the stream.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: filter directives (e.g. `lspwire_core=trace`); takes
//!   precedence over [`LoggingConfig::level`]
//!
//! ```rust,no_run
//! use lspwire_core::{init_logging, LoggingConfig};
//!
//! let config = LoggingConfig::new().with_level("debug").with_json(true);
//! init_logging(&config).expect("Failed to init logging");
//! ```

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging configuration
///
/// # Defaults
///
/// - Level: from `RUST_LOG`, or `"info"`
/// - Plain text output with targets
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is not set
    pub level: String,

    /// Emit one JSON object per event instead of plain text
    pub json: bool,

    /// Include the module path of each event
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            json: false,
            with_target: true,
        }
    }
}

impl LoggingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fallback filter (e.g. `"debug"`, `"lspwire_core=trace"`)
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    pub fn with_target(mut self, with_target: bool) -> Self {
        self.with_target = with_target;
        self
    }
}

/// Install a global `tracing` subscriber
///
/// # Errors
///
/// Fails if the filter directives do not parse or a global subscriber is
/// already installed. A second call never panics.
pub fn init_logging(config: &LoggingConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.level))?;

    if config.json {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(config.with_target)
            .with_line_number(true)
            .json();

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(config.with_target);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    Ok(())
}
