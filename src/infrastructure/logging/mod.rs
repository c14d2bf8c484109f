//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - Pretty or JSON console output on stderr
//! - Optional daily rolling JSON log files
//! - Secret scrubbing for credentials

pub mod logger;
pub mod secret_scrubbing;

pub use logger::{LogFormat, LoggerImpl};
pub use secret_scrubbing::{redact_key, scrub_message};
