//! notepad-collector: add looked-up words to a Maimemo cloud notepad
//!
//! This library backs a translation-tool collection plugin. Given a word it
//! optionally checks the word against the Maimemo dictionary, finds the
//! notepad with the configured title (creating it when missing) and appends
//! the word unless it is already there.
//!
//! # Modules
//!
//! - `config`: Collector configuration (TOML, environment, validation)
//! - `error`: Error taxonomy surfaced to the host
//! - `http`: Injected HTTP transport and its reqwest implementation
//! - `api`: Maimemo open API wire types and client
//! - `collector`: The collection flow
//! - `logger`: Injected logging capability

pub mod api;
pub mod collector;
pub mod config;
pub mod error;
pub mod http;
pub mod logger;

// Re-export commonly used types
pub use collector::{CollectOutcome, Collector};
pub use config::{CollectorConfig, WordCheck};
pub use error::{CollectError, ErrorKind};
pub use logger::{Logger, TracingLogger};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
