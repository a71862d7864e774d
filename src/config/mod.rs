//! Configuration module for notepad-collector
//!
//! This module defines the collector configuration and where it is loaded from.

pub mod app_config;
pub mod path_resolver;
mod word_check;

pub use app_config::{is_valid_token, CollectorConfig};
pub use word_check::WordCheck;
