#![allow(clippy::must_use_candidate)]

mod env;
mod loader;
pub mod log;
pub mod other_errors;

use indexmap::IndexMap;
use serde::Deserialize;

pub use env::ExpandError;
pub use log::{LogConfig, LogFormat};
pub use other_errors::OtherErrorConfig;

/// Top-level triage configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
    /// Extra named-error translations, keyed by error name
    #[serde(default)]
    pub other_errors: IndexMap<String, OtherErrorConfig>,
}
