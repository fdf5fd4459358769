use std::sync::OnceLock;

use indexmap::IndexMap;
use thiserror::Error;
use triage_config::Config;
use triage_core::StatusCode;

use crate::TranslationResult;

/// Name given to failed type conversions (string to number and the like)
pub const CAST_ERROR: &str = "CastError";

static GLOBAL: OnceLock<OtherErrorsTable> = OnceLock::new();

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    /// The process-wide table was already installed or read
    #[error("the process-wide error table is already in use")]
    AlreadyInstalled,
}

/// Fixed translation for one error name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableEntry {
    pub status: StatusCode,
    pub message: String,
}

impl TableEntry {
    /// Result returned verbatim when the entry matches
    #[must_use]
    pub fn to_result(&self) -> TranslationResult {
        TranslationResult::new(self.status, self.message.clone())
    }
}

/// Error names that translate to something other than a server error
///
/// Read-only once built. The process-wide instance is fixed on first use
/// and may be replaced only before that, through [`OtherErrorsTable::install`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtherErrorsTable {
    entries: IndexMap<String, TableEntry>,
}

impl Default for OtherErrorsTable {
    fn default() -> Self {
        Self::empty().with_entry(CAST_ERROR, StatusCode::BadRequest, "Invalid data")
    }
}

impl OtherErrorsTable {
    /// Table with no entries at all
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Default entries extended by the configured ones
    ///
    /// A configured name that matches a default replaces it.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        config
            .other_errors
            .iter()
            .fold(Self::default(), |table, (name, entry)| {
                table.with_entry(name.clone(), entry.status, entry.message.clone())
            })
    }

    /// Add or replace the entry for `name`
    #[must_use]
    pub fn with_entry(mut self, name: impl Into<String>, status: StatusCode, message: impl Into<String>) -> Self {
        self.entries.insert(
            name.into(),
            TableEntry {
                status,
                message: message.into(),
            },
        );
        self
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TableEntry> {
        self.entries.get(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TableEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    /// Make this the process-wide table
    ///
    /// # Errors
    ///
    /// Returns [`TableError::AlreadyInstalled`] if a table was installed
    /// earlier or the default one has already been read
    pub fn install(self) -> Result<(), TableError> {
        let entries = self.len();
        GLOBAL.set(self).map_err(|_| TableError::AlreadyInstalled)?;
        tracing::debug!(entries, "installed process-wide error table");
        Ok(())
    }

    /// Process-wide table, the default one unless another was installed
    pub fn global() -> &'static Self {
        GLOBAL.get_or_init(Self::default)
    }
}
