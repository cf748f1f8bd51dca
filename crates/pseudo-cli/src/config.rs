//! Run configuration: TOML file plus command-line overrides.
//!
//! ```toml
//! language = "de_DE"
//! mode = "safe"
//! safe_strategy = "indexed"
//! engine = "partitioned"
//! partitions = 4
//! seed = 42
//! # Streaming safe mode gives up after this many draws per new value
//! # (default 10000); 0 samples without limit.
//! max_retries = 0
//!
//! [[columns]]
//! column = "Name"
//! semantic_type = "name"
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use pseudo_model::{
    AnonymizationMode, AnonymizerOptions, ColumnSpec, Engine, Locale, SafeStrategy,
};
use serde::{Deserialize, Serialize};

/// Options and explicit column specs for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    #[serde(flatten)]
    pub options: AnonymizerOptions,

    /// Explicit specs; empty means classify column names.
    pub columns: Vec<ColumnSpec>,
}

/// Values given on the command line. `None` keeps the configured value.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub language: Option<Locale>,
    pub mode: Option<AnonymizationMode>,
    pub safe_strategy: Option<SafeStrategy>,
    pub engine: Option<Engine>,
    pub partitions: Option<usize>,
    pub seed: Option<u64>,
    /// `Some(0)` lifts the retry bound.
    pub max_retries: Option<usize>,
    /// Replaces the configured columns when non-empty.
    pub columns: Vec<ColumnSpec>,
}

impl RunConfig {
    /// Parse a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("parse config {}", path.display()))
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Apply command-line values on top of this config.
    #[must_use]
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        let options = &mut self.options;
        if let Some(language) = overrides.language {
            options.language = language;
        }
        if let Some(mode) = overrides.mode {
            options.mode = mode;
        }
        if let Some(strategy) = overrides.safe_strategy {
            options.safe_strategy = strategy;
        }
        if let Some(engine) = overrides.engine {
            options.engine = engine;
        }
        if let Some(partitions) = overrides.partitions {
            options.partitions = partitions.max(1);
        }
        if overrides.seed.is_some() {
            options.seed = overrides.seed;
        }
        if let Some(limit) = overrides.max_retries {
            options.max_retries = (limit > 0).then_some(limit);
        }
        if !overrides.columns.is_empty() {
            self.columns = overrides.columns;
        }
        self
    }

    /// Explicit specs, or `None` to let the classifier decide.
    pub fn explicit_columns(&self) -> Option<&[ColumnSpec]> {
        if self.columns.is_empty() {
            None
        } else {
            Some(&self.columns)
        }
    }
}
