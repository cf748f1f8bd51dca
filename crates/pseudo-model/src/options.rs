//! Configuration options for anonymization runs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Locale used by the value generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "fr_FR")]
    FrFr,
    #[serde(rename = "de_DE")]
    DeDe,
    #[serde(rename = "pt_BR")]
    PtBr,
    #[serde(rename = "zh_CN")]
    ZhCn,
    #[serde(rename = "ja_JP")]
    JaJp,
}

impl Locale {
    pub const ALL: [Locale; 6] = [
        Locale::En,
        Locale::FrFr,
        Locale::DeDe,
        Locale::PtBr,
        Locale::ZhCn,
        Locale::JaJp,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::FrFr => "fr_FR",
            Locale::DeDe => "de_DE",
            Locale::PtBr => "pt_BR",
            Locale::ZhCn => "zh_CN",
            Locale::JaJp => "ja_JP",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Locale {
    type Err = ModelError;

    /// Accepts `en`, `en_US`, `fr`, `fr-FR`, ... (language part decides).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let language = s
            .trim()
            .split(['_', '-'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match language.as_str() {
            "en" => Ok(Locale::En),
            "fr" => Ok(Locale::FrFr),
            "de" => Ok(Locale::DeDe),
            "pt" => Ok(Locale::PtBr),
            "zh" => Ok(Locale::ZhCn),
            "ja" => Ok(Locale::JaJp),
            _ => Err(ModelError::UnknownLocale(s.to_string())),
        }
    }
}

/// Correctness mode of the substitution mappers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnonymizationMode {
    /// Memoize one generated value per original; replacements may collide.
    Fast,
    /// Guarantee that distinct originals receive distinct replacements.
    #[default]
    Safe,
}

impl fmt::Display for AnonymizationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnonymizationMode::Fast => write!(f, "fast"),
            AnonymizationMode::Safe => write!(f, "safe"),
        }
    }
}

impl FromStr for AnonymizationMode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fast" => Ok(AnonymizationMode::Fast),
            "safe" => Ok(AnonymizationMode::Safe),
            _ => Err(ModelError::UnknownMode(s.to_string())),
        }
    }
}

/// How safe mode obtains its distinct replacements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SafeStrategy {
    /// Rejection-sample a fresh value each time a new original is seen.
    Streaming,
    /// Dictionary-encode the column, then draw a pool sized to its cardinality.
    #[default]
    Indexed,
}

/// Execution substrate for column transforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    /// One mapper applied row by row on the calling thread.
    #[default]
    Local,
    /// Rows split into partitions processed by a worker pool.
    Partitioned,
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Engine::Local => write!(f, "local"),
            Engine::Partitioned => write!(f, "partitioned"),
        }
    }
}

/// Default number of rows sampled for column classification.
pub const DEFAULT_SAMPLE_ROWS: usize = 10;

/// Default bound on rejection-sampling attempts for one new value.
///
/// Plain rejection sampling never gives up; this bound is opt-out.
pub const DEFAULT_MAX_RETRIES: usize = 10_000;

/// Default partition count for the partitioned engine.
pub const DEFAULT_PARTITIONS: usize = 8;

/// Options controlling an anonymization run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnonymizerOptions {
    /// Locale for generated values.
    pub language: Locale,

    /// Fast or safe substitution.
    pub mode: AnonymizationMode,

    /// Safe-mode strategy (ignored in fast mode).
    pub safe_strategy: SafeStrategy,

    /// Execution substrate.
    pub engine: Engine,

    /// Number of row partitions for the partitioned engine.
    pub partitions: usize,

    /// Seed for reproducible output. `None` seeds from the OS.
    pub seed: Option<u64>,

    /// Rows inspected when classifying columns.
    pub sample_rows: usize,

    /// Bound on retries for one new value in streaming safe mode.
    ///
    /// Defaults to [`DEFAULT_MAX_RETRIES`], which turns an exhausted
    /// generator into an error instead of an endless loop. `None` or `0`
    /// retries without limit, the classic unbounded rejection sampling.
    pub max_retries: Option<usize>,
}

impl Default for AnonymizerOptions {
    fn default() -> Self {
        Self {
            language: Locale::default(),
            mode: AnonymizationMode::default(),
            safe_strategy: SafeStrategy::default(),
            engine: Engine::default(),
            partitions: DEFAULT_PARTITIONS,
            seed: None,
            sample_rows: DEFAULT_SAMPLE_ROWS,
            max_retries: Some(DEFAULT_MAX_RETRIES),
        }
    }
}

impl AnonymizerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options matching the single-process fast path.
    pub fn fast() -> Self {
        Self {
            mode: AnonymizationMode::Fast,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: AnonymizationMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_language(mut self, language: Locale) -> Self {
        self.language = language;
        self
    }

    #[must_use]
    pub fn with_safe_strategy(mut self, strategy: SafeStrategy) -> Self {
        self.safe_strategy = strategy;
        self
    }

    #[must_use]
    pub fn with_engine(mut self, engine: Engine) -> Self {
        self.engine = engine;
        self
    }

    #[must_use]
    pub fn with_partitions(mut self, partitions: usize) -> Self {
        self.partitions = partitions.max(1);
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_max_retries(mut self, max_retries: Option<usize>) -> Self {
        self.max_retries = max_retries;
        self
    }
}
