use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;
use crate::semantic::SemanticType;

/// A column selected for anonymization and the kind of value it holds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub column: String,
    pub semantic_type: SemanticType,
}

impl ColumnSpec {
    pub fn new(column: impl Into<String>, semantic_type: SemanticType) -> Self {
        Self {
            column: column.into(),
            semantic_type,
        }
    }
}

impl fmt::Display for ColumnSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.column, self.semantic_type)
    }
}

impl FromStr for ColumnSpec {
    type Err = ModelError;

    /// Parse `COLUMN=TYPE`. The split happens on the last `=` so column
    /// names may themselves contain `=`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((column, tag)) = s.rsplit_once('=') else {
            return Err(ModelError::InvalidColumnSpec(s.to_string()));
        };
        let column = column.trim();
        if column.is_empty() {
            return Err(ModelError::InvalidColumnSpec(s.to_string()));
        }
        Ok(Self::new(column, tag.parse()?))
    }
}
