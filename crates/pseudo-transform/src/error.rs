//! Error types for DataFrame anonymization.

use pseudo_generate::GenerateError;
use pseudo_map::MapError;
use thiserror::Error;

/// Errors that can occur while anonymizing a DataFrame.
#[derive(Debug, Error)]
pub enum AnonymizeError {
    /// A column named by an explicit spec is absent from the DataFrame.
    #[error("column '{column}' not found in DataFrame")]
    ColumnNotFound { column: String },

    /// Drawing replacement values failed.
    #[error("column '{column}': {source}")]
    Mapping {
        column: String,
        #[source]
        source: MapError,
    },

    /// No generator is available for a semantic type.
    #[error(transparent)]
    Generate(#[from] GenerateError),

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl AnonymizeError {
    pub(crate) fn mapping(column: &str, source: MapError) -> Self {
        Self::Mapping {
            column: column.to_string(),
            source,
        }
    }
}

impl From<polars::prelude::PolarsError> for AnonymizeError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for anonymization operations.
pub type Result<T> = std::result::Result<T, AnonymizeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_error_names_column() {
        let err = AnonymizeError::mapping(
            "Name",
            MapError::PoolExhausted {
                requested: 5,
                distinct: 2,
                attempts: 6,
            },
        );
        assert!(err.to_string().starts_with("column 'Name': not enough distinct values"));
    }

    #[test]
    fn test_error_from_polars() {
        let polars_err = polars::prelude::PolarsError::ColumnNotFound("test".into());
        let err: AnonymizeError = polars_err.into();
        assert!(matches!(err, AnonymizeError::DataFrame { .. }));
    }
}
