use thiserror::Error;

/// Errors raised while parsing model values from user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Tag does not name any known semantic type.
    #[error("unknown semantic type '{0}'")]
    UnknownSemanticType(String),

    /// Locale is not supported by the value generators.
    #[error("unknown locale '{0}'")]
    UnknownLocale(String),

    /// Mode string is neither `fast` nor `safe`.
    #[error("unknown anonymization mode '{0}' (expected 'fast' or 'safe')")]
    UnknownMode(String),

    /// Column spec is not in `COLUMN=TYPE` form.
    #[error("invalid column spec '{0}' (expected COLUMN=TYPE)")]
    InvalidColumnSpec(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
