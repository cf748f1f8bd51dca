use pseudo_model::SemanticType;
use thiserror::Error;

/// Errors raised when building value generators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// No generator factory is registered for the semantic type.
    #[error("no value generator registered for semantic type '{0}'")]
    UnknownSemanticType(SemanticType),
}

pub type Result<T> = std::result::Result<T, GenerateError>;
