//! Keyword-based column classification.
//!
//! Column names are lower-cased and tested for substring membership against
//! each semantic type's keyword, in [`SemanticType::ALL`] order. A column can
//! match several keywords and then yields several specs.

use pseudo_model::{ColumnSpec, SemanticType};

/// Propose a spec for every keyword contained in each column name.
pub fn classify<I, S>(column_names: I) -> Vec<ColumnSpec>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    column_names
        .into_iter()
        .flat_map(|name| {
            let name = name.as_ref().to_string();
            let lowered = name.to_lowercase();
            SemanticType::ALL
                .into_iter()
                .filter(move |semantic_type| lowered.contains(semantic_type.keyword()))
                .map(move |semantic_type| ColumnSpec::new(name.clone(), semantic_type))
        })
        .collect()
}

/// Semantic types whose keyword occurs in a single column name.
pub fn matching_types(column_name: &str) -> Vec<SemanticType> {
    classify([column_name])
        .into_iter()
        .map(|spec| spec.semantic_type)
        .collect()
}
