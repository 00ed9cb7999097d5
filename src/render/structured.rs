use super::{Document, DocumentKind};
use crate::error::CookError;

pub fn to_json(document: &Document, only_ingredients: bool) -> Result<String, CookError> {
    let mut out = if flatten(document, only_ingredients) {
        serde_json::to_string_pretty(document.ingredients())
    } else {
        serde_json::to_string_pretty(document)
    }
    .map_err(encoding_failed)?;
    out.push('\n');
    Ok(out)
}

pub fn to_yaml(document: &Document, only_ingredients: bool) -> Result<String, CookError> {
    let out = if flatten(document, only_ingredients) {
        serde_yaml::to_string(document.ingredients())
    } else {
        serde_yaml::to_string(document)
    };
    out.map_err(encoding_failed)
}

/// A recipe asked for its ingredients only is emitted as the bare list
fn flatten(document: &Document, only_ingredients: bool) -> bool {
    only_ingredients && document.kind == DocumentKind::Recipe
}

fn encoding_failed(error: impl std::fmt::Display) -> CookError {
    CookError::OutputEncodingFailed(error.to_string())
}
