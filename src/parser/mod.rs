mod adapter;

pub use self::adapter::CooklangRecipeParser;

use crate::model::Recipe;
use thiserror::Error;

/// Reason a recipe text was rejected
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Turns recipe markup into a structured [`Recipe`]
pub trait RecipeParser: Send + Sync {
    fn parse(&self, text: &str) -> Result<Recipe, ParseError>;
}
