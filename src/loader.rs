use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::debug;
use tokio::task::JoinSet;

use crate::conf::ConfigMap;
use crate::error::CookError;
use crate::model::{IngredientTable, Recipe};
use crate::parser::{CooklangRecipeParser, RecipeParser};

/// Reads recipe files and runs them through a [`RecipeParser`].
///
/// Nothing is cached: every call reads and parses the file again.
#[derive(Clone)]
pub struct RecipeLoader {
    parser: Arc<dyn RecipeParser>,
    inflection: Option<Arc<ConfigMap>>,
}

impl Default for RecipeLoader {
    fn default() -> Self {
        Self::new(CooklangRecipeParser::default())
    }
}

impl RecipeLoader {
    pub fn new(parser: impl RecipeParser + 'static) -> Self {
        Self {
            parser: Arc::new(parser),
            inflection: None,
        }
    }

    /// Rename ingredients found in `inflection` to their mapped name
    pub fn with_inflection(mut self, inflection: Option<ConfigMap>) -> Self {
        self.inflection = inflection.map(Arc::new);
        self
    }

    pub fn load(&self, path: &Path) -> Result<Recipe, CookError> {
        let bytes = std::fs::read(path).map_err(|e| unreadable(path, e))?;
        self.parse_bytes(path, bytes)
    }

    /// Load every file concurrently and return the ingredient tables in
    /// the same order as `paths`. The error for the earliest failing path wins.
    pub async fn load_all(&self, paths: &[PathBuf]) -> Result<Vec<IngredientTable>, CookError> {
        let mut tasks = JoinSet::new();
        for (index, path) in paths.iter().cloned().enumerate() {
            let loader = self.clone();
            tasks.spawn(async move {
                let result = match tokio::fs::read(&path).await {
                    Ok(bytes) => loader.parse_bytes(&path, bytes),
                    Err(e) => Err(unreadable(&path, e)),
                };
                (index, result)
            });
        }

        let mut results: Vec<Option<Result<Recipe, CookError>>> =
            (0..paths.len()).map(|_| None).collect();
        while let Some(joined) = tasks.join_next().await {
            let (index, result) = joined?;
            results[index] = Some(result);
        }

        results
            .into_iter()
            .flatten()
            .map(|result| result.map(|recipe| recipe.ingredients))
            .collect()
    }

    fn parse_bytes(&self, path: &Path, bytes: Vec<u8>) -> Result<Recipe, CookError> {
        let text = String::from_utf8(bytes).map_err(|e| CookError::RecipeUnreadable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let mut recipe = self
            .parser
            .parse(&text)
            .map_err(|cause| CookError::RecipeUnparsable {
                path: path.to_path_buf(),
                cause,
            })?;
        debug!("loaded {}", path.display());

        if let Some(inflection) = &self.inflection {
            recipe.ingredients = inflect(recipe.ingredients, inflection);
            for step in &mut recipe.steps {
                step.ingredients = inflect(std::mem::take(&mut step.ingredients), inflection);
            }
        }
        Ok(recipe)
    }
}

fn inflect(table: IngredientTable, inflection: &ConfigMap) -> IngredientTable {
    let mut inflected = IngredientTable::new();
    for (name, amounts) in table {
        let name = inflection.get(&name).map(str::to_string).unwrap_or(name);
        inflected.add(name, amounts);
    }
    inflected
}

fn unreadable(path: &Path, error: std::io::Error) -> CookError {
    CookError::RecipeUnreadable {
        path: path.to_path_buf(),
        reason: error.to_string(),
    }
}
