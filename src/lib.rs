pub mod builder;
pub mod conf;
pub mod config;
pub mod error;
pub mod files;
pub mod loader;
pub mod model;
pub mod parser;
pub mod render;
pub mod shopping;

use std::path::{Path, PathBuf};

pub use builder::{ShoppingList, ShoppingListBuilder};
pub use conf::{ConfigKind, ConfigLoader, ConfigMap};
pub use config::Settings;
pub use error::CookError;
pub use loader::RecipeLoader;
pub use model::{Amount, Amounts, IngredientTable, Quantity, Recipe};
pub use parser::{CooklangRecipeParser, ParseError, RecipeParser};
pub use render::{Document, OutputFormat, Renderer};
pub use shopping::{categorize, merge, CategorizedList, Categorizer};

/// Read a single recipe file and render it
///
/// # Example
/// ```no_run
/// use cooklang_shopping::{read_recipe, OutputFormat};
///
/// let text = read_recipe("pancakes.cook", OutputFormat::Text, false)?;
/// print!("{}", text);
/// # Ok::<(), cooklang_shopping::CookError>(())
/// ```
pub fn read_recipe(
    path: impl AsRef<Path>,
    format: OutputFormat,
    only_ingredients: bool,
) -> Result<String, CookError> {
    let recipe = RecipeLoader::default().load(path.as_ref())?;
    Renderer::new(format)
        .only_ingredients(only_ingredients)
        .render(&Document::from_recipe(&recipe))
}

/// Resolve inputs, load every recipe and merge their ingredients, then
/// group them with an optional aisle map
pub async fn collect_shopping_list(
    inputs: &[PathBuf],
    aisles: Option<&ConfigMap>,
) -> Result<CategorizedList, CookError> {
    let paths = files::resolve(inputs, files::DEFAULT_RECIPE_EXTENSION)?;
    let tables = RecipeLoader::default().load_all(&paths).await?;
    Ok(categorize(merge(tables), aisles))
}
