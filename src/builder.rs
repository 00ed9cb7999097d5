use std::io::Write;
use std::path::PathBuf;

use log::debug;

use crate::conf::{ConfigKind, ConfigLoader};
use crate::files::{self, DEFAULT_RECIPE_EXTENSION};
use crate::loader::RecipeLoader;
use crate::render::{Document, OutputFormat, Renderer, DEFAULT_WRAP_WIDTH};
use crate::shopping::{merge, Categorizer};
use crate::CookError;

/// Builder for configuring and producing a shopping list
#[derive(Debug, Clone)]
pub struct ShoppingListBuilder {
    inputs: Vec<PathBuf>,
    aisle: Option<PathBuf>,
    inflection: Option<PathBuf>,
    format: OutputFormat,
    only_ingredients: bool,
    wrap_width: usize,
    recipe_extension: String,
    categorizer: Categorizer,
    config_loader: ConfigLoader,
}

impl Default for ShoppingListBuilder {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            aisle: None,
            inflection: None,
            format: OutputFormat::default(),
            only_ingredients: false,
            wrap_width: DEFAULT_WRAP_WIDTH,
            recipe_extension: DEFAULT_RECIPE_EXTENSION.to_string(),
            categorizer: Categorizer::default(),
            config_loader: ConfigLoader::new(),
        }
    }
}

impl ShoppingListBuilder {
    /// Add a recipe file, or a directory when it is the only input
    ///
    /// # Example
    /// ```
    /// use cooklang_shopping::ShoppingList;
    ///
    /// let builder = ShoppingList::builder()
    ///     .file("recipes/pancakes.cook")
    ///     .file("recipes/omelette.cook");
    /// ```
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.inputs.push(path.into());
        self
    }

    /// Add several recipe files at once
    pub fn files<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.inputs.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Use this aisle config instead of searching for one
    ///
    /// # Example
    /// ```
    /// use cooklang_shopping::ShoppingList;
    ///
    /// let builder = ShoppingList::builder()
    ///     .file("recipes")
    ///     .aisle("config/aisle.conf");
    /// ```
    pub fn aisle(mut self, path: impl Into<PathBuf>) -> Self {
        self.aisle = Some(path.into());
        self
    }

    /// Use this inflection config instead of searching for one
    pub fn inflection(mut self, path: impl Into<PathBuf>) -> Self {
        self.inflection = Some(path.into());
        self
    }

    /// Set the output format (text by default)
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Print ingredient lines only, without category headers
    pub fn only_ingredients(mut self, only_ingredients: bool) -> Self {
        self.only_ingredients = only_ingredients;
        self
    }

    /// Set the maximum line width for wrapped text
    pub fn wrap_width(mut self, width: usize) -> Self {
        self.wrap_width = width;
        self
    }

    /// Set the extension used to pick recipe files from a directory
    pub fn recipe_extension(mut self, extension: impl Into<String>) -> Self {
        self.recipe_extension = extension.into();
        self
    }

    /// Replace the `INGREDIENTS` / `OTHER` category names
    ///
    /// # Example
    /// ```
    /// use cooklang_shopping::{Categorizer, ShoppingList};
    ///
    /// let builder = ShoppingList::builder()
    ///     .file("rezepte")
    ///     .categorizer(Categorizer::new("ZUTATEN", "SONSTIGES"));
    /// ```
    pub fn categorizer(mut self, categorizer: Categorizer) -> Self {
        self.categorizer = categorizer;
        self
    }

    /// Search for config files relative to other directories
    pub fn config_loader(mut self, loader: ConfigLoader) -> Self {
        self.config_loader = loader;
        self
    }

    /// Resolve, load, merge, categorize and render the shopping list
    ///
    /// # Errors
    /// Returns `CookError` if:
    /// - No recipe file or directory was given
    /// - A config file exists but cannot be read
    /// - A directory cannot be listed
    /// - Any recipe cannot be read or parsed
    /// - The output cannot be encoded
    ///
    /// # Example
    /// ```no_run
    /// # use cooklang_shopping::ShoppingList;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let list = ShoppingList::builder()
    ///     .file("recipes")
    ///     .build()
    ///     .await?;
    /// print!("{}", list);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn build(self) -> Result<String, CookError> {
        let (renderer, document) = self.prepare().await?;
        renderer.render(&document)
    }

    /// Like [`build`](Self::build), but writes the rendered list to `out`
    ///
    /// # Example
    /// ```no_run
    /// # use cooklang_shopping::ShoppingList;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let file = std::fs::File::create("list.txt")?;
    /// ShoppingList::builder()
    ///     .file("recipes")
    ///     .write_to(file)
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn write_to<W: Write>(self, mut out: W) -> Result<(), CookError> {
        let (renderer, document) = self.prepare().await?;
        renderer.write(&document, &mut out)
    }

    /// Load everything and return the document with the renderer configured
    /// for it, without rendering yet
    pub async fn prepare(self) -> Result<(Renderer, Document), CookError> {
        if self.inputs.is_empty() {
            return Err(CookError::BuilderError(
                "No recipes specified. Use .file() or .files()".to_string(),
            ));
        }

        let aisles = self
            .config_loader
            .load(ConfigKind::Aisle, self.aisle.as_deref())?;
        let inflection = self
            .config_loader
            .load(ConfigKind::Inflection, self.inflection.as_deref())?;

        let paths = files::resolve(&self.inputs, &self.recipe_extension)?;
        debug!("building shopping list from {} recipes", paths.len());

        let tables = RecipeLoader::default()
            .with_inflection(inflection)
            .load_all(&paths)
            .await?;
        let list = self.categorizer.categorize(merge(tables), aisles.as_ref());

        let renderer = Renderer::new(self.format)
            .only_ingredients(self.only_ingredients)
            .wrap_width(self.wrap_width);
        Ok((renderer, Document::from_shopping_list(&list)))
    }
}

/// Main entry point for the builder API
pub struct ShoppingList;

impl ShoppingList {
    /// Creates a new builder for a shopping list
    ///
    /// # Example
    /// ```
    /// use cooklang_shopping::ShoppingList;
    ///
    /// let builder = ShoppingList::builder();
    /// ```
    pub fn builder() -> ShoppingListBuilder {
        ShoppingListBuilder::default()
    }
}
