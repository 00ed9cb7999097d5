mod structured;
mod text;
mod wrap;

pub use self::text::{NAME_COLUMN, OFFSET_UNIT};
pub use self::wrap::{wrap_indented, CONTINUATION_INDENT};

use std::io::Write;
use std::path::Path;

use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::CookError;
use crate::model::{IngredientTable, Recipe};
use crate::shopping::CategorizedList;

pub const DEFAULT_WRAP_WIDTH: usize = 100;

const INGREDIENTS_KEY: &str = "ingredients";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl OutputFormat {
    /// Format implied by an output file name (`.json`, `.yaml`/`.yml`, `.txt`)
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(OutputFormat::Json),
            "yaml" | "yml" => Some(OutputFormat::Yaml),
            "txt" => Some(OutputFormat::Text),
            _ => None,
        }
    }
}

/// One entry of a document section
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Item {
    Ingredient {
        name: String,
        amount: String,
    },
    Cookware {
        name: String,
    },
    Step {
        description: String,
        /// Rendered ingredient table of the step, text output only
        #[serde(skip)]
        ingredients: String,
    },
}

/// A titled group of items: a recipe block or a shopping-list aisle
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// Key in JSON/YAML output
    pub key: String,
    /// Header line in text output
    pub title: String,
    pub items: Vec<Item>,
    /// Text output leaves the section out entirely when it has no items
    pub hide_when_empty: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Recipe,
    ShoppingList,
}

/// Format-independent view of what gets printed.
///
/// Both the text and the structured renderers walk this.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub kind: DocumentKind,
    pub metadata: IndexMap<String, String>,
    pub sections: Vec<Section>,
}

impl Document {
    pub fn from_recipe(recipe: &Recipe) -> Self {
        let cookware = recipe
            .cookware
            .iter()
            .map(|c| Item::Cookware {
                name: c.name.clone(),
            })
            .collect();
        let steps = recipe
            .steps
            .iter()
            .map(|step| Item::Step {
                description: step.description(),
                ingredients: step.ingredients.to_string(),
            })
            .collect();

        Self {
            kind: DocumentKind::Recipe,
            metadata: recipe.metadata.clone(),
            sections: vec![
                Section {
                    key: INGREDIENTS_KEY.to_string(),
                    title: "Ingredients:".to_string(),
                    items: ingredient_items(&recipe.ingredients),
                    hide_when_empty: false,
                },
                Section {
                    key: "cookware".to_string(),
                    title: "Cookware:".to_string(),
                    items: cookware,
                    hide_when_empty: true,
                },
                Section {
                    key: "steps".to_string(),
                    title: "Steps:".to_string(),
                    items: steps,
                    hide_when_empty: false,
                },
            ],
        }
    }

    /// Categories come out sorted by name
    pub fn from_shopping_list(list: &CategorizedList) -> Self {
        let sections = list
            .sections()
            .into_iter()
            .map(|(category, table)| Section {
                key: category.to_string(),
                title: category.to_string(),
                items: ingredient_items(table),
                hide_when_empty: false,
            })
            .collect();

        Self {
            kind: DocumentKind::ShoppingList,
            metadata: IndexMap::new(),
            sections,
        }
    }

    fn ingredients(&self) -> &[Item] {
        self.sections
            .iter()
            .find(|s| s.key == INGREDIENTS_KEY)
            .map(|s| s.items.as_slice())
            .unwrap_or(&[])
    }
}

fn ingredient_items(table: &IngredientTable) -> Vec<Item> {
    table
        .iter()
        .map(|(name, amounts)| Item::Ingredient {
            name: name.clone(),
            amount: amounts.describe(),
        })
        .collect()
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let has_metadata = !self.metadata.is_empty();
        let len = self.sections.len() + usize::from(has_metadata);
        let mut map = serializer.serialize_map(Some(len))?;
        if has_metadata {
            map.serialize_entry("metadata", &self.metadata)?;
        }
        for section in &self.sections {
            map.serialize_entry(&section.key, &section.items)?;
        }
        map.end()
    }
}

/// Renders a [`Document`] in one of the output formats.
///
/// The whole document is produced in memory first so a failure never
/// leaves partial output behind.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    format: OutputFormat,
    only_ingredients: bool,
    wrap_width: usize,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(OutputFormat::Text)
    }
}

impl Renderer {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            only_ingredients: false,
            wrap_width: DEFAULT_WRAP_WIDTH,
        }
    }

    pub fn only_ingredients(mut self, only_ingredients: bool) -> Self {
        self.only_ingredients = only_ingredients;
        self
    }

    pub fn wrap_width(mut self, width: usize) -> Self {
        self.wrap_width = width;
        self
    }

    pub fn render(&self, document: &Document) -> Result<String, CookError> {
        match self.format {
            OutputFormat::Text => Ok(text::to_text(
                document,
                self.only_ingredients,
                self.wrap_width,
            )),
            OutputFormat::Json => structured::to_json(document, self.only_ingredients),
            OutputFormat::Yaml => structured::to_yaml(document, self.only_ingredients),
        }
    }

    pub fn write<W: Write>(&self, document: &Document, out: &mut W) -> Result<(), CookError> {
        let rendered = self.render(document)?;
        out.write_all(rendered.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}
