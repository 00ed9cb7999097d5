use cooklang::metadata::CooklangValueExt;
use cooklang::model::Item;
use cooklang::quantity::{Quantity as SourceQuantity, Value};
use cooklang::{Content, Converter, CooklangParser, Extensions};
use log::debug;

use super::{ParseError, RecipeParser};
use crate::model::{Amount, Cookware, Direction, Quantity, Recipe, Step};

/// [`RecipeParser`] backed by the `cooklang` crate.
///
/// Runs with no extensions and no unit conversion: quantities come out
/// exactly as written. Warnings from the parser are logged and dropped.
pub struct CooklangRecipeParser {
    inner: CooklangParser,
}

impl Default for CooklangRecipeParser {
    fn default() -> Self {
        Self {
            inner: CooklangParser::new(Extensions::empty(), Converter::empty()),
        }
    }
}

impl RecipeParser for CooklangRecipeParser {
    fn parse(&self, text: &str) -> Result<Recipe, ParseError> {
        let parsed = self.inner.parse(text);
        for warning in parsed.report().warnings() {
            debug!("cooklang warning: {}", warning);
        }

        let (source, _warnings) = parsed
            .into_result()
            .map_err(|report| ParseError::new(report.to_string()))?;
        let recipe = convert(&source);

        debug!(
            "parsed recipe with {} ingredients, {} steps",
            recipe.ingredients.len(),
            recipe.steps.len()
        );
        Ok(recipe)
    }
}

fn convert(source: &cooklang::Recipe) -> Recipe {
    let mut recipe = Recipe::default();

    for (key, value) in source.metadata.map.iter() {
        match (key.as_str_like(), value.as_str_like()) {
            (Some(key), Some(value)) => {
                recipe
                    .metadata
                    .insert(key.into_owned(), value.into_owned());
            }
            _ => debug!("skipping non-scalar metadata entry"),
        }
    }

    for ingredient in &source.ingredients {
        recipe
            .ingredients
            .add(ingredient.name.clone(), amount(ingredient.quantity.as_ref()));
    }

    for item in &source.cookware {
        if !recipe.cookware.iter().any(|c| c.name == item.name) {
            recipe.cookware.push(Cookware {
                name: item.name.clone(),
            });
        }
    }

    for section in &source.sections {
        for content in &section.content {
            // notes are not steps
            if let Content::Step(step) = content {
                recipe.steps.push(convert_step(source, step));
            }
        }
    }

    recipe
}

fn convert_step(source: &cooklang::Recipe, step: &cooklang::Step) -> Step {
    let mut converted = Step::default();

    for item in &step.items {
        match item {
            Item::Text { value } => converted.directions.push(Direction::Text(value.clone())),
            Item::Ingredient { index } => {
                if let Some(ingredient) = source.ingredients.get(*index) {
                    converted.ingredients.add(
                        ingredient.name.clone(),
                        amount(ingredient.quantity.as_ref()),
                    );
                    converted
                        .directions
                        .push(Direction::Ingredient(ingredient.name.clone()));
                }
            }
            Item::Cookware { index } => {
                if let Some(cookware) = source.cookware.get(*index) {
                    converted
                        .directions
                        .push(Direction::Cookware(cookware.name.clone()));
                }
            }
            Item::Timer { index } => {
                if let Some(timer) = source.timers.get(*index) {
                    match (&timer.quantity, &timer.name) {
                        (Some(quantity), _) => converted
                            .directions
                            .push(Direction::Timer(amount(Some(quantity)))),
                        (None, Some(name)) => {
                            converted.directions.push(Direction::Text(name.clone()))
                        }
                        (None, None) => {}
                    }
                }
            }
            Item::InlineQuantity { index } => {
                if let Some(quantity) = source.inline_quantities.get(*index) {
                    converted
                        .directions
                        .push(Direction::Text(amount(Some(quantity)).describe()));
                }
            }
        }
    }

    converted
}

fn amount(quantity: Option<&SourceQuantity>) -> Amount {
    match quantity {
        None => Amount::new(Quantity::Unspecified, None),
        Some(quantity) => Amount::new(
            value(quantity.value()),
            quantity.unit().map(|unit| unit.to_string()),
        ),
    }
}

fn value(value: &Value) -> Quantity {
    match value {
        Value::Number(n) => Quantity::Number(n.value()),
        Value::Range { start, end } => Quantity::Range(start.value(), end.value()),
        Value::Text(text) => Quantity::Text(text.clone()),
    }
}
