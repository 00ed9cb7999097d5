use super::wrap::wrap_indented;
use super::{Document, Item};

/// Indent of section bodies
pub const OFFSET_UNIT: usize = 4;
/// Width of the ingredient name column
pub const NAME_COLUMN: usize = 30;

pub fn to_text(document: &Document, only_ingredients: bool, wrap_width: usize) -> String {
    let lines = if only_ingredients {
        ingredient_lines(document)
    } else {
        full_lines(document, wrap_width)
    };

    if lines.is_empty() {
        return String::new();
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn ingredient_lines(document: &Document) -> Vec<String> {
    document
        .sections
        .iter()
        .flat_map(|section| section.items.iter())
        .filter_map(|item| match item {
            Item::Ingredient { name, amount } => Some(ingredient_line(name, amount, 0)),
            _ => None,
        })
        .collect()
}

fn full_lines(document: &Document, wrap_width: usize) -> Vec<String> {
    let mut blocks: Vec<Vec<String>> = Vec::new();

    if !document.metadata.is_empty() {
        let mut block = vec!["Metadata:".to_string()];
        for (key, value) in &document.metadata {
            block.push(format!("{}{}: {}", indent(OFFSET_UNIT), key, value));
        }
        blocks.push(block);
    }

    for section in &document.sections {
        if section.hide_when_empty && section.items.is_empty() {
            continue;
        }
        let mut block = vec![section.title.clone()];
        let mut step_number = 0;
        for item in &section.items {
            match item {
                Item::Ingredient { name, amount } => {
                    block.push(ingredient_line(name, amount, OFFSET_UNIT));
                }
                Item::Cookware { name } => {
                    block.push(format!("{}{}", indent(OFFSET_UNIT), name));
                }
                Item::Step {
                    description,
                    ingredients,
                } => {
                    step_number += 1;
                    let text = format!("{:>2}. {}", step_number, description);
                    block.extend(wrap_indented(&text, OFFSET_UNIT, wrap_width));
                    if !ingredients.is_empty() {
                        let listed = format!("[{}]", ingredients);
                        block.extend(wrap_indented(&listed, OFFSET_UNIT * 2, wrap_width));
                    }
                }
            }
        }
        blocks.push(block);
    }

    let mut lines = Vec::new();
    for (index, block) in blocks.into_iter().enumerate() {
        if index > 0 {
            lines.push(String::new());
        }
        lines.extend(block);
    }
    lines
}

/// Name padded or cut to [`NAME_COLUMN`] characters, then the amounts
fn ingredient_line(name: &str, amount: &str, offset: usize) -> String {
    let name: String = name.chars().take(NAME_COLUMN).collect();
    format!("{}{:<width$}{}", indent(offset), name, amount, width = NAME_COLUMN)
}

fn indent(width: usize) -> String {
    " ".repeat(width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conf::ConfigMap;
    use crate::model::{Amount, IngredientTable, Quantity};
    use crate::parser::{CooklangRecipeParser, RecipeParser};
    use crate::render::DEFAULT_WRAP_WIDTH;
    use crate::shopping::categorize;

    fn recipe_text(source: &str, only_ingredients: bool) -> String {
        let recipe = CooklangRecipeParser::default().parse(source).unwrap();
        to_text(
            &Document::from_recipe(&recipe),
            only_ingredients,
            DEFAULT_WRAP_WIDTH,
        )
    }

    #[test]
    fn test_ingredient_line_padding() {
        assert_eq!(
            ingredient_line("flour", "200 g", 4),
            format!("    flour{}200 g", " ".repeat(25))
        );
    }

    #[test]
    fn test_ingredient_line_truncates_long_names() {
        let name = "n".repeat(40);
        assert_eq!(
            ingredient_line(&name, "1", 0),
            format!("{}1", "n".repeat(30))
        );
    }

    #[test]
    fn test_full_recipe_layout() {
        let text = recipe_text(
            "---\nservings: 2\n---\nPut @flour{200%g} in a #bowl{}.\n\nBake ~{20%minutes}.",
            false,
        );
        let expected = [
            "Metadata:".to_string(),
            "    servings: 2".to_string(),
            String::new(),
            "Ingredients:".to_string(),
            format!("    {:<30}200 g", "flour"),
            String::new(),
            "Cookware:".to_string(),
            "    bowl".to_string(),
            String::new(),
            "Steps:".to_string(),
            "     1. Put flour in a bowl.".to_string(),
            "        [flour: 200 g]".to_string(),
            "     2. Bake 20 minutes.".to_string(),
        ]
        .join("\n")
            + "\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_empty_cookware_block_is_omitted() {
        let text = recipe_text("Add @salt{1%tsp}.", false);
        assert!(!text.contains("Cookware:"));
        assert!(!text.contains("Metadata:"));
        assert!(text.starts_with("Ingredients:\n"));
    }

    #[test]
    fn test_only_ingredients_has_no_headers_or_indent() {
        let text = recipe_text("Put @flour{200%g} in a #bowl{}.\n\nAdd @eggs{2}.", true);
        assert_eq!(
            text,
            format!("{:<30}200 g\n{:<30}2\n", "flour", "eggs")
        );
    }

    #[test]
    fn test_long_step_wraps_with_extra_indent() {
        let step = format!("Stir {} until smooth.", "slowly ".repeat(20).trim_end());
        let text = recipe_text(&step, false);
        let step_lines: Vec<&str> = text
            .lines()
            .skip_while(|l| *l != "Steps:")
            .skip(1)
            .collect();

        assert!(step_lines.len() > 1);
        assert!(step_lines[0].starts_with("     1. Stir slowly"));
        assert!(step_lines[1].starts_with("        slowly"));
        assert!(step_lines.iter().all(|l| l.chars().count() <= DEFAULT_WRAP_WIDTH));
    }

    #[test]
    fn test_shopping_list_layout() {
        let mut table = IngredientTable::new();
        table.add("salt", Amount::new(Quantity::Number(1.0), Some("tsp".to_string())));
        table.add("flour", Amount::new(Quantity::Number(200.0), Some("g".to_string())));
        let aisles: ConfigMap = [("flour", "baking")].into_iter().collect();
        let list = categorize(table, Some(&aisles));

        let text = to_text(&Document::from_shopping_list(&list), false, DEFAULT_WRAP_WIDTH);
        let expected = [
            "BAKING".to_string(),
            format!("    {:<30}200 g", "flour"),
            String::new(),
            "OTHER (add new items into aisle.conf)".to_string(),
            format!("    {:<30}1 tsp", "salt"),
        ]
        .join("\n")
            + "\n";
        assert_eq!(text, expected);

        let plain = to_text(&Document::from_shopping_list(&list), true, DEFAULT_WRAP_WIDTH);
        assert_eq!(plain, format!("{:<30}200 g\n{:<30}1 tsp\n", "flour", "salt"));
    }

    #[test]
    fn test_empty_shopping_list_renders_nothing() {
        let list = categorize(IngredientTable::new(), None);
        assert_eq!(
            to_text(&Document::from_shopping_list(&list), false, DEFAULT_WRAP_WIDTH),
            ""
        );
    }
}
