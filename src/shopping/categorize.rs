use indexmap::IndexMap;

use crate::conf::ConfigMap;
use crate::model::IngredientTable;

/// Category used when no aisle config was loaded at all
pub const NO_CONFIG_CATEGORY: &str = "INGREDIENTS";
/// Category for ingredients missing from a loaded aisle config
pub const UNDEFINED_CATEGORY: &str = "OTHER (add new items into aisle.conf)";

/// Merged ingredients partitioned into aisles.
///
/// Categories are stored in the order they were created; [`Self::sections`]
/// yields them sorted by name for display.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategorizedList {
    categories: IndexMap<String, IngredientTable>,
}

impl CategorizedList {
    pub fn get(&self, category: &str) -> Option<&IngredientTable> {
        self.categories.get(category)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Categories in byte order of their names
    pub fn sections(&self) -> Vec<(&str, &IngredientTable)> {
        let mut sections: Vec<(&str, &IngredientTable)> = self
            .categories
            .iter()
            .map(|(name, table)| (name.as_str(), table))
            .collect();
        sections.sort_by(|a, b| a.0.cmp(b.0));
        sections
    }
}

/// Assigns each ingredient to exactly one category
#[derive(Debug, Clone)]
pub struct Categorizer {
    no_config: String,
    undefined: String,
}

impl Default for Categorizer {
    fn default() -> Self {
        Self::new(NO_CONFIG_CATEGORY, UNDEFINED_CATEGORY)
    }
}

impl Categorizer {
    pub fn new(no_config: impl Into<String>, undefined: impl Into<String>) -> Self {
        Self {
            no_config: no_config.into(),
            undefined: undefined.into(),
        }
    }

    /// Without `aisles` everything lands in one category. With it, names are
    /// looked up case-insensitively and the aisle is shown upper-cased.
    pub fn categorize(
        &self,
        table: IngredientTable,
        aisles: Option<&ConfigMap>,
    ) -> CategorizedList {
        let mut categories: IndexMap<String, IngredientTable> = IndexMap::new();

        for (name, amounts) in table {
            let category = match aisles {
                None => self.no_config.clone(),
                Some(aisles) => aisles
                    .get(&name)
                    .map(str::to_uppercase)
                    .unwrap_or_else(|| self.undefined.clone()),
            };
            categories.entry(category).or_default().add(name, amounts);
        }

        CategorizedList { categories }
    }
}

pub fn categorize(table: IngredientTable, aisles: Option<&ConfigMap>) -> CategorizedList {
    Categorizer::default().categorize(table, aisles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Amount, Quantity};

    fn table(names: &[&str]) -> IngredientTable {
        let mut table = IngredientTable::new();
        for name in names {
            table.add(*name, Amount::new(Quantity::Number(1.0), None));
        }
        table
    }

    fn names<'a>(list: &'a CategorizedList, category: &str) -> Vec<&'a str> {
        list.get(category).unwrap().names().collect()
    }

    #[test]
    fn test_no_config_single_category() {
        let list = categorize(table(&["flour", "eggs"]), None);
        assert_eq!(list.len(), 1);
        assert_eq!(names(&list, "INGREDIENTS"), vec!["flour", "eggs"]);
    }

    #[test]
    fn test_unmapped_goes_to_other() {
        let aisles: ConfigMap = [("flour", "baking")].into_iter().collect();
        let list = categorize(table(&["flour", "eggs"]), Some(&aisles));

        assert_eq!(list.len(), 2);
        assert_eq!(names(&list, "BAKING"), vec!["flour"]);
        assert_eq!(names(&list, UNDEFINED_CATEGORY), vec!["eggs"]);
    }

    #[test]
    fn test_empty_config_is_not_no_config() {
        let list = categorize(table(&["flour"]), Some(&ConfigMap::new()));
        assert_eq!(names(&list, UNDEFINED_CATEGORY), vec!["flour"]);
    }

    #[test]
    fn test_lookup_ignores_case() {
        let aisles: ConfigMap = [("flour", "Baking")].into_iter().collect();
        let list = categorize(table(&["Flour", "FLOUR"]), Some(&aisles));

        assert_eq!(list.len(), 1);
        assert_eq!(names(&list, "BAKING"), vec!["Flour", "FLOUR"]);
    }

    #[test]
    fn test_every_ingredient_in_exactly_one_category() {
        let aisles: ConfigMap = [("milk", "dairy"), ("cheese", "dairy"), ("apple", "fruit")]
            .into_iter()
            .collect();
        let input = table(&["milk", "apple", "bread", "cheese", "salt"]);

        for map in [None, Some(&aisles)] {
            let list = categorize(input.clone(), map);
            let mut seen: Vec<&str> = list
                .sections()
                .into_iter()
                .flat_map(|(_, table)| table.names())
                .collect();
            seen.sort();
            assert_eq!(seen, vec!["apple", "bread", "cheese", "milk", "salt"]);
        }
    }

    #[test]
    fn test_within_category_order_is_stable() {
        let aisles: ConfigMap = [("milk", "dairy"), ("cheese", "dairy"), ("butter", "dairy")]
            .into_iter()
            .collect();
        let list = categorize(table(&["cheese", "bread", "butter", "milk"]), Some(&aisles));
        assert_eq!(names(&list, "DAIRY"), vec!["cheese", "butter", "milk"]);
    }

    #[test]
    fn test_sections_sorted_by_name() {
        let aisles: ConfigMap = [("milk", "dairy"), ("apple", "fruit"), ("flour", "baking")]
            .into_iter()
            .collect();
        let list = categorize(table(&["milk", "salt", "apple", "flour"]), Some(&aisles));
        let order: Vec<&str> = list.sections().into_iter().map(|(name, _)| name).collect();
        assert_eq!(order, vec!["BAKING", "DAIRY", "FRUIT", UNDEFINED_CATEGORY]);
    }

    #[test]
    fn test_custom_category_names() {
        let categorizer = Categorizer::new("ZUTATEN", "SONSTIGES");
        let list = categorizer.categorize(table(&["mehl"]), None);
        assert!(list.get("ZUTATEN").is_some());

        let list = categorizer.categorize(table(&["mehl"]), Some(&ConfigMap::new()));
        assert!(list.get("SONSTIGES").is_some());
    }
}
