use crate::model::IngredientTable;

/// Fold recipe tables into one, left to right.
///
/// A name keeps the position where it was first seen; later amounts are
/// appended to it, never replaced, deduplicated or summed.
pub fn merge<I>(tables: I) -> IngredientTable
where
    I: IntoIterator<Item = IngredientTable>,
{
    tables
        .into_iter()
        .fold(IngredientTable::new(), |mut merged, table| {
            for (name, amounts) in table {
                merged.add(name, amounts);
            }
            merged
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Amount, Quantity};

    fn table(entries: &[(&str, &str)]) -> IngredientTable {
        let mut table = IngredientTable::new();
        for (name, amount) in entries {
            table.add(
                *name,
                Amount::new(Quantity::Text(amount.to_string()), None),
            );
        }
        table
    }

    fn pairs(table: &IngredientTable) -> Vec<(String, String)> {
        table
            .iter()
            .flat_map(|(name, amounts)| {
                amounts
                    .iter()
                    .map(move |amount| (name.clone(), amount.describe()))
            })
            .collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(merge(Vec::new()).is_empty());
    }

    #[test]
    fn test_amounts_are_appended_not_replaced() {
        let a = table(&[("salt", "1 tsp")]);
        let b = table(&[("salt", "2 tsp")]);

        let merged = merge(vec![a, b]);
        let salt = merged.get("salt").unwrap();
        assert_eq!(salt.len(), 2);
        assert_eq!(salt.describe(), "1 tsp, 2 tsp");
    }

    #[test]
    fn test_equal_amounts_are_kept() {
        let merged = merge(vec![table(&[("egg", "1")]), table(&[("egg", "1")])]);
        assert_eq!(merged.get("egg").unwrap().len(), 2);
    }

    #[test]
    fn test_first_seen_position_is_kept() {
        let a = table(&[("flour", "200 g")]);
        let b = table(&[("salt", "1 tsp"), ("flour", "100 g")]);

        let merged = merge(vec![a, b]);
        assert_eq!(merged.names().collect::<Vec<_>>(), vec!["flour", "salt"]);
        assert_eq!(merged.get("flour").unwrap().describe(), "200 g, 100 g");
    }

    #[test]
    fn test_same_content_different_order() {
        let a = table(&[("flour", "200 g"), ("sugar", "50 g")]);
        let b = table(&[("eggs", "2"), ("milk", "1 l")]);

        let ab = merge(vec![a.clone(), b.clone()]);
        let ba = merge(vec![b, a]);

        let mut ab_pairs = pairs(&ab);
        let mut ba_pairs = pairs(&ba);
        assert_ne!(ab_pairs, ba_pairs);

        ab_pairs.sort();
        ba_pairs.sort();
        assert_eq!(ab_pairs, ba_pairs);
    }

    #[test]
    fn test_case_differences_are_distinct_ingredients() {
        let merged = merge(vec![table(&[("Salt", "1 tsp")]), table(&[("salt", "1 tsp")])]);
        assert_eq!(merged.len(), 2);
    }
}
