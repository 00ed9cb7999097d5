use std::fmt;

use indexmap::IndexMap;

/// Quantity part of an ingredient amount
#[derive(Debug, Clone, PartialEq)]
pub enum Quantity {
    Number(f64),
    /// `2-3`
    Range(f64, f64),
    Text(String),
    /// `@salt` with no braces or `@salt{}`
    Unspecified,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Number(n) => write!(f, "{}", format_number(*n)),
            Quantity::Range(start, end) => {
                write!(f, "{}-{}", format_number(*start), format_number(*end))
            }
            Quantity::Text(text) => write!(f, "{}", text),
            Quantity::Unspecified => write!(f, "some"),
        }
    }
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        return format!("{}", n as i64);
    }
    let rounded = format!("{:.2}", n);
    rounded
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// One quantity with an optional unit, e.g. `200 g`
#[derive(Debug, Clone, PartialEq)]
pub struct Amount {
    pub quantity: Quantity,
    pub units: Option<String>,
}

impl Amount {
    pub fn new(quantity: Quantity, units: Option<String>) -> Self {
        Self { quantity, units }
    }

    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.units {
            Some(units) if !units.is_empty() => write!(f, "{} {}", self.quantity, units),
            _ => write!(f, "{}", self.quantity),
        }
    }
}

/// All amounts collected for one ingredient, in the order they were added
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Amounts(Vec<Amount>);

impl Amounts {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, amount: Amount) {
        self.0.push(amount);
    }

    pub fn extend(&mut self, other: Amounts) {
        self.0.extend(other.0);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Amount> {
        self.0.iter()
    }

    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl From<Amount> for Amounts {
    fn from(amount: Amount) -> Self {
        Self(vec![amount])
    }
}

impl fmt::Display for Amounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|a| a.to_string()).collect();
        write!(f, "{}", parts.join(", "))
    }
}

/// Ordered mapping from ingredient name to its collected amounts.
///
/// Names are compared exactly: `Salt` and `salt` are different ingredients.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IngredientTable {
    ingredients: IndexMap<String, Amounts>,
}

impl IngredientTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `amounts` to `name`, inserting it at the end if unseen.
    /// Empty collections are ignored so every stored entry has an amount.
    pub fn add(&mut self, name: impl Into<String>, amounts: impl Into<Amounts>) {
        let amounts = amounts.into();
        if amounts.is_empty() {
            return;
        }
        self.ingredients
            .entry(name.into())
            .or_default()
            .extend(amounts);
    }

    pub fn get(&self, name: &str) -> Option<&Amounts> {
        self.ingredients.get(name)
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Amounts> {
        self.ingredients.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.ingredients.keys().map(String::as_str)
    }
}

impl IntoIterator for IngredientTable {
    type Item = (String, Amounts);
    type IntoIter = indexmap::map::IntoIter<String, Amounts>;

    fn into_iter(self) -> Self::IntoIter {
        self.ingredients.into_iter()
    }
}

impl<'a> IntoIterator for &'a IngredientTable {
    type Item = (&'a String, &'a Amounts);
    type IntoIter = indexmap::map::Iter<'a, String, Amounts>;

    fn into_iter(self) -> Self::IntoIter {
        self.ingredients.iter()
    }
}

impl fmt::Display for IngredientTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .ingredients
            .iter()
            .map(|(name, amounts)| format!("{}: {}", name, amounts))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

/// A piece of step text
#[derive(Debug, Clone, PartialEq)]
pub enum Direction {
    Text(String),
    Ingredient(String),
    Cookware(String),
    Timer(Amount),
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Text(text) => write!(f, "{}", text),
            Direction::Ingredient(name) | Direction::Cookware(name) => write!(f, "{}", name),
            Direction::Timer(amount) => write!(f, "{}", amount),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Step {
    pub directions: Vec<Direction>,
    pub ingredients: IngredientTable,
}

impl Step {
    /// Step text with every fragment joined and no separator added.
    pub fn description(&self) -> String {
        let text: String = self.directions.iter().map(|d| d.to_string()).collect();
        text.trim().to_string()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cookware {
    pub name: String,
}

/// A parsed recipe as handed over by a [`crate::parser::RecipeParser`]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Recipe {
    pub metadata: IndexMap<String, String>,
    pub ingredients: IngredientTable,
    pub cookware: Vec<Cookware>,
    pub steps: Vec<Step>,
}
