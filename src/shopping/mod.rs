mod aggregate;
mod categorize;

pub use self::aggregate::merge;
pub use self::categorize::{
    categorize, CategorizedList, Categorizer, NO_CONFIG_CATEGORY, UNDEFINED_CATEGORY,
};
