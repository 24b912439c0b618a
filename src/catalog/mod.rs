mod food_catalog;
mod persistence;

pub use food_catalog::{FoodCatalog, SUGGESTION_THRESHOLD};
pub use persistence::{load_catalog, save_catalog};
