use super::CatalogSource;
use crate::error::Result;
use crate::model::{Category, Product, User};

const USERS: &str = include_str!("../../../data/users.json");
const CATEGORIES: &str = include_str!("../../../data/categories.json");
const PRODUCTS: &str = include_str!("../../../data/products.json");

/// The sample catalog shipped with the binary. Used when no data dir is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinSource;

impl CatalogSource for BuiltinSource {
    fn load_users(&self) -> Result<Vec<User>> {
        Ok(serde_json::from_str(USERS)?)
    }

    fn load_categories(&self) -> Result<Vec<Category>> {
        Ok(serde_json::from_str(CATEGORIES)?)
    }

    fn load_products(&self) -> Result<Vec<Product>> {
        Ok(serde_json::from_str(PRODUCTS)?)
    }

    fn describe(&self) -> String {
        "built-in sample catalog".to_string()
    }
}
