use super::CatalogSource;
use crate::error::Result;
use crate::model::{Category, Product, User};

/// Collections handed over directly by code. Nothing is read from disk.
#[derive(Debug, Default, Clone)]
pub struct InMemorySource {
    users: Vec<User>,
    categories: Vec<Category>,
    products: Vec<Product>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, user: User) -> Self {
        self.users.push(user);
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.categories.push(category);
        self
    }

    pub fn with_product(mut self, product: Product) -> Self {
        self.products.push(product);
        self
    }
}

impl CatalogSource for InMemorySource {
    fn load_users(&self) -> Result<Vec<User>> {
        Ok(self.users.clone())
    }

    fn load_categories(&self) -> Result<Vec<Category>> {
        Ok(self.categories.clone())
    }

    fn load_products(&self) -> Result<Vec<Product>> {
        Ok(self.products.clone())
    }

    fn describe(&self) -> String {
        "in-memory".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::catalog::Catalog;
    use crate::model::Sex;
    use crate::store::load;

    /// Same shape as the built-in catalog, spelled out so tests can read it.
    pub fn sample_source() -> InMemorySource {
        InMemorySource::new()
            .with_user(User::new(1, "Roma", Sex::Male))
            .with_user(User::new(2, "Anna", Sex::Female))
            .with_user(User::new(3, "Max", Sex::Male))
            .with_user(User::new(4, "John", Sex::Male))
            .with_category(Category::new(1, "Grocery", "🍞", 2))
            .with_category(Category::new(2, "Drinks", "🍺", 1))
            .with_category(Category::new(3, "Fruits", "🍏", 2))
            .with_category(Category::new(4, "Electronics", "💻", 1))
            .with_category(Category::new(5, "Clothes", "👚", 3))
            .with_product(Product::new(1, "Milk", 2))
            .with_product(Product::new(2, "Bread", 1))
            .with_product(Product::new(3, "Eggs", 1))
            .with_product(Product::new(4, "Jack Daniels", 2))
            .with_product(Product::new(5, "Fanta", 2))
            .with_product(Product::new(6, "Apple", 3))
            .with_product(Product::new(7, "Banana", 3))
            .with_product(Product::new(8, "Orange", 3))
            .with_product(Product::new(9, "Pineapple", 3))
            .with_product(Product::new(10, "iPhone", 4))
            .with_product(Product::new(11, "MacBook Pro", 4))
            .with_product(Product::new(12, "T-Shirt", 5))
            .with_product(Product::new(13, "Hat", 5))
            .with_product(Product::new(14, "Socks", 5))
    }

    pub fn sample_catalog() -> Catalog {
        load(&sample_source()).unwrap()
    }
}
