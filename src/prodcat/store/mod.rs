//! # Data Sources
//!
//! The catalog is read once at startup from a [`CatalogSource`] and never touched
//! again. Sources only hand over raw collections; [`load`] turns them into an
//! indexed [`Catalog`].
//!
//! ## Implementations
//!
//! - [`builtin::BuiltinSource`]: sample catalog compiled into the binary
//! - [`fs::JsonDirSource`]: a directory holding the three JSON arrays
//! - [`memory::InMemorySource`]: collections supplied by code, mostly for tests
//!
//! ## Storage Format
//!
//! ```text
//! data/
//! ├── users.json        # [{ "id", "name", "sex": "m" | "f" }]
//! ├── categories.json   # [{ "id", "title", "icon", "ownerId" }]
//! └── products.json     # [{ "id", "name", "categoryId" }]
//! ```

use crate::catalog::Catalog;
use crate::error::Result;
use crate::model::{Category, Product, User};
use tracing::{debug, warn};

pub mod builtin;
pub mod fs;
pub mod memory;

pub const USERS_FILE: &str = "users.json";
pub const CATEGORIES_FILE: &str = "categories.json";
pub const PRODUCTS_FILE: &str = "products.json";

pub trait CatalogSource {
    fn load_users(&self) -> Result<Vec<User>>;

    fn load_categories(&self) -> Result<Vec<Category>>;

    fn load_products(&self) -> Result<Vec<Product>>;

    /// Human-readable origin, used in logs and `doctor` output.
    fn describe(&self) -> String;
}

/// Reads every collection from `source` and builds the catalog.
///
/// Dangling references are logged, not rejected.
pub fn load<S: CatalogSource + ?Sized>(source: &S) -> Result<Catalog> {
    let catalog = Catalog::new(
        source.load_users()?,
        source.load_categories()?,
        source.load_products()?,
    )?;

    debug!(
        source = %source.describe(),
        users = catalog.users().len(),
        categories = catalog.categories().len(),
        products = catalog.products().len(),
        "catalog loaded"
    );

    let report = catalog.check_references();
    for missing in &report.missing_categories {
        warn!(
            product = %missing.product_id,
            category = %missing.category_id,
            "product references unknown category"
        );
    }
    for missing in &report.missing_owners {
        warn!(
            category = %missing.category_id,
            owner = %missing.owner_id,
            "category references unknown owner"
        );
    }

    Ok(catalog)
}
