use super::{CatalogSource, CATEGORIES_FILE, PRODUCTS_FILE, USERS_FILE};
use crate::error::{CatalogError, Result};
use crate::model::{Category, Product, User};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

/// Reads `users.json`, `categories.json` and `products.json` from one directory.
pub struct JsonDirSource {
    root: PathBuf,
}

impl JsonDirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read_array<T: DeserializeOwned>(&self, file_name: &str) -> Result<Vec<T>> {
        let path = self.root().join(file_name);
        if !path.exists() {
            return Err(CatalogError::Api(format!(
                "Missing data file: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(&path).map_err(CatalogError::Io)?;
        let items = serde_json::from_str(&content).map_err(CatalogError::Serialization)?;
        Ok(items)
    }
}

impl CatalogSource for JsonDirSource {
    fn load_users(&self) -> Result<Vec<User>> {
        self.read_array(USERS_FILE)
    }

    fn load_categories(&self) -> Result<Vec<Category>> {
        self.read_array(CATEGORIES_FILE)
    }

    fn load_products(&self) -> Result<Vec<Product>> {
        self.read_array(PRODUCTS_FILE)
    }

    fn describe(&self) -> String {
        self.root().display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CategoryId, Sex};
    use crate::resolver::Resolver;
    use crate::store::load;

    fn write_catalog(dir: &Path, products: &str) {
        fs::write(
            dir.join(USERS_FILE),
            r#"[{ "id": 1, "name": "Roma", "sex": "m" }]"#,
        )
        .unwrap();
        fs::write(
            dir.join(CATEGORIES_FILE),
            r#"[{ "id": 1, "title": "Fruits", "icon": "🍎", "ownerId": 1 }]"#,
        )
        .unwrap();
        fs::write(dir.join(PRODUCTS_FILE), products).unwrap();
    }

    #[test]
    fn loads_catalog_from_directory() {
        let temp = tempfile::tempdir().unwrap();
        write_catalog(
            temp.path(),
            r#"[{ "id": 1, "name": "Apple", "categoryId": 1 },
                { "id": 2, "name": "Banana", "categoryId": 1 }]"#,
        );

        let catalog = load(&JsonDirSource::new(temp.path())).unwrap();
        assert_eq!(catalog.products().len(), 2);
        assert_eq!(catalog.users()[0].sex, Sex::Male);
        assert_eq!(
            catalog.category_by_id(CategoryId(1)).unwrap().icon,
            "🍎"
        );
    }

    #[test]
    fn missing_file_is_reported() {
        let temp = tempfile::tempdir().unwrap();
        let err = load(&JsonDirSource::new(temp.path())).unwrap_err();
        assert!(err.to_string().contains(USERS_FILE));
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        let temp = tempfile::tempdir().unwrap();
        write_catalog(temp.path(), "[{ \"id\": 1 ");
        let err = load(&JsonDirSource::new(temp.path())).unwrap_err();
        assert!(matches!(err, CatalogError::Serialization(_)));
    }
}
