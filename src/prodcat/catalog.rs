//! # Catalog Store
//!
//! The users, categories and products loaded at startup. A [`Catalog`] is built
//! once and never mutated afterwards; callers share it behind an `Arc`.
//!
//! Insertion order is kept as-is because it is the display order of the product
//! table. Ids are indexed for the [`Resolver`] lookups.

use crate::error::{CatalogError, Result};
use crate::model::{Category, CategoryId, Product, ProductId, User, UserId};
use crate::resolver::Resolver;
use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug, Default)]
pub struct Catalog {
    users: Vec<User>,
    categories: Vec<Category>,
    products: Vec<Product>,
    user_index: HashMap<UserId, usize>,
    category_index: HashMap<CategoryId, usize>,
}

/// A product whose category id does not resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingCategory {
    pub product_id: ProductId,
    pub category_id: CategoryId,
}

/// A category whose owner id does not resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingOwner {
    pub category_id: CategoryId,
    pub owner_id: UserId,
}

/// Result of checking every cross-collection reference in a catalog.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReferenceReport {
    pub missing_categories: Vec<MissingCategory>,
    pub missing_owners: Vec<MissingOwner>,
}

impl ReferenceReport {
    pub fn is_clean(&self) -> bool {
        self.missing_categories.is_empty() && self.missing_owners.is_empty()
    }
}

impl Catalog {
    /// Builds the catalog, rejecting duplicate ids within any collection.
    ///
    /// Dangling references are accepted; see [`Catalog::check_references`].
    pub fn new(users: Vec<User>, categories: Vec<Category>, products: Vec<Product>) -> Result<Self> {
        let user_index = index_by(&users, "user", |u| u.id, |id: UserId| id.0)?;
        let category_index = index_by(&categories, "category", |c| c.id, |id: CategoryId| id.0)?;
        index_by(&products, "product", |p| p.id, |id: ProductId| id.0)?;

        Ok(Self {
            users,
            categories,
            products,
            user_index,
            category_index,
        })
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Case-insensitive lookup by display name. First match in store order wins.
    pub fn user_by_name(&self, name: &str) -> Option<&User> {
        let needle = name.trim().to_lowercase();
        self.users.iter().find(|u| u.name.to_lowercase() == needle)
    }

    pub fn check_references(&self) -> ReferenceReport {
        let missing_categories = self
            .products
            .iter()
            .filter(|p| self.category_by_id(p.category_id).is_none())
            .map(|p| MissingCategory {
                product_id: p.id,
                category_id: p.category_id,
            })
            .collect();

        let missing_owners = self
            .categories
            .iter()
            .filter(|c| self.user_by_id(c.owner_id).is_none())
            .map(|c| MissingOwner {
                category_id: c.id,
                owner_id: c.owner_id,
            })
            .collect();

        ReferenceReport {
            missing_categories,
            missing_owners,
        }
    }
}

impl Resolver for Catalog {
    fn category_by_id(&self, id: CategoryId) -> Option<&Category> {
        self.category_index.get(&id).map(|&i| &self.categories[i])
    }

    fn user_by_id(&self, id: UserId) -> Option<&User> {
        self.user_index.get(&id).map(|&i| &self.users[i])
    }
}

fn index_by<T, K: Eq + Hash + Copy>(
    items: &[T],
    kind: &'static str,
    key: impl Fn(&T) -> K,
    raw: impl Fn(K) -> u32,
) -> Result<HashMap<K, usize>> {
    let mut index = HashMap::with_capacity(items.len());
    for (pos, item) in items.iter().enumerate() {
        let k = key(item);
        if index.insert(k, pos).is_some() {
            return Err(CatalogError::DuplicateId { kind, id: raw(k) });
        }
    }
    Ok(index)
}
