//! # Filter Engine
//!
//! Computes the visible products for a [`FilterCriteria`]. Three stages run as a
//! conjunction, in this order:
//!
//! 1. **Text**: the query is trimmed and lowercased; if anything is left, the
//!    lowercased product name must contain it.
//! 2. **Owner**: with a specific user selected, the product's category must be
//!    owned by that user. A product whose category does not resolve is dropped.
//! 3. **Category**: with a non-empty selection, the product's category must be
//!    in it. An empty selection shows every category.
//!
//! Stages only narrow. Nothing is ever sorted, so the output is always a
//! subsequence of the input in catalog order.

use crate::model::{CategoryId, Product, User, UserId};
use crate::resolver::Resolver;
use std::collections::BTreeSet;
use tracing::debug;

/// Which owner the product list is narrowed to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UserFilter {
    #[default]
    All,
    Specific(User),
}

impl UserFilter {
    pub fn user_id(&self) -> Option<UserId> {
        match self {
            UserFilter::All => None,
            UserFilter::Specific(user) => Some(user.id),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Raw query as typed. Normalized only when filtering.
    pub query: String,
    pub user: UserFilter,
    pub categories: BTreeSet<CategoryId>,
}

impl FilterCriteria {
    /// True when no stage would remove anything.
    pub fn is_unconstrained(&self) -> bool {
        normalize_query(&self.query).is_empty()
            && self.user == UserFilter::All
            && self.categories.is_empty()
    }
}

pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// A criteria value prepared for matching single products.
pub struct ProductFilter<'a, R: ?Sized> {
    query: Option<String>,
    owner: Option<UserId>,
    categories: &'a BTreeSet<CategoryId>,
    resolver: &'a R,
}

impl<'a, R: Resolver + ?Sized> ProductFilter<'a, R> {
    pub fn new(criteria: &'a FilterCriteria, resolver: &'a R) -> Self {
        let query = normalize_query(&criteria.query);
        Self {
            query: (!query.is_empty()).then_some(query),
            owner: criteria.user.user_id(),
            categories: &criteria.categories,
            resolver,
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.text_matches(product) && self.owner_matches(product) && self.category_matches(product)
    }

    fn text_matches(&self, product: &Product) -> bool {
        match &self.query {
            Some(q) => product.name.to_lowercase().contains(q.as_str()),
            None => true,
        }
    }

    fn owner_matches(&self, product: &Product) -> bool {
        match self.owner {
            Some(owner) => self
                .resolver
                .category_by_id(product.category_id)
                .is_some_and(|category| category.owner_id == owner),
            None => true,
        }
    }

    fn category_matches(&self, product: &Product) -> bool {
        self.categories.is_empty() || self.categories.contains(&product.category_id)
    }
}

/// Lazily yields the products that pass every stage, in input order.
pub fn filter_products<'a, R: Resolver + ?Sized + 'a>(
    products: &'a [Product],
    criteria: &'a FilterCriteria,
    resolver: &'a R,
) -> impl Iterator<Item = &'a Product> + 'a {
    let filter = ProductFilter::new(criteria, resolver);
    products.iter().filter(move |p| filter.matches(p))
}

/// Applies the stages one after another, logging how many products survive each.
pub fn prepared_products<'a, R: Resolver + ?Sized>(
    products: &'a [Product],
    criteria: &FilterCriteria,
    resolver: &R,
) -> Vec<&'a Product> {
    let filter = ProductFilter::new(criteria, resolver);
    let mut prepared: Vec<&Product> = products.iter().collect();

    if filter.query.is_some() {
        prepared.retain(|p| filter.text_matches(p));
        debug!(stage = "text", remaining = prepared.len(), "filter stage applied");
    }

    if filter.owner.is_some() {
        prepared.retain(|p| filter.owner_matches(p));
        debug!(stage = "owner", remaining = prepared.len(), "filter stage applied");
    }

    if !filter.categories.is_empty() {
        prepared.retain(|p| filter.category_matches(p));
        debug!(stage = "category", remaining = prepared.len(), "filter stage applied");
    }

    prepared
}
