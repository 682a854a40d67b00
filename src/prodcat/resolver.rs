//! # Join Resolver
//!
//! Id-based lookups joining a product to its category and a category to its owner.
//!
//! Lookups never fail: a miss is `None`. Input data is not guaranteed to be
//! referentially intact, so every caller decides what absence means. The filter
//! engine excludes the product, the view renders a placeholder and `doctor`
//! reports it.

use crate::model::{Category, CategoryId, Product, User, UserId};

pub trait Resolver {
    fn category_by_id(&self, id: CategoryId) -> Option<&Category>;

    fn user_by_id(&self, id: UserId) -> Option<&User>;

    /// Product → category → owner. `None` if either hop misses.
    fn owner_of(&self, product: &Product) -> Option<&User> {
        self.category_by_id(product.category_id)
            .and_then(|category| self.user_by_id(category.owner_id))
    }
}
