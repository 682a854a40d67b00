//! # API Facade
//!
//! The single entry point a view talks to. [`CatalogApi`] owns the shared,
//! read-only [`Catalog`] and the one mutable [`FilterController`], so a view loop
//! only has to hold one value.
//!
//! The facade:
//! - **Dispatches** reads to the command functions in `commands/`
//! - **Normalizes inputs**: user and category selectors typed by a person are
//!   resolved to typed values here, which is the only place they can fail
//! - **Returns structured types** (`Result<CmdResult>`), never strings
//!
//! Filter logic lives in [`crate::filter`], state changes in [`crate::controller`].

use crate::catalog::Catalog;
use crate::commands;
use crate::controller::FilterController;
use crate::error::{CatalogError, Result};
use crate::filter::{filter_products, UserFilter};
use crate::model::{CategoryId, Product, UserId};
use crate::resolver::Resolver;
use crate::store::{self, CatalogSource};
use std::sync::Arc;

pub struct CatalogApi {
    catalog: Arc<Catalog>,
    controller: FilterController,
    source: String,
}

impl CatalogApi {
    pub fn new(catalog: Arc<Catalog>, source: impl Into<String>) -> Self {
        Self {
            catalog,
            controller: FilterController::new(),
            source: source.into(),
        }
    }

    pub fn load<S: CatalogSource + ?Sized>(source: &S) -> Result<Self> {
        let catalog = store::load(source)?;
        Ok(Self::new(Arc::new(catalog), source.describe()))
    }

    pub fn controller(&self) -> &FilterController {
        &self.controller
    }

    /// Products passing the current criteria, in catalog order.
    pub fn visible_products(&self) -> impl Iterator<Item = &Product> + '_ {
        filter_products(
            self.catalog.products(),
            self.controller.criteria(),
            self.catalog.as_ref(),
        )
    }

    pub fn list_products(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.catalog, self.controller.criteria())
    }

    pub fn user_tabs(&self) -> Result<commands::CmdResult> {
        commands::users::run(&self.catalog, &self.controller)
    }

    pub fn category_buttons(&self) -> Result<commands::CmdResult> {
        commands::categories::run(&self.catalog, &self.controller)
    }

    pub fn doctor(&self) -> Result<commands::CmdResult> {
        commands::doctor::run(&self.catalog, &self.source)
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.controller.set_query(text);
    }

    pub fn clear_query(&mut self) {
        self.controller.clear_query();
    }

    pub fn select_user(&mut self, user: UserFilter) {
        self.controller.select_user(user);
    }

    /// Selects a user from a typed selector; see [`CatalogApi::resolve_user`].
    pub fn select_user_by(&mut self, selector: &str) -> Result<()> {
        let user = self.resolve_user(selector)?;
        self.controller.select_user(user);
        Ok(())
    }

    pub fn toggle_category(&mut self, id: CategoryId) {
        self.controller.toggle_category(id);
    }

    /// Toggles a category from a typed id, rejecting ids not in the catalog.
    pub fn toggle_category_by(&mut self, selector: &str) -> Result<()> {
        let id = self.resolve_category(selector)?;
        self.controller.toggle_category(id);
        Ok(())
    }

    pub fn select_all_categories(&mut self) {
        self.controller.select_all_categories();
    }

    pub fn reset_all(&mut self) {
        self.controller.reset_all();
    }

    /// `all` (any case), a numeric user id, or a user name (case-insensitive).
    pub fn resolve_user(&self, selector: &str) -> Result<UserFilter> {
        let selector = selector.trim();
        if selector.eq_ignore_ascii_case("all") {
            return Ok(UserFilter::All);
        }

        let by_id = selector
            .parse::<u32>()
            .ok()
            .and_then(|id| self.catalog.user_by_id(UserId(id)));

        by_id
            .or_else(|| self.catalog.user_by_name(selector))
            .map(|user| UserFilter::Specific(user.clone()))
            .ok_or_else(|| CatalogError::UnknownUser(selector.to_string()))
    }

    pub fn resolve_category(&self, selector: &str) -> Result<CategoryId> {
        let id = selector
            .trim()
            .parse::<u32>()
            .map(CategoryId)
            .map_err(|_| CatalogError::Api(format!("Invalid category id: {}", selector)))?;

        match self.catalog.category_by_id(id) {
            Some(category) => Ok(category.id),
            None => Err(CatalogError::UnknownCategory(id)),
        }
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{
    CategoryButton, CmdMessage, CmdResult, MessageLevel, ProductRow, UserTab,
};
