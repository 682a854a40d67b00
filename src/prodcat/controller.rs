//! # Filter State Controller
//!
//! Owns the current [`FilterCriteria`] on behalf of whatever drives the view.
//! Every operation is total and takes effect immediately.

use crate::filter::{FilterCriteria, UserFilter};
use crate::model::{CategoryId, UserId};
use tracing::trace;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterController {
    criteria: FilterCriteria,
}

impl FilterController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Stores the text verbatim; normalization happens in the filter engine.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.criteria.query = text.into();
        trace!(query = %self.criteria.query, "query set");
    }

    pub fn clear_query(&mut self) {
        self.set_query("");
    }

    pub fn select_user(&mut self, user: UserFilter) {
        trace!(user = ?user.user_id(), "user selected");
        self.criteria.user = user;
    }

    pub fn toggle_category(&mut self, id: CategoryId) {
        if !self.criteria.categories.remove(&id) {
            self.criteria.categories.insert(id);
        }
        trace!(category = %id, selected = self.criteria.categories.contains(&id), "category toggled");
    }

    /// Clears the selection. An empty selection shows every category.
    pub fn select_all_categories(&mut self) {
        self.criteria.categories.clear();
    }

    pub fn reset_all(&mut self) {
        self.criteria = FilterCriteria::default();
        trace!("filters reset");
    }

    pub fn has_query(&self) -> bool {
        !self.criteria.query.is_empty()
    }

    pub fn is_all_users(&self) -> bool {
        self.criteria.user == UserFilter::All
    }

    pub fn is_user_selected(&self, id: UserId) -> bool {
        self.criteria.user.user_id() == Some(id)
    }

    pub fn is_category_selected(&self, id: CategoryId) -> bool {
        self.criteria.categories.contains(&id)
    }

    pub fn all_categories_active(&self) -> bool {
        self.criteria.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Sex, User};

    #[test]
    fn starts_with_default_criteria() {
        let ctl = FilterController::new();
        assert_eq!(ctl.criteria(), &FilterCriteria::default());
        assert!(ctl.is_all_users());
        assert!(ctl.all_categories_active());
        assert!(!ctl.has_query());
    }

    #[test]
    fn query_is_stored_verbatim() {
        let mut ctl = FilterController::new();
        ctl.set_query("  Bread ");
        assert_eq!(ctl.criteria().query, "  Bread ");
        assert!(ctl.has_query());

        ctl.clear_query();
        assert_eq!(ctl.criteria().query, "");
        assert!(!ctl.has_query());
    }

    #[test]
    fn toggle_twice_restores_selection() {
        let mut ctl = FilterController::new();
        ctl.toggle_category(CategoryId(2));
        let before = ctl.criteria().categories.clone();

        ctl.toggle_category(CategoryId(4));
        assert!(ctl.is_category_selected(CategoryId(4)));
        ctl.toggle_category(CategoryId(4));

        assert_eq!(ctl.criteria().categories, before);
        assert!(ctl.is_category_selected(CategoryId(2)));
    }

    #[test]
    fn select_all_categories_clears_selection() {
        let mut ctl = FilterController::new();
        ctl.toggle_category(CategoryId(1));
        ctl.toggle_category(CategoryId(3));
        assert!(!ctl.all_categories_active());

        ctl.select_all_categories();
        assert!(ctl.all_categories_active());
    }

    #[test]
    fn select_user_switches_active_tab() {
        let mut ctl = FilterController::new();
        ctl.select_user(UserFilter::Specific(User::new(2, "Anna", Sex::Female)));
        assert!(ctl.is_user_selected(UserId(2)));
        assert!(!ctl.is_all_users());

        ctl.select_user(UserFilter::All);
        assert!(ctl.is_all_users());
        assert!(!ctl.is_user_selected(UserId(2)));
    }

    #[test]
    fn reset_all_restores_initial_state() {
        let mut ctl = FilterController::new();
        ctl.set_query("milk");
        ctl.select_user(UserFilter::Specific(User::new(1, "Roma", Sex::Male)));
        ctl.toggle_category(CategoryId(2));

        ctl.reset_all();
        assert_eq!(ctl, FilterController::new());
    }
}
