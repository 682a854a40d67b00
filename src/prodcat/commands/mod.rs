use crate::catalog::ReferenceReport;
use crate::config::CatalogConfig;
use crate::model::{Category, Product, User};

pub mod categories;
pub mod config;
pub mod doctor;
pub mod list;
pub mod users;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A visible product joined with its category and owner.
///
/// The joins are optional: input data may carry dangling references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRow {
    pub product: Product,
    pub category: Option<Category>,
    pub owner: Option<User>,
}

/// One entry of the user filter. `user == None` is the "All" tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserTab {
    pub user: Option<User>,
    pub is_active: bool,
}

/// One category button. `category == None` is the "All" button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryButton {
    pub category: Option<Category>,
    pub owner: Option<User>,
    pub is_selected: bool,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_products: Vec<ProductRow>,
    pub user_tabs: Vec<UserTab>,
    pub category_buttons: Vec<CategoryButton>,
    pub report: Option<ReferenceReport>,
    pub config: Option<CatalogConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_products(mut self, rows: Vec<ProductRow>) -> Self {
        self.listed_products = rows;
        self
    }

    pub fn with_user_tabs(mut self, tabs: Vec<UserTab>) -> Self {
        self.user_tabs = tabs;
        self
    }

    pub fn with_category_buttons(mut self, buttons: Vec<CategoryButton>) -> Self {
        self.category_buttons = buttons;
        self
    }

    pub fn with_report(mut self, report: ReferenceReport) -> Self {
        self.report = Some(report);
        self
    }

    pub fn with_config(mut self, config: CatalogConfig) -> Self {
        self.config = Some(config);
        self
    }
}
