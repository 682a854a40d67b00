use crate::catalog::Catalog;
use crate::commands::{CmdResult, UserTab};
use crate::controller::FilterController;
use crate::error::Result;

/// The user filter tabs: "All" first, then every user in catalog order.
pub fn run(catalog: &Catalog, controller: &FilterController) -> Result<CmdResult> {
    let mut tabs = Vec::with_capacity(catalog.users().len() + 1);
    tabs.push(UserTab {
        user: None,
        is_active: controller.is_all_users(),
    });
    tabs.extend(catalog.users().iter().map(|user| UserTab {
        user: Some(user.clone()),
        is_active: controller.is_user_selected(user.id),
    }));

    Ok(CmdResult::default().with_user_tabs(tabs))
}
