use crate::catalog::Catalog;
use crate::commands::{CategoryButton, CmdResult};
use crate::controller::FilterController;
use crate::error::Result;
use crate::resolver::Resolver;

/// The category buttons: "All" first (selected when nothing else is), then one per category.
pub fn run(catalog: &Catalog, controller: &FilterController) -> Result<CmdResult> {
    let mut buttons = Vec::with_capacity(catalog.categories().len() + 1);
    buttons.push(CategoryButton {
        category: None,
        owner: None,
        is_selected: controller.all_categories_active(),
    });
    buttons.extend(catalog.categories().iter().map(|category| CategoryButton {
        category: Some(category.clone()),
        owner: catalog.user_by_id(category.owner_id).cloned(),
        is_selected: controller.is_category_selected(category.id),
    }));

    Ok(CmdResult::default().with_category_buttons(buttons))
}
