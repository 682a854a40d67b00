use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(catalog: &Catalog, source: &str) -> Result<CmdResult> {
    let report = catalog.check_references();
    let mut result = CmdResult::default();

    result.add_message(CmdMessage::info(format!(
        "Checked {} products, {} categories, {} users from {}",
        catalog.products().len(),
        catalog.categories().len(),
        catalog.users().len(),
        source
    )));

    for missing in &report.missing_categories {
        result.add_message(CmdMessage::warning(format!(
            "Product {} references unknown category {}",
            missing.product_id, missing.category_id
        )));
    }
    for missing in &report.missing_owners {
        result.add_message(CmdMessage::warning(format!(
            "Category {} references unknown user {}",
            missing.category_id, missing.owner_id
        )));
    }

    if report.is_clean() {
        result.add_message(CmdMessage::success("All references resolve."));
    }

    Ok(result.with_report(report))
}
