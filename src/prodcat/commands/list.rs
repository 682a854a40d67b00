use crate::catalog::Catalog;
use crate::commands::{CmdResult, ProductRow};
use crate::error::Result;
use crate::filter::{filter_products, FilterCriteria};
use crate::resolver::Resolver;
use tracing::debug;

pub fn run(catalog: &Catalog, criteria: &FilterCriteria) -> Result<CmdResult> {
    let rows: Vec<ProductRow> = filter_products(catalog.products(), criteria, catalog)
        .map(|product| ProductRow {
            product: product.clone(),
            category: catalog.category_by_id(product.category_id).cloned(),
            owner: catalog.owner_of(product).cloned(),
        })
        .collect();

    debug!(
        visible = rows.len(),
        total = catalog.products().len(),
        unconstrained = criteria.is_unconstrained(),
        "products listed"
    );
    Ok(CmdResult::default().with_listed_products(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::UserFilter;
    use crate::model::{Category, CategoryId, Product, Sex, User};
    use crate::store::memory::fixtures::sample_catalog;

    #[test]
    fn rows_are_annotated_with_category_and_owner() {
        let catalog = sample_catalog();
        let criteria = FilterCriteria {
            query: "bread".into(),
            ..Default::default()
        };

        let result = run(&catalog, &criteria).unwrap();
        assert_eq!(result.listed_products.len(), 1);

        let row = &result.listed_products[0];
        assert_eq!(row.product.name, "Bread");
        assert_eq!(row.category.as_ref().unwrap().label(), "🍞 - Grocery");
        assert_eq!(row.owner.as_ref().unwrap().name, "Anna");
    }

    #[test]
    fn lists_everything_by_default() {
        let catalog = sample_catalog();
        let result = run(&catalog, &FilterCriteria::default()).unwrap();
        let ids: Vec<u32> = result.listed_products.iter().map(|r| r.product.id.0).collect();
        assert_eq!(ids, (1..=14).collect::<Vec<_>>());
    }

    #[test]
    fn dangling_references_leave_joins_empty() {
        let catalog = Catalog::new(
            vec![User::new(1, "Roma", Sex::Male)],
            vec![Category::new(1, "Orphans", "?", 9)],
            vec![Product::new(1, "Ghost", 1), Product::new(2, "Lost", 5)],
        )
        .unwrap();

        let result = run(&catalog, &FilterCriteria::default()).unwrap();
        let ghost = &result.listed_products[0];
        assert!(ghost.category.is_some());
        assert!(ghost.owner.is_none());

        let lost = &result.listed_products[1];
        assert!(lost.category.is_none());
        assert!(lost.owner.is_none());
    }

    #[test]
    fn empty_result_is_not_an_error() {
        let catalog = sample_catalog();
        let criteria = FilterCriteria {
            query: "milk".into(),
            user: UserFilter::Specific(catalog.user_by_name("Max").unwrap().clone()),
            categories: [CategoryId(2)].into_iter().collect(),
        };
        let result = run(&catalog, &criteria).unwrap();
        assert!(result.listed_products.is_empty());
    }
}
