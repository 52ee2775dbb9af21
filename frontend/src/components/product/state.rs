use common::model::Product;
use common::state::CatalogState;

/// Catalog display component. The selection, the cart toggle and the review list all
/// live in `catalog`.
pub struct ProductComponent {
    pub catalog: CatalogState,
}

impl ProductComponent {
    pub fn new(product: Product) -> Self {
        Self {
            catalog: CatalogState::new(product),
        }
    }
}
