//! State of the catalog display: the variant selection, the cart button toggle and the
//! review list every other unit reads from.

use std::rc::Rc;

use log::{info, warn};

use crate::error::CatalogError;
use crate::model::{Product, Review, Shipping, Variant, VariantId};

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogState {
    product: Product,
    /// Always a valid index into `product.variants()`.
    selected: usize,
    cart_has_contents: bool,
    /// Append-only. The review tabs receive this handle; an append while they still hold
    /// the previous one copies the list (`Rc::make_mut`) and the next render hands them
    /// the new handle.
    reviews: Rc<Vec<Review>>,
}

impl CatalogState {
    pub fn new(product: Product) -> Self {
        Self {
            product,
            selected: 0,
            cart_has_contents: false,
            reviews: Rc::new(Vec::new()),
        }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_variant(&self) -> &Variant {
        &self.product.variants()[self.selected]
    }

    pub fn title(&self) -> String {
        self.product.title()
    }

    pub fn image(&self) -> &str {
        &self.selected_variant().image
    }

    pub fn in_stock(&self) -> bool {
        self.selected_variant().in_stock()
    }

    pub fn shipping(&self, premium: bool) -> Shipping {
        Shipping::for_member(premium)
    }

    pub fn cart_has_contents(&self) -> bool {
        self.cart_has_contents
    }

    pub fn reviews(&self) -> &Rc<Vec<Review>> {
        &self.reviews
    }

    /// Selects the variant at `index`. An out-of-range index leaves the selection as is.
    pub fn hover(&mut self, index: usize) -> Result<(), CatalogError> {
        let len = self.product.variants().len();
        if index >= len {
            return Err(CatalogError::VariantOutOfRange { index, len });
        }
        self.selected = index;
        Ok(())
    }

    /// Marks the cart as filled and returns the id the cart owner must append.
    ///
    /// The add button is disabled while the selection is out of stock; a call in that
    /// state still goes through.
    pub fn add_to_cart(&mut self) -> VariantId {
        let variant = self.selected_variant();
        if !variant.in_stock() {
            warn!("catalog: variant {} added to cart while out of stock", variant.id);
        }
        let id = variant.id;
        self.cart_has_contents = true;
        id
    }

    pub fn clear_cart(&mut self) {
        self.cart_has_contents = false;
    }

    pub fn receive_review(&mut self, review: Review) {
        info!(
            "catalog: review from {:?} rated {} appended",
            review.name(),
            review.rating()
        );
        Rc::make_mut(&mut self.reviews).push(review);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Rating;

    fn socks() -> Product {
        Product::new(
            "Socks",
            "Vue Mastery",
            vec!["80% cotton".to_string()],
            vec![
                Variant {
                    id: VariantId(2234),
                    color: "green".to_string(),
                    image: "assets/green.jpg".to_string(),
                    quantity: 10,
                },
                Variant {
                    id: VariantId(2235),
                    color: "blue".to_string(),
                    image: "assets/blue.jpg".to_string(),
                    quantity: 0,
                },
            ],
        )
        .unwrap()
    }

    #[test]
    fn starts_on_first_variant() {
        let catalog = CatalogState::new(socks());
        assert_eq!(catalog.selected_index(), 0);
        assert_eq!(catalog.image(), "assets/green.jpg");
        assert!(catalog.in_stock());
        assert!(!catalog.cart_has_contents());
        assert!(catalog.reviews().is_empty());
    }

    #[test]
    fn hover_switches_derived_values() {
        let mut catalog = CatalogState::new(socks());
        catalog.hover(1).unwrap();
        assert_eq!(catalog.image(), "assets/blue.jpg");
        assert!(!catalog.in_stock());
        assert_eq!(catalog.title(), "Vue Mastery Socks");

        catalog.hover(0).unwrap();
        assert_eq!(catalog.image(), "assets/green.jpg");
        assert!(catalog.in_stock());
    }

    #[test]
    fn hover_out_of_range_keeps_selection() {
        let mut catalog = CatalogState::new(socks());
        catalog.hover(1).unwrap();
        assert_eq!(
            catalog.hover(2),
            Err(CatalogError::VariantOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(catalog.selected_index(), 1);
    }

    #[test]
    fn shipping_ignores_selected_variant() {
        let mut catalog = CatalogState::new(socks());
        for index in 0..2 {
            catalog.hover(index).unwrap();
            assert_eq!(catalog.shipping(true), Shipping::Free);
            assert_eq!(catalog.shipping(false), Shipping::Flat(2.99));
        }
    }

    #[test]
    fn cart_flag_follows_add_and_clear() {
        let mut catalog = CatalogState::new(socks());
        assert_eq!(catalog.add_to_cart(), VariantId(2234));
        assert!(catalog.cart_has_contents());

        catalog.clear_cart();
        assert!(!catalog.cart_has_contents());
    }

    #[test]
    fn add_while_out_of_stock_still_emits() {
        let mut catalog = CatalogState::new(socks());
        catalog.hover(1).unwrap();
        assert_eq!(catalog.add_to_cart(), VariantId(2235));
        assert!(catalog.cart_has_contents());
    }

    #[test]
    fn reviews_are_appended_in_arrival_order() {
        let mut catalog = CatalogState::new(socks());
        let review = Review::new("Amy", "Great socks", Rating::try_from(5).unwrap()).unwrap();
        catalog.receive_review(review.clone());
        catalog.receive_review(review.clone());

        let shared = Rc::clone(catalog.reviews());
        assert_eq!(shared.as_slice(), &[review.clone(), review]);
    }
}
