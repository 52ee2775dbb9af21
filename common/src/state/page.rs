//! Headless composition of the whole page.
//!
//! `ProductPage` owns what the root component owns (premium flag, cart, bus) and holds
//! each child's state the way the child components do. The catalog display and the tab
//! panel register on the bus at construction, so a review submitted through the form
//! reaches both before `submit_review` returns.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use crate::bus::EventBus;
use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::model::{Cart, Review, Shipping};

use super::{CatalogState, ReviewForm, Tab, TabsState};

#[derive(Debug)]
pub struct ProductPage {
    premium: bool,
    cart: Cart,
    bus: EventBus,
    catalog: Rc<RefCell<CatalogState>>,
    tabs: Rc<RefCell<TabsState>>,
    form: ReviewForm,
}

impl ProductPage {
    pub fn new(config: CatalogConfig) -> Self {
        let bus = EventBus::new();
        let catalog = Rc::new(RefCell::new(CatalogState::new(config.product)));
        let tabs = Rc::new(RefCell::new(TabsState::new()));

        let listener = Rc::clone(&catalog);
        bus.on_review_submitted(move |review| {
            listener.borrow_mut().receive_review(review.clone());
        });

        let listener = Rc::clone(&tabs);
        bus.on_review_submitted(move |_| listener.borrow_mut().on_review_submitted());

        Self {
            premium: config.premium,
            cart: Cart::new(),
            bus,
            catalog,
            tabs,
            form: ReviewForm::new(),
        }
    }

    pub fn premium(&self) -> bool {
        self.premium
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    pub fn catalog(&self) -> Ref<'_, CatalogState> {
        self.catalog.borrow()
    }

    pub fn shipping(&self) -> Shipping {
        self.catalog.borrow().shipping(self.premium)
    }

    /// The list the review tabs render: the catalog's own sequence.
    pub fn reviews(&self) -> Rc<Vec<Review>> {
        Rc::clone(self.catalog.borrow().reviews())
    }

    pub fn active_tab(&self) -> Tab {
        self.tabs.borrow().active()
    }

    pub fn form(&self) -> &ReviewForm {
        &self.form
    }

    /// Draft edits. Unaffected by tab switches.
    pub fn form_mut(&mut self) -> &mut ReviewForm {
        &mut self.form
    }

    pub fn hover(&mut self, index: usize) -> Result<(), CatalogError> {
        self.catalog.borrow_mut().hover(index)
    }

    /// Whether the add-to-cart control accepts clicks.
    pub fn add_to_cart_enabled(&self) -> bool {
        self.catalog.borrow().in_stock()
    }

    pub fn add_to_cart(&mut self) {
        let id = self.catalog.borrow_mut().add_to_cart();
        self.cart.receive_add(id);
    }

    pub fn clear_cart(&mut self) {
        self.catalog.borrow_mut().clear_cart();
        self.cart.receive_clear();
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.tabs.borrow_mut().select_tab(tab);
    }

    pub fn submit_review(&mut self) -> Option<Review> {
        self.form.submit(&self.bus)
    }
}
