//! Per-component state, kept free of any rendering concern so the page logic runs
//! (and is tested) outside the browser.

mod catalog;
mod page;
mod review_form;
mod tabs;

pub use catalog::CatalogState;
pub use page::ProductPage;
pub use review_form::ReviewForm;
pub use tabs::{Tab, TabsState};
