pub mod product;
pub mod product_review;
pub mod product_tabs;
