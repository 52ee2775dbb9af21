//! Shared model and page logic for the product page.
//!
//! - `model`: typed records (variants, products, reviews, the cart).
//! - `bus`: the broadcast channel siblings use to notify each other.
//! - `state`: the state machine behind each presentation unit, plus `ProductPage`,
//!   which wires them together exactly like the rendered page does.
//! - `config`: the catalog shipped with the page.

pub mod bus;
pub mod config;
pub mod error;
pub mod model;
pub mod state;
