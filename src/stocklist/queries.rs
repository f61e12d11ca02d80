//! Read-only operations over a [`Store`]. Nothing here allocates a new store;
//! results borrow from the argument.

use crate::error::{Result, StockError};
use crate::model::{Product, Store};

/// All products in insertion order, plus their count.
pub fn list_products(store: &Store) -> (&[Product], usize) {
    (store.products(), store.len())
}

/// Exact, case-sensitive lookup by name.
pub fn find_by_name<'a>(store: &'a Store, name: &str) -> Result<&'a Product> {
    store
        .products()
        .iter()
        .find(|p| p.name == name)
        .ok_or_else(|| StockError::NotFound(name.to_string()))
}

/// Products strictly cheaper than `threshold`, relative order preserved.
pub fn filter_below_price(store: &Store, threshold: f64) -> Vec<&Product> {
    store
        .products()
        .iter()
        .filter(|p| p.price < threshold)
        .collect()
}

/// Products with stock strictly under `threshold`, relative order preserved.
pub fn filter_below_quantity(store: &Store, threshold: u32) -> Vec<&Product> {
    store
        .products()
        .iter()
        .filter(|p| p.quantity < threshold)
        .collect()
}
