//! Operations that change the inventory, written functionally: each takes a
//! `&Store` and returns a fresh `Store`. The argument is never modified, so
//! callers can keep prior values around (structural equality checks, undo).

use crate::error::{Result, StockError};
use crate::model::{Product, Store};

/// Field replacements for [`update_product`]. `None` means "keep the prior
/// value"; supplying no fields makes the update a no-op.
#[derive(Debug, Clone, Default)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<u32>,
}

impl ProductUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.quantity.is_none()
    }
}

/// Append a new product. Fails with `DuplicateName` if the name is taken and
/// `InvalidValue` for an empty name or negative price.
pub fn add_product(store: &Store, name: &str, price: f64, quantity: u32) -> Result<Store> {
    if store.contains(name) {
        return Err(StockError::DuplicateName(name.to_string()));
    }
    let product = Product::new(name, price, quantity)?;

    let mut products = store.products().to_vec();
    products.push(product);
    Ok(Store { products })
}

/// Exclude the named product, everything else in original order. Fails with
/// `NotFound` if absent.
pub fn remove_product(store: &Store, name: &str) -> Result<Store> {
    if !store.contains(name) {
        return Err(StockError::NotFound(name.to_string()));
    }
    let products = store
        .products()
        .iter()
        .filter(|p| p.name != name)
        .cloned()
        .collect();
    Ok(Store { products })
}

/// Replace the supplied fields of the named product, keeping its position.
/// Renaming to the product's own current name is a no-op, not a collision.
pub fn update_product(store: &Store, name: &str, update: &ProductUpdate) -> Result<Store> {
    let index = store
        .position(name)
        .ok_or_else(|| StockError::NotFound(name.to_string()))?;

    if let Some(new_name) = update.name.as_deref() {
        if new_name != name && store.contains(new_name) {
            return Err(StockError::DuplicateName(new_name.to_string()));
        }
    }

    let prior = &store.products()[index];
    let replacement = Product::new(
        update.name.clone().unwrap_or_else(|| prior.name.clone()),
        update.price.unwrap_or(prior.price),
        update.quantity.unwrap_or(prior.quantity),
    )?;

    let mut products = store.products().to_vec();
    products[index] = replacement;
    Ok(Store { products })
}
