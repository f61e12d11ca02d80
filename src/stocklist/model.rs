use serde::{Deserialize, Serialize};

use crate::error::{Result, StockError};

/// A single inventory record. The name is the key: unique within a [`Store`],
/// compared case-sensitively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64, quantity: u32) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(StockError::InvalidValue(
                "product name cannot be empty".to_string(),
            ));
        }
        if !price.is_finite() || price < 0.0 {
            return Err(StockError::InvalidValue(format!(
                "price must be a non-negative number, got {price}"
            )));
        }
        Ok(Self {
            name,
            price,
            quantity,
        })
    }
}

/// The inventory at a point in time: an ordered sequence of products.
/// Insertion order is the canonical order for listing and filtering.
///
/// A `Store` is a plain value. Mutation functions take a `&Store` and return
/// a fresh one; nothing in this crate modifies a `Store` in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Store {
    pub(crate) products: Vec<Product>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from an initial set of products, checking the name
    /// uniqueness invariant.
    pub fn from_products(products: Vec<Product>) -> Result<Self> {
        for (i, product) in products.iter().enumerate() {
            if products[..i].iter().any(|p| p.name == product.name) {
                return Err(StockError::DuplicateName(product.name.clone()));
            }
        }
        Ok(Self { products })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub(crate) fn position(&self, name: &str) -> Option<usize> {
        self.products.iter().position(|p| p.name == name)
    }

    pub(crate) fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }
}

/// The four-product inventory the exercise ships with.
pub fn demo_store() -> Store {
    Store {
        products: vec![
            Product {
                name: "Laptop".to_string(),
                price: 10.0,
                quantity: 13,
            },
            Product {
                name: "Mouse".to_string(),
                price: 50.0,
                quantity: 1,
            },
            Product {
                name: "Keyboard".to_string(),
                price: 30.0,
                quantity: 33,
            },
            Product {
                name: "Monitor".to_string(),
                price: 20.0,
                quantity: 10,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_name() {
        let err = Product::new("   ", 1.0, 1).unwrap_err();
        assert!(matches!(err, StockError::InvalidValue(_)));
    }

    #[test]
    fn rejects_negative_price() {
        let err = Product::new("Webcam", -0.5, 1).unwrap_err();
        assert!(matches!(err, StockError::InvalidValue(_)));
    }

    #[test]
    fn from_products_rejects_duplicate_names() {
        let products = vec![
            Product::new("Mouse", 50.0, 1).unwrap(),
            Product::new("Mouse", 5.0, 2).unwrap(),
        ];
        let err = Store::from_products(products).unwrap_err();
        assert!(matches!(err, StockError::DuplicateName(name) if name == "Mouse"));
    }

    #[test]
    fn demo_store_preserves_insertion_order() {
        let store = demo_store();
        let names: Vec<_> = store.products().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Laptop", "Mouse", "Keyboard", "Monitor"]);
    }
}
