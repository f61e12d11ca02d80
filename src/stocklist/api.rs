//! The dispatcher-facing facade.
//!
//! [`StockApi`] is the single entry point the CLI talks to. It owns the
//! current [`Store`] value and dispatches to the query and mutation
//! functions; because mutations return fresh stores, the facade keeps every
//! superseded store on a history stack, which makes undo a pop.
//!
//! The facade does no I/O and no formatting. It takes plain arguments and
//! returns structured values, so any other front end could sit on top of it.

use crate::error::Result;
use crate::model::{Product, Store};
use crate::mutations::{self, ProductUpdate};
use crate::queries;

pub struct StockApi {
    store: Store,
    history: Vec<Store>,
}

impl StockApi {
    pub fn new(store: Store) -> Self {
        Self {
            store,
            history: Vec::new(),
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn list(&self) -> (&[Product], usize) {
        queries::list_products(&self.store)
    }

    pub fn find(&self, name: &str) -> Result<&Product> {
        queries::find_by_name(&self.store, name)
    }

    pub fn below_price(&self, threshold: f64) -> Vec<&Product> {
        queries::filter_below_price(&self.store, threshold)
    }

    pub fn below_quantity(&self, threshold: u32) -> Vec<&Product> {
        queries::filter_below_quantity(&self.store, threshold)
    }

    pub fn add(&mut self, name: &str, price: f64, quantity: u32) -> Result<&Product> {
        let next = mutations::add_product(&self.store, name, price, quantity)?;
        self.commit(next);
        queries::find_by_name(&self.store, name)
    }

    pub fn remove(&mut self, name: &str) -> Result<Product> {
        let removed = queries::find_by_name(&self.store, name)?.clone();
        let next = mutations::remove_product(&self.store, name)?;
        self.commit(next);
        Ok(removed)
    }

    pub fn update(&mut self, name: &str, update: &ProductUpdate) -> Result<&Product> {
        let final_name = update.name.clone().unwrap_or_else(|| name.to_string());
        let next = mutations::update_product(&self.store, name, update)?;
        self.commit(next);
        queries::find_by_name(&self.store, &final_name)
    }

    /// Restore the store as it was before the last successful mutation.
    /// Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(prior) => {
                self.store = prior;
                true
            }
            None => false,
        }
    }

    fn commit(&mut self, next: Store) {
        self.history.push(std::mem::replace(&mut self.store, next));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StockError;
    use crate::model::demo_store;

    #[test]
    fn mutations_go_through_the_functional_core() {
        let mut api = StockApi::new(demo_store());
        api.add("Webcam", 45.5, 7).unwrap();
        assert_eq!(api.list().1, 5);

        let removed = api.remove("Mouse").unwrap();
        assert_eq!(removed.price, 50.0);
        assert!(matches!(api.find("Mouse"), Err(StockError::NotFound(_))));
    }

    #[test]
    fn failed_mutations_leave_the_store_alone() {
        let mut api = StockApi::new(demo_store());
        let before = api.store().clone();
        assert!(api.add("Mouse", 5.0, 2).is_err());
        assert_eq!(*api.store(), before);
        assert!(!api.undo(), "a failed mutation must not create history");
    }

    #[test]
    fn undo_walks_back_through_prior_stores() {
        let mut api = StockApi::new(demo_store());
        let initial = api.store().clone();

        api.add("Webcam", 45.5, 7).unwrap();
        let after_add = api.store().clone();
        api.remove("Laptop").unwrap();

        assert!(api.undo());
        assert_eq!(*api.store(), after_add);
        assert!(api.undo());
        assert_eq!(*api.store(), initial);
        assert!(!api.undo());
    }

    #[test]
    fn update_returns_the_renamed_product() {
        let mut api = StockApi::new(demo_store());
        let update = ProductUpdate {
            name: Some("Trackball".to_string()),
            price: Some(40.0),
            ..Default::default()
        };
        let product = api.update("Mouse", &update).unwrap();
        assert_eq!(product.name, "Trackball");
        assert_eq!(product.price, 40.0);
        assert_eq!(product.quantity, 1);
    }
}
