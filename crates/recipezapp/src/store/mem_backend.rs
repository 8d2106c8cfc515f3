use super::backend::StorageBackend;
use crate::error::{RecipezError, Result};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory storage backend for testing and throwaway sessions.
///
/// Sessions are single-threaded, so plain `RefCell`s back the `&self` trait methods.
#[derive(Default)]
pub struct MemBackend {
    items: RefCell<HashMap<String, String>>,
    simulate_write_error: RefCell<bool>,
    simulate_read_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Enable read error simulation (storage disabled, quota errors on access).
    pub fn set_simulate_read_error(&self, simulate: bool) {
        *self.simulate_read_error.borrow_mut() = simulate;
    }

    /// Test helper to store arbitrary text, bypassing serialization.
    pub fn put_raw(&self, key: &str, value: &str) {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.items.borrow().contains_key(key)
    }
}

impl StorageBackend for MemBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        if *self.simulate_read_error.borrow() {
            return Err(RecipezError::Io(std::io::Error::other(
                "Simulated read error",
            )));
        }
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(RecipezError::Io(std::io::Error::other(
                "Simulated write error",
            )));
        }
        self.put_raw(key, value);
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(RecipezError::Io(std::io::Error::other(
                "Simulated write error",
            )));
        }
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}
