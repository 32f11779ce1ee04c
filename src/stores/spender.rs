//! Defines the spender store trait.

use crate::{Error, NewSpender, Spender};

/// Handles the creation and retrieval of spenders.
pub trait SpenderStore {
    /// Create a new spender in the store.
    fn create(&mut self, spender: NewSpender) -> Result<Spender, Error>;

    /// Retrieve every spender in the store in the order they were created.
    fn get_all(&self) -> Result<Vec<Spender>, Error>;
}
