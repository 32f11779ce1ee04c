//! Defines the spender model.

use serde::{Deserialize, Serialize};

use crate::database_id::SpenderId;

/// A person whose income and expenses are tracked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spender {
    /// The ID of the spender, assigned by the database.
    pub id: SpenderId,
    /// The spender's display name.
    pub name: String,
    /// The spender's email address.
    ///
    /// The address is stored as given, it is neither validated nor required
    /// to be unique.
    pub email: String,
}

/// The data needed to create a [Spender].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSpender {
    /// The spender's display name.
    pub name: String,
    /// The spender's email address.
    pub email: String,
}

impl NewSpender {
    /// Attach the database `id` to this spender.
    pub fn finalise(self, id: SpenderId) -> Spender {
        Spender {
            id,
            name: self.name,
            email: self.email,
        }
    }
}
