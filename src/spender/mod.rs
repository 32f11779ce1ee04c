//! Spender management.
//!
//! This module contains the `Spender` model and the route handlers for
//! creating and listing spenders.

mod core;
mod create_endpoint;
mod list_endpoint;

pub use core::{NewSpender, Spender};
pub use create_endpoint::create_spender_endpoint;
pub use list_endpoint::list_spenders_endpoint;
