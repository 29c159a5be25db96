//! `stockroom-core` — inventory foundation building blocks.
//!
//! This crate contains the error taxonomy and validated value types shared by
//! the store, the logging setup and the CLI. It performs no IO.

pub mod error;
pub mod value_object;

pub use error::{InventoryError, InventoryResult};
pub use value_object::{ItemName, ValueObject};
