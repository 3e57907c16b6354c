//! Domain types shared by the store and API crates.

pub mod error;
pub mod types;

pub use error::CoreError;
