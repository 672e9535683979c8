//! Catalog domain module.
//!
//! This crate contains the product model held by the registry, implemented
//! purely as deterministic domain logic (no IO, no storage).

pub mod product;

pub use product::{Product, ProductId, StockItem};
