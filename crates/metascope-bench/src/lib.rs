//! metascope benchmark suite
//!
//! Criterion benchmarks for the catalog and the visitor engine.
//!
//! # Benchmark Categories
//!
//! - **Lookup**: class lookup by type and by name, attribute queries, snapshots
//! - **Traversal**: type-level and object-level visits, manual recursion

pub mod fixtures;

pub use fixtures::{catalog, orders, Scale};
