//! Board module tests.
//!
//! - `perft.rs` - Leaf counts of the legal move tree
//! - `scenarios.rs` - Game fragments played through the public move API
//! - `edge_cases.rs` - Special positions
//! - `proptest.rs` - Property-based tests over random games

mod edge_cases;
