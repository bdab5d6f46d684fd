//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Leaf counts for standard positions
//! - `make_unmake.rs` - Make/undo correctness and move legality
//! - `movegen.rs` - Pseudo-legal move generation
//! - `attacks.rs` - Attack detection
//! - `edge_cases.rs` - Special positions and edge cases
//! - `proptest.rs` - Property-based tests

mod attacks;
mod proptest;
