//! Board module tests.
//!
//! - `make_unmake.rs` - Apply/undo correctness and board bookkeeping
//! - `proptest.rs` - Property-based tests

mod proptest;
