//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Move path counts against published tables
//! - `make_unmake.rs` - Apply/undo correctness and history
//! - `edge_cases.rs` - Special positions, check escapes and contract errors
//! - `proptest.rs` - Property-based tests

mod edge_cases;
