//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `layout.rs` - Initial layout and move application
//! - `validate.rs` - Per-piece legality rules
//! - `placement.rs` - Placement dump/parse
//! - `proptest.rs` - Property-based tests

mod layout;

#[cfg(feature = "serde")]
mod serde_round_trip;
