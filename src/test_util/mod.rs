//! Helpers for building expected values and asserting expression outcomes in
//! tests.
//!
//! These functions keep test cases to one line per literal: build the value
//! the source should decode to, then assert against it.

mod assertions;
mod values;

pub use assertions::{assert_evaluates, assert_rejected, assert_rejected_as};
pub use values::{empty_table, float, int, str_val, table};
