// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons.
//!
//! Re-exports the `approx` crate's assertion macros, which handle the
//! rounding that `assert_eq!` cannot when scales are stepped by fractions.

pub use approx::assert_abs_diff_eq;
