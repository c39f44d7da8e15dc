// SPDX-License-Identifier: MPL-2.0
//! `snapback` holds the interaction core of two touch controls: a pinch-zoom
//! viewport and a slide-to-confirm handle.
//!
//! Both are plain state machines. A host feeds decoded gesture input
//! (taps, drag deltas, releases), gets back an effect describing the
//! resulting transition, and reads the state to render. Nothing here draws,
//! blocks, or spawns; every operation is a synchronous update of a value
//! owned by one controller.

pub mod config;
pub mod error;
pub mod gesture;
pub mod onboarding;
pub mod paths;
pub mod pinch;
pub mod replay;

#[cfg(test)]
pub(crate) mod test_utils;

pub use error::{Error, Result};
