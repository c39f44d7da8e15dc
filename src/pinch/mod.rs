// SPDX-License-Identifier: MPL-2.0
//! Pinch viewer: zoom/pan controller and its info overlay.
//!
//! Each part follows the same shape: a `Message` in, an `Effect` out,
//! state read back through accessors.

pub mod info_panel;
pub mod zoom_pan;

pub use zoom_pan::{ZoomConfig, ZoomPanController, ZoomPhase, ZoomState};
