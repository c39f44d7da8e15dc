// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Zoom**: Magnification bounds and step
//! - **Slide**: Handle and track geometry of the slide-to-confirm control
//! - **Animation**: Durations handed to the host with each transition
//! - **Info panel**: Long-press threshold of the hotspot

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Scale of the content at rest (original size).
pub const MIN_SCALE: f32 = 1.0;

/// Default maximum magnification (double-tap target).
pub const DEFAULT_MAX_SCALE: f32 = 5.0;

/// Default increment applied by the step up/down controls.
pub const DEFAULT_SCALE_STEP: f32 = 1.0;

// ==========================================================================
// Slide Defaults
// ==========================================================================

/// Default width of the draggable handle, in logical units.
pub const DEFAULT_HANDLE_WIDTH: f32 = 80.0;

/// Horizontal space subtracted from the layout width to obtain the track width.
pub const DEFAULT_TRACK_PADDING: f32 = 80.0;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Response time of the spring used for zoom changes (milliseconds).
pub const SPRING_RESPONSE_MILLIS: u64 = 550;

/// Duration of the linear follow animation while panning (milliseconds).
pub const DRAG_FOLLOW_MILLIS: u64 = 1000;

/// Duration of the ease-out snap when the slide handle is released (milliseconds).
pub const SLIDE_SNAP_MILLIS: u64 = 800;

/// Duration of the info panel fade (milliseconds).
pub const INFO_PANEL_FADE_MILLIS: u64 = 350;

// ==========================================================================
// Info Panel Defaults
// ==========================================================================

/// Minimum press duration on the info hotspot to toggle the panel (milliseconds).
pub const LONG_PRESS_MIN_MILLIS: u64 = 1000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_SCALE > 0.0);
    assert!(DEFAULT_MAX_SCALE > MIN_SCALE);
    assert!(DEFAULT_SCALE_STEP > 0.0);

    assert!(DEFAULT_HANDLE_WIDTH > 0.0);
    assert!(DEFAULT_TRACK_PADDING >= 0.0);

    assert!(SPRING_RESPONSE_MILLIS > 0);
    assert!(DRAG_FOLLOW_MILLIS > 0);
    assert!(SLIDE_SNAP_MILLIS > 0);
    assert!(LONG_PRESS_MIN_MILLIS > 0);
};
