// SPDX-License-Identifier: MPL-2.0
//! Slide-to-confirm control.
//!
//! A handle of fixed width travels along a track. Dragging it right moves it
//! with the finger; on release it snaps either fully out (confirming) or back
//! to the origin, depending on whether it passed the middle of the track.
//! Confirmation is terminal: the host is expected to dismiss the control.
//!
//! Like the zoom controller, the drag delta is taken as the absolute handle
//! position, not added to where the handle was when the drag began.

use crate::config::{DEFAULT_HANDLE_WIDTH, DEFAULT_TRACK_PADDING};
use crate::error::{Error, Result};
use crate::gesture::{AnimationSpec, Observers, SubscriptionId, Transition};
use serde::{Deserialize, Serialize};

/// Geometry used to derive a track from the host's layout width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideConfig {
    handle_width: f32,
    track_padding: f32,
}

impl SlideConfig {
    pub fn new(handle_width: f32, track_padding: f32) -> Result<Self> {
        if !handle_width.is_finite() || handle_width <= 0.0 {
            return Err(Error::InvalidConfiguration(format!(
                "handle width must be a finite positive value, got {handle_width}"
            )));
        }
        if !track_padding.is_finite() || track_padding < 0.0 {
            return Err(Error::InvalidConfiguration(format!(
                "track padding must be a finite non-negative value, got {track_padding}"
            )));
        }
        Ok(Self {
            handle_width,
            track_padding,
        })
    }

    #[must_use]
    pub fn handle_width(&self) -> f32 {
        self.handle_width
    }

    #[must_use]
    pub fn track_padding(&self) -> f32 {
        self.track_padding
    }
}

impl Default for SlideConfig {
    fn default() -> Self {
        Self {
            handle_width: DEFAULT_HANDLE_WIDTH,
            track_padding: DEFAULT_TRACK_PADDING,
        }
    }
}

/// Observable state of the control.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlideState {
    pub track_width: f32,
    pub handle_width: f32,
    /// Always within `0..=track_width - handle_width`.
    pub handle_offset: f32,
    pub confirmed: bool,
}

impl SlideState {
    /// Furthest the handle can travel.
    #[must_use]
    pub fn max_offset(&self) -> f32 {
        self.track_width - self.handle_width
    }

    /// Width of the filled capsule trailing the handle.
    #[must_use]
    pub fn fill_width(&self) -> f32 {
        self.handle_offset + self.handle_width
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlidePhase {
    Idle,
    Dragging,
    /// Released before the midpoint; snapped back to the origin.
    Retracted,
    /// Released past the midpoint. Terminal.
    Confirmed,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// Horizontal translation of the live drag, relative to its start point.
    DragChanged(f32),
    DragEnded,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    None,
    /// Handle follows the finger, no animation.
    Moved(Transition<f32>),
    /// Handle snaps back to the origin.
    Retracted(Transition<f32>),
    /// Handle snaps fully out. Emitted once per controller.
    Confirmed(Transition<f32>),
}

#[derive(Debug)]
pub struct SlideConfirmController {
    state: SlideState,
    phase: SlidePhase,
    /// Last accepted drag delta before clamping; compared to the midpoint on release.
    travel: f32,
    observers: Observers<SlideState>,
}

impl SlideConfirmController {
    /// Builds a control for a track of the given width.
    ///
    /// Fails with [`Error::InvalidConfiguration`] unless both widths are finite
    /// and positive and the track is wider than the handle.
    pub fn new(track_width: f32, handle_width: f32) -> Result<Self> {
        if !track_width.is_finite() || track_width <= 0.0 {
            return Err(Error::InvalidConfiguration(format!(
                "track width must be a finite positive value, got {track_width}"
            )));
        }
        if !handle_width.is_finite() || handle_width <= 0.0 {
            return Err(Error::InvalidConfiguration(format!(
                "handle width must be a finite positive value, got {handle_width}"
            )));
        }
        if track_width <= handle_width {
            return Err(Error::InvalidConfiguration(format!(
                "track width {track_width} must exceed handle width {handle_width}"
            )));
        }
        Ok(Self {
            state: SlideState {
                track_width,
                handle_width,
                handle_offset: 0.0,
                confirmed: false,
            },
            phase: SlidePhase::Idle,
            travel: 0.0,
            observers: Observers::new(),
        })
    }

    /// Builds a control whose track is the layout width minus the configured padding.
    pub fn from_layout(layout_width: f32, config: &SlideConfig) -> Result<Self> {
        Self::new(layout_width - config.track_padding, config.handle_width)
    }

    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::DragChanged(delta_x) => self.on_drag_changed(delta_x),
            Message::DragEnded => self.on_drag_ended(),
        }
    }

    /// Moves the handle to `delta_x`, clamped to the track.
    ///
    /// Non-positive (and NaN) deltas are ignored, as is any input after
    /// confirmation.
    pub fn on_drag_changed(&mut self, delta_x: f32) -> Effect {
        if self.phase == SlidePhase::Confirmed {
            return Effect::None;
        }
        // Written so that NaN fails the guard.
        if !(delta_x > 0.0 && self.state.handle_offset <= self.state.max_offset()) {
            return Effect::None;
        }

        let from = self.state.handle_offset;
        let to = delta_x.min(self.state.max_offset());
        let phase_changed = self.phase != SlidePhase::Dragging;

        self.travel = delta_x;
        self.phase = SlidePhase::Dragging;
        if to == from && !phase_changed {
            return Effect::None;
        }

        self.state.handle_offset = to;
        self.observers.notify(&self.state);
        Effect::Moved(Transition::new(from, to, AnimationSpec::immediate()))
    }

    /// Snaps the handle out if it passed the middle of the track, back otherwise.
    pub fn on_drag_ended(&mut self) -> Effect {
        if self.phase == SlidePhase::Confirmed {
            return Effect::None;
        }

        let from = self.state.handle_offset;
        let travel = std::mem::take(&mut self.travel);

        // Travel rather than the clamped offset, so tracks narrower than twice
        // the handle can still be confirmed.
        if travel > self.state.track_width / 2.0 {
            let to = self.state.max_offset();
            self.state.handle_offset = to;
            self.state.confirmed = true;
            self.phase = SlidePhase::Confirmed;
            tracing::info!(offset = to, "slide confirmed");
            self.observers.notify(&self.state);
            Effect::Confirmed(Transition::new(from, to, AnimationSpec::slide_snap()))
        } else {
            self.state.handle_offset = 0.0;
            self.phase = SlidePhase::Retracted;
            tracing::debug!(from, "slide retracted");
            self.observers.notify(&self.state);
            Effect::Retracted(Transition::new(from, 0.0, AnimationSpec::slide_snap()))
        }
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&SlideState) + 'static) -> SubscriptionId {
        self.observers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    #[must_use]
    pub fn state(&self) -> SlideState {
        self.state
    }

    #[must_use]
    pub fn handle_offset(&self) -> f32 {
        self.state.handle_offset
    }

    #[must_use]
    pub fn is_confirmed(&self) -> bool {
        self.state.confirmed
    }

    #[must_use]
    pub fn phase(&self) -> SlidePhase {
        self.phase
    }

    #[must_use]
    pub fn track_width(&self) -> f32 {
        self.state.track_width
    }

    #[must_use]
    pub fn handle_width(&self) -> f32 {
        self.state.handle_width
    }
}
