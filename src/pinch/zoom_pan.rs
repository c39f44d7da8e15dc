// SPDX-License-Identifier: MPL-2.0
//! Zoom and pan controller for a single piece of viewport content.
//!
//! Double-tap toggles between rest (`scale == 1`) and full magnification,
//! the step controls move the scale by a fixed increment, and a drag
//! translates the content. Every input is accepted in every state;
//! out-of-range requests are clamped, never rejected.
//!
//! The drag delta is assigned as the absolute offset rather than accumulated
//! from a drag-start baseline, and it is not bounded against the current
//! scale. Keeping the content on screen is the host viewport's concern.

use crate::config::{DEFAULT_MAX_SCALE, DEFAULT_SCALE_STEP, MIN_SCALE};
use crate::error::{Error, Result};
use crate::gesture::{AnimationSpec, Observers, Offset, SubscriptionId, Transition};
use serde::{Deserialize, Serialize};

/// Validated zoom tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomConfig {
    max_scale: f32,
    scale_step: f32,
}

impl ZoomConfig {
    /// Builds a config, failing fast on values the controller cannot honor.
    pub fn new(max_scale: f32, scale_step: f32) -> Result<Self> {
        if !max_scale.is_finite() || max_scale <= MIN_SCALE {
            return Err(Error::InvalidConfiguration(format!(
                "max scale must be a finite value above {MIN_SCALE}, got {max_scale}"
            )));
        }
        if !scale_step.is_finite() || scale_step <= 0.0 {
            return Err(Error::InvalidConfiguration(format!(
                "scale step must be a finite positive value, got {scale_step}"
            )));
        }
        Ok(Self {
            max_scale,
            scale_step,
        })
    }

    #[must_use]
    pub fn max_scale(&self) -> f32 {
        self.max_scale
    }

    #[must_use]
    pub fn scale_step(&self) -> f32 {
        self.scale_step
    }
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            max_scale: DEFAULT_MAX_SCALE,
            scale_step: DEFAULT_SCALE_STEP,
        }
    }
}

/// Magnification and pan translation of the content.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomState {
    pub scale: f32,
    pub offset: Offset,
}

impl ZoomState {
    #[must_use]
    pub fn phase(&self) -> ZoomPhase {
        if self.scale > MIN_SCALE {
            ZoomPhase::Zoomed
        } else {
            ZoomPhase::AtRest
        }
    }
}

impl Default for ZoomState {
    fn default() -> Self {
        Self {
            scale: MIN_SCALE,
            offset: Offset::ZERO,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomPhase {
    AtRest,
    Zoomed,
}

/// Input events delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    DoubleTap,
    /// Cumulative translation of the live drag, relative to its start point.
    DragChanged(Offset),
    DragEnded,
    ScaleStepUp,
    ScaleStepDown,
    Reset,
}

/// What the host should do after an input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// Nothing changed.
    None,
    /// State moved; animate between the endpoints.
    Animate(Transition<ZoomState>),
}

#[derive(Debug, Default)]
pub struct ZoomPanController {
    config: ZoomConfig,
    state: ZoomState,
    observers: Observers<ZoomState>,
}

impl ZoomPanController {
    #[must_use]
    pub fn new(config: ZoomConfig) -> Self {
        Self {
            config,
            state: ZoomState::default(),
            observers: Observers::new(),
        }
    }

    /// Handle a zoom/pan message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::DoubleTap => self.on_double_tap(),
            Message::DragChanged(delta) => self.on_drag_changed(delta),
            Message::DragEnded => self.on_drag_ended(),
            Message::ScaleStepUp => self.on_scale_step_up(),
            Message::ScaleStepDown => self.on_scale_step_down(),
            Message::Reset => self.reset(),
        }
    }

    /// Zooms fully in from rest, otherwise resets.
    pub fn on_double_tap(&mut self) -> Effect {
        match self.state.phase() {
            ZoomPhase::AtRest => self.apply(
                ZoomState {
                    scale: self.config.max_scale,
                    offset: self.state.offset,
                },
                AnimationSpec::spring(),
            ),
            ZoomPhase::Zoomed => self.reset(),
        }
    }

    /// Returns to `scale == 1` with no translation.
    pub fn reset(&mut self) -> Effect {
        self.apply(ZoomState::default(), AnimationSpec::spring())
    }

    /// Sets the offset to the drag delta. Non-finite deltas are ignored.
    pub fn on_drag_changed(&mut self, delta: Offset) -> Effect {
        if !delta.is_finite() {
            tracing::debug!(?delta, "ignoring non-finite drag delta");
            return Effect::None;
        }
        self.apply(
            ZoomState {
                scale: self.state.scale,
                offset: delta,
            },
            AnimationSpec::drag_follow(),
        )
    }

    /// A pan only persists while zoomed in; at rest the content snaps back.
    pub fn on_drag_ended(&mut self) -> Effect {
        if self.state.scale <= MIN_SCALE {
            self.reset()
        } else {
            Effect::None
        }
    }

    pub fn on_scale_step_up(&mut self) -> Effect {
        let scale = (self.state.scale + self.config.scale_step).min(self.config.max_scale);
        self.apply(
            ZoomState {
                scale,
                offset: self.state.offset,
            },
            AnimationSpec::spring(),
        )
    }

    /// Reaching rest or below forces a full reset, offset included.
    pub fn on_scale_step_down(&mut self) -> Effect {
        let scale = self.state.scale - self.config.scale_step;
        if scale <= MIN_SCALE {
            return self.reset();
        }
        self.apply(
            ZoomState {
                scale,
                offset: self.state.offset,
            },
            AnimationSpec::spring(),
        )
    }

    fn apply(&mut self, target: ZoomState, animation: AnimationSpec) -> Effect {
        if target == self.state {
            return Effect::None;
        }
        let transition = Transition::new(self.state, target, animation);
        tracing::debug!(from = ?transition.from, to = ?transition.to, "zoom transition");
        self.state = target;
        self.observers.notify(&self.state);
        Effect::Animate(transition)
    }

    /// Registers a callback invoked after every state change.
    pub fn subscribe(&mut self, callback: impl FnMut(&ZoomState) + 'static) -> SubscriptionId {
        self.observers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    #[must_use]
    pub fn state(&self) -> ZoomState {
        self.state
    }

    #[must_use]
    pub fn scale(&self) -> f32 {
        self.state.scale
    }

    #[must_use]
    pub fn offset(&self) -> Offset {
        self.state.offset
    }

    #[must_use]
    pub fn phase(&self) -> ZoomPhase {
        self.state.phase()
    }

    #[must_use]
    pub fn config(&self) -> ZoomConfig {
        self.config
    }
}
