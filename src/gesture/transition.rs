// SPDX-License-Identifier: MPL-2.0
//! Explicit transition descriptors.
//!
//! The controllers never interpolate. Each animated change is returned as
//! its endpoints plus an [`AnimationSpec`]; the host decides how to draw the
//! frames in between. Only the endpoint values are guaranteed.

use crate::config::{
    DRAG_FOLLOW_MILLIS, INFO_PANEL_FADE_MILLIS, SLIDE_SNAP_MILLIS, SPRING_RESPONSE_MILLIS,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Curve the host should apply between the endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Easing {
    /// Critically damped spring.
    Spring,
    /// Constant velocity.
    Linear,
    /// Decelerating cubic.
    EaseOut,
}

/// Easing plus a duration hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationSpec {
    pub easing: Easing,
    pub duration_millis: u64,
}

impl AnimationSpec {
    #[must_use]
    pub const fn new(easing: Easing, duration_millis: u64) -> Self {
        Self {
            easing,
            duration_millis,
        }
    }

    /// Spring used for zoom level changes.
    #[must_use]
    pub const fn spring() -> Self {
        Self::new(Easing::Spring, SPRING_RESPONSE_MILLIS)
    }

    #[must_use]
    pub const fn linear(duration_millis: u64) -> Self {
        Self::new(Easing::Linear, duration_millis)
    }

    #[must_use]
    pub const fn ease_out(duration_millis: u64) -> Self {
        Self::new(Easing::EaseOut, duration_millis)
    }

    /// Follow animation applied to the pan offset while a drag is live.
    #[must_use]
    pub const fn drag_follow() -> Self {
        Self::linear(DRAG_FOLLOW_MILLIS)
    }

    /// Snap applied when the slide handle is released.
    #[must_use]
    pub const fn slide_snap() -> Self {
        Self::ease_out(SLIDE_SNAP_MILLIS)
    }

    /// Fade applied when the info panel is toggled.
    #[must_use]
    pub const fn panel_fade() -> Self {
        Self::ease_out(INFO_PANEL_FADE_MILLIS)
    }

    /// No animation: the host should jump straight to the target.
    #[must_use]
    pub const fn immediate() -> Self {
        Self::linear(0)
    }

    #[must_use]
    pub fn duration(self) -> Duration {
        Duration::from_millis(self.duration_millis)
    }

    #[must_use]
    pub fn is_immediate(self) -> bool {
        self.duration_millis == 0
    }
}

/// A change of a value from `from` to `to`, animated per `animation`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transition<T> {
    pub from: T,
    pub to: T,
    pub animation: AnimationSpec,
}

impl<T> Transition<T> {
    #[must_use]
    pub fn new(from: T, to: T, animation: AnimationSpec) -> Self {
        Self {
            from,
            to,
            animation,
        }
    }

    /// Maps both endpoints, keeping the animation.
    #[must_use]
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Transition<U> {
        Transition {
            from: f(self.from),
            to: f(self.to),
            animation: self.animation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_carry_expected_easing() {
        assert_eq!(AnimationSpec::spring().easing, Easing::Spring);
        assert_eq!(AnimationSpec::drag_follow().easing, Easing::Linear);
        assert_eq!(AnimationSpec::slide_snap().easing, Easing::EaseOut);
        assert_eq!(
            AnimationSpec::slide_snap().duration(),
            Duration::from_millis(800)
        );
    }

    #[test]
    fn immediate_has_zero_duration() {
        assert!(AnimationSpec::immediate().is_immediate());
        assert!(!AnimationSpec::spring().is_immediate());
    }

    #[test]
    fn map_projects_both_endpoints() {
        let t = Transition::new(1.0_f32, 5.0, AnimationSpec::spring());
        let doubled = t.map(|v| v * 2.0);
        assert_eq!(doubled.from, 2.0);
        assert_eq!(doubled.to, 10.0);
        assert_eq!(doubled.animation, AnimationSpec::spring());
    }
}
