// SPDX-License-Identifier: MPL-2.0
//! Diagnostic overlay showing the live scale and pan offset.
//!
//! The panel starts hidden. Holding the hotspot for at least
//! [`LONG_PRESS_MIN_MILLIS`] toggles it; shorter presses are ignored.

use super::zoom_pan::ZoomState;
use crate::config::LONG_PRESS_MIN_MILLIS;
use crate::gesture::{AnimationSpec, Transition};
use std::time::Duration;

/// Minimum hold on the hotspot that counts as a long press.
pub const LONG_PRESS_MIN: Duration = Duration::from_millis(LONG_PRESS_MIN_MILLIS);

#[derive(Debug, Clone, Copy, Default)]
pub struct State {
    visible: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// The hotspot was released after being held for the given time.
    HotspotPressed(Duration),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    None,
    /// Opacity change, `0.0` hidden to `1.0` shown or the reverse.
    Fade(Transition<f32>),
}

/// Formatted values for the three readout fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Readout {
    pub scale: String,
    pub width: String,
    pub height: String,
}

impl State {
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::HotspotPressed(held) if held >= LONG_PRESS_MIN => {
                let from = self.opacity();
                self.visible = !self.visible;
                Effect::Fade(Transition::new(
                    from,
                    self.opacity(),
                    AnimationSpec::panel_fade(),
                ))
            }
            Message::HotspotPressed(_) => Effect::None,
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn opacity(&self) -> f32 {
        if self.visible {
            1.0
        } else {
            0.0
        }
    }
}

#[must_use]
pub fn readout(state: &ZoomState) -> Readout {
    Readout {
        scale: format_number(state.scale),
        width: format_number(state.offset.x),
        height: format_number(state.offset.y),
    }
}

/// Formats a number for display (removes unnecessary decimal places)
#[must_use]
pub fn format_number(value: f32) -> String {
    if value.fract().abs() < f32::EPSILON {
        // Value has no fractional part, so it represents an integer exactly
        #[allow(clippy::cast_possible_truncation)]
        let int_value = value as i64;
        format!("{int_value}")
    } else {
        format!("{value:.1}")
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::Offset;

    #[test]
    fn starts_hidden() {
        let panel = State::default();
        assert!(!panel.is_visible());
        assert_eq!(panel.opacity(), 0.0);
    }

    #[test]
    fn long_press_toggles_visibility() {
        let mut panel = State::default();

        let effect = panel.handle(Message::HotspotPressed(Duration::from_secs(1)));
        assert!(panel.is_visible());
        match effect {
            Effect::Fade(t) => {
                assert_eq!(t.from, 0.0);
                assert_eq!(t.to, 1.0);
            }
            Effect::None => panic!("long press should fade the panel"),
        }

        panel.handle(Message::HotspotPressed(Duration::from_millis(1500)));
        assert!(!panel.is_visible());
    }

    #[test]
    fn short_press_is_ignored() {
        let mut panel = State::default();
        let effect = panel.handle(Message::HotspotPressed(Duration::from_millis(999)));
        assert_eq!(effect, Effect::None);
        assert!(!panel.is_visible());
    }

    #[test]
    fn readout_formats_scale_and_offset() {
        let state = ZoomState {
            scale: 5.0,
            offset: Offset::new(-12.5, 40.0),
        };
        assert_eq!(
            readout(&state),
            Readout {
                scale: "5".into(),
                width: "-12.5".into(),
                height: "40".into(),
            }
        );
    }

    #[test]
    fn format_number_trims_trailing_zeroes() {
        assert_eq!(format_number(1.0), "1");
        assert_eq!(format_number(2.3), "2.3");
        assert_eq!(format_number(1.04), "1");
        assert_eq!(format_number(0.5), "0.5");
    }
}
