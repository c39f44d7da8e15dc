// SPDX-License-Identifier: MPL-2.0
//! Audio cue hook.
//!
//! Playback itself belongs to the host; the flow only says which cue to play.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Onboarding was restarted from the home screen.
    Chimeup,
    /// The slide control was confirmed.
    Success,
}

impl SoundCue {
    /// Asset name of the cue, without extension.
    #[must_use]
    pub fn asset_name(self) -> &'static str {
        match self {
            SoundCue::Chimeup => "chimeup",
            SoundCue::Success => "success",
        }
    }
}

pub trait SoundPlayer {
    fn play(&mut self, cue: SoundCue);
}

impl<F: FnMut(SoundCue)> SoundPlayer for F {
    fn play(&mut self, cue: SoundCue) {
        self(cue);
    }
}

/// Player that drops every cue.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl SoundPlayer for Silent {
    fn play(&mut self, _cue: SoundCue) {}
}
