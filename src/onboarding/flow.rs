// SPDX-License-Identifier: MPL-2.0
//! First-run onboarding flow.
//!
//! Shows the onboarding screen with its slide control until the user
//! confirms, then the home screen. Restarting from home brings onboarding
//! back with a fresh control. The "onboarding active" flag lives in an
//! injected [`FlagStore`], so the choice survives restarts.

use super::flag_store::FlagStore;
use super::slide_confirm::{self, SlideConfig, SlideConfirmController};
use super::sound::{SoundCue, SoundPlayer};
use crate::error::Result;
use crate::gesture::Transition;

/// Store key of the "onboarding active" flag.
pub const ONBOARDING_KEY: &str = "onboarding";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Onboarding,
    Home,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// Gesture on the slide control (ignored on the home screen).
    Slide(slide_confirm::Message),
    /// Restart button on the home screen.
    Restart,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    None,
    /// The slide control moved without completing.
    Slide(slide_confirm::Effect),
    /// Onboarding finished; animate the handle snap, then show home.
    Completed(Transition<f32>),
    /// Onboarding is shown again.
    Restarted,
}

pub struct OnboardingFlow<S, P> {
    store: S,
    player: P,
    layout_width: f32,
    config: SlideConfig,
    screen: Screen,
    slide: Option<SlideConfirmController>,
}

impl<S: FlagStore, P: SoundPlayer> OnboardingFlow<S, P> {
    /// Builds the flow, reading the current screen from the store.
    ///
    /// The slide geometry is validated up front even when starting on the
    /// home screen, so a bad layout fails here rather than on restart.
    pub fn new(store: S, player: P, layout_width: f32, config: SlideConfig) -> Result<Self> {
        let slide = SlideConfirmController::from_layout(layout_width, &config)?;
        let onboarding_active = store.get(ONBOARDING_KEY).unwrap_or(true);
        let (screen, slide) = if onboarding_active {
            (Screen::Onboarding, Some(slide))
        } else {
            (Screen::Home, None)
        };
        tracing::debug!(?screen, layout_width, "onboarding flow mounted");

        Ok(Self {
            store,
            player,
            layout_width,
            config,
            screen,
            slide,
        })
    }

    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Slide(slide_msg) => {
                let Some(slide) = self.slide.as_mut() else {
                    return Effect::None;
                };
                match slide.handle(slide_msg) {
                    slide_confirm::Effect::Confirmed(snap) => {
                        self.complete();
                        Effect::Completed(snap)
                    }
                    slide_confirm::Effect::None => Effect::None,
                    other => Effect::Slide(other),
                }
            }
            Message::Restart => self.restart(),
        }
    }

    fn complete(&mut self) {
        self.persist(false);
        self.player.play(SoundCue::Success);
        self.slide = None;
        self.screen = Screen::Home;
        tracing::info!("onboarding completed");
    }

    fn restart(&mut self) -> Effect {
        if self.screen == Screen::Onboarding {
            return Effect::None;
        }
        // Validated in `new`; the geometry has not changed since.
        let slide = match SlideConfirmController::from_layout(self.layout_width, &self.config) {
            Ok(slide) => slide,
            Err(err) => {
                tracing::warn!(%err, "cannot remount slide control");
                return Effect::None;
            }
        };
        self.persist(true);
        self.player.play(SoundCue::Chimeup);
        self.slide = Some(slide);
        self.screen = Screen::Onboarding;
        tracing::info!("onboarding restarted");
        Effect::Restarted
    }

    /// Store failures do not block the screen change.
    fn persist(&mut self, onboarding_active: bool) {
        if let Err(err) = self.store.set(ONBOARDING_KEY, onboarding_active) {
            tracing::warn!(%err, onboarding_active, "failed to persist onboarding flag");
        }
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// The slide control, present only on the onboarding screen.
    #[must_use]
    pub fn slide(&self) -> Option<&SlideConfirmController> {
        self.slide.as_ref()
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}
