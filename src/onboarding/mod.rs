// SPDX-License-Identifier: MPL-2.0
//! Onboarding: slide-to-confirm control and the flow that hosts it.
//!
//! ```text
//! flow.rs (host)
//!     ├── slide_confirm - Handle position and confirmation
//!     ├── flag_store    - Persisted "onboarding active" flag
//!     └── sound         - Audio cue hook
//! ```

pub mod flag_store;
pub mod flow;
pub mod slide_confirm;
pub mod sound;

pub use flag_store::{FileFlagStore, FlagStore, MemoryFlagStore};
pub use flow::{OnboardingFlow, Screen, ONBOARDING_KEY};
pub use slide_confirm::{SlideConfig, SlideConfirmController, SlidePhase, SlideState};
pub use sound::{Silent, SoundCue, SoundPlayer};
