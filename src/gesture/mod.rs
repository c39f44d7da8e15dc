// SPDX-License-Identifier: MPL-2.0
//! Vocabulary shared by the interaction controllers.
//!
//! Controllers consume already-decoded drag deltas expressed as [`Offset`],
//! describe every animated change as a [`Transition`], and notify
//! subscribers through [`Observers`].

pub mod observer;
pub mod transition;

pub use observer::{Observers, SubscriptionId};
pub use transition::{AnimationSpec, Easing, Transition};

use serde::{Deserialize, Serialize};

/// 2-D translation in logical units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns whether both components are finite numbers.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f32, f32)> for Offset {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_default() {
        assert_eq!(Offset::default(), Offset::ZERO);
    }

    #[test]
    fn non_finite_components_are_detected() {
        assert!(Offset::new(3.0, -4.0).is_finite());
        assert!(!Offset::new(f32::NAN, 0.0).is_finite());
        assert!(!Offset::new(0.0, f32::INFINITY).is_finite());
    }
}
