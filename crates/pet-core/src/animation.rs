//! Crossfade weights for the three animation clips.

use crate::state::{Goal, PetState};

/// Blend weights for the idle, sitting and walking clips.
///
/// Weights are non-negative and sum to 1. Right after a transition the
/// outgoing goal's clip carries `1 - weight` and the incoming goal's clip
/// carries `weight`; `Idle` and `UsingResource` have no clip of their own
/// and surface as whatever the idle clip is left with.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimationRates {
    pub idle: f32,
    pub sit: f32,
    pub walk: f32,
}

impl AnimationRates {
    /// Derives the weights from the goal history and blend progress.
    pub fn from_state(state: &PetState) -> Self {
        let weight = state.blend_weight();
        let inverse = 1.0 - weight;

        let mut sit = 0.0;
        let mut walk = 0.0;

        match state.previous_goal {
            Goal::Sit => sit = inverse,
            Goal::Follow | Goal::GoToResource => walk = inverse,
            Goal::Idle | Goal::UsingResource => {}
        }

        // Sit overwrites rather than accumulates.
        match state.goal {
            Goal::Sit => sit = weight,
            Goal::Follow | Goal::GoToResource => walk += weight,
            Goal::Idle | Goal::UsingResource => {}
        }

        Self {
            idle: 1.0 - (sit + walk),
            sit,
            walk,
        }
    }

    #[inline]
    pub fn total(&self) -> f32 {
        self.idle + self.sit + self.walk
    }
}
