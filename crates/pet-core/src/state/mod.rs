//! Mutable pet state shared by the goal machine and the motion driver.
//!
//! [`PetState`] is created once per scene and then mutated only through
//! [`PetEngine`](crate::PetEngine). Hosts own it and hand out `&mut` access
//! to one writer at a time.
mod goal;

pub use goal::Goal;

use glam::{Quat, Vec3};

use crate::config::BehaviorConfig;

/// The single mutable record describing the pet and what it tracks.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PetState {
    /// Last known position of the followed character (host-updated).
    pub character_position: Vec3,
    /// Fixed position of the interactive resource.
    pub resource_position: Vec3,
    /// Current pet position. Written only by the motion driver.
    pub pet_position: Vec3,
    /// Current facing.
    pub pet_orientation: Quat,
    pub goal: Goal,
    /// Goal held before the most recent transition (one level of history).
    pub previous_goal: Goal,
    /// Blend-in progress of the current goal's animation.
    ///
    /// Conceptually in [0, 1]; the stored value may drift slightly outside
    /// between clamps.
    pub animation_blend: f32,
}

impl PetState {
    /// Creates the scene-start state: idle, fully blended, at the spawn point.
    pub fn new(config: &BehaviorConfig) -> Self {
        Self {
            character_position: config.character_spawn,
            resource_position: config.resource_position,
            pet_position: config.pet_spawn,
            pet_orientation: Quat::IDENTITY,
            goal: Goal::Idle,
            previous_goal: Goal::Idle,
            animation_blend: 1.0,
        }
    }

    /// Blend progress clamped to [0, 1].
    #[inline]
    pub fn blend_weight(&self) -> f32 {
        self.animation_blend.clamp(0.0, 1.0)
    }

    /// Target of the current goal, if it is a moving goal.
    pub fn goal_target(&self) -> Option<Vec3> {
        match self.goal {
            Goal::Follow => Some(self.character_position),
            Goal::GoToResource => Some(self.resource_position),
            _ => None,
        }
    }
}

impl Default for PetState {
    fn default() -> Self {
        Self::new(&BehaviorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_start_defaults() {
        let state = PetState::default();

        assert_eq!(state.goal, Goal::Idle);
        assert_eq!(state.previous_goal, Goal::Idle);
        assert_eq!(state.animation_blend, 1.0);
        assert_eq!(state.pet_position, Vec3::new(9.0, 0.0, 9.0));
        assert_eq!(state.resource_position, Vec3::new(1.0, 0.0, 1.0));
        assert_eq!(state.pet_orientation, Quat::IDENTITY);
    }

    #[test]
    fn goal_target_follows_goal() {
        let mut state = PetState::default();
        state.character_position = Vec3::new(4.0, 0.0, 4.0);

        assert_eq!(state.goal_target(), None);

        state.goal = Goal::Follow;
        assert_eq!(state.goal_target(), Some(Vec3::new(4.0, 0.0, 4.0)));

        state.goal = Goal::GoToResource;
        assert_eq!(state.goal_target(), Some(state.resource_position));
    }

    #[test]
    fn blend_weight_is_clamped() {
        let mut state = PetState::default();

        state.animation_blend = -0.004;
        assert_eq!(state.blend_weight(), 0.0);

        state.animation_blend = 1.009;
        assert_eq!(state.blend_weight(), 1.0);
    }
}
