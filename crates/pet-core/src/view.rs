//! Render-facing read model.
//!
//! The host's render pass positions a skinned model, rotates it, and blends
//! three skeletal clips. [`SceneView`] carries exactly that, plus where to
//! draw the resource.

use core::f32::consts::PI;

use glam::{EulerRot, Quat, Vec3};

use crate::animation::AnimationRates;
use crate::state::{Goal, PetState};

/// Weight of one named skeletal clip.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ClipWeight {
    pub clip: &'static str,
    pub weight: f32,
}

/// Snapshot of everything the host needs to draw the pet and its resource.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SceneView {
    pub goal: Goal,
    pub pet_position: Vec3,
    /// Euler angles in degrees as (pitch, yaw, roll).
    pub pet_rotation: Vec3,
    /// Duration the host should take to ease into a new rotation.
    pub rotation_transition_ms: u32,
    pub clips: [ClipWeight; 3],
    pub resource_position: Vec3,
}

impl SceneView {
    pub const ROTATION_TRANSITION_MS: u32 = 300;

    pub const IDLE_CLIP: &'static str = "Idle";
    pub const WALK_CLIP: &'static str = "Walking";
    pub const SIT_CLIP: &'static str = "Sit_Idle_2";

    pub fn from_state(state: &PetState) -> Self {
        let rates = AnimationRates::from_state(state);

        Self {
            goal: state.goal,
            pet_position: state.pet_position,
            pet_rotation: euler_degrees(state.pet_orientation),
            rotation_transition_ms: Self::ROTATION_TRANSITION_MS,
            clips: [
                ClipWeight {
                    clip: Self::IDLE_CLIP,
                    weight: rates.idle,
                },
                ClipWeight {
                    clip: Self::WALK_CLIP,
                    weight: rates.walk,
                },
                ClipWeight {
                    clip: Self::SIT_CLIP,
                    weight: rates.sit,
                },
            ],
            resource_position: state.resource_position,
        }
    }

    /// Weight of the named clip, if present.
    pub fn clip_weight(&self, clip: &str) -> Option<f32> {
        self.clips
            .iter()
            .find(|entry| entry.clip == clip)
            .map(|entry| entry.weight)
    }
}

/// Converts an orientation built yaw-pitch-roll into (pitch, yaw, roll)
/// degrees.
pub fn euler_degrees(orientation: Quat) -> Vec3 {
    let (yaw, pitch, roll) = orientation.to_euler(EulerRot::YXZ);
    Vec3::new(pitch, yaw, roll) * (180.0 / PI)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clips_follow_animation_rates() {
        let state = PetState {
            previous_goal: Goal::Follow,
            goal: Goal::Sit,
            animation_blend: 0.3,
            ..PetState::default()
        };

        let view = SceneView::from_state(&state);

        assert!((view.clip_weight("Sit_Idle_2").unwrap() - 0.3).abs() < 1e-6);
        assert!((view.clip_weight("Walking").unwrap() - 0.7).abs() < 1e-6);
        assert!(view.clip_weight("Idle").unwrap().abs() < 1e-6);
        assert_eq!(view.clip_weight("Run"), None);
        assert_eq!(view.rotation_transition_ms, 300);
        assert_eq!(view.resource_position, Vec3::new(1.0, 0.0, 1.0));
    }

    #[test]
    fn rotation_is_reported_in_degrees() {
        let orientation = Quat::from_euler(EulerRot::YXZ, PI / 2.0, PI / 6.0, 0.0);
        let degrees = euler_degrees(orientation);

        assert!((degrees.x - 30.0).abs() < 1e-3);
        assert!((degrees.y - 90.0).abs() < 1e-3);
        assert!(degrees.z.abs() < 1e-3);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_to_json() {
        let json = serde_json::to_value(SceneView::from_state(&PetState::default()))
            .expect("scene view serializes");

        assert_eq!(json["goal"], "Idle");
        assert_eq!(json["clips"][0]["clip"], "Idle");
        assert_eq!(json["rotation_transition_ms"], 300);
    }
}
