//! Straight-line motion and facing.

use core::f32::consts::FRAC_PI_2;

use glam::{EulerRot, Quat, Vec3};

use super::{GoalTransition, PetEngine, TransitionCause};
use crate::state::Goal;

/// Orientation facing from `from` toward `to`.
///
/// Yaw is measured on the horizontal plane and shifted by `yaw_correction`;
/// pitch follows the vertical rise over the horizontal run. Rotations are
/// applied yaw, then pitch, then roll (always zero).
pub fn look_at(from: Vec3, to: Vec3, yaw_correction: f32) -> Quat {
    let dv = to - from;
    let yaw = -dv.z.atan2(dv.x) - FRAC_PI_2 + yaw_correction;
    let horizontal = (dv.x * dv.x + dv.z * dv.z).sqrt();
    let pitch = dv.y.atan2(horizontal);

    Quat::from_euler(EulerRot::YXZ, yaw, pitch, 0.0)
}

impl PetEngine<'_> {
    /// Returns true if `position` is inside the configured arena.
    #[inline]
    pub fn is_in_bounds(&self, position: Vec3) -> bool {
        self.config.arena.contains(position)
    }

    /// Steps the pet one fixed-length stride toward `target`.
    ///
    /// The stride is computed from the full 3D direction and then flattened,
    /// so a vertical offset shortens it. A stride that would leave the arena
    /// is discarded and the pet falls back to [`Goal::Idle`]; position and
    /// orientation stay untouched in that case. Otherwise the pet moves and
    /// turns to face `target` as seen from where it stood before the step.
    pub fn walk_towards(&mut self, target: Vec3) -> Option<GoalTransition> {
        let origin = self.state.pet_position;

        let mut stride = (target - origin).normalize_or_zero() * self.config.walk_speed;
        stride.y = 0.0;
        let next = origin + stride;

        if !self.is_in_bounds(next) {
            return Some(self.set_goal(Goal::Idle, TransitionCause::OutOfBounds));
        }

        self.state.pet_position = next;
        self.state.pet_orientation = look_at(origin, target, self.config.yaw_correction);
        None
    }
}
