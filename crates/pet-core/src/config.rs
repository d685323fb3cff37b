use core::f32::consts::FRAC_PI_2;

use glam::Vec3;

use crate::error::ConfigError;

/// Behavior constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BehaviorConfig {
    /// Distance covered by one motion step (units per fast tick).
    pub walk_speed: f32,
    /// Squared distance below which a moving pet counts as arrived.
    pub arrival_distance_sq: f32,
    /// Blend progress added on every fast tick.
    pub blend_step: f32,
    /// Yaw offset aligning the model's forward axis with its art asset.
    pub yaw_correction: f32,
    /// Region the pet is allowed to stand in.
    pub arena: ArenaBounds,
    /// Weights used by the slow decision tick.
    pub probabilities: CandidateProbabilities,
    /// How the slow tick walks the candidate blocks.
    pub dispatch: DispatchMode,
    /// Pet position at scene start.
    pub pet_spawn: Vec3,
    /// Fixed position of the interactive resource (bowl).
    pub resource_position: Vec3,
    /// Character position assumed until the host reports one.
    pub character_spawn: Vec3,
}

impl BehaviorConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_WALK_SPEED: f32 = 0.015;
    pub const DEFAULT_ARRIVAL_DISTANCE_SQ: f32 = 2.0;
    pub const DEFAULT_BLEND_STEP: f32 = 0.01;
    pub const DEFAULT_YAW_CORRECTION: f32 = -FRAC_PI_2;
    pub const DEFAULT_PET_SPAWN: Vec3 = Vec3::new(9.0, 0.0, 9.0);
    pub const DEFAULT_RESOURCE_POSITION: Vec3 = Vec3::new(1.0, 0.0, 1.0);
    pub const DEFAULT_CHARACTER_SPAWN: Vec3 = Vec3::ZERO;

    pub fn new() -> Self {
        Self {
            walk_speed: Self::DEFAULT_WALK_SPEED,
            arrival_distance_sq: Self::DEFAULT_ARRIVAL_DISTANCE_SQ,
            blend_step: Self::DEFAULT_BLEND_STEP,
            yaw_correction: Self::DEFAULT_YAW_CORRECTION,
            arena: ArenaBounds::default(),
            probabilities: CandidateProbabilities::default(),
            dispatch: DispatchMode::default(),
            pet_spawn: Self::DEFAULT_PET_SPAWN,
            resource_position: Self::DEFAULT_RESOURCE_POSITION,
            character_spawn: Self::DEFAULT_CHARACTER_SPAWN,
        }
    }

    pub fn with_dispatch(mut self, dispatch: DispatchMode) -> Self {
        self.dispatch = dispatch;
        self
    }

    /// Checks that every tunable is usable by the engine.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.walk_speed.is_finite() && self.walk_speed > 0.0) {
            return Err(ConfigError::InvalidSpeed {
                speed: self.walk_speed,
            });
        }
        if !(self.blend_step.is_finite() && self.blend_step > 0.0) {
            return Err(ConfigError::InvalidBlendStep {
                step: self.blend_step,
            });
        }
        if !(self.arrival_distance_sq.is_finite() && self.arrival_distance_sq > 0.0) {
            return Err(ConfigError::InvalidArrivalDistance {
                distance_sq: self.arrival_distance_sq,
            });
        }
        if !(self.arena.min < self.arena.max) {
            return Err(ConfigError::EmptyArena {
                min: self.arena.min,
                max: self.arena.max,
            });
        }
        self.probabilities.validate()
    }
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Open square region on the horizontal (x/z) plane.
///
/// Both axes share the same limits and both ends are excluded, so a
/// position sitting exactly on `min` or `max` is out of bounds. The vertical
/// axis is unconstrained.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArenaBounds {
    pub min: f32,
    pub max: f32,
}

impl ArenaBounds {
    /// Usable 9x9 arena inset from a 10x10 grid.
    pub const DEFAULT: Self = Self { min: 0.5, max: 9.5 };

    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Returns true if `position` lies strictly inside the arena.
    #[inline]
    pub fn contains(&self, position: Vec3) -> bool {
        position.x > self.min
            && position.x < self.max
            && position.z > self.min
            && position.z < self.max
    }
}

impl Default for ArenaBounds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Success probabilities of the slow-tick candidates.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CandidateProbabilities {
    /// Idle block: sit down.
    pub idle_to_sit: f32,
    /// Idle block: start following the character.
    pub idle_to_follow: f32,
    /// UsingResource block: sit down.
    pub using_resource_to_sit: f32,
    /// Follow block: give up and idle.
    pub follow_to_idle: f32,
    /// GoToResource/Sit block: stand idle.
    pub settle_to_idle: f32,
}

impl CandidateProbabilities {
    fn validate(&self) -> Result<(), ConfigError> {
        let entries = [
            ("idle_to_sit", self.idle_to_sit),
            ("idle_to_follow", self.idle_to_follow),
            ("using_resource_to_sit", self.using_resource_to_sit),
            ("follow_to_idle", self.follow_to_idle),
            ("settle_to_idle", self.settle_to_idle),
        ];

        match entries
            .into_iter()
            .find(|(_, p)| !(0.0..=1.0).contains(p))
        {
            Some((candidate, probability)) => Err(ConfigError::InvalidProbability {
                candidate,
                probability,
            }),
            None => Ok(()),
        }
    }
}

impl Default for CandidateProbabilities {
    fn default() -> Self {
        Self {
            idle_to_sit: 0.1,
            idle_to_follow: 0.9,
            using_resource_to_sit: 0.1,
            follow_to_idle: 0.1,
            settle_to_idle: 0.1,
        }
    }
}

/// Which candidate blocks a slow tick evaluates for the current goal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DispatchMode {
    /// The goal's own block plus every block listed after it
    /// (Idle → UsingResource → Follow → GoToResource/Sit).
    #[default]
    Compounded,
    /// Only the goal's own block.
    SingleBlock,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(BehaviorConfig::default().validate(), Ok(()));
    }

    #[test]
    fn arena_excludes_its_edges() {
        let arena = ArenaBounds::DEFAULT;

        assert!(arena.contains(Vec3::new(5.0, 0.0, 5.0)));
        assert!(arena.contains(Vec3::new(0.51, 0.0, 9.49)));
        assert!(arena.contains(Vec3::new(5.0, -100.0, 5.0)));

        assert!(!arena.contains(Vec3::new(0.5, 0.0, 5.0)));
        assert!(!arena.contains(Vec3::new(9.5, 0.0, 5.0)));
        assert!(!arena.contains(Vec3::new(5.0, 0.0, 0.5)));
        assert!(!arena.contains(Vec3::new(5.0, 0.0, 9.5)));
        assert!(!arena.contains(Vec3::new(-1.0, 0.0, 5.0)));
        assert!(!arena.contains(Vec3::new(5.0, 0.0, 12.0)));
    }

    #[test]
    fn rejects_out_of_range_probability() {
        let mut config = BehaviorConfig::default();
        config.probabilities.follow_to_idle = 1.5;

        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidProbability {
                candidate: "follow_to_idle",
                probability: 1.5,
            })
        );
    }

    #[test]
    fn rejects_empty_arena() {
        let mut config = BehaviorConfig::default();
        config.arena = ArenaBounds::new(3.0, 3.0);

        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyArena { .. })
        ));
    }

    #[test]
    fn rejects_non_positive_speed() {
        let mut config = BehaviorConfig::default();
        config.walk_speed = 0.0;

        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSpeed { .. })
        ));
    }
}
