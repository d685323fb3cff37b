//! Configuration errors.
//!
//! Behavior itself has no failure paths: bounds violations are ordinary
//! transitions. Only a malformed [`BehaviorConfig`](crate::BehaviorConfig)
//! is rejected.

/// Errors raised by [`BehaviorConfig::validate`](crate::BehaviorConfig::validate).
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConfigError {
    /// Movement speed must be a positive, finite distance per tick.
    #[error("walk speed must be positive and finite (got {speed})")]
    InvalidSpeed { speed: f32 },

    /// Blend step must be a positive, finite increment per tick.
    #[error("blend step must be positive and finite (got {step})")]
    InvalidBlendStep { step: f32 },

    /// Arrival radius must be positive.
    #[error("arrival distance squared must be positive and finite (got {distance_sq})")]
    InvalidArrivalDistance { distance_sq: f32 },

    /// Arena must describe a non-empty open interval.
    #[error("arena bounds are empty (min: {min}, max: {max})")]
    EmptyArena { min: f32, max: f32 },

    /// A candidate probability lies outside [0, 1].
    #[error("probability for {candidate} must be within [0, 1] (got {probability})")]
    InvalidProbability {
        /// Name of the offending candidate.
        candidate: &'static str,
        /// The rejected value.
        probability: f32,
    },
}
