//! Deterministic pet behavior logic shared by every host.
//!
//! `pet-core` defines the pet's goal state machine, its straight-line motion
//! driver and the animation crossfade derived from goal transitions. It owns
//! no timers and performs no I/O: hosts call into [`engine::PetEngine`] on
//! their fast and slow ticks and when command events arrive. All state
//! mutation flows through [`engine::PetEngine`], and supporting crates depend
//! on the types re-exported here.
pub mod animation;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;
pub mod view;

pub use animation::AnimationRates;
pub use config::{ArenaBounds, BehaviorConfig, CandidateProbabilities, DispatchMode};
pub use engine::{Candidate, CandidateBlock, GoalTransition, PetEngine, TransitionCause};
pub use env::{PcgRng, RngOracle, SequenceRng, StdRngOracle};
pub use error::ConfigError;
pub use state::{Goal, PetState};
pub use view::{ClipWeight, SceneView};

pub use glam::{Quat, Vec3};
