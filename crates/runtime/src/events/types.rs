//! Event types for different topics.

use pet_core::{GoalTransition, SceneView};
use serde::Serialize;

/// Events related to the pet's behavioral goal
#[derive(Debug, Clone, Serialize)]
pub enum BehaviorEvent {
    /// A goal transition was committed
    GoalChanged {
        transition: GoalTransition,
        /// Fast ticks processed when the transition happened
        frame: u64,
    },
}

/// Render snapshot published after every fast tick
#[derive(Debug, Clone, Serialize)]
pub struct SceneEvent {
    pub frame: u64,
    pub view: SceneView,
}
