use crate::state::Goal;

/// Why a goal transition happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionCause {
    /// Host reported a click on the pet.
    PetClicked,
    /// Host reported a click on the resource.
    ResourceClicked,
    /// A moving goal reached its target.
    Arrived,
    /// A motion step would have left the arena.
    OutOfBounds,
    /// A slow-tick candidate draw succeeded.
    Decision,
}

/// Record of one committed goal change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GoalTransition {
    pub from: Goal,
    pub to: Goal,
    pub cause: TransitionCause,
}
