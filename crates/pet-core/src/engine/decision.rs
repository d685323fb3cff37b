//! Slow-tick candidate tables.
//!
//! Candidates are grouped into four blocks. A slow tick walks a schedule of
//! blocks chosen from the goal held at tick entry; in
//! [`DispatchMode::Compounded`] that schedule is the goal's own block plus
//! every block listed after it in [`CandidateBlock::ORDER`].

use crate::config::{CandidateProbabilities, DispatchMode};
use crate::state::Goal;

/// A goal the slow tick may switch to, with its success probability.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candidate {
    pub goal: Goal,
    pub probability: f32,
}

impl Candidate {
    pub const fn new(goal: Goal, probability: f32) -> Self {
        Self { goal, probability }
    }
}

/// Ordered group of candidates evaluated together.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
pub enum CandidateBlock {
    /// Owned by `Idle`: sit, then follow.
    Idle,
    /// Owned by `UsingResource`: sit.
    UsingResource,
    /// Owned by `Follow`: idle.
    Follow,
    /// Owned by `GoToResource` and `Sit`: idle.
    Settle,
}

impl CandidateBlock {
    /// Evaluation order shared by every schedule.
    pub const ORDER: [CandidateBlock; 4] = [
        CandidateBlock::Idle,
        CandidateBlock::UsingResource,
        CandidateBlock::Follow,
        CandidateBlock::Settle,
    ];

    /// Block owned by `goal`.
    pub fn owned_by(goal: Goal) -> CandidateBlock {
        match goal {
            Goal::Idle => CandidateBlock::Idle,
            Goal::UsingResource => CandidateBlock::UsingResource,
            Goal::Follow => CandidateBlock::Follow,
            Goal::GoToResource | Goal::Sit => CandidateBlock::Settle,
        }
    }

    /// Blocks a slow tick runs, in order, for a pet holding `goal`.
    pub fn schedule(goal: Goal, dispatch: DispatchMode) -> &'static [CandidateBlock] {
        let owner = Self::owned_by(goal);
        let start = Self::ORDER
            .iter()
            .position(|block| *block == owner)
            .unwrap_or(Self::ORDER.len());

        match dispatch {
            DispatchMode::Compounded => &Self::ORDER[start..],
            DispatchMode::SingleBlock => &Self::ORDER[start..(start + 1).min(Self::ORDER.len())],
        }
    }

    /// Candidates of this block in evaluation order.
    pub fn candidates(self, probabilities: &CandidateProbabilities) -> Vec<Candidate> {
        match self {
            CandidateBlock::Idle => vec![
                Candidate::new(Goal::Sit, probabilities.idle_to_sit),
                Candidate::new(Goal::Follow, probabilities.idle_to_follow),
            ],
            CandidateBlock::UsingResource => vec![Candidate::new(
                Goal::Sit,
                probabilities.using_resource_to_sit,
            )],
            CandidateBlock::Follow => {
                vec![Candidate::new(Goal::Idle, probabilities.follow_to_idle)]
            }
            CandidateBlock::Settle => {
                vec![Candidate::new(Goal::Idle, probabilities.settle_to_idle)]
            }
        }
    }
}
