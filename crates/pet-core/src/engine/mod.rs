//! Goal state machine over [`PetState`].
//!
//! [`PetEngine`] is the only writer of pet state. Hosts build one per
//! event (it borrows the state and configuration) and call exactly one
//! operation on it: a command, a fast tick, or a slow tick. Every goal
//! change goes through [`PetEngine::set_goal`] and is reported back as a
//! [`GoalTransition`].

mod decision;
mod motion;
mod transition;

pub use decision::{Candidate, CandidateBlock};
pub use motion::look_at;
pub use transition::{GoalTransition, TransitionCause};

use glam::Vec3;

use crate::animation::AnimationRates;
use crate::config::BehaviorConfig;
use crate::env::RngOracle;
use crate::state::{Goal, PetState};
use crate::view::SceneView;

/// Behavior engine borrowing the pet state for one operation.
pub struct PetEngine<'a> {
    state: &'a mut PetState,
    config: &'a BehaviorConfig,
}

impl<'a> PetEngine<'a> {
    /// Creates a new engine over the given state.
    pub fn new(state: &'a mut PetState, config: &'a BehaviorConfig) -> Self {
        Self { state, config }
    }

    pub fn state(&self) -> &PetState {
        self.state
    }

    pub fn config(&self) -> &BehaviorConfig {
        self.config
    }

    /// Switches to `goal`, remembering the current one.
    ///
    /// The blend scalar is inverted rather than reset, so a transition that
    /// starts mid-blend continues from the complementary point. Any goal may
    /// follow any goal.
    pub fn set_goal(&mut self, goal: Goal, cause: TransitionCause) -> GoalTransition {
        let from = self.state.goal;

        self.state.previous_goal = from;
        self.state.goal = goal;
        self.state.animation_blend = 1.0 - self.state.animation_blend;

        GoalTransition {
            from,
            to: goal,
            cause,
        }
    }

    /// Toggles between sitting and idling; any other goal is interrupted by
    /// sitting down.
    pub fn pet_clicked(&mut self) -> GoalTransition {
        let next = match self.state.goal {
            Goal::Sit => Goal::Idle,
            _ => Goal::Sit,
        };
        self.set_goal(next, TransitionCause::PetClicked)
    }

    /// Sends the pet to the resource regardless of what it is doing.
    pub fn resource_clicked(&mut self) -> GoalTransition {
        self.set_goal(Goal::GoToResource, TransitionCause::ResourceClicked)
    }

    /// Records the character's latest reported position.
    pub fn update_character_position(&mut self, position: Vec3) {
        self.state.character_position = position;
    }

    /// Per-frame update.
    ///
    /// Advances the blend first, then, for moving goals, either completes
    /// the approach (squared distance below the arrival threshold) or takes
    /// one motion step toward the target.
    pub fn fast_tick(&mut self) -> Option<GoalTransition> {
        self.state.animation_blend = self.state.blend_weight() + self.config.blend_step;

        let target = self.state.goal_target()?;

        if self.state.pet_position.distance_squared(target) < self.config.arrival_distance_sq {
            let next = self.state.goal.on_arrival()?;
            return Some(self.set_goal(next, TransitionCause::Arrived));
        }

        self.walk_towards(target)
    }

    /// Periodic goal reconsideration.
    ///
    /// Does nothing while the previous transition is still blending in
    /// (`animation_blend < 1`, checked once on entry). Otherwise runs every
    /// block of the schedule for the goal held on entry. Each block draws
    /// until its first accepted candidate; only the first accepted candidate
    /// of the whole tick is committed, but later blocks still consume their
    /// draws.
    pub fn slow_tick<R: RngOracle + ?Sized>(&mut self, rng: &mut R) -> Option<GoalTransition> {
        if self.state.animation_blend < 1.0 {
            return None;
        }

        let schedule = CandidateBlock::schedule(self.state.goal, self.config.dispatch);
        let mut committed = None;

        for block in schedule {
            let candidates = block.candidates(&self.config.probabilities);
            let accepted = self.consider_goals(&candidates, rng);

            if committed.is_none()
                && let Some(goal) = accepted
            {
                committed = Some(self.set_goal(goal, TransitionCause::Decision));
            }
        }

        committed
    }

    /// Evaluates `candidates` in order and returns the first one accepted.
    ///
    /// Every candidate reached costs one draw. A successful draw for
    /// [`Goal::Follow`] is still rejected while the character stands outside
    /// the arena, and evaluation moves on to the next candidate.
    pub fn consider_goals<R: RngOracle + ?Sized>(
        &self,
        candidates: &[Candidate],
        rng: &mut R,
    ) -> Option<Goal> {
        candidates
            .iter()
            .filter(|candidate| rng.chance(candidate.probability))
            .find(|candidate| self.passes_guard(candidate.goal))
            .map(|candidate| candidate.goal)
    }

    fn passes_guard(&self, goal: Goal) -> bool {
        match goal {
            Goal::Follow => self.is_in_bounds(self.state.character_position),
            _ => true,
        }
    }

    /// Current crossfade weights.
    pub fn animation_rates(&self) -> AnimationRates {
        AnimationRates::from_state(self.state)
    }

    /// Read model for the host's render pass.
    pub fn describe(&self) -> SceneView {
        SceneView::from_state(self.state)
    }
}
