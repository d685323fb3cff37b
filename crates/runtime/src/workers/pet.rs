//! Pet worker that owns the authoritative [`pet_core::PetState`].
//!
//! Receives commands from [`RuntimeHandle`](crate::RuntimeHandle), runs the
//! fast and slow tickers, applies everything through
//! [`pet_core::PetEngine`], and publishes events to the EventBus. Commands,
//! fast ticks and slow ticks are handled one at a time, so the state has a
//! single writer.

use std::future;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio::time::{self, Instant, Interval, MissedTickBehavior};
use tracing::{debug, info, trace};

use pet_core::{
    BehaviorConfig, GoalTransition, PetEngine, PetState, RngOracle, SceneView, Vec3,
};

use crate::events::{BehaviorEvent, Event, EventBus, SceneEvent};

/// Commands that can be sent to the pet worker
pub enum Command {
    /// The host reported a click on the pet.
    PetClicked {
        reply: oneshot::Sender<GoalTransition>,
    },
    /// The host reported a click on the resource.
    ResourceClicked {
        reply: oneshot::Sender<GoalTransition>,
    },
    /// The followed character moved.
    UpdateCharacterPosition { position: Vec3 },
    /// Run one fast tick immediately.
    FastTick {
        reply: oneshot::Sender<Option<GoalTransition>>,
    },
    /// Run one slow tick immediately.
    SlowTick {
        reply: oneshot::Sender<Option<GoalTransition>>,
    },
    /// Query the current pet state (read-only).
    QueryState { reply: oneshot::Sender<PetState> },
    /// Build the render read model.
    Describe { reply: oneshot::Sender<SceneView> },
    /// Stop the worker loop.
    Shutdown,
}

/// Periods of the internal tickers. `None` leaves that tick to the host.
#[derive(Clone, Copy, Debug)]
pub struct TickSchedule {
    pub fast: Option<Duration>,
    pub slow: Option<Duration>,
}

/// Background task that owns the pet and processes commands and ticks.
pub struct PetWorker {
    state: PetState,
    config: BehaviorConfig,
    rng: Box<dyn RngOracle>,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
    schedule: TickSchedule,
    frame: u64,
}

impl PetWorker {
    /// Creates a new pet worker.
    pub fn new(
        state: PetState,
        config: BehaviorConfig,
        rng: Box<dyn RngOracle>,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
        schedule: TickSchedule,
    ) -> Self {
        info!(
            goal = %state.goal,
            position = ?state.pet_position,
            fast = ?schedule.fast,
            slow = ?schedule.slow,
            "PetWorker initialized"
        );

        Self {
            state,
            config,
            rng,
            command_rx,
            event_bus,
            schedule,
            frame: 0,
        }
    }

    /// Main worker loop.
    ///
    /// Exits on [`Command::Shutdown`] or once every handle has been dropped.
    pub async fn run(mut self) {
        let mut fast = self.schedule.fast.map(ticker);
        let mut slow = self.schedule.slow.map(ticker);

        loop {
            tokio::select! {
                biased;

                cmd = self.command_rx.recv() => match cmd {
                    Some(Command::Shutdown) | None => break,
                    Some(cmd) => self.handle_command(cmd),
                },
                _ = next_tick(&mut fast) => {
                    self.fast_tick();
                }
                _ = next_tick(&mut slow) => {
                    self.slow_tick();
                }
            }
        }

        debug!(target: "runtime::worker", frame = self.frame, "PetWorker stopped");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::PetClicked { reply } => {
                let transition = self.engine().pet_clicked();
                self.publish_transition(transition);
                if reply.send(transition).is_err() {
                    debug!("PetClicked reply channel closed (caller dropped)");
                }
            }
            Command::ResourceClicked { reply } => {
                let transition = self.engine().resource_clicked();
                self.publish_transition(transition);
                if reply.send(transition).is_err() {
                    debug!("ResourceClicked reply channel closed (caller dropped)");
                }
            }
            Command::UpdateCharacterPosition { position } => {
                trace!(target: "runtime::worker", ?position, "character moved");
                self.engine().update_character_position(position);
            }
            Command::FastTick { reply } => {
                let transition = self.fast_tick();
                if reply.send(transition).is_err() {
                    debug!("FastTick reply channel closed (caller dropped)");
                }
            }
            Command::SlowTick { reply } => {
                let transition = self.slow_tick();
                if reply.send(transition).is_err() {
                    debug!("SlowTick reply channel closed (caller dropped)");
                }
            }
            Command::QueryState { reply } => {
                if reply.send(self.state.clone()).is_err() {
                    debug!("QueryState reply channel closed (caller dropped)");
                }
            }
            Command::Describe { reply } => {
                if reply.send(SceneView::from_state(&self.state)).is_err() {
                    debug!("Describe reply channel closed (caller dropped)");
                }
            }
            Command::Shutdown => {}
        }
    }

    fn engine(&mut self) -> PetEngine<'_> {
        PetEngine::new(&mut self.state, &self.config)
    }

    /// Advances one frame and publishes the resulting scene.
    fn fast_tick(&mut self) -> Option<GoalTransition> {
        self.frame += 1;

        let transition = self.engine().fast_tick();
        if let Some(transition) = transition {
            self.publish_transition(transition);
        }

        self.event_bus.publish(Event::Scene(SceneEvent {
            frame: self.frame,
            view: SceneView::from_state(&self.state),
        }));

        transition
    }

    fn slow_tick(&mut self) -> Option<GoalTransition> {
        let mut engine = PetEngine::new(&mut self.state, &self.config);
        let transition = engine.slow_tick(&mut self.rng);

        match transition {
            Some(transition) => self.publish_transition(transition),
            None => trace!(
                target: "runtime::worker",
                goal = %self.state.goal,
                blend = self.state.animation_blend,
                "slow tick kept goal"
            ),
        }

        transition
    }

    fn publish_transition(&self, transition: GoalTransition) {
        info!(
            target: "runtime::worker",
            from = %transition.from,
            to = %transition.to,
            cause = %transition.cause,
            frame = self.frame,
            "goal changed"
        );

        self.event_bus
            .publish(Event::Behavior(BehaviorEvent::GoalChanged {
                transition,
                frame: self.frame,
            }));
    }
}

/// Interval whose first tick is one period from now; late ticks are
/// delayed rather than bursted.
fn ticker(period: Duration) -> Interval {
    let mut interval = time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    interval
}

async fn next_tick(interval: &mut Option<Interval>) {
    match interval {
        Some(interval) => {
            interval.tick().await;
        }
        None => future::pending::<()>().await,
    }
}
