//! High-level runtime orchestrator.
//!
//! The runtime owns the pet worker, wires up command/event channels, and
//! exposes a builder-based API for hosts to drive the pet.

use std::time::Duration;

use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

use pet_core::{BehaviorConfig, PcgRng, PetState, RngOracle, StdRngOracle};

use crate::api::{Result, RuntimeError, RuntimeHandle};
use crate::events::{Event, EventBus, Topic};
use crate::workers::{Command, PetWorker, TickSchedule};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub behavior: BehaviorConfig,
    /// Period of the per-frame ticker; `None` leaves fast ticks to the host.
    pub fast_tick: Option<Duration>,
    /// Period of the decision ticker; `None` leaves slow ticks to the host.
    pub slow_tick: Option<Duration>,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
    /// Seed for a reproducible decision stream (default: OS entropy).
    pub seed: Option<u64>,
}

impl RuntimeConfig {
    /// Roughly 60 frames per second.
    pub const DEFAULT_FAST_TICK: Duration = Duration::from_micros(16_667);
    pub const DEFAULT_SLOW_TICK: Duration = Duration::from_millis(1_500);

    /// Configuration with both internal tickers disabled.
    pub fn host_driven() -> Self {
        Self {
            fast_tick: None,
            slow_tick: None,
            ..Self::default()
        }
    }

    fn schedule(&self) -> Result<TickSchedule> {
        if self.fast_tick.is_some_and(|period| period.is_zero()) {
            return Err(RuntimeError::InvalidTickPeriod { ticker: "fast" });
        }
        if self.slow_tick.is_some_and(|period| period.is_zero()) {
            return Err(RuntimeError::InvalidTickPeriod { ticker: "slow" });
        }

        Ok(TickSchedule {
            fast: self.fast_tick,
            slow: self.slow_tick,
        })
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            behavior: BehaviorConfig::default(),
            fast_tick: Some(Self::DEFAULT_FAST_TICK),
            slow_tick: Some(Self::DEFAULT_SLOW_TICK),
            event_buffer_size: 100,
            command_buffer_size: 32,
            seed: None,
        }
    }
}

/// Main runtime that owns the pet worker
///
/// Design: Runtime owns the worker task.
/// [`RuntimeHandle`] provides a cloneable façade for hosts.
pub struct Runtime {
    handle: RuntimeHandle,
    worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    ///
    /// The handle can be shared across host callbacks and async tasks.
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Subscribe to runtime events on one topic
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.handle.subscribe(topic)
    }

    /// Stop the worker and wait for it to finish
    ///
    /// Outstanding handles start failing with
    /// [`RuntimeError::CommandChannelClosed`].
    pub async fn shutdown(self) -> Result<()> {
        // The worker may already have exited if the channel closed.
        if self.handle.shutdown().await.is_err() {
            tracing::debug!("pet worker already stopped");
        }

        self.worker_handle.await.map_err(RuntimeError::WorkerJoin)
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    state: Option<PetState>,
    rng: Option<Box<dyn RngOracle>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            state: None,
            rng: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Provide initial pet state (default: scene-start state from the
    /// behavior configuration)
    pub fn initial_state(mut self, state: PetState) -> Self {
        self.state = Some(state);
        self
    }

    /// Supply the random source for decision ticks
    ///
    /// Takes precedence over [`RuntimeConfig::seed`].
    pub fn rng(mut self, rng: impl RngOracle + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    /// Build the runtime and spawn its worker
    ///
    /// Must be called from within a tokio runtime.
    pub async fn build(self) -> Result<Runtime> {
        self.config.behavior.validate()?;
        let schedule = self.config.schedule()?;

        let state = self
            .state
            .unwrap_or_else(|| PetState::new(&self.config.behavior));

        let rng = match (self.rng, self.config.seed) {
            (Some(rng), _) => rng,
            (None, Some(seed)) => Box::new(PcgRng::new(seed)) as Box<dyn RngOracle>,
            (None, None) => Box::new(StdRngOracle::from_entropy()),
        };

        let (command_tx, command_rx) =
            mpsc::channel::<Command>(self.config.command_buffer_size.max(1));
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);

        let handle = RuntimeHandle::new(command_tx, event_bus.clone());

        let worker = PetWorker::new(
            state,
            self.config.behavior,
            rng,
            command_rx,
            event_bus,
            schedule,
        );

        let worker_handle = tokio::spawn(async move {
            worker.run().await;
        });

        Ok(Runtime {
            handle,
            worker_handle,
        })
    }
}
