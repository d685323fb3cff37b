//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers async helpers for
//! forwarding host events, driving ticks by hand, and streaming events from
//! specific topics.
use tokio::sync::{broadcast, mpsc, oneshot};

use pet_core::{GoalTransition, PetState, SceneView, Vec3};

use super::errors::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::workers::Command;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl RuntimeHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    async fn request<T>(&self, command: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(command(reply_tx))
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Forward a click on the pet
    pub async fn pet_clicked(&self) -> Result<GoalTransition> {
        self.request(|reply| Command::PetClicked { reply }).await
    }

    /// Forward a click on the resource
    pub async fn resource_clicked(&self) -> Result<GoalTransition> {
        self.request(|reply| Command::ResourceClicked { reply }).await
    }

    /// Report the character's latest position (fire-and-forget)
    pub async fn update_character_position(&self, position: Vec3) -> Result<()> {
        self.command_tx
            .send(Command::UpdateCharacterPosition { position })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)
    }

    /// Run one fast tick now, independent of the internal ticker
    pub async fn fast_tick(&self) -> Result<Option<GoalTransition>> {
        self.request(|reply| Command::FastTick { reply }).await
    }

    /// Run one slow decision tick now, independent of the internal ticker
    pub async fn slow_tick(&self) -> Result<Option<GoalTransition>> {
        self.request(|reply| Command::SlowTick { reply }).await
    }

    /// Query the current pet state (read-only snapshot)
    pub async fn query_state(&self) -> Result<PetState> {
        self.request(|reply| Command::QueryState { reply }).await
    }

    /// Build the render read model from the current state
    pub async fn describe(&self) -> Result<SceneView> {
        self.request(|reply| Command::Describe { reply }).await
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::Behavior` - Goal transitions
    /// - `Topic::Scene` - Scene views after every fast tick
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use runtime::Topic;
    ///
    /// let mut behavior_rx = handle.subscribe(Topic::Behavior);
    /// while let Ok(event) = behavior_rx.recv().await {
    ///     // React to goal changes
    /// }
    /// ```
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Subscribe to multiple topics at once
    ///
    /// Returns a map of topic to receiver for each requested topic.
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> std::collections::HashMap<Topic, broadcast::Receiver<Event>> {
        self.event_bus.subscribe_multiple(topics)
    }

    /// Get a reference to the event bus for advanced usage
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    pub(crate) async fn shutdown(&self) -> Result<()> {
        self.command_tx
            .send(Command::Shutdown)
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)
    }
}
