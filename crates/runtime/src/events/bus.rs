//! Topic-based event bus implementation.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use super::types::{BehaviorEvent, SceneEvent};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Goal transitions
    Behavior,
    /// Per-frame scene views
    Scene,
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, Serialize)]
pub enum Event {
    Behavior(BehaviorEvent),
    Scene(SceneEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Behavior(_) => Topic::Behavior,
            Event::Scene(_) => Topic::Scene,
        }
    }
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about. Publishing is best-effort: events sent while a
/// topic has no subscribers are dropped, and slow subscribers observe
/// `RecvError::Lagged`.
#[derive(Clone)]
pub struct EventBus {
    behavior: broadcast::Sender<Event>,
    scene: broadcast::Sender<Event>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);

        Self {
            behavior: broadcast::channel(capacity).0,
            scene: broadcast::channel(capacity).0,
        }
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Behavior => &self.behavior,
            Topic::Scene => &self.scene,
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();

        if self.sender(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.sender(topic).subscribe()
    }

    /// Subscribe to multiple topics
    ///
    /// Returns receivers for each requested topic.
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> HashMap<Topic, broadcast::Receiver<Event>> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pet_core::{Goal, GoalTransition, PetState, SceneView, TransitionCause};

    use super::*;

    fn goal_changed() -> Event {
        Event::Behavior(BehaviorEvent::GoalChanged {
            transition: GoalTransition {
                from: Goal::Idle,
                to: Goal::Sit,
                cause: TransitionCause::PetClicked,
            },
            frame: 3,
        })
    }

    #[test]
    fn events_reach_only_their_topic() {
        let bus = EventBus::new();
        let mut behavior = bus.subscribe(Topic::Behavior);
        let mut scene = bus.subscribe(Topic::Scene);

        bus.publish(goal_changed());

        assert!(matches!(behavior.try_recv(), Ok(Event::Behavior(_))));
        assert!(scene.try_recv().is_err());
    }

    #[test]
    fn publishing_without_subscribers_is_silent() {
        let bus = EventBus::with_capacity(0);
        bus.publish(Event::Scene(SceneEvent {
            frame: 0,
            view: SceneView::from_state(&PetState::default()),
        }));
    }

    #[test]
    fn subscribe_multiple_returns_each_topic() {
        let bus = EventBus::default();
        let receivers = bus.subscribe_multiple(&[Topic::Behavior, Topic::Scene]);

        assert_eq!(receivers.len(), 2);
        assert!(receivers.contains_key(&Topic::Scene));
    }
}
