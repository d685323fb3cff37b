//! Runtime orchestration for the pet behavior controller.
//!
//! This crate gives [`pet_core::PetState`] a single owner: a background
//! worker that serializes host commands and the two periodic tickers.
//! Consumers embed [`Runtime`] and talk to the pet through the cloneable
//! [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`workers`] keeps background tasks internal to the crate
pub mod api;
pub mod events;
pub mod runtime;

mod workers;

pub use api::{Result, RuntimeError, RuntimeHandle};
pub use events::{BehaviorEvent, Event, EventBus, SceneEvent, Topic};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
