//! Worker tasks that back the runtime orchestration.
//!
//! The pet worker is the sole owner of [`pet_core::PetState`]; every other
//! component reaches it through commands.

mod pet;

pub use pet::{Command, PetWorker, TickSchedule};
