//! Unified error types surfaced by the runtime API.
//!
//! Behavior never fails; these cover configuration and the channel plumbing
//! between handles and the worker.
use thiserror::Error;
use tokio::sync::oneshot;

use pet_core::ConfigError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("pet worker command channel closed")]
    CommandChannelClosed,

    #[error("pet worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("pet worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("invalid behavior configuration")]
    InvalidConfig(#[from] ConfigError),

    #[error("{ticker} tick period must be non-zero")]
    InvalidTickPeriod { ticker: &'static str },
}
