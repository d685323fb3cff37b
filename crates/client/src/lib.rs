//! Scene host for the pet runtime.
//!
//! Stands in for the 3D scene runtime the pet normally lives in: it owns the
//! [`runtime::Runtime`], plays a character walking around the arena, clicks
//! the bowl on a timer, and prints the render read model.
//!
//! ```text
//! Session
//!   ├─→ Runtime (pet worker + tickers)
//!   ├─→ CharacterWalker (position updates)
//!   └─→ SceneView output (JSON lines on stdout)
//! ```

pub mod config;
pub mod host;
pub mod logging;

pub use config::ClientConfig;
pub use host::{CharacterWalker, Session, SessionSummary};
