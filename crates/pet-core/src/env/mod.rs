//! Injectable sources of nondeterminism.
//!
//! The slow decision tick draws one uniform sample per candidate it
//! considers. Drawing through [`RngOracle`] lets hosts choose between an
//! entropy-seeded generator, a reproducible seeded stream, or a scripted
//! sequence in tests.
mod rng;

pub use rng::{PcgRng, RngOracle, SequenceRng, StdRngOracle};
