//! Scoring engines for the five practice batteries and their boundary layer.
//!
//! Every engine is a pure, synchronous function over in-memory value objects:
//! typed input in, immutable report out, no I/O, no shared state, no clock.
//! Persistence, identity, and transport live in [`attempts`]; the engines
//! themselves never store anything.

pub mod attempts;
pub mod bank;
pub mod composite;
pub mod narrative;
pub mod physical;
pub mod piq;
pub mod situational;
pub mod support;
pub mod word_association;
