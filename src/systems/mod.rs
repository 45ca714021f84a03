//! Systems the simulation core drives each tick.
//!
//! - `body`       - rigid bodies and their ordered store
//! - `physics`    - integration and overlap resolution
//! - `collisions` - broad/narrow phase, listeners and transition events

pub mod body;
pub mod collisions;
pub mod physics;
