//! Physics System - integration and overlap resolution
//!
//! - `integrate` advances every dynamic body by one sub-step
//! - `separate` resolves the overlaps found by the collision query, using
//!   positional correction split by inverse mass plus a restitution impulse

mod integrate;
mod separate;

pub use integrate::integrate;
pub use separate::separate;
