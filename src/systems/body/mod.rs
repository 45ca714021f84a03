//! Rigid bodies and the ordered store that owns them.
//!
//! A body keeps its shapes in local coordinates (relative to its origin) and
//! caches their world-space form, rebuilt by `refresh()` whenever the pose
//! changes.

mod body;
mod store;

pub use body::{Body, BodyId, BodyKind};
pub use store::Bodies;
