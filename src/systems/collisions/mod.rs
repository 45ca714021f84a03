//! Collision detection and listener bookkeeping.
//!
//! `query` fills each listener with the overlaps in its subject scope,
//! `notify` turns the difference against the previous query into
//! enter/stay/exit events.

mod listener;
mod narrow;
mod notify;
mod query;
mod subject;

pub use listener::{
    CollisionEvent, CollisionKind, Contact, Listener, ListenerCycles, ListenerId, ListenerOptions,
    Listeners,
};
pub use notify::notify;
pub use query::query;
pub use subject::Subject;
