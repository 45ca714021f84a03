//! Rewind Engine - steppable 2D rigid body core in WASM
//!
//! Architecture:
//! - core/       - Math primitives
//! - geometry/   - Shapes, lines, bounds and linecasts
//! - domain/     - Configuration and errors
//! - systems/    - Bodies, collisions, integration and separation
//! - simulation/ - World orchestration, history and the JS facade
//!
//! Diagnostics go through the `log` facade; install any logger to see them.

pub mod core;
pub mod geometry;
pub mod domain;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(feature = "parallel")]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"Rewind engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::Vec2;
pub use domain::{ConfigError, WorldConfig};
pub use geometry::{IntersectionData, Line, Rect, Shape};
pub use simulation::{CheckScope, DefaultPipeline, History, Pipeline, Snapshot, World, WorldCore};
pub use systems::body::{Bodies, Body, BodyId, BodyKind};
pub use systems::collisions::{
    CollisionEvent, CollisionKind, Contact, Listener, ListenerId, ListenerOptions, Subject,
};
