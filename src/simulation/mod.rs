//! World - rigid body stepping with undo/redo
//!
//! `WorldCore` owns the bodies, the persistent listeners and the optional
//! history, and only orchestrates. Motion lives in `systems::physics`,
//! overlap detection in `systems::collisions`, line queries in `geometry`.
//!
//! A tick snapshots into history, adds gravity to every acceleration, runs
//! `iterations` sub-steps of step -> query -> separate -> notify, then zeroes
//! accelerations.

use crate::core::Vec2;
use crate::domain::{ConfigError, WorldConfig};
use crate::geometry::{IntersectionData, Line};
use crate::systems::body::{Bodies, Body, BodyId};
use crate::systems::collisions::{Listener, ListenerId, ListenerOptions, Listeners, Subject};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/pipeline.rs"]
mod pipeline;
#[path = "step/step.rs"]
mod step;
#[path = "check/check.rs"]
mod check;
#[path = "history/history.rs"]
mod history;
#[path = "history/undo.rs"]
mod undo;
#[path = "query/linecast.rs"]
mod linecast;
#[path = "commands/commands.rs"]
mod commands;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use check::CheckScope;
pub use facade::{LinecastHit, World};
pub use history::{BodyRecord, History, Snapshot};
pub use perf_stats::PerfStats;
pub use pipeline::{DefaultPipeline, Pipeline};

use perf_timer::PerfTimer;

/// The simulation world
pub struct WorldCore {
    bodies: Bodies,
    listeners: Listeners,
    /// `None` while undo/redo is off
    history: Option<History>,

    // Settings
    gravity: Vec2,
    iterations: u32,

    // State
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl WorldCore {
    /// Default gravity, one sub-step, no history
    pub fn new() -> Self {
        Self::from_config(&WorldConfig::default())
    }

    pub fn from_config(config: &WorldConfig) -> Self {
        init::create_world_core(config)
    }

    pub fn from_config_json(json: &str) -> Result<Self, ConfigError> {
        let config = WorldConfig::from_json(json)?;
        Ok(Self::from_config(&config))
    }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn gravity(&self) -> Vec2 { self.gravity }

    pub fn iterations(&self) -> u32 { self.iterations }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    pub fn set_gravity(&mut self, x: f32, y: f32) {
        settings::set_gravity(self, x, y);
    }

    /// Returns `false` and keeps the old value for zero
    pub fn set_iterations(&mut self, iterations: u32) -> bool {
        settings::set_iterations(self, iterations)
    }

    // === BODIES ===

    /// Insert a body and return the id the world assigned to it
    pub fn add_body(&mut self, body: Body) -> BodyId {
        commands::add_body(self, body)
    }

    pub fn remove_body(&mut self, id: BodyId) -> Option<Body> {
        commands::remove_body(self, id)
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id)
    }

    /// Call `refresh` on the body (or `WorldCore::refresh`) after moving it
    /// by hand
    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.get_mut(id)
    }

    pub fn bodies(&self) -> &Bodies {
        &self.bodies
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Recompute world shapes and bounds of every body
    pub fn refresh(&mut self) {
        self.bodies.refresh_all();
    }

    /// Remove all bodies and listeners and empty the history
    pub fn clear(&mut self) {
        commands::clear(self);
    }

    // === LISTENERS ===

    /// Register a listener that takes part in every sub-step
    pub fn add_listener(&mut self, a: Subject, b: Subject, options: ListenerOptions) -> ListenerId {
        commands::add_listener(self, a, b, options)
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> Option<Listener> {
        self.listeners.remove(id)
    }

    pub fn listener(&self, id: ListenerId) -> Option<&Listener> {
        self.listeners.get(id)
    }

    pub fn listener_mut(&mut self, id: ListenerId) -> Option<&mut Listener> {
        self.listeners.get_mut(id)
    }

    pub fn listeners(&self) -> &Listeners {
        &self.listeners
    }

    // === STEPPING ===

    /// Advance by `dt` with the built-in systems. `false` when nothing ran.
    pub fn step(&mut self, dt: f32) -> bool {
        step::step(self, &mut DefaultPipeline, dt)
    }

    pub fn step_with<P: Pipeline>(&mut self, pipeline: &mut P, dt: f32) -> bool {
        step::step(self, pipeline, dt)
    }

    /// One query/separate/notify cycle over `a x b` without advancing time.
    ///
    /// A missing side mirrors the other; with neither the whole world is
    /// checked against itself.
    pub fn check(
        &mut self,
        a: Option<Subject>,
        b: Option<Subject>,
        options: ListenerOptions,
    ) -> Listener {
        check::check(self, &mut DefaultPipeline, CheckScope::from_args(a, b), options)
    }

    pub fn check_with<P: Pipeline>(
        &mut self,
        pipeline: &mut P,
        scope: CheckScope,
        options: ListenerOptions,
    ) -> Listener {
        check::check(self, pipeline, scope, options)
    }

    // === HISTORY ===

    /// Start recording with room for `capacity` snapshots per side.
    /// Any earlier history is dropped.
    pub fn enable_history(&mut self, capacity: usize) {
        settings::enable_history(self, capacity);
    }

    pub fn disable_history(&mut self) {
        settings::disable_history(self);
    }

    pub fn history(&self) -> Option<&History> {
        self.history.as_ref()
    }

    pub fn can_undo(&self) -> bool {
        self.history.as_ref().is_some_and(History::can_undo)
    }

    pub fn can_redo(&self) -> bool {
        self.history.as_ref().is_some_and(History::can_redo)
    }

    /// Roll back one tick. `false` without history or with nothing recorded.
    pub fn undo(&mut self) -> bool {
        undo::undo(self)
    }

    pub fn redo(&mut self) -> bool {
        undo::redo(self)
    }

    // === LINECAST ===

    /// Closest hit of `line` against `target`, ties going to the body and
    /// shape met first
    pub fn linecast(&self, line: &Line, target: &Subject) -> Option<IntersectionData> {
        linecast::linecast(self, line, target)
    }

    /// Line from (x, y) to (x + dx, y + dy)
    pub fn linecast_delta(
        &self,
        x: f32,
        y: f32,
        dx: f32,
        dy: f32,
        target: &Subject,
    ) -> Option<IntersectionData> {
        linecast::linecast_delta(self, x, y, dx, dy, target)
    }

    /// Line of `length` from `start` along `angle` (radians)
    pub fn linecast_angle(
        &self,
        start: Vec2,
        angle: f32,
        length: f32,
        target: &Subject,
    ) -> Option<IntersectionData> {
        linecast::linecast_angle(self, start, angle, length, target)
    }

    pub fn linecast_points(&self, start: Vec2, end: Vec2, target: &Subject) -> Option<IntersectionData> {
        linecast::linecast_points(self, start, end, target)
    }
}

impl Default for WorldCore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
