use wasm_bindgen::prelude::*;

use crate::core::Vec2;
use crate::geometry::IntersectionData;
use crate::systems::body::{Body, BodyKind};
use crate::systems::collisions::{ListenerOptions, Subject};

use super::perf_stats::PerfStats;
use super::WorldCore;

/// Closest linecast hit, flattened for JS
#[wasm_bindgen]
pub struct LinecastHit {
    x: f32,
    y: f32,
    normal_x: f32,
    normal_y: f32,
    distance: f32,
    body: u32,
    shape: u32,
}

impl From<IntersectionData> for LinecastHit {
    fn from(hit: IntersectionData) -> Self {
        Self {
            x: hit.point.x,
            y: hit.point.y,
            normal_x: hit.normal.x,
            normal_y: hit.normal.y,
            distance: hit.distance,
            body: hit.body,
            shape: hit.shape as u32,
        }
    }
}

#[wasm_bindgen]
impl LinecastHit {
    #[wasm_bindgen(getter)]
    pub fn x(&self) -> f32 { self.x }
    #[wasm_bindgen(getter)]
    pub fn y(&self) -> f32 { self.y }
    #[wasm_bindgen(getter)]
    pub fn normal_x(&self) -> f32 { self.normal_x }
    #[wasm_bindgen(getter)]
    pub fn normal_y(&self) -> f32 { self.normal_y }
    #[wasm_bindgen(getter)]
    pub fn distance(&self) -> f32 { self.distance }
    #[wasm_bindgen(getter)]
    pub fn body(&self) -> u32 { self.body }
    #[wasm_bindgen(getter)]
    pub fn shape(&self) -> u32 { self.shape }
}

#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create a world with default gravity, one sub-step and no history
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { core: WorldCore::new() }
    }

    /// Create a world from a JSON `WorldConfig`
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(json: String) -> Result<World, JsValue> {
        let core = WorldCore::from_config_json(&json)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.core.body_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn iterations(&self) -> u32 { self.core.iterations() }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    pub fn set_gravity(&mut self, x: f32, y: f32) {
        self.core.set_gravity(x, y);
    }

    pub fn set_iterations(&mut self, iterations: u32) -> bool {
        self.core.set_iterations(iterations)
    }

    // === BODIES ===

    /// Spawn a dynamic circle, returns the body id
    pub fn spawn_circle(&mut self, x: f32, y: f32, radius: f32) -> u32 {
        self.core.add_body(Body::circle(x, y, radius))
    }

    /// Spawn a dynamic box of size (w, h) centred on (x, y)
    pub fn spawn_rect(&mut self, x: f32, y: f32, w: f32, h: f32) -> u32 {
        self.core.add_body(Body::rect(x, y, w, h))
    }

    /// Immovable box, e.g. floors and walls
    pub fn spawn_static_rect(&mut self, x: f32, y: f32, w: f32, h: f32) -> u32 {
        self.core.add_body(Body::rect(x, y, w, h).with_kind(BodyKind::Static))
    }

    pub fn remove_body(&mut self, id: u32) -> bool {
        self.core.remove_body(id).is_some()
    }

    /// [x, y, rotation] or empty when the id is unknown
    pub fn body_pose(&self, id: u32) -> Vec<f32> {
        self.core
            .body(id)
            .map(|b| vec![b.position.x, b.position.y, b.rotation])
            .unwrap_or_default()
    }

    pub fn set_body_velocity(&mut self, id: u32, vx: f32, vy: f32) -> bool {
        let Some(body) = self.core.body_mut(id) else {
            return false;
        };
        body.velocity = Vec2::new(vx, vy);
        true
    }

    /// Adds to the body's acceleration for the next step only
    pub fn apply_force(&mut self, id: u32, fx: f32, fy: f32) -> bool {
        let Some(body) = self.core.body_mut(id) else {
            return false;
        };
        body.apply_force(Vec2::new(fx, fy));
        true
    }

    /// Clear all bodies, listeners and history
    pub fn clear(&mut self) {
        self.core.clear();
    }

    // === STEPPING ===

    /// Advance by `dt` seconds. `false` when the step was skipped.
    pub fn step(&mut self, dt: f32) -> bool {
        self.core.step(dt)
    }

    /// Whole world against itself once, with separation. Returns the contact count.
    pub fn check_all(&mut self) -> u32 {
        let listener = self.core.check(None, None, ListenerOptions::default());
        listener.contacts().len() as u32
    }

    // === HISTORY ===

    pub fn enable_history(&mut self, capacity: usize) {
        self.core.enable_history(capacity);
    }

    pub fn disable_history(&mut self) {
        self.core.disable_history();
    }

    pub fn can_undo(&self) -> bool {
        self.core.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.core.can_redo()
    }

    pub fn undo(&mut self) -> bool {
        self.core.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.core.redo()
    }

    // === LINECAST ===

    /// Closest hit on the segment (x1, y1) -> (x2, y2) against every body
    pub fn linecast(&self, x1: f32, y1: f32, x2: f32, y2: f32) -> Option<LinecastHit> {
        self.core
            .linecast_points(Vec2::new(x1, y1), Vec2::new(x2, y2), &Subject::All)
            .map(LinecastHit::from)
    }

    /// Closest hit on the ray of `length` from (x, y) along `angle` radians
    pub fn linecast_angle(&self, x: f32, y: f32, angle: f32, length: f32) -> Option<LinecastHit> {
        self.core
            .linecast_angle(Vec2::new(x, y), angle, length, &Subject::All)
            .map(LinecastHit::from)
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
