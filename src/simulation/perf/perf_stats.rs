use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[derive(Clone, Debug)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) history_ms: f64,
    pub(super) forces_ms: f64,
    pub(super) integrate_ms: f64,
    pub(super) query_ms: f64,
    pub(super) separate_ms: f64,
    pub(super) notify_ms: f64,
    pub(super) substeps: u32,
    pub(super) contacts: u32,
    pub(super) separated: u32,
    pub(super) events: u32,
    pub(super) snapshot_bodies: u32,
    pub(super) body_count: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

impl Default for PerfStats {
    fn default() -> Self {
        PerfStats {
            step_ms: 0.0,
            history_ms: 0.0,
            forces_ms: 0.0,
            integrate_ms: 0.0,
            query_ms: 0.0,
            separate_ms: 0.0,
            notify_ms: 0.0,
            substeps: 0,
            contacts: 0,
            separated: 0,
            events: 0,
            snapshot_bodies: 0,
            body_count: 0,
        }
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn history_ms(&self) -> f64 { self.history_ms }
    #[wasm_bindgen(getter)]
    pub fn forces_ms(&self) -> f64 { self.forces_ms }
    #[wasm_bindgen(getter)]
    pub fn integrate_ms(&self) -> f64 { self.integrate_ms }
    #[wasm_bindgen(getter)]
    pub fn query_ms(&self) -> f64 { self.query_ms }
    #[wasm_bindgen(getter)]
    pub fn separate_ms(&self) -> f64 { self.separate_ms }
    #[wasm_bindgen(getter)]
    pub fn notify_ms(&self) -> f64 { self.notify_ms }
    #[wasm_bindgen(getter)]
    pub fn substeps(&self) -> u32 { self.substeps }
    /// Contacts summed over all sub-steps
    #[wasm_bindgen(getter)]
    pub fn contacts(&self) -> u32 { self.contacts }
    #[wasm_bindgen(getter)]
    pub fn separated(&self) -> u32 { self.separated }
    #[wasm_bindgen(getter)]
    pub fn events(&self) -> u32 { self.events }
    #[wasm_bindgen(getter)]
    pub fn snapshot_bodies(&self) -> u32 { self.snapshot_bodies }
    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.body_count }
}
