use crate::core::Vec2;

use super::history::History;
use super::perf_stats::PerfStats;
use super::WorldCore;

pub(super) fn enable_perf_metrics(world: &mut WorldCore, enabled: bool) {
    world.perf_enabled = enabled;
    if !enabled {
        world.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(world: &WorldCore) -> PerfStats {
    world.perf_stats.clone()
}

pub(super) fn set_gravity(world: &mut WorldCore, x: f32, y: f32) {
    let g = Vec2::new(x, y);
    if !g.is_finite() {
        log::warn!("ignoring non-finite gravity ({x}, {y})");
        return;
    }
    world.gravity = g;
}

/// Zero is rejected; the step loop needs at least one pass.
pub(super) fn set_iterations(world: &mut WorldCore, iterations: u32) -> bool {
    if iterations == 0 {
        log::warn!("ignoring iterations = 0");
        return false;
    }
    world.iterations = iterations;
    true
}

/// Replaces any existing history
pub(super) fn enable_history(world: &mut WorldCore, capacity: usize) {
    world.history = Some(History::new(capacity));
}

pub(super) fn disable_history(world: &mut WorldCore) {
    world.history = None;
}
