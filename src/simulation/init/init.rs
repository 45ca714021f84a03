use crate::domain::WorldConfig;
use crate::systems::body::Bodies;
use crate::systems::collisions::Listeners;

use super::history::History;
use super::perf_stats::PerfStats;
use super::WorldCore;

pub(super) fn create_world_core(config: &WorldConfig) -> WorldCore {
    let iterations = if config.iterations == 0 {
        log::warn!("iterations = 0 in config, using 1");
        1
    } else {
        config.iterations
    };

    WorldCore {
        bodies: Bodies::new(),
        listeners: Listeners::new(),
        history: config.history.map(|h| History::new(h.capacity)),
        gravity: config.gravity,
        iterations,
        frame: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
