use crate::core::Vec2;

use super::history::Snapshot;
use super::perf_timer::accumulate;
use super::{PerfTimer, Pipeline, WorldCore};

/// Advance `world` by `dt`.
///
/// Order per tick: snapshot into history, add gravity to every body's
/// acceleration, run `iterations` sub-steps of step -> query -> separate ->
/// notify with `dt / iterations`, then zero every acceleration. Velocities
/// persist. Returns `false` (and changes nothing) for a non-positive or
/// non-finite `dt` or zero iterations.
pub(super) fn step<P: Pipeline>(world: &mut WorldCore, pipeline: &mut P, dt: f32) -> bool {
    if !dt.is_finite() || dt <= 0.0 {
        log::debug!("step skipped: dt = {dt}");
        return false;
    }
    if world.iterations == 0 {
        log::debug!("step skipped: zero iterations");
        return false;
    }

    let perf_on = world.perf_enabled;
    if perf_on {
        world.perf_stats.reset();
        world.perf_stats.body_count = world.bodies.len() as u32;
    }
    let step_start = PerfTimer::start_if(perf_on);

    // === HISTORY ===
    // Captured before any force or motion so undo lands on the pre-tick state.
    let t0 = PerfTimer::start_if(perf_on);
    if let Some(history) = world.history.as_mut() {
        let snapshot = Snapshot::capture(&world.bodies);
        if perf_on {
            world.perf_stats.snapshot_bodies = snapshot.len() as u32;
        }
        history.push(snapshot);
    }
    accumulate(t0, &mut world.perf_stats.history_ms);

    // === GLOBAL FORCES ===
    // Additive: composes with anything applied before this tick.
    let t0 = PerfTimer::start_if(perf_on);
    let gravity = world.gravity;
    world
        .bodies
        .for_each(move |body| body.acceleration += gravity * body.gravity_scale);
    accumulate(t0, &mut world.perf_stats.forces_ms);

    // === SUB-STEPS ===
    // Strictly sequential: each one integrates from the previous one's
    // corrected positions.
    let iterations = world.iterations;
    let fdt = dt / iterations as f32;
    log::trace!("step: dt = {dt}, {iterations} sub-steps of {fdt}");
    for _ in 0..iterations {
        let t0 = PerfTimer::start_if(perf_on);
        pipeline.step(&mut world.bodies, fdt);
        accumulate(t0, &mut world.perf_stats.integrate_ms);

        let t0 = PerfTimer::start_if(perf_on);
        let contacts = pipeline.query(&world.bodies, &mut world.listeners);
        accumulate(t0, &mut world.perf_stats.query_ms);

        let t0 = PerfTimer::start_if(perf_on);
        let separated = pipeline.separate(&mut world.bodies, &mut world.listeners);
        accumulate(t0, &mut world.perf_stats.separate_ms);

        let t0 = PerfTimer::start_if(perf_on);
        let events = pipeline.notify(&mut world.listeners);
        accumulate(t0, &mut world.perf_stats.notify_ms);

        if perf_on {
            world.perf_stats.substeps += 1;
            world.perf_stats.contacts = world.perf_stats.contacts.saturating_add(contacts as u32);
            world.perf_stats.separated = world.perf_stats.separated.saturating_add(separated as u32);
            world.perf_stats.events = world.perf_stats.events.saturating_add(events as u32);
        }
    }

    // === RESET ===
    // Accelerations are per-tick inputs.
    world.bodies.for_each(|body| body.acceleration = Vec2::ZERO);

    world.frame += 1;
    accumulate(step_start, &mut world.perf_stats.step_ms);
    true
}
