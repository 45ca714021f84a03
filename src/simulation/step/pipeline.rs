use crate::systems::body::Bodies;
use crate::systems::collisions::{self, Listeners};
use crate::systems::physics;

/// The four passes of a sub-step, in the order the orchestrator calls them.
///
/// `DefaultPipeline` wires them to the built-in systems. Swap it out to
/// observe or replace a pass.
pub trait Pipeline {
    /// Integrate motion for one sub-step of length `dt`
    fn step(&mut self, bodies: &mut Bodies, dt: f32);
    /// Detect overlaps for every listener; returns the contact count
    fn query(&mut self, bodies: &Bodies, listeners: &mut Listeners) -> usize;
    /// Resolve the overlaps found by `query`; returns the pairs resolved
    fn separate(&mut self, bodies: &mut Bodies, listeners: &mut Listeners) -> usize;
    /// Fire transition events; returns the events queued
    fn notify(&mut self, listeners: &mut Listeners) -> usize;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultPipeline;

impl Pipeline for DefaultPipeline {
    fn step(&mut self, bodies: &mut Bodies, dt: f32) {
        physics::integrate(bodies, dt);
    }

    fn query(&mut self, bodies: &Bodies, listeners: &mut Listeners) -> usize {
        collisions::query(bodies, listeners)
    }

    fn separate(&mut self, bodies: &mut Bodies, listeners: &mut Listeners) -> usize {
        physics::separate(bodies, listeners)
    }

    fn notify(&mut self, listeners: &mut Listeners) -> usize {
        collisions::notify(listeners)
    }
}
