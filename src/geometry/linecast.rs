//! Closest-hit linecast over a set of bodies.
//!
//! Bodies whose bounds miss the line's bounding box are rejected before any
//! shape is tested. Among the remaining shapes the smallest distance wins;
//! on a tie the first hit in body order, then shape order, is kept.

use std::cell::RefCell;

use crate::core::Vec2;
use crate::systems::body::{Body, BodyId};

use super::line::Line;

thread_local! {
    pub static PERF_LINECAST_SHAPE_TESTS: RefCell<u64> = RefCell::new(0);
    pub static PERF_LINECAST_BODIES_REJECTED: RefCell<u64> = RefCell::new(0);
}

pub fn reset_linecast_perf_counters() {
    PERF_LINECAST_SHAPE_TESTS.with(|c| *c.borrow_mut() = 0);
    PERF_LINECAST_BODIES_REJECTED.with(|c| *c.borrow_mut() = 0);
}

/// (shape tests, bodies rejected by the bounds check) since the last reset
pub fn take_linecast_perf_counters() -> (u64, u64) {
    let tests = PERF_LINECAST_SHAPE_TESTS.with(|c| std::mem::take(&mut *c.borrow_mut()));
    let rejected = PERF_LINECAST_BODIES_REJECTED.with(|c| std::mem::take(&mut *c.borrow_mut()));
    (tests, rejected)
}

/// Closest intersection found by a linecast
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionData {
    pub point: Vec2,
    pub normal: Vec2,
    /// Distance from the line start, used to pick the closest hit
    pub distance: f32,
    pub body: BodyId,
    /// Index into the body's shape list
    pub shape: usize,
}

/// Cast `line` against every shape of every body in `targets`.
pub fn linecast<'a, I>(line: &Line, targets: I) -> Option<IntersectionData>
where
    I: IntoIterator<Item = &'a Body>,
{
    let line_bounds = line.bounds();
    let mut closest: Option<IntersectionData> = None;
    let mut shape_tests = 0u64;
    let mut rejected = 0u64;

    for body in targets {
        if !body.bounds().overlaps(&line_bounds) {
            rejected += 1;
            continue;
        }
        for (index, shape) in body.world_shapes().iter().enumerate() {
            shape_tests += 1;
            let Some(hit) = line.intersect(shape) else {
                continue;
            };
            if closest.map_or(true, |best| hit.distance < best.distance) {
                closest = Some(IntersectionData {
                    point: hit.point,
                    normal: hit.normal,
                    distance: hit.distance,
                    body: body.id(),
                    shape: index,
                });
            }
        }
    }

    PERF_LINECAST_SHAPE_TESTS.with(|c| {
        let mut v = c.borrow_mut();
        *v = v.saturating_add(shape_tests);
    });
    PERF_LINECAST_BODIES_REJECTED.with(|c| {
        let mut v = c.borrow_mut();
        *v = v.saturating_add(rejected);
    });

    closest
}
