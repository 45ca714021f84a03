use crate::core::Vec2;
use crate::geometry::{self, IntersectionData, Line};

use super::{Subject, WorldCore};

/// Linecast against the bodies named by `target`, in the order given
pub(super) fn linecast(world: &WorldCore, line: &Line, target: &Subject) -> Option<IntersectionData> {
    let bodies = &world.bodies;
    match target {
        Subject::All => geometry::linecast(line, bodies),
        Subject::Body(id) => geometry::linecast(line, bodies.get(*id)),
        Subject::Bodies(ids) => geometry::linecast(line, ids.iter().filter_map(|id| bodies.get(*id))),
    }
}

pub(super) fn linecast_delta(
    world: &WorldCore,
    x: f32,
    y: f32,
    dx: f32,
    dy: f32,
    target: &Subject,
) -> Option<IntersectionData> {
    linecast(world, &Line::from_delta(x, y, dx, dy), target)
}

pub(super) fn linecast_angle(
    world: &WorldCore,
    start: Vec2,
    angle: f32,
    length: f32,
    target: &Subject,
) -> Option<IntersectionData> {
    linecast(world, &Line::from_angle(start, angle, length), target)
}

pub(super) fn linecast_points(
    world: &WorldCore,
    start: Vec2,
    end: Vec2,
    target: &Subject,
) -> Option<IntersectionData> {
    linecast(world, &Line::from_points(start, end), target)
}
