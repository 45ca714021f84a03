//! Geometry - bounding boxes, cast lines, shapes and the linecast query.

mod line;
mod linecast;
mod rect;
mod shape;

pub use line::{Line, ShapeHit};
pub use linecast::{
    linecast, reset_linecast_perf_counters, take_linecast_perf_counters, IntersectionData,
};
pub use rect::Rect;
pub use shape::{ConvexPolygon, Shape, WorldShape};
