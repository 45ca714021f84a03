//! Cast line segments and line-vs-shape intersection.

use crate::core::Vec2;

use super::rect::Rect;
use super::shape::WorldShape;

/// Parallel-edge tolerance for segment intersection
const PARALLEL_EPSILON: f32 = 1e-9;

/// Line segment from `start` to `end`.
///
/// Plain stack value, so nothing needs releasing on any exit path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub start: Vec2,
    pub end: Vec2,
}

/// Where a line enters a single shape
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeHit {
    pub point: Vec2,
    /// Surface normal at `point`, facing the line
    pub normal: Vec2,
    /// Euclidean distance from `start` to `point`
    pub distance: f32,
}

impl Line {
    pub fn from_points(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// Start at (x, y), extend by (dx, dy)
    pub fn from_delta(x: f32, y: f32, dx: f32, dy: f32) -> Self {
        Self {
            start: Vec2::new(x, y),
            end: Vec2::new(x + dx, y + dy),
        }
    }

    /// Start point, direction angle (radians) and length
    pub fn from_angle(start: Vec2, angle: f32, length: f32) -> Self {
        Self {
            start,
            end: start + Vec2::from_angle(angle) * length,
        }
    }

    pub fn delta(&self) -> Vec2 {
        self.end - self.start
    }

    pub fn length(&self) -> f32 {
        self.delta().length()
    }

    /// Unit direction, zero for a degenerate line
    pub fn direction(&self) -> Vec2 {
        self.delta().normalize()
    }

    pub fn point_at(&self, t: f32) -> Vec2 {
        self.start + self.delta() * t
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_points(self.start, self.end)
    }

    /// First point where this segment meets `shape`.
    ///
    /// A segment starting inside the shape hits at distance 0 with the
    /// normal facing back along the line.
    pub fn intersect(&self, shape: &WorldShape) -> Option<ShapeHit> {
        if shape.contains(self.start) {
            return Some(ShapeHit {
                point: self.start,
                normal: -self.direction(),
                distance: 0.0,
            });
        }
        match shape {
            WorldShape::Circle { center, radius } => self.intersect_circle(*center, *radius),
            WorldShape::Polygon { vertices, normals } => self.intersect_polygon(vertices, normals),
        }
    }

    fn intersect_circle(&self, center: Vec2, radius: f32) -> Option<ShapeHit> {
        let d = self.delta();
        let f = self.start - center;
        let a = d.dot(d);
        if a <= 0.0 {
            return None;
        }
        let b = 2.0 * f.dot(d);
        let c = f.dot(f) - radius * radius;
        let disc = b * b - 4.0 * a * c;
        if disc < 0.0 {
            return None;
        }
        let t = (-b - disc.sqrt()) / (2.0 * a);
        if !(0.0..=1.0).contains(&t) {
            return None;
        }
        let point = self.point_at(t);
        Some(ShapeHit {
            point,
            normal: (point - center).normalize(),
            distance: t * a.sqrt(),
        })
    }

    fn intersect_polygon(&self, vertices: &[Vec2], normals: &[Vec2]) -> Option<ShapeHit> {
        let r = self.delta();
        let n = vertices.len();
        let mut best: Option<(f32, usize)> = None;

        for i in 0..n {
            let p = vertices[i];
            let s = vertices[(i + 1) % n] - p;
            let denom = r.cross(s);
            if denom.abs() < PARALLEL_EPSILON {
                continue;
            }
            let qp = p - self.start;
            let t = qp.cross(s) / denom;
            let u = qp.cross(r) / denom;
            if !(0.0..=1.0).contains(&t) || !(0.0..=1.0).contains(&u) {
                continue;
            }
            if best.map_or(true, |(bt, _)| t < bt) {
                best = Some((t, i));
            }
        }

        let (t, edge) = best?;
        Some(ShapeHit {
            point: self.point_at(t),
            normal: normals[edge],
            distance: t * r.length(),
        })
    }
}
