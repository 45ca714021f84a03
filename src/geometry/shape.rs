use crate::core::Vec2;

use super::rect::Rect;

/// Convex, counter-clockwise outline with at least three vertices and
/// non-zero area. Only built through `ConvexPolygon::new` or `Shape::rect`.
#[derive(Clone, Debug, PartialEq)]
pub struct ConvexPolygon {
    vertices: Vec<Vec2>,
}

impl ConvexPolygon {
    /// Clockwise input is reversed. Returns `None` for fewer than three
    /// vertices or a zero-area outline. Convexity is the caller's job.
    pub fn new(mut vertices: Vec<Vec2>) -> Option<Self> {
        if vertices.len() < 3 {
            return None;
        }
        let area = signed_area(&vertices);
        if area.abs() < f32::EPSILON {
            return None;
        }
        if area < 0.0 {
            vertices.reverse();
        }
        Some(Self { vertices })
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }
}

/// Shape in body-local coordinates (relative to the body origin).
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Circle { offset: Vec2, radius: f32 },
    Polygon(ConvexPolygon),
}

impl Shape {
    pub fn circle(radius: f32) -> Self {
        Shape::Circle { offset: Vec2::ZERO, radius: radius.abs() }
    }

    pub fn circle_at(offset: Vec2, radius: f32) -> Self {
        Shape::Circle { offset, radius: radius.abs() }
    }

    /// Box of size `w` x `h` centered on the body origin. A zero-sized box
    /// collapses to a point circle.
    pub fn rect(w: f32, h: f32) -> Self {
        let hw = w.abs() * 0.5;
        let hh = h.abs() * 0.5;
        ConvexPolygon::new(vec![
            Vec2::new(-hw, -hh),
            Vec2::new(hw, -hh),
            Vec2::new(hw, hh),
            Vec2::new(-hw, hh),
        ])
        .map_or(Shape::circle(0.0), Shape::Polygon)
    }

    /// Convex polygon from its outline, see `ConvexPolygon::new`
    pub fn polygon(vertices: Vec<Vec2>) -> Option<Self> {
        ConvexPolygon::new(vertices).map(Shape::Polygon)
    }

    /// Area used for mass computation
    pub fn area(&self) -> f32 {
        match self {
            Shape::Circle { radius, .. } => std::f32::consts::PI * radius * radius,
            Shape::Polygon(polygon) => signed_area(polygon.vertices()).abs(),
        }
    }

    /// Transform into world space using the body's pose
    pub fn to_world(&self, position: Vec2, rotation: f32) -> WorldShape {
        let (sin, cos) = rotation.sin_cos();
        match self {
            Shape::Circle { offset, radius } => WorldShape::Circle {
                center: position + offset.rotate_sc(sin, cos),
                radius: *radius,
            },
            Shape::Polygon(polygon) => {
                let world: Vec<Vec2> = polygon
                    .vertices()
                    .iter()
                    .map(|v| position + v.rotate_sc(sin, cos))
                    .collect();
                let n = world.len();
                let normals = (0..n)
                    .map(|i| {
                        let e = world[(i + 1) % n] - world[i];
                        Vec2::new(e.y, -e.x).normalize()
                    })
                    .collect();
                WorldShape::Polygon { vertices: world, normals }
            }
        }
    }
}

fn signed_area(vertices: &[Vec2]) -> f32 {
    let n = vertices.len();
    let mut sum = 0.0;
    for i in 0..n {
        sum += vertices[i].cross(vertices[(i + 1) % n]);
    }
    sum * 0.5
}

/// Shape transformed by its body's position and rotation.
#[derive(Clone, Debug, PartialEq)]
pub enum WorldShape {
    Circle { center: Vec2, radius: f32 },
    /// `normals[i]` is the outward normal of edge `vertices[i] -> vertices[i + 1]`
    Polygon { vertices: Vec<Vec2>, normals: Vec<Vec2> },
}

impl WorldShape {
    pub fn bounds(&self) -> Rect {
        match self {
            WorldShape::Circle { center, radius } => Rect::around(*center, *radius),
            WorldShape::Polygon { vertices, .. } => {
                let mut r = Rect::empty();
                for v in vertices {
                    r.include_point(*v);
                }
                r
            }
        }
    }

    /// Fewer than three vertices encloses nothing
    pub fn contains(&self, p: Vec2) -> bool {
        match self {
            WorldShape::Circle { center, radius } => (p - *center).length_squared() <= radius * radius,
            WorldShape::Polygon { vertices, .. } if vertices.len() < 3 => false,
            WorldShape::Polygon { vertices, normals } => vertices
                .iter()
                .zip(normals.iter())
                .all(|(v, n)| (p - *v).dot(*n) <= 0.0),
        }
    }

    pub fn centroid(&self) -> Vec2 {
        match self {
            WorldShape::Circle { center, .. } => *center,
            WorldShape::Polygon { vertices, .. } => {
                let mut sum = Vec2::ZERO;
                for v in vertices {
                    sum += *v;
                }
                sum * (1.0 / vertices.len().max(1) as f32)
            }
        }
    }
}
