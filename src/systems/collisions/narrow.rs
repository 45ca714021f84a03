//! Narrow phase: exact overlap tests between world-space shapes.
//!
//! Every test returns the normal pointing from the first shape towards the
//! second, and a strictly positive depth.

use crate::core::Vec2;
use crate::geometry::WorldShape;
use crate::systems::body::Body;

use super::listener::Contact;

/// Fallback axis when two centers coincide
const COINCIDENT_NORMAL: Vec2 = Vec2::new(0.0, 1.0);

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Penetration {
    pub normal: Vec2,
    pub depth: f32,
}

/// Deepest overlap between any shape of `a` and any shape of `b`.
pub(crate) fn collide_bodies(a: &Body, b: &Body) -> Option<Contact> {
    let mut deepest: Option<Penetration> = None;
    for sa in a.world_shapes() {
        for sb in b.world_shapes() {
            if !sa.bounds().overlaps(&sb.bounds()) {
                continue;
            }
            if let Some(p) = collide_shapes(sa, sb) {
                if deepest.map_or(true, |d| p.depth > d.depth) {
                    deepest = Some(p);
                }
            }
        }
    }
    deepest.map(|p| Contact {
        a: a.id(),
        b: b.id(),
        normal: p.normal,
        depth: p.depth,
    })
}

pub(crate) fn collide_shapes(a: &WorldShape, b: &WorldShape) -> Option<Penetration> {
    match (a, b) {
        (WorldShape::Circle { center: ca, radius: ra }, WorldShape::Circle { center: cb, radius: rb }) => {
            circle_circle(*ca, *ra, *cb, *rb)
        }
        (WorldShape::Polygon { vertices, normals }, WorldShape::Circle { center, radius }) => {
            polygon_circle(vertices, normals, *center, *radius)
        }
        (WorldShape::Circle { center, radius }, WorldShape::Polygon { vertices, normals }) => {
            polygon_circle(vertices, normals, *center, *radius).map(|p| Penetration {
                normal: -p.normal,
                depth: p.depth,
            })
        }
        (
            WorldShape::Polygon { vertices: va, normals: na },
            WorldShape::Polygon { vertices: vb, normals: nb },
        ) => polygon_polygon(va, na, vb, nb, b.centroid() - a.centroid()),
    }
}

fn circle_circle(ca: Vec2, ra: f32, cb: Vec2, rb: f32) -> Option<Penetration> {
    let d = cb - ca;
    let r = ra + rb;
    let dist2 = d.length_squared();
    if dist2 >= r * r {
        return None;
    }
    let dist = dist2.sqrt();
    let normal = if dist > 0.0 { d * (1.0 / dist) } else { COINCIDENT_NORMAL };
    Some(Penetration { normal, depth: r - dist })
}

/// Normal points from the polygon towards the circle.
fn polygon_circle(vertices: &[Vec2], normals: &[Vec2], center: Vec2, radius: f32) -> Option<Penetration> {
    let n = vertices.len();
    let mut max_sep = f32::NEG_INFINITY;
    let mut max_edge = 0;
    for i in 0..n {
        let s = normals[i].dot(center - vertices[i]);
        if s > radius {
            return None;
        }
        if s > max_sep {
            max_sep = s;
            max_edge = i;
        }
    }

    if max_sep <= 0.0 {
        // Center inside the polygon
        return Some(Penetration {
            normal: normals[max_edge],
            depth: radius - max_sep,
        });
    }

    let mut closest = vertices[0];
    let mut best = f32::INFINITY;
    for i in 0..n {
        let p = closest_on_segment(vertices[i], vertices[(i + 1) % n], center);
        let d2 = (center - p).length_squared();
        if d2 < best {
            best = d2;
            closest = p;
        }
    }
    if best >= radius * radius {
        return None;
    }
    let dist = best.sqrt();
    let normal = if dist > 0.0 {
        (center - closest) * (1.0 / dist)
    } else {
        normals[max_edge]
    };
    Some(Penetration { normal, depth: radius - dist })
}

fn closest_on_segment(a: Vec2, b: Vec2, p: Vec2) -> Vec2 {
    let ab = b - a;
    let len2 = ab.length_squared();
    if len2 <= 0.0 {
        return a;
    }
    let t = ((p - a).dot(ab) / len2).clamp(0.0, 1.0);
    a + ab * t
}

fn project(vertices: &[Vec2], axis: Vec2) -> (f32, f32) {
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for v in vertices {
        let p = v.dot(axis);
        min = min.min(p);
        max = max.max(p);
    }
    (min, max)
}

/// Separating axis test over both polygons' edge normals. The normal is
/// flipped to agree with `a_to_b`.
fn polygon_polygon(
    va: &[Vec2],
    na: &[Vec2],
    vb: &[Vec2],
    nb: &[Vec2],
    a_to_b: Vec2,
) -> Option<Penetration> {
    let mut best_depth = f32::INFINITY;
    let mut best_axis = COINCIDENT_NORMAL;

    for axis in na.iter().chain(nb.iter()) {
        let (min_a, max_a) = project(va, *axis);
        let (min_b, max_b) = project(vb, *axis);
        let overlap = (max_a - min_b).min(max_b - min_a);
        if overlap <= 0.0 {
            return None;
        }
        if overlap < best_depth {
            best_depth = overlap;
            best_axis = *axis;
        }
    }

    if a_to_b.dot(best_axis) < 0.0 {
        best_axis = -best_axis;
    }
    Some(Penetration { normal: best_axis, depth: best_depth })
}
