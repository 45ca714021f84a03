use crate::core::Vec2;
use crate::geometry::{Rect, Shape, WorldShape};

/// Identity of a body within one world. Assigned on insertion, never reused.
pub type BodyId = u32;

/// Whether the integrator moves the body
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BodyKind {
    #[default]
    Dynamic,
    /// Infinite mass, never integrated
    Static,
}

/// Rigid Body - moves as a single unit
#[derive(Clone, Debug)]
pub struct Body {
    /// Unique ID for this body (0 until added to a world)
    pub(crate) id: BodyId,
    pub kind: BodyKind,

    // === Physics State ===
    /// World position (body origin)
    pub position: Vec2,
    /// Rotation angle (radians)
    pub rotation: f32,
    /// Velocity vector (units per second)
    pub velocity: Vec2,
    /// Accumulated acceleration for the current tick, cleared after each step
    pub acceleration: Vec2,
    /// Angular velocity (radians per second)
    pub rotational_velocity: f32,
    /// Multiplier on world gravity
    pub gravity_scale: f32,

    // === Material properties ===
    mass: f32,
    inverse_mass: f32,
    /// Bounciness (0.0 = no bounce, 1.0 = full elastic)
    pub restitution: f32,

    // === Shape Definition ===
    shapes: Vec<Shape>,

    // === Derived state, rebuilt by refresh() ===
    world_shapes: Vec<WorldShape>,
    bounds: Rect,
}

impl Body {
    /// Create a dynamic body from its shapes. Mass defaults to total shape area.
    pub fn new(x: f32, y: f32, shapes: Vec<Shape>) -> Self {
        let area: f32 = shapes.iter().map(Shape::area).sum();
        let mut body = Self {
            id: 0,
            kind: BodyKind::Dynamic,
            position: Vec2::new(x, y),
            rotation: 0.0,
            velocity: Vec2::zero(),
            acceleration: Vec2::zero(),
            rotational_velocity: 0.0,
            gravity_scale: 1.0,
            mass: 1.0,
            inverse_mass: 1.0,
            restitution: 0.3,
            shapes,
            world_shapes: Vec::new(),
            bounds: Rect::empty(),
        };
        body.set_mass(area);
        body.refresh();
        body
    }

    /// Create a circular body
    pub fn circle(x: f32, y: f32, radius: f32) -> Self {
        Self::new(x, y, vec![Shape::circle(radius)])
    }

    /// Create a rectangular body centered on (x, y)
    pub fn rect(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self::new(x, y, vec![Shape::rect(w, h)])
    }

    /// Convex polygon body, `None` for degenerate outlines
    pub fn polygon(x: f32, y: f32, vertices: Vec<Vec2>) -> Option<Self> {
        Shape::polygon(vertices).map(|shape| Self::new(x, y, vec![shape]))
    }

    pub fn with_kind(mut self, kind: BodyKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self.refresh();
        self
    }

    pub fn with_gravity_scale(mut self, scale: f32) -> Self {
        self.gravity_scale = scale;
        self
    }

    pub fn with_mass(mut self, mass: f32) -> Self {
        self.set_mass(mass);
        self
    }

    pub fn with_restitution(mut self, r: f32) -> Self {
        self.set_restitution(r);
        self
    }

    pub fn id(&self) -> BodyId {
        self.id
    }

    pub fn is_static(&self) -> bool {
        self.kind == BodyKind::Static
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// Zero for static bodies
    pub fn inverse_mass(&self) -> f32 {
        if self.is_static() {
            0.0
        } else {
            self.inverse_mass
        }
    }

    /// Non-positive or non-finite mass falls back to 1.0
    pub fn set_mass(&mut self, mass: f32) {
        self.mass = if mass.is_finite() && mass > 0.0 { mass } else { 1.0 };
        self.inverse_mass = 1.0 / self.mass;
    }

    /// Set restitution (bounciness)
    pub fn set_restitution(&mut self, r: f32) {
        self.restitution = r.clamp(0.0, 1.0);
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Shapes in world space as of the last refresh
    pub fn world_shapes(&self) -> &[WorldShape] {
        &self.world_shapes
    }

    pub fn add_shape(&mut self, shape: Shape) {
        self.shapes.push(shape);
        self.refresh();
    }

    /// Bounding box of every shape as of the last refresh
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Apply impulse at center of mass
    pub fn apply_impulse(&mut self, impulse: Vec2) {
        self.velocity += impulse * self.inverse_mass();
    }

    /// Apply force for the current tick (cleared with acceleration after the step)
    pub fn apply_force(&mut self, force: Vec2) {
        self.acceleration += force * self.inverse_mass();
    }

    /// Recompute world-space shapes and bounds from position and rotation.
    ///
    /// Must run after any manual edit of `position` or `rotation`.
    pub fn refresh(&mut self) {
        self.world_shapes.clear();
        let mut bounds = Rect::empty();
        for shape in &self.shapes {
            let ws = shape.to_world(self.position, self.rotation);
            bounds = bounds.union(&ws.bounds());
            self.world_shapes.push(ws);
        }
        self.bounds = bounds;
    }
}
