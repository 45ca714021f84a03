use crate::systems::body::{Bodies, Body};

/// Semi-implicit Euler for one sub-step.
///
/// Velocity picks up `acceleration * dt` first, then position and rotation
/// advance with the new velocities. Static bodies are left where they are.
pub fn integrate(bodies: &mut Bodies, dt: f32) {
    bodies.for_each(move |body| integrate_body(body, dt));
}

#[inline]
fn integrate_body(body: &mut Body, dt: f32) {
    if body.is_static() {
        return;
    }
    body.velocity += body.acceleration * dt;
    body.position += body.velocity * dt;
    body.rotation += body.rotational_velocity * dt;
    body.refresh();
}
