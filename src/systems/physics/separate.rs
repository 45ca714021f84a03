use std::collections::HashSet;

use crate::systems::body::{Bodies, BodyId};
use crate::systems::collisions::Listeners;

/// Push overlapping pairs apart and cancel their approach velocity.
///
/// Only listeners with `separate` enabled take part. A pair reported by
/// several listeners is resolved once per call. Returns the number of
/// contacts resolved.
pub fn separate(bodies: &mut Bodies, listeners: &mut Listeners) -> usize {
    let mut resolved: HashSet<(BodyId, BodyId)> = HashSet::new();

    for listener in listeners.iter_mut() {
        listener.mark_separated();
        if !listener.options().separate {
            continue;
        }
        for contact in listener.contacts() {
            let key = (contact.a.min(contact.b), contact.a.max(contact.b));
            if resolved.contains(&key) {
                continue;
            }
            let Some((a, b)) = bodies.pair_mut(contact.a, contact.b) else {
                continue;
            };
            let inv_a = a.inverse_mass();
            let inv_b = b.inverse_mass();
            let inv_sum = inv_a + inv_b;
            if inv_sum <= 0.0 {
                continue;
            }
            resolved.insert(key);

            let n = contact.normal;
            let correction = n * (contact.depth / inv_sum);
            a.position -= correction * inv_a;
            b.position += correction * inv_b;

            let approach = (b.velocity - a.velocity).dot(n);
            if approach < 0.0 {
                let e = a.restitution.min(b.restitution);
                let j = -(1.0 + e) * approach / inv_sum;
                let impulse = n * j;
                a.velocity -= impulse * inv_a;
                b.velocity += impulse * inv_b;
            }

            a.refresh();
            b.refresh();
        }
    }

    resolved.len()
}
