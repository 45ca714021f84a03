use std::collections::HashSet;

use crate::systems::body::{Bodies, BodyId};

use super::listener::{Contact, Listener, Listeners};
use super::narrow::collide_bodies;

/// Broad + narrow phase for every listener in `listeners`.
///
/// Each listener's contacts are replaced with the overlaps found in its
/// `a x b` scope. Returns the total contact count.
pub fn query(bodies: &Bodies, listeners: &mut Listeners) -> usize {
    let mut total = 0;
    for listener in listeners.iter_mut() {
        let contacts = query_listener(bodies, listener);
        total += contacts.len();
        listener.replace_contacts(contacts);
    }
    total
}

fn query_listener(bodies: &Bodies, listener: &Listener) -> Vec<Contact> {
    let mut seen: HashSet<(BodyId, BodyId)> = HashSet::new();
    let mut contacts = Vec::new();
    let side_a = listener.subjects_a().resolve(bodies);
    let side_b = listener.subjects_b().resolve(bodies);

    for &ida in &side_a {
        let Some(a) = bodies.get(ida) else {
            continue;
        };
        let bounds_a = a.bounds();
        for &idb in &side_b {
            if ida == idb {
                continue;
            }
            let key = (ida.min(idb), ida.max(idb));
            if !seen.insert(key) {
                continue;
            }
            let Some(b) = bodies.get(idb) else {
                continue;
            };
            if !bounds_a.overlaps(&b.bounds()) {
                continue;
            }
            if let Some(contact) = collide_bodies(a, b) {
                contacts.push(contact);
            }
        }
    }

    contacts
}
