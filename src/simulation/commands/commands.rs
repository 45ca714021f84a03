use crate::systems::body::{Body, BodyId};
use crate::systems::collisions::{ListenerId, ListenerOptions, Subject};

use super::WorldCore;

pub(super) fn add_body(world: &mut WorldCore, body: Body) -> BodyId {
    let id = world.bodies.add(body);
    log::trace!("add_body: id {id}, {} bodies", world.bodies.len());
    id
}

/// Listeners keep naming the id; it is skipped once the body is gone.
pub(super) fn remove_body(world: &mut WorldCore, id: BodyId) -> Option<Body> {
    let removed = world.bodies.remove(id);
    if removed.is_none() {
        log::debug!("remove_body: no body with id {id}");
    }
    removed
}

pub(super) fn add_listener(
    world: &mut WorldCore,
    a: Subject,
    b: Subject,
    options: ListenerOptions,
) -> ListenerId {
    world.listeners.add(a, b, options)
}

/// Drop every body, listener and history entry. The frame counter and the
/// body id sequence keep running.
pub(super) fn clear(world: &mut WorldCore) {
    world.bodies.clear();
    world.listeners.clear();
    if let Some(history) = world.history.as_mut() {
        history.clear();
    }
}
