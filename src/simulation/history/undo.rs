//! Undo/redo controller.
//!
//! Undo restores position, rotation and velocity only. Redo restores those
//! plus acceleration and rotational velocity (see
//! `undo_leaves_rotational_velocity` in the simulation tests).

use crate::systems::body::Bodies;

use super::history::Snapshot;
use super::WorldCore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Restore {
    /// position, rotation, velocity
    Pose,
    /// pose plus acceleration and rotational velocity
    Full,
}

pub(super) fn undo(world: &mut WorldCore) -> bool {
    let Some(history) = world.history.as_mut() else {
        return false;
    };
    let Some(snapshot) = history.pop_undo() else {
        log::debug!("undo: history empty");
        return false;
    };
    history.push_redo(Snapshot::capture(&world.bodies));
    restore(&mut world.bodies, &snapshot, Restore::Pose);
    world.refresh();
    true
}

pub(super) fn redo(world: &mut WorldCore) -> bool {
    let Some(history) = world.history.as_mut() else {
        return false;
    };
    let Some(snapshot) = history.pop_redo() else {
        log::debug!("redo: nothing to redo");
        return false;
    };
    history.push_undo(Snapshot::capture(&world.bodies));
    restore(&mut world.bodies, &snapshot, Restore::Full);
    world.refresh();
    true
}

/// Overwrite matching bodies by id. Bodies missing from the snapshot are
/// untouched; records for bodies no longer present are dropped.
fn restore(bodies: &mut Bodies, snapshot: &Snapshot, fields: Restore) {
    debug_assert!(snapshot.has_unique_ids(), "snapshot holds duplicate body ids");

    for record in snapshot.records() {
        let Some(body) = bodies.get_mut(record.id) else {
            continue;
        };
        body.position = record.position;
        body.rotation = record.rotation;
        body.velocity = record.velocity;
        if fields == Restore::Full {
            body.acceleration = record.acceleration;
            body.rotational_velocity = record.rotational_velocity;
        }
    }
}
