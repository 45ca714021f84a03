use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::core::Vec2;
use crate::systems::body::{Bodies, Body, BodyId};

/// Kinematic state of one body at capture time
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyRecord {
    pub id: BodyId,
    pub position: Vec2,
    pub rotation: f32,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    pub rotational_velocity: f32,
}

impl BodyRecord {
    pub fn capture(body: &Body) -> Self {
        Self {
            id: body.id(),
            position: body.position,
            rotation: body.rotation,
            velocity: body.velocity,
            acceleration: body.acceleration,
            rotational_velocity: body.rotational_velocity,
        }
    }
}

/// Deep copy of every body's kinematic state, in body iteration order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    records: Vec<BodyRecord>,
}

impl Snapshot {
    pub fn capture(bodies: &Bodies) -> Self {
        Self {
            records: bodies.iter().map(BodyRecord::capture).collect(),
        }
    }

    pub fn from_records(records: Vec<BodyRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[BodyRecord] {
        &self.records
    }

    pub fn record(&self, id: BodyId) -> Option<&BodyRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub(crate) fn has_unique_ids(&self) -> bool {
        let mut ids: Vec<BodyId> = self.records.iter().map(|r| r.id).collect();
        ids.sort_unstable();
        ids.windows(2).all(|w| w[0] != w[1])
    }
}

/// Bounded undo/redo stacks of snapshots.
///
/// `push` records a fresh tick and drops the whole redo side, so redo can
/// never bring back a timeline that new ticks have replaced. Both sides hold
/// at most `capacity` snapshots; the oldest is evicted first.
#[derive(Clone, Debug)]
pub struct History {
    undo: VecDeque<Snapshot>,
    redo: VecDeque<Snapshot>,
    capacity: usize,
}

impl History {
    /// Capacity below 1 is raised to 1
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            undo: VecDeque::with_capacity(capacity.min(64)),
            redo: VecDeque::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Shrinking evicts the oldest snapshots on both sides
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.max(1);
        while self.undo.len() > self.capacity {
            self.undo.pop_front();
        }
        while self.redo.len() > self.capacity {
            self.redo.pop_front();
        }
    }

    /// Record a new tick. Invalidates redo.
    pub fn push(&mut self, snapshot: Snapshot) {
        self.redo.clear();
        self.push_undo(snapshot);
    }

    pub fn pop_undo(&mut self) -> Option<Snapshot> {
        self.undo.pop_back()
    }

    pub fn pop_redo(&mut self) -> Option<Snapshot> {
        self.redo.pop_back()
    }

    /// Newest snapshot on the undo side
    pub fn peek_undo(&self) -> Option<&Snapshot> {
        self.undo.back()
    }

    pub fn peek_redo(&self) -> Option<&Snapshot> {
        self.redo.back()
    }

    /// Push onto the undo side without touching redo (used by redo itself)
    pub(crate) fn push_undo(&mut self, snapshot: Snapshot) {
        if self.undo.len() == self.capacity {
            self.undo.pop_front();
        }
        self.undo.push_back(snapshot);
    }

    pub(crate) fn push_redo(&mut self, snapshot: Snapshot) {
        if self.redo.len() == self.capacity {
            self.redo.pop_front();
        }
        self.redo.push_back(snapshot);
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}
