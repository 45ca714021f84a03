use std::collections::BTreeSet;

use crate::core::Vec2;
use crate::systems::body::BodyId;

use super::subject::Subject;

pub type ListenerId = u32;

/// Behavior switches for one listener
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListenerOptions {
    /// Push overlapping pairs apart during `separate`
    pub separate: bool,
    pub enter: bool,
    pub stay: bool,
    pub exit: bool,
}

impl Default for ListenerOptions {
    fn default() -> Self {
        Self {
            separate: true,
            enter: true,
            stay: false,
            exit: true,
        }
    }
}

/// Overlap between two bodies found by `query`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contact {
    /// Body from the listener's first subject set
    pub a: BodyId,
    /// Body from the listener's second subject set
    pub b: BodyId,
    /// Unit normal pointing from `a` towards `b`
    pub normal: Vec2,
    /// Penetration depth along `normal` (> 0)
    pub depth: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CollisionKind {
    Enter,
    Stay,
    Exit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollisionEvent {
    pub kind: CollisionKind,
    pub a: BodyId,
    pub b: BodyId,
}

/// How many pipeline passes have touched this listener
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListenerCycles {
    pub queries: u32,
    pub separations: u32,
    pub notifications: u32,
}

/// Pairing of two subject sets that tracks collision transitions between them.
#[derive(Clone, Debug)]
pub struct Listener {
    a: Subject,
    b: Subject,
    options: ListenerOptions,
    contacts: Vec<Contact>,
    active: BTreeSet<(BodyId, BodyId)>,
    events: Vec<CollisionEvent>,
    cycles: ListenerCycles,
}

impl Listener {
    pub fn new(a: impl Into<Subject>, b: impl Into<Subject>, options: ListenerOptions) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
            options,
            contacts: Vec::new(),
            active: BTreeSet::new(),
            events: Vec::new(),
            cycles: ListenerCycles::default(),
        }
    }

    pub fn subjects_a(&self) -> &Subject {
        &self.a
    }

    pub fn subjects_b(&self) -> &Subject {
        &self.b
    }

    pub fn options(&self) -> ListenerOptions {
        self.options
    }

    pub fn set_options(&mut self, options: ListenerOptions) {
        self.options = options;
    }

    /// Contacts from the most recent query
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Pairs that were colliding at the last notify
    pub fn active_pairs(&self) -> impl Iterator<Item = (BodyId, BodyId)> + '_ {
        self.active.iter().copied()
    }

    pub fn is_active(&self, a: BodyId, b: BodyId) -> bool {
        self.active.contains(&(a, b)) || self.active.contains(&(b, a))
    }

    pub fn events(&self) -> &[CollisionEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<CollisionEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn cycles(&self) -> ListenerCycles {
        self.cycles
    }

    /// Orient an unordered pair as (a-side, b-side), or `None` when this
    /// listener does not pair them.
    pub fn orient(&self, x: BodyId, y: BodyId) -> Option<(BodyId, BodyId)> {
        if x == y {
            return None;
        }
        if self.a.includes(x) && self.b.includes(y) {
            Some((x, y))
        } else if self.a.includes(y) && self.b.includes(x) {
            Some((y, x))
        } else {
            None
        }
    }

    pub(crate) fn replace_contacts(&mut self, contacts: Vec<Contact>) {
        self.contacts = contacts;
        self.cycles.queries += 1;
    }

    pub(crate) fn mark_separated(&mut self) {
        self.cycles.separations += 1;
    }

    /// Diff current contacts against the active set and queue transitions.
    pub(crate) fn notify(&mut self) {
        self.cycles.notifications += 1;

        let mut current = BTreeSet::new();
        for c in &self.contacts {
            let pair = (c.a, c.b);
            if !current.insert(pair) {
                continue;
            }
            let kind = if self.active.contains(&pair) {
                CollisionKind::Stay
            } else {
                CollisionKind::Enter
            };
            let wanted = match kind {
                CollisionKind::Enter => self.options.enter,
                CollisionKind::Stay => self.options.stay,
                CollisionKind::Exit => self.options.exit,
            };
            if wanted {
                self.events.push(CollisionEvent { kind, a: c.a, b: c.b });
            }
        }

        if self.options.exit {
            for &(a, b) in self.active.difference(&current) {
                self.events.push(CollisionEvent { kind: CollisionKind::Exit, a, b });
            }
        }

        self.active = current;
    }
}

/// Registry of listeners, iterated in insertion order.
#[derive(Clone, Debug)]
pub struct Listeners {
    entries: Vec<(ListenerId, Listener)>,
    next_id: ListenerId,
}

impl Listeners {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    pub fn add(
        &mut self,
        a: impl Into<Subject>,
        b: impl Into<Subject>,
        options: ListenerOptions,
    ) -> ListenerId {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        self.entries.push((id, Listener::new(a, b, options)));
        id
    }

    pub fn remove(&mut self, id: ListenerId) -> Option<Listener> {
        let idx = self.entries.iter().position(|(lid, _)| *lid == id)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn get(&self, id: ListenerId) -> Option<&Listener> {
        self.entries.iter().find(|(lid, _)| *lid == id).map(|(_, l)| l)
    }

    pub fn get_mut(&mut self, id: ListenerId) -> Option<&mut Listener> {
        self.entries.iter_mut().find(|(lid, _)| *lid == id).map(|(_, l)| l)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Listener> {
        self.entries.iter().map(|(_, l)| l)
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Listener> {
        self.entries.iter_mut().map(|(_, l)| l)
    }

    /// Take a listener out of the registry, consuming it
    pub fn into_first(self) -> Option<Listener> {
        self.entries.into_iter().next().map(|(_, l)| l)
    }
}

impl Default for Listeners {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(a: BodyId, b: BodyId) -> Contact {
        Contact { a, b, normal: Vec2::new(1.0, 0.0), depth: 0.1 }
    }

    #[test]
    fn orient_respects_sides() {
        let l = Listener::new(
            Subject::Body(1),
            Subject::Bodies(vec![2, 3]),
            ListenerOptions::default(),
        );
        assert_eq!(l.orient(1, 2), Some((1, 2)));
        assert_eq!(l.orient(3, 1), Some((1, 3)));
        assert_eq!(l.orient(2, 3), None);
        assert_eq!(l.orient(1, 1), None);

        let everyone = Listener::new(Subject::All, Subject::All, ListenerOptions::default());
        assert_eq!(everyone.orient(7, 3), Some((7, 3)));
    }

    #[test]
    fn enter_stay_exit_sequence() {
        let options = ListenerOptions { stay: true, ..ListenerOptions::default() };
        let mut l = Listener::new(Subject::Body(1), Subject::Body(2), options);

        l.replace_contacts(vec![contact(1, 2)]);
        l.notify();
        l.replace_contacts(vec![contact(1, 2)]);
        l.notify();
        l.replace_contacts(Vec::new());
        l.notify();

        let kinds: Vec<_> = l.drain_events().into_iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![CollisionKind::Enter, CollisionKind::Stay, CollisionKind::Exit]);
        assert!(l.events().is_empty());
        assert_eq!(l.cycles().notifications, 3);
    }

    #[test]
    fn stay_is_off_by_default() {
        let mut l = Listener::new(Subject::Body(1), Subject::Body(2), ListenerOptions::default());
        l.replace_contacts(vec![contact(1, 2)]);
        l.notify();
        l.notify();
        assert_eq!(l.events().len(), 1);
        assert!(l.is_active(2, 1));

        l.set_options(ListenerOptions { stay: true, ..l.options() });
        l.notify();
        assert_eq!(l.events().last().map(|e| e.kind), Some(CollisionKind::Stay));
    }

    #[test]
    fn registry_add_remove() {
        let mut ls = Listeners::new();
        let a = ls.add(Subject::Body(1), Subject::Body(2), ListenerOptions::default());
        let b = ls.add(Subject::Body(3), Subject::Body(4), ListenerOptions::default());
        assert_ne!(a, b);
        assert!(ls.remove(a).is_some());
        assert!(ls.get(a).is_none());
        assert_eq!(ls.get(b).map(|l| l.subjects_a().clone()), Some(Subject::Body(3)));
        ls.clear();
        assert!(ls.is_empty());
    }
}
