use crate::systems::collisions::{Listener, ListenerOptions, Listeners, Subject};

use super::{Pipeline, WorldCore};

/// The four shapes a one-shot check can be called with
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CheckScope {
    /// Whole world against itself
    Neither,
    /// `a` against itself
    OnlyA(Subject),
    /// `b` against itself
    OnlyB(Subject),
    Both(Subject, Subject),
}

impl CheckScope {
    pub fn from_args(a: Option<Subject>, b: Option<Subject>) -> Self {
        match (a, b) {
            (None, None) => CheckScope::Neither,
            (Some(a), None) => CheckScope::OnlyA(a),
            (None, Some(b)) => CheckScope::OnlyB(b),
            (Some(a), Some(b)) => CheckScope::Both(a, b),
        }
    }

    /// Listener subject pair for this scope
    pub fn subjects(self) -> (Subject, Subject) {
        match self {
            CheckScope::Neither => (Subject::All, Subject::All),
            CheckScope::OnlyA(s) | CheckScope::OnlyB(s) => (s.clone(), s),
            CheckScope::Both(a, b) => (a, b),
        }
    }
}

/// Single query -> separate -> notify cycle on a throwaway listener.
///
/// Time does not advance and the world's own listeners are not touched.
pub(super) fn check<P: Pipeline>(
    world: &mut WorldCore,
    pipeline: &mut P,
    scope: CheckScope,
    options: ListenerOptions,
) -> Listener {
    let (a, b) = scope.subjects();
    let mut scoped = Listeners::new();
    scoped.add(a.clone(), b.clone(), options);

    let contacts = pipeline.query(&world.bodies, &mut scoped);
    let separated = pipeline.separate(&mut world.bodies, &mut scoped);
    let events = pipeline.notify(&mut scoped);
    log::trace!("check: {contacts} contacts, {separated} separated, {events} events");

    scoped
        .into_first()
        .unwrap_or_else(|| Listener::new(a, b, options))
}
