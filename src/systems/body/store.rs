use std::collections::HashMap;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::body::{Body, BodyId};

/// Ordered body membership of a world.
///
/// Iteration follows insertion order; removal keeps the order of the rest.
#[derive(Clone, Debug)]
pub struct Bodies {
    bodies: Vec<Body>,
    index: HashMap<BodyId, usize>,
    next_id: BodyId,
}

impl Bodies {
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            index: HashMap::new(),
            next_id: 1,
        }
    }

    /// Add a body and assign its id.
    pub fn add(&mut self, mut body: Body) -> BodyId {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        debug_assert!(!self.index.contains_key(&id), "duplicate body id {id}");
        body.id = id;
        body.refresh();
        self.index.insert(id, self.bodies.len());
        self.bodies.push(body);
        id
    }

    /// Remove a body by ID.
    pub fn remove(&mut self, id: BodyId) -> Option<Body> {
        let idx = self.index.remove(&id)?;
        let body = self.bodies.remove(idx);
        for i in self.index.values_mut() {
            if *i > idx {
                *i -= 1;
            }
        }
        Some(body)
    }

    /// Remove all bodies. Ids keep counting up so old handles never alias.
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.index.clear();
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn contains(&self, id: BodyId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn index_of(&self, id: BodyId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(self.index_of(id)?)
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        let idx = self.index_of(id)?;
        self.bodies.get_mut(idx)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Body> {
        self.bodies.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Body> {
        self.bodies.iter_mut()
    }

    /// Ids in iteration order
    pub fn ids(&self) -> Vec<BodyId> {
        self.bodies.iter().map(Body::id).collect()
    }

    /// Apply `f` to every body. Runs on the rayon pool when `parallel` is on,
    /// so `f` must only touch the body it is given.
    pub fn for_each<F>(&mut self, f: F)
    where
        F: Fn(&mut Body) + Send + Sync,
    {
        #[cfg(feature = "parallel")]
        {
            self.bodies.par_iter_mut().for_each(f);
        }
        #[cfg(not(feature = "parallel"))]
        {
            self.bodies.iter_mut().for_each(f);
        }
    }

    /// Rebuild derived shape/bounds caches for every body
    pub fn refresh_all(&mut self) {
        self.for_each(Body::refresh);
    }

    /// Two distinct bodies mutably at once
    pub fn pair_mut(&mut self, a: BodyId, b: BodyId) -> Option<(&mut Body, &mut Body)> {
        let ia = self.index_of(a)?;
        let ib = self.index_of(b)?;
        if ia == ib {
            return None;
        }
        if ia < ib {
            let (lo, hi) = self.bodies.split_at_mut(ib);
            Some((&mut lo[ia], &mut hi[0]))
        } else {
            let (lo, hi) = self.bodies.split_at_mut(ia);
            Some((&mut hi[0], &mut lo[ib]))
        }
    }
}

impl Default for Bodies {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Bodies {
    type Item = &'a Body;
    type IntoIter = std::slice::Iter<'a, Body>;

    fn into_iter(self) -> Self::IntoIter {
        self.bodies.iter()
    }
}
