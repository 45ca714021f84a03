use crate::systems::body::{Bodies, BodyId};

/// One side of a listener or query: a body, several bodies, or every member
/// of the world. Resolved against the live body set each time it is used.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Subject {
    All,
    Body(BodyId),
    /// Ids not present in the world are skipped
    Bodies(Vec<BodyId>),
}

impl Subject {
    /// Ids currently in `bodies`, in subject order
    pub fn resolve(&self, bodies: &Bodies) -> Vec<BodyId> {
        match self {
            Subject::All => bodies.ids(),
            Subject::Body(id) => {
                if bodies.contains(*id) {
                    vec![*id]
                } else {
                    Vec::new()
                }
            }
            Subject::Bodies(ids) => ids.iter().copied().filter(|id| bodies.contains(*id)).collect(),
        }
    }

    /// Whether `id` belongs to this subject (`All` matches everything)
    pub fn includes(&self, id: BodyId) -> bool {
        match self {
            Subject::All => true,
            Subject::Body(b) => *b == id,
            Subject::Bodies(ids) => ids.contains(&id),
        }
    }
}

impl From<BodyId> for Subject {
    fn from(id: BodyId) -> Self {
        Subject::Body(id)
    }
}

impl From<Vec<BodyId>> for Subject {
    fn from(ids: Vec<BodyId>) -> Self {
        Subject::Bodies(ids)
    }
}

impl From<&[BodyId]> for Subject {
    fn from(ids: &[BodyId]) -> Self {
        Subject::Bodies(ids.to_vec())
    }
}
