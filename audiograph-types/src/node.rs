use std::fmt::{Display, Formatter};

/// Unique instance name of a transformer in a wired graph, e.g. `audiosplitter2`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeHandle {
    pub id: String,
}

impl NodeHandle {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Display for NodeHandle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.id)
    }
}
