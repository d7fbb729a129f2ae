use crate::{EdgeID, NodeID};

/// A single Cell of the Maze in Graph form.
///
/// A Node is nothing but an identity plus the list of Edges touching it. All
/// search state (visited, predecessor, coin balance) lives with the search, not
/// here, so any number of independent searches can share one `&Graph`.
#[derive(Clone, Debug)]
pub struct Node {
    pub(crate) id: NodeID,
    pub(crate) edges: Vec<EdgeID>,
}

impl Node {
    pub(crate) fn new(id: NodeID) -> Node {
        Node {
            id,
            edges: Vec::new(),
        }
    }

    /// The identity of this Node within its Graph.
    pub fn id(&self) -> NodeID {
        self.id
    }

    /// The ids of the Edges incident to this Node, in insertion order.
    ///
    /// Insertion order is what the solver's tie-break is defined on: the first
    /// viable Edge in this slice is the one the search descends into.
    pub fn edge_ids(&self) -> &[EdgeID] {
        &self.edges
    }

    /// The number of Edges incident to this Node.
    pub fn degree(&self) -> usize {
        self.edges.len()
    }
}
