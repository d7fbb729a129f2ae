//! The adjacency structure a Maze is solved on.
//!
//! One [`Graph`] owns every [`Node`] and [`Edge`] created for one Maze. The
//! Graph itself carries no search state; see [`Maze::solve`](crate::Maze::solve)
//! for how searches keep their bookkeeping on the side.

mod node;
pub use self::node::Node;

mod edge;
pub use self::edge::{Edge, EdgeKind};

use crate::{Cost, EdgeID, NodeID};

/// Errors from direct Graph access.
#[derive(Clone, Copy, Debug, thiserror::Error)]
pub enum GraphError {
    /// The referenced Node does not exist in this Graph.
    #[error("node {0} does not exist in this graph")]
    NodeNotFound(NodeID),
    /// No Edge connects the two Nodes.
    #[error("no edge between nodes {0} and {1}")]
    EdgeNotFound(NodeID, NodeID),
    /// The Node is not an endpoint of the Edge it was used with.
    #[error("node {node} is not an endpoint of the edge ({a}, {b})")]
    NotIncident {
        /// The Node that was passed in.
        node: NodeID,
        /// First endpoint of the Edge.
        a: NodeID,
        /// Second endpoint of the Edge.
        b: NodeID,
    },
}

/// An adjacency-list Graph over the Cells of one Maze.
///
/// Nodes and Edges live in two [`Slab`](slab::Slab)s, so ids are dense and
/// insertion-ordered: creating `n` Nodes in a row yields ids `0..n`, which is
/// exactly the `row * width + column` mapping the Grid parser relies on. Every
/// Edge id appears in the incident list of *both* its endpoints.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    nodes: slab::Slab<Node>,
    edges: slab::Slab<Edge>,
}

impl Graph {
    /// Creates an empty Graph.
    pub fn new() -> Graph {
        Graph::default()
    }

    /// Creates a Graph with `count` Nodes and no Edges, ids `0..count`.
    pub fn with_nodes(count: usize) -> Graph {
        let mut graph = Graph {
            nodes: slab::Slab::with_capacity(count),
            edges: slab::Slab::new(),
        };
        for _ in 0..count {
            graph.add_node();
        }
        graph
    }

    /// Adds a Node and returns its id.
    pub fn add_node(&mut self) -> NodeID {
        let id = self.nodes.vacant_key();
        self.nodes.insert(Node::new(id))
    }

    /// The number of Nodes in the Graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The number of Edges in the Graph.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Looks up a Node by id.
    pub fn get_node(&self, id: NodeID) -> Result<&Node, GraphError> {
        self.nodes.get(id).ok_or(GraphError::NodeNotFound(id))
    }

    /// Iterates over all Nodes in id order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter().map(|(_, node)| node)
    }

    /// Inserts an undirected Edge between `u` and `v` and returns its id.
    ///
    /// Both endpoints must already exist. The new Edge is appended to the
    /// incident list of both Nodes, making it the last one either side's
    /// [`incident_edges`](Graph::incident_edges) yields.
    pub fn insert_edge(&mut self, u: NodeID, v: NodeID, cost: Cost) -> Result<EdgeID, GraphError> {
        if !self.nodes.contains(u) {
            return Err(GraphError::NodeNotFound(u));
        }
        if !self.nodes.contains(v) {
            return Err(GraphError::NodeNotFound(v));
        }
        let id = self.edges.insert(Edge::new(u, v, cost));
        self.nodes[u].edges.push(id);
        self.nodes[v].edges.push(id);
        Ok(id)
    }

    /// Looks up an Edge by id.
    pub fn edge(&self, id: EdgeID) -> Option<&Edge> {
        self.edges.get(id)
    }

    /// The Edges incident to `u`, lazily, in insertion order.
    ///
    /// The returned iterator is `Clone`, so it can be restarted as often as
    /// needed.
    pub fn incident_edges(
        &self,
        u: NodeID,
    ) -> Result<impl Iterator<Item = &Edge> + Clone + '_, GraphError> {
        let node = self.get_node(u)?;
        Ok(node.edges.iter().map(move |&id| &self.edges[id]))
    }

    /// Returns the Edge connecting `u` and `v`, regardless of which endpoint
    /// was stored first.
    ///
    /// Earlier designs of this structure only matched when `v` was the stored
    /// second endpoint; the lookup here is deliberately symmetric.
    pub fn edge_between(&self, u: NodeID, v: NodeID) -> Result<&Edge, GraphError> {
        if !self.nodes.contains(v) {
            return Err(GraphError::NodeNotFound(v));
        }
        self.incident_edges(u)?
            .find(|edge| edge.opposite(u).map_or(false, |other| other == v))
            .ok_or(GraphError::EdgeNotFound(u, v))
    }

    /// Whether any Edge connects `u` and `v`.
    pub fn are_adjacent(&self, u: NodeID, v: NodeID) -> Result<bool, GraphError> {
        if !self.nodes.contains(v) {
            return Err(GraphError::NodeNotFound(v));
        }
        Ok(self
            .incident_edges(u)?
            .any(|edge| edge.first_endpoint() == v || edge.second_endpoint() == v))
    }
}

use std::ops::Index;
impl Index<NodeID> for Graph {
    type Output = Node;
    #[track_caller]
    fn index(&self, index: NodeID) -> &Node {
        &self.nodes[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_lands_in_both_incident_lists() {
        let mut graph = Graph::with_nodes(4);
        let id = graph.insert_edge(1, 2, 0).unwrap();

        assert!(graph[1].edge_ids().contains(&id));
        assert!(graph[2].edge_ids().contains(&id));
        assert_eq!(graph[0].degree(), 0);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn insert_edge_requires_both_endpoints() {
        let mut graph = Graph::with_nodes(2);

        assert!(matches!(
            graph.insert_edge(0, 5, 0),
            Err(GraphError::NodeNotFound(5))
        ));
        assert!(matches!(
            graph.insert_edge(9, 1, 0),
            Err(GraphError::NodeNotFound(9))
        ));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn incident_edges_keep_insertion_order() {
        let mut graph = Graph::with_nodes(4);
        graph.insert_edge(0, 1, 0).unwrap();
        graph.insert_edge(2, 0, 3).unwrap();
        graph.insert_edge(0, 3, 0).unwrap();

        let costs: Vec<_> = graph
            .incident_edges(0)
            .unwrap()
            .map(|edge| edge.cost())
            .collect();
        assert_eq!(costs, vec![0, 3, 0]);

        // restartable: a second pass sees the same sequence
        let edges = graph.incident_edges(0).unwrap();
        assert_eq!(edges.clone().count(), 3);
        assert_eq!(edges.count(), 3);
    }

    #[test]
    fn edge_between_matches_either_orientation() {
        let mut graph = Graph::with_nodes(3);
        graph.insert_edge(0, 1, 2).unwrap();

        assert_eq!(graph.edge_between(0, 1).unwrap().cost(), 2);
        assert_eq!(graph.edge_between(1, 0).unwrap().cost(), 2);
        assert!(matches!(
            graph.edge_between(0, 2),
            Err(GraphError::EdgeNotFound(0, 2))
        ));
        assert!(matches!(
            graph.edge_between(0, 7),
            Err(GraphError::NodeNotFound(7))
        ));
    }

    #[test]
    fn adjacency_is_symmetric() {
        let mut graph = Graph::with_nodes(3);
        graph.insert_edge(0, 1, 5).unwrap();

        for u in 0..3 {
            for v in 0..3 {
                assert_eq!(
                    graph.are_adjacent(u, v).unwrap(),
                    graph.are_adjacent(v, u).unwrap()
                );
            }
        }
        assert!(graph.are_adjacent(0, 1).unwrap());
        assert!(!graph.are_adjacent(1, 2).unwrap());
    }
}
