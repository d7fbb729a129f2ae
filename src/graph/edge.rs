use super::GraphError;
use crate::{Cost, NodeID};

use std::fmt;

/// Whether an [`Edge`] is free to walk or swallows coins.
///
/// The kind is derived from the Edge's cost, never stored: cost 0 is a
/// corridor, anything above is a door.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeKind {
    /// A free connection, always traversable.
    Corridor,
    /// A priced connection, traversable only while enough coins remain.
    Door,
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EdgeKind::Corridor => write!(fmt, "corridor"),
            EdgeKind::Door => write!(fmt, "door"),
        }
    }
}

/// An undirected connection between two Nodes.
///
/// The connection is symmetric, but the endpoint order is fixed at insertion
/// time: for Edges built from a Grid, the first endpoint is the Cell whose scan
/// produced the connector.
#[derive(Clone, Copy, Debug)]
pub struct Edge {
    a: NodeID,
    b: NodeID,
    cost: Cost,
}

impl Edge {
    pub(crate) fn new(a: NodeID, b: NodeID, cost: Cost) -> Edge {
        Edge { a, b, cost }
    }

    /// The first endpoint, as fixed at insertion time.
    pub fn first_endpoint(&self) -> NodeID {
        self.a
    }

    /// The second endpoint, as fixed at insertion time.
    pub fn second_endpoint(&self) -> NodeID {
        self.b
    }

    /// The number of coins walking this Edge swallows. 0 for corridors.
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Re-prices the Edge. A new cost of 0 turns it into a corridor.
    pub fn set_cost(&mut self, cost: Cost) {
        self.cost = cost;
    }

    /// The [`EdgeKind`] this Edge's cost implies.
    pub fn kind(&self) -> EdgeKind {
        if self.cost == 0 {
            EdgeKind::Corridor
        } else {
            EdgeKind::Door
        }
    }

    /// Returns the endpoint on the other side of `node`.
    ///
    /// This is the one primitive the solver needs to walk an Edge without
    /// knowing which side it stands on. Fails with [`GraphError::NotIncident`]
    /// if `node` is neither endpoint.
    pub fn opposite(&self, node: NodeID) -> Result<NodeID, GraphError> {
        if node == self.a {
            Ok(self.b)
        } else if node == self.b {
            Ok(self.a)
        } else {
            Err(GraphError::NotIncident {
                node,
                a: self.a,
                b: self.b,
            })
        }
    }

    /// Whether a walker holding `balance` coins may step through this Edge.
    ///
    /// Corridors always pass; doors require `balance >= cost`.
    pub fn passable_with(&self, balance: Cost) -> bool {
        self.cost <= balance
    }
}
