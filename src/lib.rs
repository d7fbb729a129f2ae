#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

//! A crate to solve coin-gated Mazes on a Grid.
//!
//! ## Introduction
//! A Maze is a rectangular Grid of Cells, where neighboring Cells may be joined by a
//! corridor (free to walk) or by a door that swallows a number of coins when walked
//! through. The walker starts at the entrance with a fixed coin budget and wants to
//! reach the exit. Spent coins are gone for the rest of that walk, so a route that
//! burns its budget on the wrong door can make the exit unreachable even though a
//! cheaper route exists.
//!
//! The Maze is represented as an undirected Graph: one Node per Cell, one Edge per
//! corridor or door. The solver is a depth-first search with an explicit stack that
//! tracks the coin balance per visited Node. When a branch dead-ends, the search
//! backtracks and the balance snaps back to whatever it was at the Node it returns
//! to, so spending on an abandoned branch is undone. The search is deterministic
//! (Edges are tried in the order the Grid produced them) but makes no promise of
//! finding the shortest or cheapest route, only *a* feasible one.
//!
//! ## Maze files
//! Mazes are plain text. Four integer header lines (scale factor for rendering,
//! width, length, starting coins) are followed by `2 * length - 1` rows of
//! `2 * width - 1` characters, interleaving Cells and the connectors between them:
//!
//! - `s` / `x`: entrance / exit Cell (required, exactly once each)
//! - `c`: corridor connector
//! - `1`-`9`: door connector costing that many coins
//! - anything else: wall (no connection), or a plain Cell
//!
//! ## Examples
//! ```
//! use coin_maze::Maze;
//!
//! let input = "\
//! 1
//! 3
//! 2
//! 3
//! sc.w.
//! ww3ww
//! .w.cx";
//!
//! let maze: Maze = input.parse()?;
//! let path = maze.solve()?.expect("this maze has a solution");
//!
//! let nodes: Vec<_> = path.iter().copied().collect();
//! assert_eq!(nodes, vec![0, 1, 4, 5]);
//! assert_eq!(path.cost(), 3); // one door, three coins
//! # Ok::<(), coin_maze::MazeError>(())
//! ```
//! With no coins, the same maze has no solution:
//! ```
//! # use coin_maze::Maze;
//! let input = "\
//! 1
//! 3
//! 2
//! 0
//! sc.w.
//! ww3ww
//! .w.cx";
//!
//! let maze: Maze = input.parse()?;
//! assert!(maze.solve()?.is_none());
//! # Ok::<(), coin_maze::MazeError>(())
//! ```
//! The Graph itself can also be built and inspected directly, see [`Graph`].

/// The Type used to reference a Node in the Graph.
///
/// Node ids of a Maze Graph are dense: the Cell at row `r`, column `c` of a
/// `width`-column Grid is Node `r * width + c`.
pub type NodeID = usize;

/// The Type used to reference an Edge in the Graph.
pub type EdgeID = usize;

/// The Type used for coin amounts: door costs, budgets and balances.
pub type Cost = usize;

/// A map keyed by [`NodeID`], used for search-scoped bookkeeping.
pub type NodeIDMap<V> = hashbrown::HashMap<NodeID, V>;
/// A set of [`NodeID`]s, used for search-scoped visited tracking.
pub type NodeIDSet = hashbrown::HashSet<NodeID>;

pub mod graph;
pub use self::graph::{Edge, EdgeKind, Graph, GraphError, Node};

pub mod maze;
pub use self::maze::{Maze, MazeError};

pub mod path;
pub use self::path::Path;

/// The most common imports, all in one place.
pub mod prelude {
    pub use crate::graph::{Edge, EdgeKind, Graph, GraphError, Node};
    pub use crate::maze::{Maze, MazeError};
    pub use crate::path::Path;
    pub use crate::{Cost, EdgeID, NodeID, NodeIDMap, NodeIDSet};
}
