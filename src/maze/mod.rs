//! Building a Maze from its textual description and solving it.

mod parse;
mod solve;

use crate::{Cost, Graph, NodeID};

use std::fmt;

/// Errors from reading, parsing or solving a Maze.
///
/// "No path to the exit" is deliberately *not* in here: an unsolvable Maze is a
/// normal outcome, reported as `Ok(None)` by [`Maze::solve`].
#[derive(Debug, thiserror::Error)]
pub enum MazeError {
    /// Reading the input failed.
    #[error("failed to read maze input: {0}")]
    Io(#[from] std::io::Error),
    /// One of the four integer header lines did not parse.
    #[error("line {line}: invalid {field} header: {source}")]
    InvalidHeader {
        /// 1-based line number in the input.
        line: usize,
        /// Which header field was being parsed.
        field: &'static str,
        /// The underlying integer parse failure.
        source: std::num::ParseIntError,
    },
    /// A header value outside the supported range, e.g. a zero width or a
    /// length so large the grid dimensions cannot be computed.
    #[error("line {line}: {field} header is out of range")]
    HeaderOutOfRange {
        /// 1-based line number in the input.
        line: usize,
        /// Which header field was out of range.
        field: &'static str,
    },
    /// The input ended before the full grid was read.
    #[error("unexpected end of input while reading the maze")]
    UnexpectedEof,
    /// A grid row with the wrong number of characters.
    #[error("line {line}: grid row has {found} characters, expected {expected}")]
    BadRowLength {
        /// 1-based line number in the input.
        line: usize,
        /// The required row width, `2 * width - 1`.
        expected: usize,
        /// The actual number of characters on the line.
        found: usize,
    },
    /// No Cell is marked `s`.
    #[error("maze has no entrance marker ('s')")]
    MissingEntrance,
    /// No Cell is marked `x`.
    #[error("maze has no exit marker ('x')")]
    MissingExit,
    /// More than one Cell carries the same marker.
    #[error("line {line}: duplicate '{marker}' marker")]
    DuplicateMarker {
        /// 1-based line number in the input.
        line: usize,
        /// The marker character, `s` or `x`.
        marker: char,
    },
    /// A structural Graph error during construction or search.
    #[error(transparent)]
    Graph(#[from] crate::GraphError),
}

/// A Maze: a [`Graph`] of Cells, an entrance, an exit and a coin budget.
///
/// Built from a textual description with [`Maze::from_file`],
/// [`Maze::from_reader`] or [`str::parse`], then solved with [`Maze::solve`].
/// The Maze is immutable after construction; solving never changes it, so one
/// Maze can be solved any number of times (the results are identical, the
/// search is deterministic).
#[derive(Clone, Debug)]
pub struct Maze {
    graph: Graph,
    entrance: NodeID,
    exit: NodeID,
    coins: Cost,
    width: usize,
    length: usize,
    scale_factor: usize,
    rows: Vec<String>,
}

impl Maze {
    /// The Graph of Cells and their connections.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// The Node the search starts from.
    pub fn entrance(&self) -> NodeID {
        self.entrance
    }

    /// The Node the search is looking for.
    pub fn exit(&self) -> NodeID {
        self.exit
    }

    /// The starting coin budget.
    pub fn coins(&self) -> Cost {
        self.coins
    }

    /// The number of Cell columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The number of Cell rows.
    pub fn length(&self) -> usize {
        self.length
    }

    /// The rendering scale factor from the file header. Not used for solving.
    pub fn scale_factor(&self) -> usize {
        self.scale_factor
    }
}

impl fmt::Display for Maze {
    /// Writes the grid rows exactly as they appeared in the input.
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(fmt)?;
            }
            write!(fmt, "{}", row)?;
        }
        Ok(())
    }
}
