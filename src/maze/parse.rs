use super::{Maze, MazeError};
use crate::{Cost, Graph, NodeID};

use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::str::FromStr;

impl Maze {
    /// Reads and parses a Maze description from a file.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Maze, MazeError> {
        Maze::from_reader(BufReader::new(File::open(path)?))
    }

    /// Parses a Maze description from any buffered reader.
    ///
    /// The format is four integer header lines (scale factor, width, length,
    /// coins) followed by the `2 * length - 1` grid rows, see the
    /// [crate docs](crate). Any parse error aborts construction entirely;
    /// there is no partially built Maze.
    pub fn from_reader(reader: impl BufRead) -> Result<Maze, MazeError> {
        let mut lines = reader.lines();
        let mut line_no = 0;
        let mut next_line = move || -> Result<(usize, String), MazeError> {
            line_no += 1;
            match lines.next() {
                Some(line) => Ok((line_no, line?)),
                None => Err(MazeError::UnexpectedEof),
            }
        };

        let scale_factor = header(&mut next_line, "scale factor")?;
        let width: usize = header(&mut next_line, "width")?;
        let length: usize = header(&mut next_line, "length")?;
        let coins: Cost = header(&mut next_line, "coins")?;

        // 0 underflows the subtraction, huge values overflow the
        // multiplication; both must surface as header errors
        let row_width = width
            .checked_mul(2)
            .and_then(|n| n.checked_sub(1))
            .ok_or(MazeError::HeaderOutOfRange {
                line: 2,
                field: "width",
            })?;
        let grid_rows = length
            .checked_mul(2)
            .and_then(|n| n.checked_sub(1))
            .ok_or(MazeError::HeaderOutOfRange {
                line: 3,
                field: "length",
            })?;

        let mut rows = Vec::new();
        for _ in 0..grid_rows {
            let (line, row) = next_line()?;
            let row = row.trim_end_matches('\r').to_string();
            if row.chars().count() != row_width {
                return Err(MazeError::BadRowLength {
                    line,
                    expected: row_width,
                    found: row.chars().count(),
                });
            }
            rows.push(row);
        }

        let (graph, entrance, exit) = build_graph(&rows, width)?;
        debug!(
            "parsed maze: {}x{} cells, {} edges, entrance {}, exit {}, {} coins",
            length,
            width,
            graph.edge_count(),
            entrance,
            exit,
            coins
        );

        Ok(Maze {
            graph,
            entrance,
            exit,
            coins,
            width,
            length,
            scale_factor,
            rows,
        })
    }
}

impl FromStr for Maze {
    type Err = MazeError;

    /// Parses a Maze description held in memory, e.g. a string literal.
    fn from_str(s: &str) -> Result<Maze, MazeError> {
        Maze::from_reader(s.as_bytes())
    }
}

fn header<T: FromStr<Err = std::num::ParseIntError>>(
    next_line: &mut impl FnMut() -> Result<(usize, String), MazeError>,
    field: &'static str,
) -> Result<T, MazeError> {
    let (line, text) = next_line()?;
    text.trim()
        .parse()
        .map_err(|source| MazeError::InvalidHeader {
            line,
            field,
            source,
        })
}

/// Walks the grid once, row-major, creating every Edge and spotting the
/// entrance and exit markers.
///
/// A connector at grid position `(i, j)` joins Cell `(i/2) * width + j/2` with
/// the Cell to its right (`i` even) or below (`i` odd). Characters other than
/// `c`, `1`-`9`, `s` and `x` are walls or plain Cells and are skipped.
fn build_graph(rows: &[String], width: usize) -> Result<(Graph, NodeID, NodeID), MazeError> {
    let length = (rows.len() + 1) / 2;
    let mut graph = Graph::with_nodes(width * length);
    let mut entrance = None;
    let mut exit = None;

    for (i, row) in rows.iter().enumerate() {
        let line = i + 5;
        for (j, ch) in row.chars().enumerate() {
            let node = (i / 2) * width + j / 2;
            let cost = match ch {
                'c' => Some(0),
                '1'..='9' => Some(usize::from(ch as u8 - b'0')),
                's' => {
                    if entrance.replace(node).is_some() {
                        return Err(MazeError::DuplicateMarker { line, marker: 's' });
                    }
                    None
                }
                'x' => {
                    if exit.replace(node).is_some() {
                        return Err(MazeError::DuplicateMarker { line, marker: 'x' });
                    }
                    None
                }
                _ => None,
            };
            if let Some(cost) = cost {
                let neighbor = if i % 2 == 0 { node + 1 } else { node + width };
                graph.insert_edge(node, neighbor, cost)?;
            }
        }
    }

    Ok((
        graph,
        entrance.ok_or(MazeError::MissingEntrance)?,
        exit.ok_or(MazeError::MissingExit)?,
    ))
}
