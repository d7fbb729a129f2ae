use super::{Maze, MazeError};
use crate::{path::Path, Cost, NodeID, NodeIDMap, NodeIDSet};

use log::{debug, trace};

impl Maze {
    /// Searches for a path from the entrance to the exit within the coin
    /// budget.
    ///
    /// The search is an iterative depth-first search with an explicit stack
    /// holding the current path prefix. Each stack entry remembers the coin
    /// balance it was first reached with, so backtracking out of a dead end
    /// automatically undoes all spending on the abandoned branch. Neighbors
    /// are tried strictly in Edge insertion order (row-major over the Grid),
    /// which makes the result deterministic but not shortest or cheapest.
    ///
    /// Returns `Ok(Some(path))` on success, `Ok(None)` if the exit is
    /// unreachable within the budget. Once a Node has been visited and
    /// abandoned it is never entered again, even from a branch that still
    /// holds more coins, so the search terminates after at most one visit per
    /// Node.
    ///
    /// ## Examples
    /// ```
    /// # use coin_maze::Maze;
    /// let maze: Maze = "\
    /// 1
    /// 2
    /// 1
    /// 0
    /// scx".parse()?;
    ///
    /// let path = maze.solve()?.unwrap();
    /// assert_eq!(path, vec![0, 1]);
    /// # Ok::<(), coin_maze::MazeError>(())
    /// ```
    pub fn solve(&self) -> Result<Option<Path<NodeID>>, MazeError> {
        let mut visited = NodeIDSet::default();
        let mut predecessor: NodeIDMap<NodeID> = NodeIDMap::default();
        let mut balance_at: NodeIDMap<Cost> = NodeIDMap::default();
        let mut stack = vec![self.entrance];
        balance_at.insert(self.entrance, self.coins);

        debug!(
            "solving {}x{} maze: entrance {}, exit {}, budget {}",
            self.length, self.width, self.entrance, self.exit, self.coins
        );

        while let Some(&current) = stack.last() {
            visited.insert(current);

            if current == self.exit {
                let path = self.reconstruct(&predecessor, &balance_at);
                debug!("found path: {} steps, {} coins spent", path.len(), path.cost());
                return Ok(Some(path));
            }

            // the balance at the stack top, not a global counter: when a
            // branch is abandoned this lookup restores the pre-branch balance
            let balance = balance_at[&current];

            let mut descended = false;
            for edge in self.graph.incident_edges(current)? {
                let next = edge.opposite(current)?;
                if visited.contains(&next) || !edge.passable_with(balance) {
                    continue;
                }
                trace!(
                    "step {} -> {} through {} (cost {}), {} coins left",
                    current,
                    next,
                    edge.kind(),
                    edge.cost(),
                    balance - edge.cost()
                );
                stack.push(next);
                predecessor.insert(next, current);
                balance_at.insert(next, balance - edge.cost());
                descended = true;
                break;
            }

            if !descended {
                trace!("dead end at {} with {} coins, backtracking", current, balance);
                stack.pop();
            }
        }

        debug!("stack exhausted, exit {} is unreachable", self.exit);
        Ok(None)
    }

    /// Follows the predecessor chain from the exit back to the entrance. The
    /// chain is complete whenever the exit was reached; a missing entry would
    /// mean the search bookkeeping itself is broken, hence the panicking map
    /// index.
    fn reconstruct(
        &self,
        predecessor: &NodeIDMap<NodeID>,
        balance_at: &NodeIDMap<Cost>,
    ) -> Path<NodeID> {
        let mut steps = vec![self.exit];
        let mut current = self.exit;
        while current != self.entrance {
            current = predecessor[&current];
            steps.push(current);
        }
        let spent = self.coins - balance_at[&self.exit];
        Path::from_reversed(steps, spent)
    }
}
