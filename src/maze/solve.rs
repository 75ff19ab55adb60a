use log::debug;

use crate::dims::Dims;
use crate::maze::cell::CellWall::{self, *};
use crate::maze::grid::Grid;

/// Order in which passages out of a cell are tried.
const SEARCH_ORDER: [CellWall; 4] = [Right, Bottom, Left, Top];

/// One backtracking frame: a cell and the next direction to try there.
struct Frame {
    pos: Dims,
    next: usize,
}

/// Backtracking depth-first search from the entrance cell to the far
/// corner, following open walls only.
pub struct Solver;

impl Solver {
    /// Returns `true` iff the first and last cells are connected by
    /// open passages. On a generated maze that is always the case; on
    /// any other grid `false` is a normal answer, not an error.
    ///
    /// Forward moves and their undoing are reported to the render
    /// surface as they happen, but the search runs identically without
    /// one. The explicit frame stack bounds memory by the path length
    /// instead of consuming call stack.
    pub fn solve(grid: &mut Grid) -> bool {
        let target = grid.size() - Dims(1, 1);

        grid.mark_visited(Dims::ZERO);
        let mut stack = vec![Frame {
            pos: Dims::ZERO,
            next: 0,
        }];

        loop {
            let Some(frame) = stack.last_mut() else {
                debug!("no open path to {:?}", target);
                return false;
            };
            let current = frame.pos;

            if current == target {
                debug!("reached {:?}, path length {}", target, stack.len());
                return true;
            }

            let mut chosen = None;
            while frame.next < SEARCH_ORDER.len() {
                let wall = SEARCH_ORDER[frame.next];
                frame.next += 1;

                // a standing wall blocks the move regardless of what
                // lies behind it
                if grid.cell(current).map_or(true, |cell| cell.get_wall(wall)) {
                    continue;
                }
                let Some(neighbor) = grid.neighbor_pos(current, wall) else {
                    continue;
                };
                if grid.cell(neighbor).map_or(true, |cell| cell.is_visited()) {
                    continue;
                }

                chosen = Some(neighbor);
                break;
            }

            match chosen {
                Some(neighbor) => {
                    grid.draw_move(current, neighbor, false);
                    grid.mark_visited(neighbor);
                    stack.push(Frame {
                        pos: neighbor,
                        next: 0,
                    });
                }
                None => {
                    // dead end on every unvisited branch; retreat and
                    // erase the move that led here
                    stack.pop();
                    if let Some(parent) = stack.last() {
                        grid.draw_move(parent.pos, current, true);
                    }
                }
            }
        }
    }
}
