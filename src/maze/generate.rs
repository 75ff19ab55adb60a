use log::debug;
use rand::{seq::SliceRandom as _, thread_rng, Rng as _, SeedableRng as _};

use crate::dims::Dims;
use crate::error::Result;
use crate::maze::cell::CellWall;
use crate::maze::grid::Grid;

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

/// Carves a grid into a perfect maze.
///
/// Randomized depth-first carving opens a spanning tree over the grid
/// graph, then the entrance (top of the first cell) and the exit
/// (bottom of the last cell) are breached through the outer boundary.
/// Every cell comes out reachable from every other through exactly one
/// sequence of open walls.
pub struct Generator;

impl Generator {
    /// Runs the full generation pass on a sealed grid. The same seed
    /// reproduces the same wall configuration; without one, the seed is
    /// drawn from the thread RNG.
    pub fn generate(grid: &mut Grid, seed: Option<u64>) -> Result<()> {
        let seed = seed.unwrap_or_else(|| thread_rng().gen());
        let mut rng = Random::seed_from_u64(seed);

        Self::carve(grid, &mut rng)?;
        Self::breach_boundary(grid)?;

        // the solve pass reuses the visited flags, so hand them over clean
        grid.reset_visited();

        debug!("generated {:?} maze with seed {}", grid.size(), seed);
        Ok(())
    }

    /// Iterative randomized DFS from the first cell. The explicit stack
    /// keeps the carve depth off the call stack; the longest chain can
    /// reach every cell of the grid.
    fn carve(grid: &mut Grid, rng: &mut Random) -> Result<()> {
        let cell_count = grid.size().product() as usize;
        let mut stack = Vec::with_capacity(cell_count);

        grid.mark_visited(Dims::ZERO);
        stack.push(Dims::ZERO);

        while let Some(&current) = stack.last() {
            let unvisited_neighbors = CellWall::get_in_order()
                .into_iter()
                .filter_map(|wall| grid.neighbor_pos(current, wall))
                .filter(|&pos| grid.cell(pos).map_or(false, |cell| !cell.is_visited()))
                .collect::<Vec<_>>();

            if unvisited_neighbors.is_empty() {
                // dead end; its walls are final, so show them
                grid.draw_cell(current);
                stack.pop();
                continue;
            }

            let chosen = *unvisited_neighbors.choose(rng).unwrap();
            let wall = Grid::which_wall_between(current, chosen).unwrap();
            grid.remove_wall(current, wall)?;
            grid.mark_visited(chosen);
            stack.push(chosen);
        }

        Ok(())
    }

    /// Opens the two boundary walls that serve as entrance and exit.
    /// Only outer walls are touched, so this cannot disturb anything
    /// the carve pass did. On a 1x1 grid both openings land on the same
    /// cell.
    fn breach_boundary(grid: &mut Grid) -> Result<()> {
        grid.open_boundary(Dims::ZERO, CellWall::Top)?;
        grid.open_boundary(grid.size() - Dims(1, 1), CellWall::Bottom)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::Generator;
    use crate::dims::Dims;
    use crate::maze::cell::CellWall::{self, *};
    use crate::maze::grid::Grid;

    fn generated(size: Dims, seed: u64) -> Grid {
        let mut grid = Grid::new(size).unwrap();
        Generator::generate(&mut grid, Some(seed)).unwrap();
        grid
    }

    /// Cells reachable from the first cell through open internal walls.
    fn reachable_count(grid: &Grid) -> usize {
        let mut seen = HashSet::from([Dims::ZERO]);
        let mut stack = vec![Dims::ZERO];

        while let Some(current) = stack.pop() {
            for wall in CellWall::get_in_order() {
                if !grid.cell(current).unwrap().is_open(wall) {
                    continue;
                }
                if let Some(neighbor) = grid.neighbor_pos(current, wall) {
                    if seen.insert(neighbor) {
                        stack.push(neighbor);
                    }
                }
            }
        }

        seen.len()
    }

    fn wall_config(grid: &Grid) -> Vec<[bool; 4]> {
        grid.iter_pos()
            .map(|pos| {
                let cell = grid.cell(pos).unwrap();
                [Left, Right, Top, Bottom].map(|wall| cell.get_wall(wall))
            })
            .collect()
    }

    #[test]
    fn spanning_tree_wall_count_and_connectivity() {
        for (size, seed) in [
            (Dims(1, 1), 0),
            (Dims(2, 1), 1),
            (Dims(1, 7), 2),
            (Dims(5, 4), 3),
            (Dims(16, 16), 42),
        ] {
            let grid = generated(size, seed);
            let cells = size.product() as usize;
            assert_eq!(grid.open_wall_count(), cells - 1, "size {:?}", size);
            assert_eq!(reachable_count(&grid), cells, "size {:?}", size);
        }
    }

    #[test]
    fn adjacency_invariant_all_directions() {
        let grid = generated(Dims(9, 7), 99);
        for pos in grid.iter_pos() {
            for wall in CellWall::get_in_order() {
                let Some(neighbor) = grid.neighbor_pos(pos, wall) else {
                    continue;
                };
                assert_eq!(
                    grid.cell(pos).unwrap().is_open(wall),
                    grid.cell(neighbor).unwrap().is_open(wall.reverse_wall()),
                    "edge {:?} -> {:?}",
                    pos,
                    neighbor
                );
            }
        }
    }

    #[test]
    fn entrance_and_exit_are_breached() {
        for (size, seed) in [(Dims(1, 1), 0), (Dims(2, 1), 5), (Dims(6, 9), 7)] {
            let grid = generated(size, seed);
            assert!(grid.cell(Dims::ZERO).unwrap().is_open(Top));
            assert!(grid.cell(size - Dims(1, 1)).unwrap().is_open(Bottom));
        }
    }

    #[test]
    fn same_seed_same_maze() {
        for seed in [0, 1, 0xdead_beef] {
            let a = generated(Dims(12, 10), seed);
            let b = generated(Dims(12, 10), seed);
            assert_eq!(wall_config(&a), wall_config(&b), "seed {}", seed);
        }
    }

    #[test]
    fn visited_flags_are_clear_after_generation() {
        let grid = generated(Dims(8, 8), 13);
        assert!(grid.iter_pos().all(|p| !grid.cell(p).unwrap().is_visited()));
    }

    #[test]
    fn two_by_one_carves_the_only_possible_passage() {
        let grid = generated(Dims(2, 1), 123);
        assert!(grid.cell(Dims(0, 0)).unwrap().is_open(Right));
        assert!(grid.cell(Dims(1, 0)).unwrap().is_open(Left));
        assert!(grid.cell(Dims(0, 0)).unwrap().is_open(Top));
        assert!(grid.cell(Dims(1, 0)).unwrap().is_open(Bottom));
        assert_eq!(grid.open_wall_count(), 1);
    }

    #[test]
    fn one_by_one_breaches_both_sides_of_the_single_cell() {
        let grid = generated(Dims(1, 1), 77);
        let cell = grid.cell(Dims::ZERO).unwrap();
        assert!(cell.is_open(Top));
        assert!(cell.is_open(Bottom));
        assert!(cell.get_wall(Left));
        assert!(cell.get_wall(Right));
        assert_eq!(grid.open_wall_count(), 0);
    }
}
