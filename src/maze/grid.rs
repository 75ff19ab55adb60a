use crate::dims::Dims;
use crate::error::{Error, Result};
use crate::maze::cell::{Cell, CellWall};
use crate::render::{Color, GridLayout, RenderSurface};

struct Render {
    surface: Box<dyn RenderSurface>,
    layout: GridLayout,
}

/// A rectangular board of cells, indexed by `(column, row)`.
///
/// Freshly constructed, every wall is closed and nothing is visited;
/// [`Generator`](crate::Generator) carves it into a maze in place. The
/// render surface, when attached, is drawn to as a side effect only and
/// has no bearing on any result.
pub struct Grid {
    cells: Vec<Vec<Cell>>,
    width: usize,
    height: usize,
    render: Option<Render>,
}

impl std::fmt::Debug for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Grid")
            .field("cells", &self.cells)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl Grid {
    pub fn new(size: Dims) -> Result<Grid> {
        Self::build(size, None)
    }

    /// Like [`Grid::new`], but attaches a render surface and draws the
    /// fully sealed board once, one cell at a time.
    pub fn with_render(
        size: Dims,
        layout: GridLayout,
        surface: Box<dyn RenderSurface>,
    ) -> Result<Grid> {
        Self::build(size, Some(Render { surface, layout }))
    }

    fn build(size: Dims, render: Option<Render>) -> Result<Grid> {
        if !size.all_positive() {
            return Err(Error::InvalidDimensions(size));
        }

        let (width, height) = (size.0 as usize, size.1 as usize);
        let mut grid = Grid {
            cells: vec![vec![Cell::new(); width]; height],
            width,
            height,
            render,
        };

        let layout = grid.render.as_ref().map(|render| render.layout);
        if let Some(layout) = layout {
            for pos in grid.iter_pos() {
                grid.cells[pos.1 as usize][pos.0 as usize].center = Some(layout.center(pos));
            }
            for pos in grid.iter_pos() {
                grid.draw_cell(pos);
            }
        }

        Ok(grid)
    }

    pub fn size(&self) -> Dims {
        Dims(self.width as i32, self.height as i32)
    }

    pub fn is_in_bounds(&self, pos: Dims) -> bool {
        0 <= pos.0 && pos.0 < self.width as i32 && 0 <= pos.1 && pos.1 < self.height as i32
    }

    pub fn iter_pos(&self) -> impl Iterator<Item = Dims> {
        Dims::iter_fill(Dims::ZERO, self.size())
    }

    pub fn cell(&self, pos: Dims) -> Result<&Cell> {
        if self.is_in_bounds(pos) {
            Ok(&self.cells[pos.1 as usize][pos.0 as usize])
        } else {
            Err(Error::OutOfBounds(pos))
        }
    }

    pub(crate) fn cell_mut(&mut self, pos: Dims) -> Result<&mut Cell> {
        if self.is_in_bounds(pos) {
            Ok(&mut self.cells[pos.1 as usize][pos.0 as usize])
        } else {
            Err(Error::OutOfBounds(pos))
        }
    }

    /// Position of the neighbor behind `wall`, or `None` at the grid
    /// edge. Running off the board is a normal outcome here, not an
    /// error.
    pub fn neighbor_pos(&self, pos: Dims, wall: CellWall) -> Option<Dims> {
        let neighbor = pos + wall.to_coord();
        self.is_in_bounds(neighbor).then_some(neighbor)
    }

    /// Opens the shared wall on both sides at once, keeping the two
    /// cells' flags in lockstep. A wall on the outer boundary has no
    /// neighbor and is left untouched; see [`Grid::open_boundary`].
    pub fn remove_wall(&mut self, pos: Dims, wall: CellWall) -> Result<()> {
        let Some(neighbor) = self.neighbor_pos(pos, wall) else {
            return Ok(());
        };

        self.cell_mut(pos)?.remove_wall(wall);
        self.cell_mut(neighbor)?.remove_wall(wall.reverse_wall());

        self.draw_cell(pos);
        self.draw_cell(neighbor);
        Ok(())
    }

    /// Opens one cell's wall on the outer boundary (entrance or exit).
    /// Internal walls must go through [`Grid::remove_wall`] instead so
    /// both sides stay in sync.
    pub fn open_boundary(&mut self, pos: Dims, wall: CellWall) -> Result<()> {
        self.cell_mut(pos)?.remove_wall(wall);
        self.draw_cell(pos);
        Ok(())
    }

    /// The wall separating two adjacent cells, as seen from the first
    /// one. `None` when the cells are not cardinal neighbors.
    pub fn which_wall_between(cell: Dims, other: Dims) -> Option<CellWall> {
        use CellWall::*;
        match (other.0 - cell.0, other.1 - cell.1) {
            (-1, 0) => Some(Left),
            (1, 0) => Some(Right),
            (0, -1) => Some(Top),
            (0, 1) => Some(Bottom),
            _ => None,
        }
    }

    pub(crate) fn mark_visited(&mut self, pos: Dims) {
        if let Ok(cell) = self.cell_mut(pos) {
            cell.visited = true;
        }
    }

    /// Clears every `visited` flag. The flag is shared by the carve
    /// pass and the solve pass, so this must run between them.
    pub fn reset_visited(&mut self) {
        for row in &mut self.cells {
            for cell in row {
                cell.visited = false;
            }
        }
    }

    /// Number of open internal walls, counting each shared edge once.
    /// A perfect maze has exactly `width * height - 1` of them.
    pub fn open_wall_count(&self) -> usize {
        self.iter_pos()
            .map(|pos| {
                let cell = &self.cells[pos.1 as usize][pos.0 as usize];
                [CellWall::Right, CellWall::Bottom]
                    .into_iter()
                    .filter(|&wall| {
                        cell.is_open(wall) && self.neighbor_pos(pos, wall).is_some()
                    })
                    .count()
            })
            .sum()
    }

    /// Redraws all four walls of one cell: closed walls in the wall
    /// color, open ones in the background color. Opening a wall is thus
    /// indistinguishable from redrawing a cell that already had it open.
    pub(crate) fn draw_cell(&mut self, pos: Dims) {
        if !self.is_in_bounds(pos) {
            return;
        }
        let Some(render) = &mut self.render else {
            return;
        };

        let cell = &self.cells[pos.1 as usize][pos.0 as usize];
        let p1 = render.layout.corner(pos);
        let p2 = render.layout.corner(pos + Dims(1, 1));

        use crate::render::Point;
        use CellWall::*;
        let segments = [
            (Left, Point(p1.0, p1.1), Point(p1.0, p2.1)),
            (Top, Point(p1.0, p1.1), Point(p2.0, p1.1)),
            (Right, Point(p2.0, p1.1), Point(p2.0, p2.1)),
            (Bottom, Point(p1.0, p2.1), Point(p2.0, p2.1)),
        ];

        for (wall, from, to) in segments {
            let color = if cell.get_wall(wall) {
                Color::Wall
            } else {
                Color::Background
            };
            render.surface.draw_wall_segment(from, to, color);
        }
        render.surface.refresh();
    }

    /// Marks a solver move between two cell centers, or erases the mark
    /// again when `undo` is set.
    pub(crate) fn draw_move(&mut self, from: Dims, to: Dims, undo: bool) {
        let Some(render) = &mut self.render else {
            return;
        };

        let centers = (
            self.cells[from.1 as usize][from.0 as usize].center,
            self.cells[to.1 as usize][to.0 as usize].center,
        );
        let (Some(p1), Some(p2)) = centers else {
            return;
        };

        let color = if undo { Color::Background } else { Color::Path };
        render.surface.draw_move_segment(p1, p2, color);
        render.surface.refresh();
    }
}
