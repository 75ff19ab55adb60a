use self::CellWall::*;
use crate::dims::Dims;
use crate::render::Point;

/// One grid cell: four wall flags, a visitation flag shared by the
/// generation and solve passes (reset between them), and the pixel
/// center used only when a render surface is attached.
#[derive(Debug, Clone)]
pub struct Cell {
    left: bool,
    top: bool,
    right: bool,
    bottom: bool,
    pub(crate) visited: bool,
    pub(crate) center: Option<Point>,
}

impl Cell {
    pub fn new() -> Cell {
        Cell {
            left: true,
            top: true,
            right: true,
            bottom: true,
            visited: false,
            center: None,
        }
    }

    pub fn remove_wall(&mut self, wall: CellWall) {
        match wall {
            Left => self.left = false,
            Top => self.top = false,
            Right => self.right = false,
            Bottom => self.bottom = false,
        }
    }

    /// `true` while the wall is still standing.
    pub fn get_wall(&self, wall: CellWall) -> bool {
        match wall {
            Left => self.left,
            Top => self.top,
            Right => self.right,
            Bottom => self.bottom,
        }
    }

    pub fn is_open(&self, wall: CellWall) -> bool {
        !self.get_wall(wall)
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub fn center(&self) -> Option<Point> {
        self.center
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellWall {
    Left,
    Right,
    Top,
    Bottom,
}

impl CellWall {
    /// Offset to the neighbor on the other side of this wall. Rows grow
    /// downward, so `Top` is the cell above.
    pub fn to_coord(self) -> Dims {
        match self {
            Left => Dims(-1, 0),
            Right => Dims(1, 0),
            Top => Dims(0, -1),
            Bottom => Dims(0, 1),
        }
    }

    /// The same wall as seen from the neighboring cell.
    pub fn reverse_wall(self) -> CellWall {
        match self {
            Left => Right,
            Right => Left,
            Top => Bottom,
            Bottom => Top,
        }
    }

    /// Fixed enumeration order used by the carve pass.
    pub fn get_in_order() -> [CellWall; 4] {
        [Left, Right, Top, Bottom]
    }
}

#[cfg(test)]
mod tests {
    use super::{Cell, CellWall};

    #[test]
    fn new_cell_is_sealed() {
        let cell = Cell::new();
        for wall in CellWall::get_in_order() {
            assert!(cell.get_wall(wall));
        }
        assert!(!cell.is_visited());
        assert!(cell.center().is_none());
    }

    #[test]
    fn remove_wall_opens_only_that_side() {
        let mut cell = Cell::new();
        cell.remove_wall(CellWall::Top);
        assert!(cell.is_open(CellWall::Top));
        assert!(cell.get_wall(CellWall::Left));
        assert!(cell.get_wall(CellWall::Right));
        assert!(cell.get_wall(CellWall::Bottom));
    }

    #[test]
    fn reverse_wall_is_involutive() {
        for wall in CellWall::get_in_order() {
            assert_eq!(wall.reverse_wall().reverse_wall(), wall);
            assert_eq!(wall.to_coord() + wall.reverse_wall().to_coord(), crate::Dims::ZERO);
        }
    }
}
