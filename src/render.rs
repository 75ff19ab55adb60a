use std::ops::Add;

use crate::dims::Dims;

/// A point in the surface's pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point(pub f32, pub f32);

impl Point {
    pub fn midpoint(self, other: Point) -> Point {
        Point((self.0 + other.0) / 2.0, (self.1 + other.1) / 2.0)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point(self.0 + other.0, self.1 + other.1)
    }
}

/// Logical colors of the core; the surface maps them to its own palette.
///
/// Open walls and undone moves are drawn in `Background`, so erasing a
/// mark is just drawing over it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Background,
    Wall,
    Path,
}

/// Drawing surface attached to a [`Grid`](crate::Grid).
///
/// The core calls into this for every cell redraw and solver move; all
/// of it is a side effect only. Generation and solving behave the same
/// whether a surface is attached or not. `refresh` may block briefly to
/// pace the animation.
pub trait RenderSurface {
    fn draw_wall_segment(&mut self, p1: Point, p2: Point, color: Color);
    fn draw_move_segment(&mut self, p1: Point, p2: Point, color: Color);
    fn refresh(&mut self);
}

/// Pixel placement of the grid on a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub origin: Point,
    pub cell_size: Point,
}

impl GridLayout {
    /// Top-left corner of the cell at `pos`.
    pub fn corner(&self, pos: Dims) -> Point {
        self.origin
            + Point(
                pos.0 as f32 * self.cell_size.0,
                pos.1 as f32 * self.cell_size.1,
            )
    }

    pub fn center(&self, pos: Dims) -> Point {
        let p1 = self.corner(pos);
        p1.midpoint(p1 + self.cell_size)
    }
}

#[cfg(test)]
mod tests {
    use super::{GridLayout, Point};
    use crate::dims::Dims;

    #[test]
    fn layout_corner_and_center() {
        let layout = GridLayout {
            origin: Point(10.0, 10.0),
            cell_size: Point(20.0, 20.0),
        };

        assert_eq!(layout.corner(Dims(0, 0)), Point(10.0, 10.0));
        assert_eq!(layout.corner(Dims(2, 1)), Point(50.0, 30.0));
        assert_eq!(layout.center(Dims(0, 0)), Point(20.0, 20.0));
    }
}
