pub mod cell;
pub mod generate;
pub mod grid;
pub mod solve;

pub use cell::{Cell, CellWall};
pub use generate::{Generator, Random};
pub use grid::Grid;
pub use solve::Solver;
