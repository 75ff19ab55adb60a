pub mod dims;
pub mod error;
pub mod maze;
pub mod render;

pub use dims::Dims;
pub use error::{Error, Result};
pub use maze::{Cell, CellWall, Generator, Grid, Solver};
pub use render::{Color, GridLayout, Point, RenderSurface};
