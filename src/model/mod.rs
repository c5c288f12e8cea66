pub mod grid;
pub mod names;
pub mod sheet;

pub use grid::{Cell, GridConfig};
pub use names::IconNameTable;
pub use sheet::SpriteSheet;
