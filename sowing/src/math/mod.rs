pub use rect::*;
pub use tile::*;

mod rect;
mod tile;
