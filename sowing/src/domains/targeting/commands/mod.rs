pub use change_mode::*;
pub use clear_targets::*;
pub use marquee::*;
pub use retain_targets::*;
pub use target_tile::*;

mod change_mode;
mod clear_targets;
mod marquee;
mod retain_targets;
mod target_tile;
