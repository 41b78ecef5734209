pub use is_saturated::*;
pub use targets::*;

mod is_saturated;
mod targets;
