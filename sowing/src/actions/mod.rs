pub use collect_garbage::*;
pub use infer_mode::*;
pub use observe_host::*;
pub use place_item::*;
pub use scan_and_place::*;
pub use update_targets::*;

mod collect_garbage;
mod infer_mode;
mod observe_host;
mod place_item;
mod scan_and_place;
mod update_targets;
