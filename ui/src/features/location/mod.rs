pub mod hierarchy;
pub mod selection;

pub use hierarchy::*;
pub use selection::*;
