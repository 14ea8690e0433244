pub mod format;
pub mod name;

pub use format::*;
