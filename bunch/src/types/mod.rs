mod bunch_type;
mod field_names;

pub use bunch_type::*;
pub use field_names::*;
