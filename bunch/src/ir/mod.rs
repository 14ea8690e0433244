mod bunch;
mod bunch_parts;
mod value;

pub use bunch::*;
pub use bunch_parts::*;
pub use value::*;
