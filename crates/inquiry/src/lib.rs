mod draft;
mod mailto;
mod value_object;

pub use draft::*;
pub use mailto::*;
pub use value_object::*;
