mod bounding_box;
mod flight;
mod path;
mod point;

pub use bounding_box::*;
pub use flight::*;
pub use path::*;
pub use point::*;
