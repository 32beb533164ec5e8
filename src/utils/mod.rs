mod class_code;
mod orm;
pub mod panic;
mod signal;

pub use class_code::*;
pub use orm::*;
pub use signal::*;
