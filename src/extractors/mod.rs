mod json;
mod path;
mod user;

pub use json::*;
pub use path::*;
pub use user::*;
