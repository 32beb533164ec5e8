#![allow(unused_imports)]

pub(crate) use super::macros::*;
pub use super::{
    request::*,
    response::*,
    setup::{setup, Env},
    user::{Anonymous, Kind, User, UserLike},
};
pub use assert_json_diff::{assert_json_eq, assert_json_include};
pub use classroom_backend::error;
pub use http::StatusCode;
pub use serde_json::{json, Value};
