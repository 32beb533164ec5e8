mod constants;
mod db;

pub use constants::*;
pub use db::*;

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::{BufMut, Bytes, BytesMut};
use sea_orm::DbErr;
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Error<'a> {
    status: StatusCode,
    code: &'static str,
    message: &'a str,
}

pub type Result<T = ()> = std::result::Result<T, Error<'static>>;

impl<'a> Error<'a> {
    #[inline]
    const fn new(status: StatusCode, code: &'static str, message: &'a str) -> Error<'a> {
        Self {
            status,
            code,
            message,
        }
    }

    #[inline]
    pub const fn code(&self) -> &'static str {
        self.code
    }

    #[inline]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    #[inline]
    pub const fn message(&self) -> &str {
        self.message
    }

    pub fn to_bytes(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(128).writer();

        serde_json::to_writer(
            &mut buf,
            &json!({
                "code": self.code(),
                "error": self.message(),
            }),
        )
        .expect("failed to serialize error");

        buf.into_inner().freeze()
    }
}

impl IntoResponse for Error<'_> {
    #[inline]
    fn into_response(self) -> Response {
        let buf = self.to_bytes();
        let mut res = (self.status, buf).into_response();

        res.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(mime::APPLICATION_JSON.as_ref()),
        );

        res
    }
}

impl From<DbErr> for Error<'_> {
    #[inline]
    fn from(error: DbErr) -> Self {
        error!("database error: {:?}", error);
        constants::DATABASE_ERROR
    }
}

impl From<serde_json::Error> for Error<'_> {
    #[inline]
    fn from(error: serde_json::Error) -> Self {
        error!("failed to serialize json: {:?}", error);
        constants::INTERNAL
    }
}

macro_rules! const_error {
    (
        #[error($code:literal, $msg:literal)]
        #[status($status:ident)]
        const $name:ident;
    ) => {
        pub const $name: $crate::error::Error<'static> = $crate::error::Error::new(
            ::axum::http::StatusCode::$status,
            $code,
            $msg,
        );
    };
}

#[allow(clippy::useless_attribute)]
#[allow(clippy::needless_pub_self)]
pub(self) use const_error;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_response_has_json_content_type() {
        let error = Error::new(StatusCode::OK, "", "");
        let response = error.into_response();
        let content_type = response.headers().get(header::CONTENT_TYPE);

        assert!(content_type.is_some(), "response");
        assert_eq!(content_type.unwrap(), "application/json");
    }

    #[test]
    fn error_response_keeps_status() {
        let response = CLASSROOM_NOT_FOUND.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn error_body_has_code_and_message() {
        let body: serde_json::Value =
            serde_json::from_slice(&NOT_MODERATOR.to_bytes()).expect("invalid json");

        assert_eq!(body["code"], NOT_MODERATOR.code());
        assert_eq!(body["error"], NOT_MODERATOR.message());
    }

    #[test]
    fn error_codes_are_unique() {
        let mut codes: Vec<_> = ALL.iter().map(|error| error.code()).collect();
        let len = codes.len();

        codes.sort_unstable();
        codes.dedup();

        assert_eq!(codes.len(), len);
    }
}
