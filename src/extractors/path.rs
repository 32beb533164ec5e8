use crate::error::{self, Error};
use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use std::collections::HashMap;

/// Ids taken from the url. Anything that is not a number can not name an
/// existing row, so it is reported as not found.
pub struct ClassId(pub i32);

pub struct MemberId(pub i32);

pub struct TeamId(pub i32);

async fn parse_param<S>(
    parts: &mut Parts,
    state: &S,
    name: &str,
    not_found: Error<'static>,
) -> Result<i32, Error<'static>>
where
    S: Send + Sync,
{
    let Ok(Path(params)) = Path::<HashMap<String, String>>::from_request_parts(parts, state).await
    else {
        return Err(not_found);
    };

    params
        .get(name)
        .and_then(|value| value.parse().ok())
        .ok_or(not_found)
}

#[async_trait]
impl<S> FromRequestParts<S> for ClassId
where
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        parse_param(parts, state, "id", error::CLASSROOM_NOT_FOUND)
            .await
            .map(ClassId)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for MemberId
where
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        parse_param(parts, state, "member_id", error::CLASS_MEMBER_NOT_FOUND)
            .await
            .map(MemberId)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for TeamId
where
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        parse_param(parts, state, "id", error::TEAM_NOT_FOUND)
            .await
            .map(TeamId)
    }
}
