use crate::{
    error::{self, Error},
    jwt::Claims,
    StateTrait,
};
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use entity::users;
use sea_orm::EntityTrait;
use std::ops::Deref;

/// The authenticated caller, loaded from the token's `user_id`.
pub struct CurrentUser(pub users::Model);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: StateTrait,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Some(claims) = parts.extensions.get::<Claims>() else {
            return Err(error::COULD_NOT_GET_CLAIMS);
        };

        let user = users::Entity::find_by_id(claims.user_id)
            .one(state.db())
            .await?
            .ok_or_else(|| {
                // valid signature but no such account, this is suspicious so log it
                warn!(user_id = claims.user_id, "token for unknown user");
                error::UNKNOWN_USER
            })?;

        Ok(CurrentUser(user))
    }
}

impl Deref for CurrentUser {
    type Target = users::Model;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
