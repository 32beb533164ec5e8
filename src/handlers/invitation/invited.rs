use super::required_email;
use crate::{
    error::{self, Result},
    extractors::{CurrentUser, Json},
    membership, StateTrait,
};
use axum::extract::State;
use entity::{classrooms, users};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct Request {
    email: Option<String>,
}

#[derive(Serialize)]
pub struct Response {
    classes: Vec<classrooms::Model>,
}

pub async fn get_invited_classes<S: StateTrait>(
    State(state): State<S>,
    user: CurrentUser,
    Json(request): Json<Request>,
) -> Result<Json<Response>> {
    let email = required_email(request.email).ok_or(error::EMAIL_REQUIRED)?;

    if !user.is_moderator() && email != user.email {
        return Err(error::FOREIGN_INVITATIONS);
    }

    let invitee = users::Entity::find_by_email(&email)
        .one(state.db())
        .await?
        .ok_or(error::USER_NOT_FOUND)?;

    let classes = membership::invited_classes(state.db(), invitee.id).await?;

    if classes.is_empty() {
        return Err(error::NO_INVITED_CLASSES);
    }

    Ok(Json(Response { classes }))
}
