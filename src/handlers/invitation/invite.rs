use super::required_email;
use crate::{
    error::{self, DatabaseError, Result},
    extractors::{CurrentUser, Json},
    StateTrait,
};
use axum::extract::State;
use entity::{class_members, classroom_invites, classrooms, users};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct Request {
    #[serde(rename = "classId")]
    class_id: Option<i32>,
    email: Option<String>,
}

#[derive(Serialize)]
pub struct Response {
    message: String,
}

pub async fn invite_to_class<S: StateTrait>(
    State(state): State<S>,
    user: CurrentUser,
    Json(request): Json<Request>,
) -> Result<Json<Response>> {
    let email = required_email(request.email).ok_or(error::EMAIL_REQUIRED)?;

    let class_id = request.class_id.ok_or(error::CLASSROOM_NOT_FOUND)?;

    let classroom = classrooms::Entity::find_by_id(class_id)
        .one(state.db())
        .await?
        .ok_or(error::CLASSROOM_NOT_FOUND)?;

    if !user.is_moderator() {
        let teaches = class_members::Entity::find_membership(user.id, classroom.id)
            .filter(class_members::Column::Role.eq(class_members::Role::Teacher))
            .filter(class_members::Column::Status.eq(class_members::Status::Accepted))
            .count(state.db())
            .await?;

        if teaches == 0 {
            return Err(error::NOT_CLASS_TEACHER);
        }
    }

    let invitee = users::Entity::find_by_email(&email)
        .one(state.db())
        .await?
        .ok_or(error::USER_NOT_FOUND)?;

    let existing = classroom_invites::Entity::find_by_id((classroom.id, invitee.id))
        .one(state.db())
        .await?;

    if existing.is_none() {
        let result = classroom_invites::ActiveModel {
            class_id: Set(classroom.id),
            user_id: Set(invitee.id),
        }
        .insert(state.db())
        .await;

        match result {
            Err(err) if err.unique_violation() => {}
            r => {
                r?;
            }
        }

        info!(class_id = classroom.id, user_id = invitee.id, "user invited");
    }

    Ok(Json(Response {
        message: format!("{} invited successfully", email),
    }))
}
