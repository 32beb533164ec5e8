use crate::{
    error::{self, DatabaseError, Result},
    extractors::{CurrentUser, Json},
    StateTrait,
};
use axum::extract::State;
use entity::{class_members, classrooms};
use sea_orm::{ActiveModelTrait, Set};
use serde::{Deserialize, Serialize};
use serde_json::Value;

struct Replies {
    already_joined: &'static str,
    partially_joined: &'static str,
}

const MEMBER_REPLIES: Replies = Replies {
    already_joined: "You already joined the class",
    partially_joined: "Partially joined class",
};

const GUEST_REPLIES: Replies = Replies {
    already_joined: "You have already joined the class",
    partially_joined: "Partially joined the class",
};

#[derive(Deserialize)]
pub struct JoinRequest {
    class_code: Option<String>,
}

#[derive(Deserialize)]
pub struct GuestJoinRequest {
    class_code: Option<String>,
    #[serde(default)]
    user_role: Option<Value>,
}

#[derive(Serialize)]
pub struct Response {
    details: &'static str,
}

pub async fn join_classroom<S: StateTrait>(
    State(state): State<S>,
    user: CurrentUser,
    Json(request): Json<JoinRequest>,
) -> Result<Json<Response>> {
    join(
        &state,
        &user,
        request.class_code,
        class_members::Role::Student,
        &MEMBER_REPLIES,
    )
    .await
}

pub async fn join_as_guest<S: StateTrait>(
    State(state): State<S>,
    user: CurrentUser,
    Json(request): Json<GuestJoinRequest>,
) -> Result<Json<Response>> {
    let role = class_members::Role::from_number(role_number(request.user_role.as_ref()));

    join(&state, &user, request.class_code, role, &GUEST_REPLIES).await
}

/// Clients send the role either as a number or as a numeric string.
fn role_number(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::Number(number)) => number.as_i64().unwrap_or_default(),
        Some(Value::String(string)) => string.trim().parse().unwrap_or_default(),
        _ => 0,
    }
}

async fn join<S: StateTrait>(
    state: &S,
    user: &CurrentUser,
    class_code: Option<String>,
    role: class_members::Role,
    replies: &Replies,
) -> Result<Json<Response>> {
    let class_code = class_code
        .filter(|code| !code.is_empty())
        .ok_or(error::CLASS_CODE_REQUIRED)?;

    let classroom = classrooms::Entity::find_by_class_code(&class_code)
        .one(state.db())
        .await?
        .ok_or(error::INVALID_CLASS_CODE)?;

    let existing = class_members::Entity::find_membership(user.id, classroom.id)
        .one(state.db())
        .await?;

    if existing.is_some() {
        return Ok(Json(Response {
            details: replies.already_joined,
        }));
    }

    if role == class_members::Role::Teacher && !user.is_moderator() {
        debug!(user_id = user.id, "refused self-assigned teacher role");
        return Err(error::NOT_MODERATOR);
    }

    let result = class_members::ActiveModel {
        user_id: Set(user.id),
        class_id: Set(classroom.id),
        role: Set(role),
        status: Set(class_members::Status::Pending),
        ..Default::default()
    }
    .insert(state.db())
    .await;

    match result {
        Err(err) if err.unique_violation() => {
            return Ok(Json(Response {
                details: replies.already_joined,
            }))
        }
        r => r?,
    };

    info!(class_id = classroom.id, user_id = user.id, ?role, "joined classroom");

    Ok(Json(Response {
        details: replies.partially_joined,
    }))
}
