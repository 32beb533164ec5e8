use super::find_classroom;
use crate::{
    error::{self, Result},
    extractors::{ClassId, CurrentUser, Json},
    membership, StateTrait,
};
use axum::extract::State;
use entity::{class_members, classrooms};
use serde::Serialize;

#[derive(Serialize)]
pub struct Response {
    #[serde(flatten)]
    classroom: classrooms::Model,
    number_of_students: u64,
    number_of_teams: u64,
}

pub async fn get_classroom<S: StateTrait>(
    State(state): State<S>,
    user: CurrentUser,
    ClassId(class_id): ClassId,
) -> Result<Json<Response>> {
    let classroom = find_classroom(state.db(), class_id).await?;

    if !user.is_superuser {
        class_members::Entity::find_membership(user.id, class_id)
            .one(state.db())
            .await?
            .ok_or(error::NOT_CLASS_MEMBER)?;
    }

    let number_of_students = membership::student_count(state.db(), class_id).await?;
    let number_of_teams = membership::team_count(state.db(), class_id).await?;

    Ok(Json(Response {
        classroom,
        number_of_students,
        number_of_teams,
    }))
}
