use crate::{
    error::{self, Result},
    extractors::ClassId,
    StateTrait,
};
use axum::{extract::State, http::StatusCode};
use entity::classrooms;
use sea_orm::EntityTrait;

pub async fn delete_classroom<S: StateTrait>(
    State(state): State<S>,
    ClassId(class_id): ClassId,
) -> Result<StatusCode> {
    let result = classrooms::Entity::delete_by_id(class_id)
        .exec(state.db())
        .await?;

    if result.rows_affected == 0 {
        return Err(error::CLASSROOM_NOT_FOUND);
    }

    info!(class_id, "classroom deleted");

    Ok(StatusCode::NO_CONTENT)
}
