use crate::{
    error::{self, Result},
    extractors::{ClassId, Json, MemberId},
    StateTrait,
};
use axum::{extract::State, http::StatusCode};
use entity::class_members;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter, Set,
};

pub async fn accept_member<S: StateTrait>(
    State(state): State<S>,
    ClassId(class_id): ClassId,
    MemberId(member_id): MemberId,
) -> Result<Json<class_members::Model>> {
    let member = class_members::Entity::find_by_id(member_id)
        .filter(class_members::Column::ClassId.eq(class_id))
        .one(state.db())
        .await?
        .ok_or(error::CLASS_MEMBER_NOT_FOUND)?;

    if member.status == class_members::Status::Accepted {
        return Ok(Json(member));
    }

    let mut active_model = member.into_active_model();
    active_model.status = Set(class_members::Status::Accepted);

    let member = active_model.update(state.db()).await?;

    info!(class_id, member_id, "membership accepted");

    Ok(Json(member))
}

pub async fn remove_member<S: StateTrait>(
    State(state): State<S>,
    ClassId(class_id): ClassId,
    MemberId(member_id): MemberId,
) -> Result<StatusCode> {
    let result = class_members::Entity::delete_many()
        .filter(class_members::Column::Id.eq(member_id))
        .filter(class_members::Column::ClassId.eq(class_id))
        .exec(state.db())
        .await?;

    if result.rows_affected == 0 {
        return Err(error::CLASS_MEMBER_NOT_FOUND);
    }

    info!(class_id, member_id, "membership removed");

    Ok(StatusCode::NO_CONTENT)
}
