use super::find_classroom;
use crate::{
    error::{self, DatabaseError, Result},
    extractors::{ClassId, CurrentUser, Json},
    StateTrait,
};
use axum::{extract::State, http::StatusCode};
use entity::{classroom_peer_evals, peer_evals};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct AssignRequest {
    peer_eval: i32,
}

pub async fn list_evals<S: StateTrait>(
    State(state): State<S>,
    _user: CurrentUser,
    ClassId(class_id): ClassId,
) -> Result<Json<Vec<peer_evals::Model>>> {
    find_classroom(state.db(), class_id).await?;

    let evals = peer_evals::Entity::find_in_class(class_id)
        .order_by_asc(peer_evals::Column::Id)
        .all(state.db())
        .await?;

    Ok(Json(evals))
}

pub async fn assign_eval<S: StateTrait>(
    State(state): State<S>,
    ClassId(class_id): ClassId,
    Json(request): Json<AssignRequest>,
) -> Result<(StatusCode, Json<peer_evals::Model>)> {
    find_classroom(state.db(), class_id).await?;

    let eval = peer_evals::Entity::find_by_id(request.peer_eval)
        .one(state.db())
        .await?
        .ok_or(error::PEER_EVAL_NOT_FOUND)?;

    let result = classroom_peer_evals::ActiveModel {
        class_id: Set(class_id),
        peer_eval_id: Set(eval.id),
        ..Default::default()
    }
    .insert(state.db())
    .await;

    match result {
        Err(err) if err.unique_violation() => return Err(error::PEER_EVAL_ALREADY_ASSIGNED),
        r => r?,
    };

    Ok((StatusCode::CREATED, Json(eval)))
}
