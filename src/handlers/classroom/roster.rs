use super::find_classroom;
use crate::{
    error::Result,
    extractors::{ClassId, Json},
    membership::{self, RosterEntry},
    StateTrait,
};
use axum::extract::State;

pub async fn get_leaders<S: StateTrait>(
    State(state): State<S>,
    ClassId(class_id): ClassId,
) -> Result<Json<Vec<RosterEntry>>> {
    find_classroom(state.db(), class_id).await?;

    let leaders = membership::leaders(state.db(), class_id).await?;

    Ok(Json(leaders))
}

pub async fn get_non_leaders<S: StateTrait>(
    State(state): State<S>,
    ClassId(class_id): ClassId,
) -> Result<Json<Vec<RosterEntry>>> {
    find_classroom(state.db(), class_id).await?;

    let non_leaders = membership::non_leaders(state.db(), class_id).await?;

    Ok(Json(non_leaders))
}
