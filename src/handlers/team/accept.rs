use crate::{
    error::{self, Result},
    extractors::{CurrentUser, Json, TeamId},
    StateTrait,
};
use axum::extract::State;
use entity::{team_members, teams};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, Set,
};

pub async fn accept_invitation<S: StateTrait>(
    State(state): State<S>,
    user: CurrentUser,
    TeamId(team_id): TeamId,
) -> Result<Json<team_members::Model>> {
    teams::Entity::find_by_id(team_id)
        .one(state.db())
        .await?
        .ok_or(error::TEAM_NOT_FOUND)?;

    let invitation = team_members::Entity::find_for_user_in_team(user.id, team_id)
        .filter(team_members::Column::Status.eq(team_members::Status::Pending))
        .order_by_desc(team_members::Column::Id)
        .one(state.db())
        .await?
        .ok_or(error::NO_PENDING_INVITATION)?;

    let mut active_model = invitation.into_active_model();
    active_model.status = Set(team_members::Status::Accepted);

    let member = active_model.update(state.db()).await?;

    info!(team_id, user_id = user.id, "team invitation accepted");

    Ok(Json(member))
}
