use crate::{
    error::{self, DatabaseError, Result},
    extractors::{CurrentUser, Json, TeamId},
    StateTrait,
};
use axum::{extract::State, http::StatusCode};
use entity::{class_members, team_members, teams};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set,
    TransactionTrait,
};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct Request {
    class_member: i32,
}

pub async fn add_member<S: StateTrait>(
    State(state): State<S>,
    user: CurrentUser,
    TeamId(team_id): TeamId,
    Json(request): Json<Request>,
) -> Result<(StatusCode, Json<team_members::Model>)> {
    let txn = state.db().begin().await?;

    let team = teams::Entity::find_by_id(team_id)
        .one(&txn)
        .await?
        .ok_or(error::TEAM_NOT_FOUND)?;

    if !user.is_moderator() {
        let leads = team_members::Entity::find_for_user_in_team(user.id, team.id)
            .filter(team_members::Column::Role.eq(team_members::Role::Leader))
            .filter(team_members::Column::Status.eq(team_members::Status::Accepted))
            .count(&txn)
            .await?;

        if leads == 0 {
            return Err(error::NOT_TEAM_LEADER);
        }
    }

    let target = class_members::Entity::find_by_id(request.class_member)
        .filter(class_members::Column::ClassId.eq(team.class_id))
        .one(&txn)
        .await?
        .ok_or(error::CLASS_MEMBER_NOT_FOUND)?;

    if target.role != class_members::Role::Student
        || target.status != class_members::Status::Accepted
    {
        return Err(error::NOT_ACCEPTED_STUDENT);
    }

    let already_in_team = team_members::Entity::find_in_team(team.id)
        .filter(team_members::Column::ClassMemberId.eq(target.id))
        .count(&txn)
        .await?;

    if already_in_team != 0 {
        return Err(error::ALREADY_IN_TEAM);
    }

    let result = team_members::ActiveModel {
        class_member_id: Set(target.id),
        team_id: Set(team.id),
        role: Set(team_members::Role::Member),
        status: Set(team_members::Status::Pending),
        ..Default::default()
    }
    .insert(&txn)
    .await;

    let member = match result {
        Err(err) if err.foreign_key_violation() => return Err(error::CLASS_MEMBER_NOT_FOUND),
        r => r?,
    };

    txn.commit().await?;

    info!(team_id, class_member_id = target.id, "team invitation sent");

    Ok((StatusCode::CREATED, Json(member)))
}
