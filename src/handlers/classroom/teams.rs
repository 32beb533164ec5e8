use super::find_classroom;
use crate::{
    error::{self, Result},
    extractors::{ClassId, CurrentUser, Json, ValidatedJson},
    membership::{self, TeamMember},
    StateTrait,
};
use axum::{extract::State, http::StatusCode};
use entity::{class_members, team_members, teams};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct Request {
    #[validate(length(min = 1, max = 64))]
    name: String,
    leader: i32,
}

#[derive(Serialize)]
pub struct Team {
    #[serde(flatten)]
    team: teams::Model,
    members: Vec<TeamMember>,
}

pub async fn create_team<S: StateTrait>(
    State(state): State<S>,
    ClassId(class_id): ClassId,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<(StatusCode, Json<teams::Model>)> {
    let txn = state.db().begin().await?;

    find_classroom(&txn, class_id).await?;

    let leader = class_members::Entity::find_by_id(request.leader)
        .filter(class_members::Column::ClassId.eq(class_id))
        .one(&txn)
        .await?
        .ok_or(error::CLASS_MEMBER_NOT_FOUND)?;

    if leader.role != class_members::Role::Student
        || leader.status != class_members::Status::Accepted
    {
        return Err(error::NOT_ACCEPTED_STUDENT);
    }

    let team = teams::ActiveModel {
        class_id: Set(class_id),
        name: Set(request.name),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    team_members::ActiveModel {
        class_member_id: Set(leader.id),
        team_id: Set(team.id),
        role: Set(team_members::Role::Leader),
        status: Set(team_members::Status::Accepted),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;

    info!(class_id, team_id = team.id, leader = leader.id, "team created");

    Ok((StatusCode::CREATED, Json(team)))
}

pub async fn list_teams<S: StateTrait>(
    State(state): State<S>,
    user: CurrentUser,
    ClassId(class_id): ClassId,
) -> Result<Json<Vec<Team>>> {
    find_classroom(state.db(), class_id).await?;

    if !user.is_superuser {
        class_members::Entity::find_membership(user.id, class_id)
            .one(state.db())
            .await?
            .ok_or(error::NOT_CLASS_MEMBER)?;
    }

    let teams = membership::teams_of(state.db(), class_id).await?;

    let ids: Vec<_> = teams.iter().map(|team| team.id).collect();
    let mut members = membership::team_members_of(state.db(), &ids).await?;

    let teams = teams
        .into_iter()
        .map(|team| Team {
            members: members.remove(&team.id).unwrap_or_default(),
            team,
        })
        .collect();

    Ok(Json(teams))
}
