use crate::{
    error::Result,
    extractors::{CurrentUser, Json},
    membership::{self, Member},
    StateTrait,
};
use axum::extract::State;
use entity::classrooms;
use sea_orm::{EntityTrait, QueryOrder};
use serde::Serialize;

#[derive(Serialize)]
pub struct ClassRoom {
    #[serde(flatten)]
    classroom: classrooms::Model,
    members: Vec<Member>,
}

pub async fn list_classrooms<S: StateTrait>(
    State(state): State<S>,
    user: CurrentUser,
) -> Result<Json<Vec<ClassRoom>>> {
    let query = if user.is_superuser {
        classrooms::Entity::find()
    } else {
        classrooms::Entity::find_accepted_for(user.id)
    };

    let classrooms = query
        .order_by_asc(classrooms::Column::Id)
        .all(state.db())
        .await?;

    let ids: Vec<_> = classrooms.iter().map(|classroom| classroom.id).collect();
    let mut members = membership::members_of(state.db(), &ids).await?;

    let classrooms = classrooms
        .into_iter()
        .map(|classroom| ClassRoom {
            members: members.remove(&classroom.id).unwrap_or_default(),
            classroom,
        })
        .collect();

    Ok(Json(classrooms))
}
