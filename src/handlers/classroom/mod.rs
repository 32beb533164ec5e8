mod create;
mod delete;
mod evals;
mod get;
mod join;
mod list;
mod members;
mod roster;
mod teams;
mod update;

use crate::{
    error::{self, Result},
    middlewares::ModeratorLayer,
    state::StateTrait,
};
use axum::{
    handler::Handler,
    routing::{delete, get, post},
    Router,
};
use entity::classrooms;
use sea_orm::{ConnectionTrait, EntityTrait};

/// Routes for classrooms
///
/// # Member actions
/// GET  /classes
/// GET  /classes/:id
/// POST /classes/join
/// POST /classes/join_class_as_guest
/// GET  /classes/:id/evals
/// GET  /classes/:id/teams
///
/// # Moderator actions
/// POST   /classes
/// PUT    /classes/:id
/// PATCH  /classes/:id
/// DELETE /classes/:id
/// GET    /classes/:id/leaders
/// GET    /classes/:id/nonleaders
/// POST   /classes/:id/evals
/// POST   /classes/:id/teams
/// POST   /classes/:id/members/:member_id/accept
/// DELETE /classes/:id/members/:member_id
pub fn routes<S: StateTrait>(state: S) -> Router<S> {
    let moderator = ModeratorLayer::new(state);

    Router::new()
        .route(
            "/",
            get(list::list_classrooms::<S>)
                .post(create::create_classroom::<S>.layer(moderator.clone())),
        )
        .route("/join", post(join::join_classroom::<S>))
        .route("/join_class_as_guest", post(join::join_as_guest::<S>))
        .route(
            "/:id",
            get(get::get_classroom::<S>)
                .put(update::update_classroom::<S>.layer(moderator.clone()))
                .patch(update::patch_classroom::<S>.layer(moderator.clone()))
                .delete(delete::delete_classroom::<S>.layer(moderator.clone())),
        )
        .route(
            "/:id/leaders",
            get(roster::get_leaders::<S>.layer(moderator.clone())),
        )
        .route(
            "/:id/nonleaders",
            get(roster::get_non_leaders::<S>.layer(moderator.clone())),
        )
        .route(
            "/:id/evals",
            get(evals::list_evals::<S>).post(evals::assign_eval::<S>.layer(moderator.clone())),
        )
        .route(
            "/:id/teams",
            get(teams::list_teams::<S>).post(teams::create_team::<S>.layer(moderator.clone())),
        )
        .route(
            "/:id/members/:member_id/accept",
            post(members::accept_member::<S>.layer(moderator.clone())),
        )
        .route(
            "/:id/members/:member_id",
            delete(members::remove_member::<S>.layer(moderator)),
        )
}

async fn find_classroom<C>(db: &C, class_id: i32) -> Result<classrooms::Model>
where
    C: ConnectionTrait,
{
    classrooms::Entity::find_by_id(class_id)
        .one(db)
        .await?
        .ok_or(error::CLASSROOM_NOT_FOUND)
}
