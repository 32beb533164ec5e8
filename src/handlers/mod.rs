mod classroom;
mod eval;
mod invitation;
mod team;

use crate::{middlewares::ModeratorLayer, state::StateTrait};
use axum::{
    extract::State,
    handler::Handler,
    http::StatusCode,
    routing::{get, post},
    Router,
};
use sea_orm::ConnectionTrait;

pub fn routes<S: StateTrait>(state: S) -> Router<S> {
    Router::new()
        .nest("/classes", classroom::routes::<S>(state.clone()))
        .nest("/classroom", invitation::routes::<S>())
        .nest("/teams", team::routes::<S>())
        .route(
            "/evals",
            post(eval::create_eval::<S>.layer(ModeratorLayer::new(state))),
        )
        .route("/livez", get(liveness::<S>))
        .route("/readyz", get(|| async {}))
}

async fn liveness<S: StateTrait>(State(state): State<S>) -> StatusCode {
    if state.db().execute_unprepared("select 1").await.is_err() {
        return StatusCode::INTERNAL_SERVER_ERROR;
    }

    StatusCode::OK
}
