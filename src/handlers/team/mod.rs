mod accept;
mod add;

use crate::state::StateTrait;
use axum::{routing::post, Router};

/// Routes for team membership
///
/// # Leader actions
/// POST /teams/:id/members
///
/// # Member actions
/// POST /teams/:id/accept
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route("/:id/members", post(add::add_member::<S>))
        .route("/:id/accept", post(accept::accept_invitation::<S>))
}
