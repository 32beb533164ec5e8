mod invite;
mod invited;

use crate::state::StateTrait;
use axum::{routing::post, Router};

/// Routes for classroom invitations
///
/// POST /classroom/inviteToClass
/// POST /classroom/get_invited_classes
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route("/inviteToClass", post(invite::invite_to_class::<S>))
        .route("/get_invited_classes", post(invited::get_invited_classes::<S>))
}

/// An empty email counts as missing.
fn required_email(email: Option<String>) -> Option<String> {
    email
        .map(|email| email.trim().to_owned())
        .filter(|email| !email.is_empty())
}
