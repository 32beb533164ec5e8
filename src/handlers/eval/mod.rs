use crate::{
    error::Result,
    extractors::{Json, ValidatedJson},
    StateTrait,
};
use axum::{extract::State, http::StatusCode};
use entity::peer_evals;
use sea_orm::{ActiveModelTrait, Set};
use serde::Deserialize;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct Request {
    #[validate(length(min = 1, max = 255))]
    name: String,
    #[validate(url)]
    forms_link: Option<String>,
    #[validate(url)]
    sheet_link: Option<String>,
}

pub async fn create_eval<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<(StatusCode, Json<peer_evals::Model>)> {
    let eval = peer_evals::ActiveModel {
        name: Set(request.name),
        forms_link: Set(request.forms_link),
        sheet_link: Set(request.sheet_link),
        ..Default::default()
    }
    .insert(state.db())
    .await?;

    info!(peer_eval_id = eval.id, "peer evaluation created");

    Ok((StatusCode::CREATED, Json(eval)))
}
