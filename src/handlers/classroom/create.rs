use crate::{
    error::{self, DatabaseError, Result},
    extractors::{CurrentUser, Json, ValidatedJson},
    utils::generate_class_code,
    StateTrait,
};
use axum::{extract::State, http::StatusCode};
use entity::{class_members, classrooms};
use sea_orm::{ActiveModelTrait, DatabaseTransaction, Set, TransactionTrait};
use serde::Deserialize;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct Request {
    #[validate(length(min = 1, max = 16))]
    class_code: Option<String>,
    #[validate(length(min = 1, max = 100))]
    course_name: String,
    #[validate(length(max = 255))]
    sections: String,
    #[validate(length(max = 255))]
    schedule: Option<String>,
}

pub async fn create_classroom<S: StateTrait>(
    State(state): State<S>,
    user: CurrentUser,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<(StatusCode, Json<classrooms::Model>)> {
    let txn = state.db().begin().await?;

    let model = classrooms::ActiveModel {
        course_name: Set(request.course_name),
        sections: Set(request.sections),
        schedule: Set(request.schedule),
        ..Default::default()
    };

    let classroom = match request.class_code {
        Some(class_code) => {
            let mut model = model;
            model.class_code = Set(class_code);

            match model.insert(&txn).await {
                Err(err) if err.unique_violation() => return Err(error::DUPLICATE_CLASS_CODE),
                r => r?,
            }
        }
        None => insert_with_generated_code(&state, &txn, model).await?,
    };

    class_members::ActiveModel {
        user_id: Set(user.id),
        class_id: Set(classroom.id),
        role: Set(class_members::Role::Teacher),
        status: Set(class_members::Status::Accepted),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;

    info!(class_id = classroom.id, user_id = user.id, "classroom created");

    Ok((StatusCode::CREATED, Json(classroom)))
}

async fn insert_with_generated_code<S: StateTrait>(
    state: &S,
    txn: &DatabaseTransaction,
    model: classrooms::ActiveModel,
) -> Result<classrooms::Model> {
    for _ in 0..16 {
        let mut model = model.clone();
        model.class_code = Set(generate_class_code(&mut state.rng()));

        // a failed insert poisons the transaction on postgres, so each try gets a savepoint
        let attempt = txn.begin().await?;

        match model.insert(&attempt).await {
            Err(err) if err.unique_violation() => {
                attempt.rollback().await?;
                continue;
            }
            r => {
                let classroom = r?;
                attempt.commit().await?;
                return Ok(classroom);
            }
        }
    }

    warn!("ran out of class code attempts");

    Err(error::FAILED_TO_GENERATE_CLASS_CODE)
}
