use crate::{
    error::{self, DatabaseError, Result},
    extractors::{ClassId, Json, ValidatedJson},
    utils::set_option,
    StateTrait,
};
use axum::extract::State;
use entity::classrooms;
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, Set};
use serde::Deserialize;
use validator::Validate;

const MAX_SCHEDULE_LEN: usize = 255;

#[derive(Deserialize, Validate)]
pub struct UpdateRequest {
    #[validate(length(min = 1, max = 16))]
    class_code: String,
    #[validate(length(min = 1, max = 100))]
    course_name: String,
    #[validate(length(max = 255))]
    sections: String,
    #[validate(length(max = 255))]
    schedule: Option<String>,
}

#[derive(Deserialize, Validate)]
pub struct PatchRequest {
    #[validate(length(min = 1, max = 16))]
    class_code: Option<String>,
    #[validate(length(min = 1, max = 100))]
    course_name: Option<String>,
    #[validate(length(max = 255))]
    sections: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    schedule: Option<Option<String>>,
}

pub async fn update_classroom<S: StateTrait>(
    State(state): State<S>,
    ClassId(class_id): ClassId,
    ValidatedJson(request): ValidatedJson<UpdateRequest>,
) -> Result<Json<classrooms::Model>> {
    let active_model = classrooms::ActiveModel {
        id: Set(class_id),
        class_code: Set(request.class_code),
        course_name: Set(request.course_name),
        sections: Set(request.sections),
        schedule: Set(request.schedule),
    };

    save(&state, active_model).await.map(Json)
}

pub async fn patch_classroom<S: StateTrait>(
    State(state): State<S>,
    ClassId(class_id): ClassId,
    ValidatedJson(request): ValidatedJson<PatchRequest>,
) -> Result<Json<classrooms::Model>> {
    // validator can not see through the double option
    if let Some(Some(schedule)) = &request.schedule {
        if schedule.chars().count() > MAX_SCHEDULE_LEN {
            return Err(error::JSON_VALIDATE_INVALID);
        }
    }

    // The ORM can not build an UPDATE without columns
    if request.class_code.is_none()
        && request.course_name.is_none()
        && request.sections.is_none()
        && request.schedule.is_none()
    {
        let classroom = classrooms::Entity::find_by_id(class_id)
            .one(state.db())
            .await?
            .ok_or(error::CLASSROOM_NOT_FOUND)?;

        return Ok(Json(classroom));
    }

    let active_model = classrooms::ActiveModel {
        id: Set(class_id),
        class_code: set_option(request.class_code),
        course_name: set_option(request.course_name),
        sections: set_option(request.sections),
        schedule: set_option(request.schedule),
    };

    save(&state, active_model).await.map(Json)
}

async fn save<S: StateTrait>(
    state: &S,
    active_model: classrooms::ActiveModel,
) -> Result<classrooms::Model> {
    match active_model.update(state.db()).await {
        Err(DbErr::RecordNotUpdated | DbErr::RecordNotFound(_)) => Err(error::CLASSROOM_NOT_FOUND),
        Err(err) if err.unique_violation() => Err(error::DUPLICATE_CLASS_CODE),
        r => Ok(r?),
    }
}
