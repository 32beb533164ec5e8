use super::{class_members, classroom_invites};
use sea_orm::{entity::prelude::*, JoinType, QuerySelect};
use serde::Serialize;

pub mod constraints {
    pub const PK_CLASSROOMS: &str = "PK_classrooms";
    pub const UC_CLASSROOMS_CLASS_CODE: &str = "UC_classrooms_class_code";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "classrooms")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub class_code: String,
    pub course_name: String,
    pub sections: String,
    pub schedule: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    #[inline]
    pub fn find_by_class_code(code: &str) -> Select<Entity> {
        Self::find().filter(Column::ClassCode.eq(code))
    }

    /// Classrooms where the user holds an accepted membership.
    #[inline]
    pub fn find_accepted_for(user_id: i32) -> Select<Entity> {
        Self::find()
            .join(
                JoinType::InnerJoin,
                class_members::Relation::ClassRoom.def().rev(),
            )
            .filter(class_members::Column::UserId.eq(user_id))
            .filter(class_members::Column::Status.eq(class_members::Status::Accepted))
    }

    #[inline]
    pub fn find_invited(user_id: i32) -> Select<Entity> {
        Self::find()
            .join(
                JoinType::InnerJoin,
                classroom_invites::Relation::ClassRoom.def().rev(),
            )
            .filter(classroom_invites::Column::UserId.eq(user_id))
    }
}
