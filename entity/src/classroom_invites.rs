use super::{classrooms, users};
use sea_orm::entity::prelude::*;

pub mod constraints {
    pub const PK_CLASSROOM_INVITES: &str = "PK_classroom_invites";
    pub const FK_CLASSROOM_INVITES_CLASS_ID: &str = "FK_classroom_invites_class_id";
    pub const FK_CLASSROOM_INVITES_USER_ID: &str = "FK_classroom_invites_user_id";
}

/// The `invited_users` relation of a classroom.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "classroom_invites")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub class_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    ClassRoom,
    User,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::ClassRoom => Entity::belongs_to(classrooms::Entity)
                .from(Column::ClassId)
                .to(classrooms::Column::Id)
                .into(),
            Self::User => Entity::belongs_to(users::Entity)
                .from(Column::UserId)
                .to(users::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}
