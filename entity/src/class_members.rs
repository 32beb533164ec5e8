use super::{classrooms, users};
use sea_orm::entity::prelude::*;
use serde::Serialize;
use serde_repr::{Deserialize_repr, Serialize_repr};

pub mod constraints {
    pub const PK_CLASS_MEMBERS: &str = "PK_class_members";
    pub const UC_CLASS_MEMBERS_USER_CLASS: &str = "UC_class_members_user_id_class_id";
    pub const FK_CLASS_MEMBERS_USER_ID: &str = "FK_class_members_user_id";
    pub const FK_CLASS_MEMBERS_CLASS_ID: &str = "FK_class_members_class_id";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "class_members")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub class_id: i32,
    pub role: Role,
    pub status: Status,
}

#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    EnumIter,
    DeriveActiveEnum,
    Serialize_repr,
    Deserialize_repr,
)]
#[repr(i16)]
#[sea_orm(rs_type = "i16", db_type = "SmallInteger")]
pub enum Role {
    Teacher = 1,
    Student = 2,
    Guest = 3,
}

impl Role {
    /// Maps the numeric role sent by clients, anything unknown is a guest.
    pub fn from_number(number: i64) -> Self {
        match number {
            1 => Role::Teacher,
            2 => Role::Student,
            _ => Role::Guest,
        }
    }
}

#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    EnumIter,
    DeriveActiveEnum,
    Serialize_repr,
    Deserialize_repr,
)]
#[repr(i16)]
#[sea_orm(rs_type = "i16", db_type = "SmallInteger")]
pub enum Status {
    Pending = 0,
    Accepted = 1,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    User,
    ClassRoom,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::User => Entity::belongs_to(users::Entity)
                .from(Column::UserId)
                .to(users::Column::Id)
                .into(),
            Self::ClassRoom => Entity::belongs_to(classrooms::Entity)
                .from(Column::ClassId)
                .to(classrooms::Column::Id)
                .into(),
        }
    }
}

impl Related<users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<classrooms::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClassRoom.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    #[inline]
    pub fn find_membership(user_id: i32, class_id: i32) -> Select<Entity> {
        Self::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::ClassId.eq(class_id))
    }

    #[inline]
    pub fn find_in_class(class_id: i32) -> Select<Entity> {
        Self::find().filter(Column::ClassId.eq(class_id))
    }
}
