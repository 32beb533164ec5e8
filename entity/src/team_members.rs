use super::{class_members, teams};
use sea_orm::{entity::prelude::*, JoinType, QuerySelect};
use serde::Serialize;
use serde_repr::{Deserialize_repr, Serialize_repr};

pub mod constraints {
    pub const PK_TEAM_MEMBERS: &str = "PK_team_members";
    pub const FK_TEAM_MEMBERS_CLASS_MEMBER_ID: &str = "FK_team_members_class_member_id";
    pub const FK_TEAM_MEMBERS_TEAM_ID: &str = "FK_team_members_team_id";
}

// A class member may have several rows, one per team it was invited into.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "team_members")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub class_member_id: i32,
    pub team_id: i32,
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
    Leader = 1,
    Member = 2,
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
    ClassMember,
    Team,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::ClassMember => Entity::belongs_to(class_members::Entity)
                .from(Column::ClassMemberId)
                .to(class_members::Column::Id)
                .into(),
            Self::Team => Entity::belongs_to(teams::Entity)
                .from(Column::TeamId)
                .to(teams::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    #[inline]
    pub fn find_in_team(team_id: i32) -> Select<Entity> {
        Self::find().filter(Column::TeamId.eq(team_id))
    }

    #[inline]
    pub fn find_for_user_in_team(user_id: i32, team_id: i32) -> Select<Entity> {
        Self::find()
            .join(JoinType::InnerJoin, Relation::ClassMember.def())
            .filter(Column::TeamId.eq(team_id))
            .filter(class_members::Column::UserId.eq(user_id))
    }

    #[inline]
    pub fn find_in_class(class_id: i32) -> Select<Entity> {
        Self::find()
            .join(JoinType::InnerJoin, Relation::ClassMember.def())
            .filter(class_members::Column::ClassId.eq(class_id))
    }
}
