use super::classrooms;
use sea_orm::entity::prelude::*;
use serde::Serialize;

pub mod constraints {
    pub const PK_TEAMS: &str = "PK_teams";
    pub const FK_TEAMS_CLASS_ID: &str = "FK_teams_class_id";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "teams")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub class_id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    ClassRoom,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::ClassRoom => Entity::belongs_to(classrooms::Entity)
                .from(Column::ClassId)
                .to(classrooms::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    #[inline]
    pub fn find_in_class(class_id: i32) -> Select<Entity> {
        Self::find().filter(Column::ClassId.eq(class_id))
    }
}
