use sea_orm::entity::prelude::*;
use serde::Serialize;

pub mod constraints {
    pub const PK_PEER_EVALS: &str = "PK_peer_evals";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "peer_evals")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub forms_link: Option<String>,
    pub sheet_link: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
