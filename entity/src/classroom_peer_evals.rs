use super::{classrooms, peer_evals};
use sea_orm::{entity::prelude::*, JoinType, QuerySelect};

pub mod constraints {
    pub const PK_CLASSROOM_PEER_EVALS: &str = "PK_classroom_peer_evals";
    pub const UC_CLASSROOM_PEER_EVALS_PAIR: &str = "UC_classroom_peer_evals_class_id_peer_eval_id";
    pub const FK_CLASSROOM_PEER_EVALS_CLASS_ID: &str = "FK_classroom_peer_evals_class_id";
    pub const FK_CLASSROOM_PEER_EVALS_PEER_EVAL_ID: &str = "FK_classroom_peer_evals_peer_eval_id";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "classroom_peer_evals")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub class_id: i32,
    pub peer_eval_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    ClassRoom,
    PeerEval,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::ClassRoom => Entity::belongs_to(classrooms::Entity)
                .from(Column::ClassId)
                .to(classrooms::Column::Id)
                .into(),
            Self::PeerEval => Entity::belongs_to(peer_evals::Entity)
                .from(Column::PeerEvalId)
                .to(peer_evals::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl peer_evals::Entity {
    #[inline]
    pub fn find_in_class(class_id: i32) -> Select<peer_evals::Entity> {
        peer_evals::Entity::find()
            .join(JoinType::InnerJoin, Relation::PeerEval.def().rev())
            .filter(Column::ClassId.eq(class_id))
    }
}
