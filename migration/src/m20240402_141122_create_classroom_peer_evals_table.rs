use entity::{
    classroom_peer_evals::{self, constraints::*},
    classrooms, peer_evals,
};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(classroom_peer_evals::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(classroom_peer_evals::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(classroom_peer_evals::Column::ClassId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(classroom_peer_evals::Column::PeerEvalId)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CLASSROOM_PEER_EVALS_CLASS_ID)
                            .from(
                                classroom_peer_evals::Entity,
                                classroom_peer_evals::Column::ClassId,
                            )
                            .to(classrooms::Entity, classrooms::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CLASSROOM_PEER_EVALS_PEER_EVAL_ID)
                            .from(
                                classroom_peer_evals::Entity,
                                classroom_peer_evals::Column::PeerEvalId,
                            )
                            .to(peer_evals::Entity, peer_evals::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(UC_CLASSROOM_PEER_EVALS_PAIR)
                    .table(classroom_peer_evals::Entity)
                    .col(classroom_peer_evals::Column::ClassId)
                    .col(classroom_peer_evals::Column::PeerEvalId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(classroom_peer_evals::Entity)
                    .to_owned(),
            )
            .await
    }
}
