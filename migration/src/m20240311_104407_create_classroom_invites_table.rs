use entity::{
    classroom_invites::{self, constraints::*},
    classrooms, users,
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
                    .table(classroom_invites::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(classroom_invites::Column::ClassId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(classroom_invites::Column::UserId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name(PK_CLASSROOM_INVITES)
                            .col(classroom_invites::Column::ClassId)
                            .col(classroom_invites::Column::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CLASSROOM_INVITES_CLASS_ID)
                            .from(
                                classroom_invites::Entity,
                                classroom_invites::Column::ClassId,
                            )
                            .to(classrooms::Entity, classrooms::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CLASSROOM_INVITES_USER_ID)
                            .from(classroom_invites::Entity, classroom_invites::Column::UserId)
                            .to(users::Entity, users::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(classroom_invites::Entity).to_owned())
            .await
    }
}
