use entity::{
    class_members::{self, constraints::*},
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
                    .table(class_members::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(class_members::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(class_members::Column::UserId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(class_members::Column::ClassId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(class_members::Column::Role)
                            .small_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(class_members::Column::Status)
                            .small_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CLASS_MEMBERS_USER_ID)
                            .from(class_members::Entity, class_members::Column::UserId)
                            .to(users::Entity, users::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CLASS_MEMBERS_CLASS_ID)
                            .from(class_members::Entity, class_members::Column::ClassId)
                            .to(classrooms::Entity, classrooms::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(UC_CLASS_MEMBERS_USER_CLASS)
                    .table(class_members::Entity)
                    .col(class_members::Column::UserId)
                    .col(class_members::Column::ClassId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(class_members::Entity).to_owned())
            .await
    }
}
