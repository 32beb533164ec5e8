use entity::classrooms::{self, constraints::*};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(classrooms::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(classrooms::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(classrooms::Column::ClassCode)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(classrooms::Column::CourseName)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(classrooms::Column::Sections)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(classrooms::Column::Schedule)
                            .string_len(255)
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(UC_CLASSROOMS_CLASS_CODE)
                    .table(classrooms::Entity)
                    .col(classrooms::Column::ClassCode)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(classrooms::Entity).to_owned())
            .await
    }
}
