use entity::{
    class_members,
    team_members::{self, constraints::*},
    teams,
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
                    .table(team_members::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(team_members::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(team_members::Column::ClassMemberId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(team_members::Column::TeamId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(team_members::Column::Role)
                            .small_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(team_members::Column::Status)
                            .small_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TEAM_MEMBERS_CLASS_MEMBER_ID)
                            .from(team_members::Entity, team_members::Column::ClassMemberId)
                            .to(class_members::Entity, class_members::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TEAM_MEMBERS_TEAM_ID)
                            .from(team_members::Entity, team_members::Column::TeamId)
                            .to(teams::Entity, teams::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(team_members::Entity).to_owned())
            .await
    }
}
