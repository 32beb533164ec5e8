pub use sea_orm_migration::prelude::*;

mod m20240311_101512_create_users_table;
mod m20240311_102034_create_classrooms_table;
mod m20240311_103318_create_class_members_table;
mod m20240311_104407_create_classroom_invites_table;
mod m20240318_091245_create_teams_table;
mod m20240318_092710_create_team_members_table;
mod m20240402_140358_create_peer_evals_table;
mod m20240402_141122_create_classroom_peer_evals_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240311_101512_create_users_table::Migration),
            Box::new(m20240311_102034_create_classrooms_table::Migration),
            Box::new(m20240311_103318_create_class_members_table::Migration),
            Box::new(m20240311_104407_create_classroom_invites_table::Migration),
            Box::new(m20240318_091245_create_teams_table::Migration),
            Box::new(m20240318_092710_create_team_members_table::Migration),
            Box::new(m20240402_140358_create_peer_evals_table::Migration),
            Box::new(m20240402_141122_create_classroom_peer_evals_table::Migration),
        ]
    }
}
