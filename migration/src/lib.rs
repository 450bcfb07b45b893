pub use sea_orm_migration::prelude::*;

mod m20240828_000001_create_diaries_table;
mod m20240828_000002_create_date_weathers_table;
mod m20240828_000003_create_memos_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240828_000001_create_diaries_table::Migration),
            Box::new(m20240828_000002_create_date_weathers_table::Migration),
            Box::new(m20240828_000003_create_memos_table::Migration),
        ]
    }
}
