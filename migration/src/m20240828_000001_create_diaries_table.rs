use sea_orm_migration::{prelude::*, schema::*};

const INDEX_NAME: &str = "diaries_date_index";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Diary::Table)
                    .if_not_exists()
                    .col(uuid(Diary::Id).primary_key())
                    .col(date(Diary::Date))
                    .col(text(Diary::Text))
                    .col(string_len_null(Diary::Weather, 64))
                    .col(string_len_null(Diary::Icon, 16))
                    .col(double_null(Diary::Temperature))
                    .col(
                        timestamp_with_time_zone(Diary::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name(INDEX_NAME)
                    .table(Diary::Table)
                    .col(Diary::Date)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name(INDEX_NAME).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Diary::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Diary {
    Table,
    Id,
    Date,
    Text,
    Weather,
    Icon,
    Temperature,
    CreatedAt,
}
