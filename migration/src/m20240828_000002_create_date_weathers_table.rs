use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DateWeather::Table)
                    .if_not_exists()
                    .col(date(DateWeather::Date).primary_key())
                    .col(string_len(DateWeather::Weather, 64))
                    .col(string_len(DateWeather::Icon, 16))
                    .col(double(DateWeather::Temperature))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DateWeather::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DateWeather {
    Table,
    Date,
    Weather,
    Icon,
    Temperature,
}
