use std::future::Future;

use chrono::NaiveDate;
use sea_orm::{
    sea_query::OnConflict, ColumnTrait, DbConn, DbErr, EntityTrait, QueryFilter, Select, Set,
};

use entities::date_weather::{ActiveModel, Column, Entity, Model};

#[derive(Clone)]
pub struct DateWeatherAdapter<'a> {
    pub db: &'a DbConn,
    pub query: Select<Entity>,
}

impl<'a> DateWeatherAdapter<'a> {
    pub fn init(db: &'a DbConn) -> Self {
        Self {
            db,
            query: Entity::find(),
        }
    }
}

pub trait DateWeatherFilter {
    fn filter_eq_date(self, date: NaiveDate) -> Self;
}

impl DateWeatherFilter for DateWeatherAdapter<'_> {
    fn filter_eq_date(mut self, date: NaiveDate) -> Self {
        self.query = self.query.filter(Column::Date.eq(date));
        self
    }
}

pub trait DateWeatherQuery {
    fn get_one(self) -> impl Future<Output = Result<Option<Model>, DbErr>>;
}

impl DateWeatherQuery for DateWeatherAdapter<'_> {
    async fn get_one(self) -> Result<Option<Model>, DbErr> {
        self.query.one(self.db).await
    }
}

#[derive(Debug, Clone)]
pub struct UpsertDateWeatherParams {
    pub date: NaiveDate,
    pub weather: String,
    pub icon: String,
    pub temperature: f64,
}

pub trait DateWeatherMutation {
    fn upsert(self, params: UpsertDateWeatherParams) -> impl Future<Output = Result<(), DbErr>>;
}

impl DateWeatherMutation for DateWeatherAdapter<'_> {
    async fn upsert(self, params: UpsertDateWeatherParams) -> Result<(), DbErr> {
        Entity::insert(ActiveModel {
            date: Set(params.date),
            weather: Set(params.weather),
            icon: Set(params.icon),
            temperature: Set(params.temperature),
        })
        .on_conflict(
            OnConflict::column(Column::Date)
                .update_columns([Column::Weather, Column::Icon, Column::Temperature])
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await
        .map(|_| ())
    }
}
