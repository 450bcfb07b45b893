use std::future::Future;

use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, IntoActiveModel, Order,
    QueryFilter, QueryOrder, Select, Set,
};
use uuid::Uuid;

use entities::diary::{ActiveModel, Column, Entity, Model};

#[derive(Clone)]
pub struct DiaryAdapter<'a> {
    pub db: &'a DbConn,
    pub query: Select<Entity>,
}

impl<'a> DiaryAdapter<'a> {
    pub fn init(db: &'a DbConn) -> Self {
        Self {
            db,
            query: Entity::find(),
        }
    }
}

pub trait DiaryFilter {
    fn filter_eq_date(self, date: NaiveDate) -> Self;
    fn filter_between_dates(self, start_date: NaiveDate, end_date: NaiveDate) -> Self;
}

impl DiaryFilter for DiaryAdapter<'_> {
    fn filter_eq_date(mut self, date: NaiveDate) -> Self {
        self.query = self.query.filter(Column::Date.eq(date));
        self
    }

    /// Both ends inclusive.
    fn filter_between_dates(mut self, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        self.query = self
            .query
            .filter(Column::Date.between(start_date, end_date));
        self
    }
}

pub trait DiaryOrder {
    fn order_by_date(self, order: Order) -> Self;
    fn order_by_created_at(self, order: Order) -> Self;
    fn order_by_id(self, order: Order) -> Self;
}

impl DiaryOrder for DiaryAdapter<'_> {
    fn order_by_date(mut self, order: Order) -> Self {
        self.query = self.query.order_by(Column::Date, order);
        self
    }

    fn order_by_created_at(mut self, order: Order) -> Self {
        self.query = self.query.order_by(Column::CreatedAt, order);
        self
    }

    fn order_by_id(mut self, order: Order) -> Self {
        self.query = self.query.order_by(Column::Id, order);
        self
    }
}

pub trait DiaryQuery {
    fn get_all(self) -> impl Future<Output = Result<Vec<Model>, DbErr>>;
    fn get_one(self) -> impl Future<Output = Result<Option<Model>, DbErr>>;
}

impl DiaryQuery for DiaryAdapter<'_> {
    async fn get_all(self) -> Result<Vec<Model>, DbErr> {
        self.query.all(self.db).await
    }

    async fn get_one(self) -> Result<Option<Model>, DbErr> {
        self.query.one(self.db).await
    }
}

#[derive(Debug, Clone, Default)]
pub struct WeatherFields {
    pub weather: Option<String>,
    pub icon: Option<String>,
    pub temperature: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct CreateDiaryParams {
    pub date: NaiveDate,
    pub text: String,
    pub weather: WeatherFields,
}

pub trait DiaryMutation {
    fn create(self, params: CreateDiaryParams) -> impl Future<Output = Result<Model, DbErr>>;
    fn update_text(self, diary: Model, text: String) -> impl Future<Output = Result<Model, DbErr>>;
    fn delete_all_by_date(self, date: NaiveDate) -> impl Future<Output = Result<u64, DbErr>>;
}

impl DiaryMutation for DiaryAdapter<'_> {
    async fn create(self, params: CreateDiaryParams) -> Result<Model, DbErr> {
        ActiveModel {
            id: Set(Uuid::now_v7()),
            date: Set(params.date),
            text: Set(params.text),
            weather: Set(params.weather.weather),
            icon: Set(params.weather.icon),
            temperature: Set(params.weather.temperature),
            created_at: Set(Utc::now().into()),
        }
        .insert(self.db)
        .await
    }

    async fn update_text(self, diary: Model, text: String) -> Result<Model, DbErr> {
        let mut diary = diary.into_active_model();
        diary.text = Set(text);
        diary.update(self.db).await
    }

    async fn delete_all_by_date(self, date: NaiveDate) -> Result<u64, DbErr> {
        Entity::delete_many()
            .filter(Column::Date.eq(date))
            .exec(self.db)
            .await
            .map(|res| res.rows_affected)
    }
}
