use std::future::Future;

use sea_orm::{ActiveModelTrait, DbConn, DbErr, EntityTrait, QueryOrder, Set};

use entities::memo::{ActiveModel, Column, Entity, Model};

/// Plain storage access for memos. Not exposed over HTTP.
#[derive(Clone)]
pub struct MemoAdapter<'a> {
    pub db: &'a DbConn,
}

impl<'a> MemoAdapter<'a> {
    pub fn init(db: &'a DbConn) -> Self {
        Self { db }
    }
}

#[derive(Debug, Clone)]
pub struct SaveMemoParams {
    pub id: i32,
    pub text: String,
}

pub trait MemoQuery {
    fn find_by_id(self, id: i32) -> impl Future<Output = Result<Option<Model>, DbErr>>;
    fn find_all(self) -> impl Future<Output = Result<Vec<Model>, DbErr>>;
}

impl MemoQuery for MemoAdapter<'_> {
    async fn find_by_id(self, id: i32) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(self.db).await
    }

    async fn find_all(self) -> Result<Vec<Model>, DbErr> {
        Entity::find().order_by_asc(Column::Id).all(self.db).await
    }
}

pub trait MemoMutation {
    fn save(self, params: SaveMemoParams) -> impl Future<Output = Result<Model, DbErr>>;
}

impl MemoMutation for MemoAdapter<'_> {
    async fn save(self, params: SaveMemoParams) -> Result<Model, DbErr> {
        ActiveModel {
            id: Set(params.id),
            text: Set(params.text),
        }
        .insert(self.db)
        .await
    }
}
