use chrono::NaiveDate;
use db_adapters::{
    diary_adapter::{DiaryAdapter, DiaryFilter, DiaryOrder, DiaryQuery},
    Order::Asc,
};

use crate::{
    diaries::{types::DiaryVisible, validate_date_range},
    error_500, UseCaseError,
};

pub async fn read_diary<'a>(
    date: NaiveDate,
    diary_adapter: DiaryAdapter<'a>,
) -> Result<Vec<DiaryVisible>, UseCaseError> {
    diary_adapter
        .filter_eq_date(date)
        .order_by_created_at(Asc)
        .order_by_id(Asc)
        .get_all()
        .await
        .map(|diaries| diaries.into_iter().map(DiaryVisible::from).collect())
        .map_err(error_500)
}

pub async fn read_diaries<'a>(
    start_date: NaiveDate,
    end_date: NaiveDate,
    diary_adapter: DiaryAdapter<'a>,
) -> Result<Vec<DiaryVisible>, UseCaseError> {
    validate_date_range(start_date, end_date)?;

    diary_adapter
        .filter_between_dates(start_date, end_date)
        .order_by_date(Asc)
        .order_by_created_at(Asc)
        .order_by_id(Asc)
        .get_all()
        .await
        .map(|diaries| diaries.into_iter().map(DiaryVisible::from).collect())
        .map_err(error_500)
}
