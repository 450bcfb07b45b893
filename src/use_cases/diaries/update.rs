use db_adapters::{
    diary_adapter::{DiaryAdapter, DiaryFilter, DiaryMutation, DiaryOrder, DiaryQuery},
    Order::Asc,
};

use crate::{
    diaries::types::{DiaryUpdateRequest, DiaryVisible},
    error_500, UseCaseError,
};

/// Only the first entry of the day (oldest `created_at`) is rewritten.
pub async fn update_diary<'a>(
    params: DiaryUpdateRequest,
    diary_adapter: DiaryAdapter<'a>,
) -> Result<DiaryVisible, UseCaseError> {
    let diary = diary_adapter
        .clone()
        .filter_eq_date(params.date)
        .order_by_created_at(Asc)
        .order_by_id(Asc)
        .get_one()
        .await
        .map_err(error_500)?
        .ok_or(UseCaseError::NotFound(
            "Diary for this date was not found".to_string(),
        ))?;

    diary_adapter
        .update_text(diary, params.text)
        .await
        .map(DiaryVisible::from)
        .map_err(error_500)
}
