use chrono::NaiveDate;
use db_adapters::diary_adapter::{DiaryAdapter, DiaryMutation};
use tracing::{event, Level};

use crate::{error_500, UseCaseError};

pub async fn delete_diary<'a>(
    date: NaiveDate,
    diary_adapter: DiaryAdapter<'a>,
) -> Result<(), UseCaseError> {
    let deleted = diary_adapter
        .delete_all_by_date(date)
        .await
        .map_err(error_500)?;
    event!(target: "backend", Level::DEBUG, "Deleted {} diaries of {}.", deleted, date);
    Ok(())
}
