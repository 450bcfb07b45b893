pub mod create;
pub mod delete;
pub mod read;
pub mod types;
pub mod update;

use chrono::NaiveDate;

use crate::UseCaseError;

pub(crate) fn validate_date_range(
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<(), UseCaseError> {
    if start_date > end_date {
        return Err(UseCaseError::BadRequest(
            "startDate should be on or before endDate.".to_string(),
        ));
    }
    Ok(())
}
