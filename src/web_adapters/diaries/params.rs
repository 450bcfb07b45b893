use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::IntoParams;

/// `?date=yyyy-MM-dd`
#[derive(Deserialize, IntoParams, Debug, PartialEq)]
#[into_params(parameter_in = Query)]
pub struct DateQuery {
    /// 형식: yyyy-MM-dd (예: 2024-08-28)
    #[param(value_type = String, format = Date, example = "2024-08-28")]
    pub date: NaiveDate,
}

/// `?startDate=yyyy-MM-dd&endDate=yyyy-MM-dd`, both ends inclusive.
#[derive(Deserialize, IntoParams, Debug, PartialEq)]
#[into_params(parameter_in = Query)]
pub struct DateRangeQuery {
    /// 조회 시작 날짜. 형식: yyyy-MM-dd (예: 2024-08-01)
    #[serde(rename = "startDate")]
    #[param(value_type = String, format = Date, example = "2024-08-01")]
    pub start_date: NaiveDate,
    /// 조회 종료 날짜. 형식: yyyy-MM-dd (예: 2024-08-31)
    #[serde(rename = "endDate")]
    #[param(value_type = String, format = Date, example = "2024-08-31")]
    pub end_date: NaiveDate,
}
