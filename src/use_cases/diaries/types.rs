use entities::diary;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Debug)]
pub struct DiaryVisible {
    pub id: uuid::Uuid,
    #[schema(value_type = String, format = Date, example = "2024-08-28")]
    pub date: chrono::NaiveDate,
    #[schema(example = "오늘은 날씨가 좋다.")]
    pub text: String,
    #[schema(example = "Clear")]
    pub weather: Option<String>,
    #[schema(example = "01d")]
    pub icon: Option<String>,
    #[schema(example = 293.15)]
    pub temperature: Option<f64>,
}

impl From<diary::Model> for DiaryVisible {
    fn from(item: diary::Model) -> Self {
        DiaryVisible {
            id: item.id,
            date: item.date,
            text: item.text,
            weather: item.weather,
            icon: item.icon,
            temperature: item.temperature,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DiaryCreateRequest {
    pub date: chrono::NaiveDate,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct DiaryUpdateRequest {
    pub date: chrono::NaiveDate,
    pub text: String,
}
