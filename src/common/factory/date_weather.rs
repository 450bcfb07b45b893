use chrono::NaiveDate;
use entities::date_weather;
use sea_orm::Set;

pub fn date_weather(date: NaiveDate) -> date_weather::ActiveModel {
    date_weather::ActiveModel {
        date: Set(date),
        weather: Set("Rain".to_string()),
        icon: Set("10d".to_string()),
        temperature: Set(285.5),
    }
}
