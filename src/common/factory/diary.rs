use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use entities::diary;
use sea_orm::Set;

pub fn diary() -> diary::ActiveModel {
    let now = Utc::now();
    diary::ActiveModel {
        id: Set(uuid::Uuid::now_v7()),
        date: Set(now.date_naive()),
        text: Set("diary".to_string()),
        weather: Set(Some("Clear".to_string())),
        icon: Set(Some("01d".to_string())),
        temperature: Set(Some(293.15)),
        created_at: Set(now.into()),
    }
}

pub trait DiaryFactory {
    fn date(self, date: NaiveDate) -> diary::ActiveModel;
    fn text(self, text: &str) -> diary::ActiveModel;
    fn created_at(self, created_at: DateTime<FixedOffset>) -> diary::ActiveModel;
}

impl DiaryFactory for diary::ActiveModel {
    fn date(mut self, date: NaiveDate) -> diary::ActiveModel {
        self.date = Set(date);
        self
    }

    fn text(mut self, text: &str) -> diary::ActiveModel {
        self.text = Set(text.to_string());
        self
    }

    fn created_at(mut self, created_at: DateTime<FixedOffset>) -> diary::ActiveModel {
        self.created_at = Set(created_at);
        self
    }
}
