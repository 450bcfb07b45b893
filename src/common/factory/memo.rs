use entities::memo;
use sea_orm::Set;

pub fn memo(id: i32) -> memo::ActiveModel {
    memo::ActiveModel {
        id: Set(id),
        text: Set("memo".to_string()),
    }
}

pub trait MemoFactory {
    fn text(self, text: &str) -> memo::ActiveModel;
}

impl MemoFactory for memo::ActiveModel {
    fn text(mut self, text: &str) -> memo::ActiveModel {
        self.text = Set(text.to_string());
        self
    }
}
