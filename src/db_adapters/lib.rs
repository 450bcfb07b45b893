pub mod date_weather_adapter;
pub mod diary_adapter;
pub mod memo_adapter;

pub use sea_orm::Order;
