mod date_weather;
mod diary;
mod memo;

pub use date_weather::*;
pub use diary::*;
pub use memo::*;
