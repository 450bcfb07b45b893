pub mod api_docs;
mod diaries;
mod middlewares;
mod utils;

pub use api_docs::{api_doc_routes, ApiDoc};
pub use diaries::diary_routes;
pub use middlewares::catch_all::CatchAll;
pub use utils::{query_config, ErrorResponse, INTERNAL_SERVER_ERROR_MESSAGE};
