use std::fmt::Debug;

use actix_web::{error::InternalError, web::QueryConfig, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::{event, Level};
use utoipa::ToSchema;

pub const INTERNAL_SERVER_ERROR_MESSAGE: &str =
    "Some unexpected error happened. Please try again later.";

#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

///Bad Request
pub fn response_400(error_message: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: error_message.to_string(),
    })
}

/// NotFound
pub fn response_404(error_message: &str) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse {
        error: error_message.to_string(),
    })
}

/// Internal Server Error: with logging
pub fn response_500<T: Debug>(e: T) -> HttpResponse {
    event!(target: "backend", Level::ERROR, "{:?}", e);
    HttpResponse::InternalServerError().json(ErrorResponse {
        error: INTERNAL_SERVER_ERROR_MESSAGE.to_string(),
    })
}

/// Malformed or missing query parameters become a 400 with the binding message.
pub fn query_config() -> QueryConfig {
    QueryConfig::default().error_handler(|err, _req| {
        let response = response_400(&err.to_string());
        InternalError::from_response(err, response).into()
    })
}
