use actix_web::web::ServiceConfig;
use web_adapters::{api_doc_routes, diary_routes, query_config};

/// Everything the application serves, shared by the binary and the tests.
pub fn configure_app(cfg: &mut ServiceConfig) {
    cfg.app_data(query_config())
        .service(health_check)
        .configure(diary_routes)
        .configure(api_doc_routes);
}

#[actix_web::get("/health-check")]
pub async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json("Application is safe and healthy.")
}
