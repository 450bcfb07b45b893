pub(crate) mod create;
pub(crate) mod delete;
mod params;
pub(crate) mod read;
pub(crate) mod update;

use actix_web::web::ServiceConfig;

pub fn diary_routes(cfg: &mut ServiceConfig) {
    cfg.service(create::create_diary_endpoint)
        .service(read::read_diary_endpoint)
        .service(read::read_diaries_endpoint)
        .service(update::update_diary_endpoint)
        .service(delete::delete_diary_endpoint);
}
