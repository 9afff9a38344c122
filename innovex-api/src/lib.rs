pub mod config;
pub mod handlers;
pub mod helpers;

use actix_web::web;

/// Register every route; expects `web::Data<Arc<RecordStore>>` in app data
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::landing::index)
        .service(handlers::landing::health)
        .route("/api/projects", web::get().to(handlers::projects::list_projects))
        .route("/api/filter-options", web::get().to(handlers::projects::get_filter_options))
        .route("/api/projects/{id}", web::get().to(handlers::projects::get_project))
        .route("/api/upload", web::get().to(handlers::upload::get_upload_form))
        .route("/api/upload", web::post().to(handlers::upload::submit_project))
        .route("/api/admin/dashboard", web::get().to(handlers::admin::get_dashboard));
}
