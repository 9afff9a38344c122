use actix_web::{get, web, HttpResponse, Responder};
use catalog::{landing, RecordStore};
use shared_types::HealthResponse;
use std::sync::Arc;

#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(landing::landing())
}

#[get("/health")]
pub async fn health(store: web::Data<Arc<RecordStore>>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        projects_loaded: store.len(),
    })
}
