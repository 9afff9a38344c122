use actix_web::{web, HttpResponse, Result as ActixResult};
use catalog::{views, FilterState, RecordStore};
use shared_types::ListProjectsRequest;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::helpers::errors::catalog_error_response;

pub async fn list_projects(
    store: web::Data<Arc<RecordStore>>,
    query: web::Query<ListProjectsRequest>,
) -> ActixResult<HttpResponse> {
    let state = match FilterState::from_request(&query) {
        Ok(state) => state,
        Err(e) => {
            warn!("Rejected project listing filter: {}", e);
            return Ok(catalog_error_response(&e));
        }
    };

    let response = views::listing(&store, &state);
    debug!(
        "Listing matched {} of {} projects",
        response.shown_count, response.total_count
    );

    Ok(HttpResponse::Ok().json(response))
}

pub async fn get_filter_options() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(views::filter_options()))
}

pub async fn get_project(
    store: web::Data<Arc<RecordStore>>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let project_id = path.into_inner();

    match store.find(&project_id) {
        Ok(record) => Ok(HttpResponse::Ok().json(views::detail(record))),
        Err(e) => {
            debug!("Project lookup failed: {}", e);
            Ok(catalog_error_response(&e))
        }
    }
}
