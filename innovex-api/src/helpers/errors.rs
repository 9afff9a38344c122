use actix_web::HttpResponse;
use catalog::CatalogError;
use shared_types::ErrorResponse;

pub const PROJECT_NOT_FOUND: &str = "Project not found";

fn error_body(error: impl Into<String>) -> ErrorResponse {
    ErrorResponse {
        error: error.into(),
    }
}

/// Map a catalog error to the JSON response the frontend expects
pub fn catalog_error_response(err: &CatalogError) -> HttpResponse {
    match err {
        CatalogError::NotFound(_) => HttpResponse::NotFound().json(error_body(PROJECT_NOT_FOUND)),
        CatalogError::InvalidFilter(_) => {
            HttpResponse::BadRequest().json(error_body(err.to_string()))
        }
        CatalogError::ValidationFailed { .. } => {
            HttpResponse::UnprocessableEntity().json(error_body(err.to_string()))
        }
        CatalogError::DuplicateId(_) | CatalogError::SeedIo(_) | CatalogError::SeedParse(_) => {
            HttpResponse::InternalServerError().json(error_body(err.to_string()))
        }
    }
}
