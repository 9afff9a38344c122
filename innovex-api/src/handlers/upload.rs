use actix_web::{web, HttpResponse, Result as ActixResult};
use catalog::{submission, CatalogError};
use shared_types::{ProjectSubmission, SubmissionRejected};
use tracing::info;

use crate::helpers::errors::catalog_error_response;

/// Blank submission form with its defaults filled in
pub async fn get_upload_form() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(submission::blank_draft()))
}

/// Validate a submission; nothing is stored
pub async fn submit_project(request: web::Json<ProjectSubmission>) -> ActixResult<HttpResponse> {
    let draft = request.into_inner();

    match submission::submit(&draft) {
        Ok(receipt) => Ok(HttpResponse::Accepted().json(receipt)),
        Err(CatalogError::ValidationFailed { missing }) => {
            info!("Project submission missing fields: {}", missing.join(", "));
            Ok(HttpResponse::UnprocessableEntity().json(SubmissionRejected {
                error: "Missing Information".to_string(),
                description: submission::MISSING_FIELDS_MESSAGE.to_string(),
                missing_fields: missing,
                draft,
            }))
        }
        Err(e) => Ok(catalog_error_response(&e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use catalog::RecordStore;
    use shared_types::{Category, SubmissionReceipt};
    use std::sync::Arc;

    #[actix_web::test]
    async fn test_valid_submission_is_accepted() {
        let store = Arc::new(RecordStore::seeded());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store.clone()))
                .configure(crate::configure_routes),
        )
        .await;

        let mut draft = ProjectSubmission::new("2025");
        draft.title = "Campus Compost Tracker".to_string();
        draft.short_description = "Tracks compost bins across campus.".to_string();
        draft.category = Some(Category::Environment);

        let req = test::TestRequest::post()
            .uri("/api/upload")
            .set_json(&draft)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::ACCEPTED);

        let receipt: SubmissionReceipt = test::read_body_json(resp).await;
        assert_eq!(receipt.title, "Campus Compost Tracker");
        assert_eq!(receipt.redirect_to, "/projects");
        assert!(!receipt.persisted);

        // The listing is unchanged
        let req = test::TestRequest::get().uri("/api/projects").to_request();
        let listing: shared_types::ProjectsResponse =
            test::call_and_read_body_json(&app, req).await;
        assert_eq!(listing.total_count, 6);
        assert_eq!(store.len(), 6);
    }

    #[actix_web::test]
    async fn test_empty_title_is_rejected_with_draft() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Arc::new(RecordStore::seeded())))
                .configure(crate::configure_routes),
        )
        .await;

        let mut draft = ProjectSubmission::new("2025");
        draft.short_description = "No title yet".to_string();
        draft.category = Some(Category::Other);
        draft.add_technology("Rust");

        let req = test::TestRequest::post()
            .uri("/api/upload")
            .set_json(&draft)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let rejected: SubmissionRejected = test::read_body_json(resp).await;
        assert_eq!(rejected.missing_fields, vec!["title"]);
        assert_eq!(rejected.draft, draft);
    }

    #[actix_web::test]
    async fn test_unselected_category_is_reported_as_missing() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Arc::new(RecordStore::seeded())))
                .configure(crate::configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/upload")
            .insert_header(("content-type", "application/json"))
            .set_payload(
                r#"{
                    "title": "Campus Compost Tracker",
                    "short_description": "Tracks compost bins across campus.",
                    "category": "",
                    "team": [{"name": "Ada Lovelace", "email": "ada@example.com"}],
                    "technologies": ["Rust"]
                }"#,
            )
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let rejected: SubmissionRejected = test::read_body_json(resp).await;
        assert_eq!(rejected.error, "Missing Information");
        assert_eq!(rejected.missing_fields, vec!["category"]);
        assert_eq!(rejected.draft.title, "Campus Compost Tracker");
        assert!(rejected.draft.category.is_none());
        assert_eq!(rejected.draft.team[0].email.as_deref(), Some("ada@example.com"));
        assert_eq!(rejected.draft.technologies, vec!["Rust"]);
    }

    #[actix_web::test]
    async fn test_blank_form_defaults() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Arc::new(RecordStore::seeded())))
                .configure(crate::configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/upload").to_request();
        let draft: ProjectSubmission = test::call_and_read_body_json(&app, req).await;
        assert_eq!(draft.year.len(), 4);
        assert_eq!(draft.team.len(), 1);
        assert!(draft.category.is_none());
    }
}
