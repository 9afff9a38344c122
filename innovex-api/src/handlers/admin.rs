use actix_web::{HttpResponse, Result as ActixResult};
use catalog::dashboard;

pub async fn get_dashboard() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(dashboard::dashboard()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, web, App};
    use catalog::RecordStore;
    use shared_types::DashboardResponse;
    use std::sync::Arc;

    #[actix_web::test]
    async fn test_dashboard_ignores_store_contents() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Arc::new(RecordStore::empty())))
                .configure(crate::configure_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/dashboard")
            .to_request();
        let dashboard: DashboardResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(dashboard.stats.total_projects, 47);
        assert_eq!(dashboard.recent_projects.len(), 5);
        assert_eq!(dashboard.sdg_alignment.len(), 5);
    }

    #[actix_web::test]
    async fn test_recent_project_dates_are_iso_strings() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Arc::new(RecordStore::seeded())))
                .configure(crate::configure_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/dashboard")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["recent_projects"][0]["date"], "2024-03-15");
        assert_eq!(body["recent_projects"][4]["date"], "2024-03-10");
    }
}
