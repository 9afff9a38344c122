use serde::{Deserialize, Serialize};

pub mod dashboard;
pub mod landing;
pub mod project;
pub mod submission;

pub use dashboard::{DashboardResponse, DashboardStats, RecentProject, SdgAlignment};
pub use landing::{Feature, LandingResponse, NavLink};
pub use project::{
    Category, FilterOption, FilterOptionsResponse, InvestmentOpportunity, InvestmentStatus,
    ListProjectsRequest, ListingOutcome, ProjectCard, ProjectDetail, ProjectRecord,
    ProjectsResponse, StatusPresentation, TeamMember, TeamMemberView,
};
pub use submission::{ProjectSubmission, SubmissionReceipt, SubmissionRejected};

/// Error response for API endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response for the health endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub projects_loaded: usize,
}
