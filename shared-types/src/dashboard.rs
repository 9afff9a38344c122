use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::InvestmentStatus;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DashboardStats {
    pub total_projects: u32,
    pub open_for_investment: u32,
    pub open_percentage: u32,
    pub total_views: u32,
    pub avg_views_per_project: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RecentProject {
    pub id: u32,
    pub title: String,
    pub views: u32,
    pub status: InvestmentStatus,
    pub status_label: String,
    /// ISO `YYYY-MM-DD`
    pub date: String,
}

/// Number of projects aligned with one UN Sustainable Development Goal
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SdgAlignment {
    pub goal: String,
    pub projects: u32,
    pub share_percent: f64,
}

/// Admin dashboard payload
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DashboardResponse {
    pub stats: DashboardStats,
    pub recent_projects: Vec<RecentProject>,
    pub sdg_alignment: Vec<SdgAlignment>,
}
