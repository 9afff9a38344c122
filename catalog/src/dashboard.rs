//! Admin dashboard figures.
//!
//! These are fixed showcase numbers; they are not computed from the record
//! store.

use shared_types::{
    DashboardResponse, DashboardStats, InvestmentStatus, RecentProject, SdgAlignment,
};

use crate::status;

const TOTAL_PROJECTS: u32 = 47;
const OPEN_FOR_INVESTMENT: u32 = 18;
const TOTAL_VIEWS: u32 = 1243;
const AVG_VIEWS_PER_PROJECT: u32 = 26;

// (id, title, views, status, date)
const RECENT_PROJECTS: [(u32, &str, u32, InvestmentStatus, &str); 5] = [
    (1, "AI-Powered Healthcare Assistant", 87, InvestmentStatus::Open, "2024-03-15"),
    (2, "Smart Energy Grid Optimizer", 64, InvestmentStatus::Open, "2024-03-14"),
    (3, "Educational VR Platform", 52, InvestmentStatus::Open, "2024-03-13"),
    (4, "Autonomous Delivery Robot", 41, InvestmentStatus::Open, "2024-03-12"),
    (5, "Blockchain Supply Chain", 38, InvestmentStatus::Funded, "2024-03-10"),
];

const SDG_ALIGNMENT: [(&str, u32); 5] = [
    ("SDG 4: Quality Education", 12),
    ("SDG 8: Decent Work", 8),
    ("SDG 9: Industry & Innovation", 15),
    ("SDG 12: Responsible Consumption", 7),
    ("SDG 17: Partnerships", 5),
];

/// Whole-number percentage, rounded half away from zero
pub fn percent_of(part: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (f64::from(part) / f64::from(total) * 100.0).round() as u32
}

fn share_percent(part: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (f64::from(part) / f64::from(total) * 1000.0).round() / 10.0
}

pub fn dashboard() -> DashboardResponse {
    let stats = DashboardStats {
        total_projects: TOTAL_PROJECTS,
        open_for_investment: OPEN_FOR_INVESTMENT,
        open_percentage: percent_of(OPEN_FOR_INVESTMENT, TOTAL_PROJECTS),
        total_views: TOTAL_VIEWS,
        avg_views_per_project: AVG_VIEWS_PER_PROJECT,
    };

    let recent_projects = RECENT_PROJECTS
        .iter()
        .map(|&(id, title, views, status, date)| RecentProject {
            id,
            title: title.to_string(),
            views,
            status,
            status_label: status::short_label(status).to_string(),
            date: date.to_string(),
        })
        .collect();

    let sdg_alignment = SDG_ALIGNMENT
        .iter()
        .map(|&(goal, projects)| SdgAlignment {
            goal: goal.to_string(),
            projects,
            share_percent: share_percent(projects, TOTAL_PROJECTS),
        })
        .collect();

    DashboardResponse {
        stats,
        recent_projects,
        sdg_alignment,
    }
}
