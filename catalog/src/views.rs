use shared_types::{
    Category, FilterOption, FilterOptionsResponse, InvestmentOpportunity, InvestmentStatus,
    ProjectCard, ProjectDetail, ProjectRecord, ProjectsResponse, TeamMemberView,
};

use crate::filter::{FilterOutcome, FilterState, ALL_SENTINEL};
use crate::status;
use crate::store::RecordStore;

/// Technologies shown on a card before collapsing into a "+N" badge
pub const CARD_TECHNOLOGY_LIMIT: usize = 3;

/// Years offered by the listing filter, newest first
pub const FILTER_YEARS: [&str; 3] = ["2024", "2023", "2022"];

pub const NO_MATCHES_MESSAGE: &str =
    "No projects found matching your criteria. Try adjusting your filters.";
pub const EMPTY_CATALOG_MESSAGE: &str = "No projects have been published yet.";

pub fn team_label(size: usize) -> String {
    if size == 1 {
        "1 team member".to_string()
    } else {
        format!("{} team members", size)
    }
}

pub fn card(record: &ProjectRecord) -> ProjectCard {
    let shown: Vec<String> = record
        .technologies
        .iter()
        .take(CARD_TECHNOLOGY_LIMIT)
        .cloned()
        .collect();

    ProjectCard {
        id: record.id.clone(),
        title: record.title.clone(),
        short_description: record.short_description.clone(),
        year: record.year.clone(),
        category: record.category,
        status: status::presentation(record.investment_status),
        team_size: record.team.len(),
        team_label: team_label(record.team.len()),
        more_technologies: record.technologies.len() - shown.len(),
        technologies: shown,
    }
}

pub fn detail(record: &ProjectRecord) -> ProjectDetail {
    // Only projects still raising money get the call to action
    let investment_opportunity = match record.investment_status {
        InvestmentStatus::Open => Some(InvestmentOpportunity {
            headline: "Investment Opportunity".to_string(),
            message: "This project is open for investment. Contact the team to discuss opportunities.".to_string(),
            call_to_action: "Express Interest".to_string(),
        }),
        InvestmentStatus::Closed | InvestmentStatus::Funded => None,
    };

    ProjectDetail {
        id: record.id.clone(),
        title: record.title.clone(),
        short_description: record.short_description.clone(),
        detailed_description: record.detailed_description.clone(),
        year: record.year.clone(),
        category: record.category,
        status: status::presentation(record.investment_status),
        team: record
            .team
            .iter()
            .map(|member| TeamMemberView {
                name: member.name.clone(),
                email: member.email.clone(),
                avatar: member.resolved_avatar(),
            })
            .collect(),
        supervisor: record.supervisor.clone(),
        technologies: record.technologies.clone(),
        investment_opportunity,
    }
}

/// Run the filters and build the listing response
pub fn listing(store: &RecordStore, state: &FilterState) -> ProjectsResponse {
    let outcome = state.apply(store);
    let projects: Vec<ProjectCard> = outcome.records().iter().map(|r| card(r)).collect();

    let message = match &outcome {
        FilterOutcome::Matches(_) => None,
        FilterOutcome::NoMatches => Some(NO_MATCHES_MESSAGE.to_string()),
        FilterOutcome::EmptyStore => Some(EMPTY_CATALOG_MESSAGE.to_string()),
    };

    ProjectsResponse {
        outcome: outcome.listing_outcome(),
        shown_count: projects.len(),
        total_count: store.len(),
        projects,
        message,
    }
}

pub fn filter_options() -> FilterOptionsResponse {
    let all = |label: &str| FilterOption {
        value: ALL_SENTINEL.to_string(),
        label: label.to_string(),
    };

    let mut years = vec![all("All Years")];
    years.extend(FILTER_YEARS.iter().map(|year| FilterOption {
        value: year.to_string(),
        label: year.to_string(),
    }));

    let mut categories = vec![all("All Categories")];
    categories.extend(Category::ALL.iter().map(|category| FilterOption {
        value: category.as_str().to_string(),
        label: category.as_str().to_string(),
    }));

    let mut statuses = vec![all("All Status")];
    statuses.extend(InvestmentStatus::ALL.iter().map(|s| FilterOption {
        value: s.as_str().to_string(),
        label: status::label(*s).to_string(),
    }));

    FilterOptionsResponse {
        years,
        categories,
        statuses,
    }
}
