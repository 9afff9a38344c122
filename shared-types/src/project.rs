use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

/// Project category
///
/// Single authoritative list shared by the listing filters and the
/// submission form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Category {
    Healthcare,
    Energy,
    Technology,
    Education,
    Agriculture,
    Robotics,
    Environment,
    Finance,
    Other,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Healthcare,
        Category::Energy,
        Category::Technology,
        Category::Education,
        Category::Agriculture,
        Category::Robotics,
        Category::Environment,
        Category::Finance,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Healthcare => "Healthcare",
            Category::Energy => "Energy",
            Category::Technology => "Technology",
            Category::Education => "Education",
            Category::Agriculture => "Agriculture",
            Category::Robotics => "Robotics",
            Category::Environment => "Environment",
            Category::Finance => "Finance",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}

/// Investment lifecycle tag of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum InvestmentStatus {
    Open,
    Closed,
    Funded,
}

impl InvestmentStatus {
    // Order offered by the listing filter
    pub const ALL: [InvestmentStatus; 3] = [
        InvestmentStatus::Open,
        InvestmentStatus::Funded,
        InvestmentStatus::Closed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InvestmentStatus::Open => "open",
            InvestmentStatus::Closed => "closed",
            InvestmentStatus::Funded => "funded",
        }
    }
}

impl Default for InvestmentStatus {
    fn default() -> Self {
        InvestmentStatus::Closed
    }
}

impl fmt::Display for InvestmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InvestmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(InvestmentStatus::Open),
            "closed" => Ok(InvestmentStatus::Closed),
            "funded" => Ok(InvestmentStatus::Funded),
            _ => Err(format!("Unknown investment status: {}", s)),
        }
    }
}

/// Member of a project team
///
/// Views that only need names use [`ProjectRecord::team_names`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TeamMember {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl TeamMember {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
            avatar: None,
        }
    }

    /// Uppercase initials of each word in the name, e.g. "Sarah Johnson" -> "SJ"
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// Explicit avatar when one is set, initials otherwise
    pub fn resolved_avatar(&self) -> String {
        match &self.avatar {
            Some(avatar) if !avatar.trim().is_empty() => avatar.clone(),
            _ => self.initials(),
        }
    }
}

/// Capstone project entry in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProjectRecord {
    pub id: String,
    pub title: String,
    pub short_description: String,
    pub detailed_description: String,
    pub year: String,
    pub team: Vec<TeamMember>,
    pub supervisor: String,
    pub technologies: Vec<String>,
    pub category: Category,
    pub investment_status: InvestmentStatus,
}

impl ProjectRecord {
    pub fn team_names(&self) -> Vec<&str> {
        self.team.iter().map(|m| m.name.as_str()).collect()
    }
}

/// Display label and style class for an investment status badge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StatusPresentation {
    pub status: InvestmentStatus,
    pub label: String,
    pub style_class: String,
}

/// Summary card shown in the project listing
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProjectCard {
    pub id: String,
    pub title: String,
    pub short_description: String,
    pub year: String,
    pub category: Category,
    pub status: StatusPresentation,
    pub team_size: usize,
    pub team_label: String,
    pub technologies: Vec<String>,
    pub more_technologies: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TeamMemberView {
    pub name: String,
    pub email: Option<String>,
    pub avatar: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InvestmentOpportunity {
    pub headline: String,
    pub message: String,
    pub call_to_action: String,
}

/// Full project page
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProjectDetail {
    pub id: String,
    pub title: String,
    pub short_description: String,
    pub detailed_description: String,
    pub year: String,
    pub category: Category,
    pub status: StatusPresentation,
    pub team: Vec<TeamMemberView>,
    pub supervisor: String,
    pub technologies: Vec<String>,
    pub investment_opportunity: Option<InvestmentOpportunity>,
}

/// How a listing query resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum ListingOutcome {
    Matches,
    NoMatches,
    EmptyCatalog,
}

/// Raw listing query parameters; `"all"` or a missing value means no constraint
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ListProjectsRequest {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Response containing the filtered project cards
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProjectsResponse {
    pub outcome: ListingOutcome,
    pub projects: Vec<ProjectCard>,
    pub shown_count: usize,
    pub total_count: usize,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

/// Values offered by the listing filters
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FilterOptionsResponse {
    pub years: Vec<FilterOption>,
    pub categories: Vec<FilterOption>,
    pub statuses: Vec<FilterOption>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serialization() {
        let json = serde_json::to_string(&Category::Healthcare).unwrap();
        assert_eq!(json, "\"Healthcare\"");

        let parsed: Category = serde_json::from_str("\"Robotics\"").unwrap();
        assert_eq!(parsed, Category::Robotics);
    }

    #[test]
    fn test_category_from_str_matches_serde_names() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json.trim_matches('"'), category.as_str());
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
        assert!("healthcare".parse::<Category>().is_err());
    }

    #[test]
    fn test_investment_status_serialization() {
        let json = serde_json::to_string(&InvestmentStatus::Funded).unwrap();
        assert_eq!(json, "\"funded\"");
        assert_eq!(
            "open".parse::<InvestmentStatus>().unwrap(),
            InvestmentStatus::Open
        );
        assert!("pending".parse::<InvestmentStatus>().is_err());
    }

    #[test]
    fn test_team_member_initials() {
        let member = TeamMember::named("Sarah Johnson");
        assert_eq!(member.initials(), "SJ");
        assert_eq!(member.resolved_avatar(), "SJ");

        let with_avatar = TeamMember {
            avatar: Some("https://example.com/a.png".to_string()),
            ..TeamMember::named("Mike Chen")
        };
        assert_eq!(with_avatar.resolved_avatar(), "https://example.com/a.png");
    }

    #[test]
    fn test_team_member_deserializes_without_optional_fields() {
        let member: TeamMember = serde_json::from_str(r#"{"name":"Lisa Wang"}"#).unwrap();
        assert_eq!(member, TeamMember::named("Lisa Wang"));
    }
}
