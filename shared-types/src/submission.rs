use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::{Category, InvestmentStatus, TeamMember};

// The form's category select starts out as "", which means nothing chosen yet
fn blank_category_as_none<'de, D>(deserializer: D) -> Result<Option<Category>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// Candidate project collected by the upload form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProjectSubmission {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub detailed_description: String,
    #[serde(default)]
    pub year: String,
    #[serde(default, deserialize_with = "blank_category_as_none")]
    pub category: Option<Category>,
    #[serde(default)]
    pub investment_status: InvestmentStatus,
    #[serde(default)]
    pub supervisor: String,
    #[serde(default)]
    pub team: Vec<TeamMember>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

impl ProjectSubmission {
    /// Blank form with a single empty team member row
    pub fn new(year: impl Into<String>) -> Self {
        Self {
            title: String::new(),
            short_description: String::new(),
            detailed_description: String::new(),
            year: year.into(),
            category: None,
            investment_status: InvestmentStatus::Closed,
            supervisor: String::new(),
            team: vec![TeamMember::named("")],
            technologies: Vec::new(),
        }
    }

    /// Adds a trimmed technology tag; empty and duplicate tags are ignored
    pub fn add_technology(&mut self, tech: &str) -> bool {
        let tech = tech.trim();
        if tech.is_empty() || self.technologies.iter().any(|t| t == tech) {
            return false;
        }
        self.technologies.push(tech.to_string());
        true
    }

    pub fn remove_technology(&mut self, tech: &str) {
        self.technologies.retain(|t| t != tech);
    }

    pub fn add_team_member(&mut self) {
        self.team.push(TeamMember::named(""));
    }

    /// Removes the row at `index`; the last remaining row is kept
    pub fn remove_team_member(&mut self, index: usize) -> bool {
        if self.team.len() <= 1 || index >= self.team.len() {
            return false;
        }
        self.team.remove(index);
        true
    }
}

/// Returned when a submission passes validation
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubmissionReceipt {
    pub submission_id: Uuid,
    pub title: String,
    pub message: String,
    pub redirect_to: String,
    pub persisted: bool,
}

/// Returned when required fields are missing
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubmissionRejected {
    pub error: String,
    pub description: String,
    pub missing_fields: Vec<String>,
    pub draft: ProjectSubmission,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_draft_defaults() {
        let draft = ProjectSubmission::new("2025");
        assert_eq!(draft.year, "2025");
        assert_eq!(draft.investment_status, InvestmentStatus::Closed);
        assert_eq!(draft.team, vec![TeamMember::named("")]);
        assert!(draft.category.is_none());
    }

    #[test]
    fn test_add_technology_trims_and_deduplicates() {
        let mut draft = ProjectSubmission::new("2025");
        assert!(draft.add_technology("  Rust "));
        assert!(!draft.add_technology("Rust"));
        assert!(!draft.add_technology("   "));
        assert!(draft.add_technology("Python"));
        assert_eq!(draft.technologies, vec!["Rust", "Python"]);

        draft.remove_technology("Rust");
        assert_eq!(draft.technologies, vec!["Python"]);
    }

    #[test]
    fn test_last_team_member_cannot_be_removed() {
        let mut draft = ProjectSubmission::new("2025");
        assert!(!draft.remove_team_member(0));

        draft.add_team_member();
        assert!(!draft.remove_team_member(5));
        assert!(draft.remove_team_member(1));
        assert_eq!(draft.team.len(), 1);
    }

    #[test]
    fn test_submission_deserializes_with_missing_fields() {
        let draft: ProjectSubmission =
            serde_json::from_str(r#"{"title":"Rover","category":"Robotics"}"#).unwrap();
        assert_eq!(draft.title, "Rover");
        assert_eq!(draft.category, Some(Category::Robotics));
        assert_eq!(draft.investment_status, InvestmentStatus::Closed);
        assert!(draft.team.is_empty());
    }

    #[test]
    fn test_blank_category_deserializes_as_none() {
        let draft: ProjectSubmission =
            serde_json::from_str(r#"{"title":"Rover","category":""}"#).unwrap();
        assert!(draft.category.is_none());

        let draft: ProjectSubmission =
            serde_json::from_str(r#"{"title":"Rover","category":null}"#).unwrap();
        assert!(draft.category.is_none());
    }

    #[test]
    fn test_unknown_category_is_still_rejected() {
        let result: Result<ProjectSubmission, _> =
            serde_json::from_str(r#"{"category":"Space"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_team_rows_share_the_record_member_type() {
        let draft: ProjectSubmission = serde_json::from_str(
            r#"{"team":[{"name":"Kevin Zhang","email":"kevin@example.com"}]}"#,
        )
        .unwrap();
        assert_eq!(draft.team[0].name, "Kevin Zhang");
        assert_eq!(draft.team[0].email.as_deref(), Some("kevin@example.com"));
        assert!(draft.team[0].avatar.is_none());
    }
}
