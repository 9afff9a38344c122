use chrono::Datelike;
use shared_types::{ProjectSubmission, SubmissionReceipt};
use tracing::info;
use uuid::Uuid;

use crate::error::{CatalogError, Result};

pub const SUCCESS_MESSAGE: &str =
    "Your project has been successfully uploaded and will be reviewed shortly.";
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all required fields.";
pub const REDIRECT_PATH: &str = "/projects";

/// Blank form pre-filled with the current calendar year
pub fn blank_draft() -> ProjectSubmission {
    ProjectSubmission::new(chrono::Local::now().year().to_string())
}

/// Names of required fields that are empty, in form order
///
/// Only an empty string counts as missing; whitespace is kept as typed.
pub fn missing_fields(draft: &ProjectSubmission) -> Vec<String> {
    let mut missing = Vec::new();
    if draft.title.is_empty() {
        missing.push("title".to_string());
    }
    if draft.short_description.is_empty() {
        missing.push("short_description".to_string());
    }
    if draft.category.is_none() {
        missing.push("category".to_string());
    }
    missing
}

pub fn validate(draft: &ProjectSubmission) -> Result<()> {
    let missing = missing_fields(draft);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(CatalogError::ValidationFailed { missing })
    }
}

/// Validate a draft and acknowledge it
///
/// Nothing is written anywhere: the catalog store stays as it was, and the
/// receipt says so with `persisted: false`.
pub fn submit(draft: &ProjectSubmission) -> Result<SubmissionReceipt> {
    validate(draft)?;

    let receipt = SubmissionReceipt {
        submission_id: Uuid::new_v4(),
        title: draft.title.clone(),
        message: SUCCESS_MESSAGE.to_string(),
        redirect_to: REDIRECT_PATH.to_string(),
        persisted: false,
    };

    info!(
        "Accepted project submission {} ({})",
        receipt.submission_id, receipt.title
    );

    Ok(receipt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::Category;

    fn complete_draft() -> ProjectSubmission {
        let mut draft = ProjectSubmission::new("2025");
        draft.title = "Solar Drone Mapper".to_string();
        draft.short_description = "Maps rooftops for solar potential.".to_string();
        draft.category = Some(Category::Environment);
        draft
    }

    #[test]
    fn test_complete_draft_is_accepted() {
        let receipt = submit(&complete_draft()).unwrap();
        assert_eq!(receipt.title, "Solar Drone Mapper");
        assert_eq!(receipt.message, SUCCESS_MESSAGE);
        assert_eq!(receipt.redirect_to, "/projects");
        assert!(!receipt.persisted);
    }

    #[test]
    fn test_empty_title_blocks_submission() {
        let mut draft = complete_draft();
        draft.title.clear();
        let before = draft.clone();

        match submit(&draft) {
            Err(CatalogError::ValidationFailed { missing }) => {
                assert_eq!(missing, vec!["title"]);
            }
            other => panic!("Expected ValidationFailed, got {:?}", other),
        }
        assert_eq!(draft, before);
    }

    #[test]
    fn test_all_missing_fields_are_reported() {
        let draft = ProjectSubmission::new("2025");
        assert_eq!(
            missing_fields(&draft),
            vec!["title", "short_description", "category"]
        );
    }

    #[test]
    fn test_whitespace_only_title_is_accepted() {
        let mut draft = complete_draft();
        draft.title = "   ".to_string();
        draft.short_description = " ".to_string();
        assert!(missing_fields(&draft).is_empty());

        let receipt = submit(&draft).unwrap();
        assert_eq!(receipt.title, "   ");
    }

    #[test]
    fn test_receipt_title_is_kept_as_entered() {
        let mut draft = complete_draft();
        draft.title = "  Solar Drone Mapper ".to_string();
        let receipt = submit(&draft).unwrap();
        assert_eq!(receipt.title, "  Solar Drone Mapper ");
    }

    #[test]
    fn test_optional_fields_may_be_empty() {
        let mut draft = complete_draft();
        draft.year.clear();
        draft.team.clear();
        draft.supervisor.clear();
        assert!(validate(&draft).is_ok());
    }

    #[test]
    fn test_blank_draft_uses_current_year() {
        let draft = blank_draft();
        assert_eq!(draft.year, chrono::Local::now().year().to_string());
    }

    #[test]
    fn test_submission_does_not_touch_the_store() {
        let store = crate::RecordStore::seeded();
        submit(&complete_draft()).unwrap();
        assert_eq!(store.len(), 6);
        assert!(store.find("7").is_err());
    }
}
