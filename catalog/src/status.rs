use shared_types::{InvestmentStatus, StatusPresentation};

pub fn label(status: InvestmentStatus) -> &'static str {
    match status {
        InvestmentStatus::Open => "Open for Investment",
        InvestmentStatus::Closed => "Not Seeking Investment",
        InvestmentStatus::Funded => "Funded",
    }
}

pub fn style_class(status: InvestmentStatus) -> &'static str {
    match status {
        InvestmentStatus::Open => "bg-success text-success-foreground",
        InvestmentStatus::Closed => "bg-muted text-muted-foreground",
        InvestmentStatus::Funded => "bg-primary text-primary-foreground",
    }
}

/// One-word label used in compact tables
pub fn short_label(status: InvestmentStatus) -> &'static str {
    match status {
        InvestmentStatus::Open => "Open",
        InvestmentStatus::Closed => "Closed",
        InvestmentStatus::Funded => "Funded",
    }
}

/// Badge content for a status
pub fn presentation(status: InvestmentStatus) -> StatusPresentation {
    StatusPresentation {
        status,
        label: label(status).to_string(),
        style_class: style_class(status).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_status_has_label_and_style() {
        for status in InvestmentStatus::ALL {
            let badge = presentation(status);
            assert_eq!(badge.status, status);
            assert!(!badge.label.is_empty());
            assert!(!badge.style_class.is_empty());
            assert!(!short_label(status).is_empty());
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(label(InvestmentStatus::Open), "Open for Investment");
        assert_eq!(label(InvestmentStatus::Closed), "Not Seeking Investment");
        assert_eq!(label(InvestmentStatus::Funded), "Funded");
        assert_eq!(
            style_class(InvestmentStatus::Funded),
            "bg-primary text-primary-foreground"
        );
    }

    #[test]
    fn test_labels_are_distinct() {
        let labels: std::collections::HashSet<_> =
            InvestmentStatus::ALL.iter().map(|s| label(*s)).collect();
        assert_eq!(labels.len(), InvestmentStatus::ALL.len());
    }
}
