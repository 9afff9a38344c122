use shared_types::{Category, InvestmentStatus, ListProjectsRequest, ListingOutcome, ProjectRecord};
use std::fmt;
use std::str::FromStr;

use crate::error::{CatalogError, Result};
use crate::store::RecordStore;

/// Filter value sent by the listing UI to mean "no constraint"
pub const ALL_SENTINEL: &str = "all";

/// Constraint on one categorical field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: PartialEq> Selection<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(expected) => expected == value,
        }
    }
}

impl<T> Selection<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    /// Missing, empty and `"all"` all mean no constraint
    pub fn parse(raw: Option<&str>) -> Result<Self> {
        match raw {
            None | Some("") | Some(ALL_SENTINEL) => Ok(Selection::All),
            Some(value) => value
                .parse()
                .map(Selection::Only)
                .map_err(|e: T::Err| CatalogError::InvalidFilter(e.to_string())),
        }
    }
}

/// Search text plus the three categorical filters of the project listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    pub year: Selection<String>,
    pub category: Selection<Category>,
    pub status: Selection<InvestmentStatus>,
}

impl FilterState {
    pub fn from_request(request: &ListProjectsRequest) -> Result<Self> {
        Ok(Self {
            query: request.q.clone().unwrap_or_default(),
            year: Selection::parse(request.year.as_deref())?,
            category: Selection::parse(request.category.as_deref())?,
            status: Selection::parse(request.status.as_deref())?,
        })
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = Selection::Only(year.into());
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Selection::Only(category);
        self
    }

    pub fn with_status(mut self, status: InvestmentStatus) -> Self {
        self.status = Selection::Only(status);
        self
    }

    /// Whether `record` passes every filter
    pub fn matches(&self, record: &ProjectRecord) -> bool {
        self.matches_with_needle(&self.query.to_lowercase(), record)
    }

    fn matches_with_needle(&self, needle: &str, record: &ProjectRecord) -> bool {
        text_matches(needle, record)
            && self.year.admits(&record.year)
            && self.category.admits(&record.category)
            && self.status.admits(&record.investment_status)
    }

    /// Matching records in store order
    pub fn apply<'a>(&self, store: &'a RecordStore) -> FilterOutcome<'a> {
        if store.is_empty() {
            return FilterOutcome::EmptyStore;
        }

        let needle = self.query.to_lowercase();
        let matched: Vec<&ProjectRecord> = store
            .records()
            .iter()
            .filter(|record| self.matches_with_needle(&needle, record))
            .collect();

        if matched.is_empty() {
            FilterOutcome::NoMatches
        } else {
            FilterOutcome::Matches(matched)
        }
    }
}

// Case-insensitive substring search over title, short description and technologies.
// `needle` must already be lowercased.
fn text_matches(needle: &str, record: &ProjectRecord) -> bool {
    if needle.is_empty() {
        return true;
    }

    record.title.to_lowercase().contains(needle)
        || record.short_description.to_lowercase().contains(needle)
        || record
            .technologies
            .iter()
            .any(|tech| tech.to_lowercase().contains(needle))
}

/// Result of running a [`FilterState`] against a store
#[derive(Debug, Clone, PartialEq)]
pub enum FilterOutcome<'a> {
    Matches(Vec<&'a ProjectRecord>),
    /// The store has records but none passed the filters
    NoMatches,
    /// The store itself holds no records
    EmptyStore,
}

impl<'a> FilterOutcome<'a> {
    pub fn records(&self) -> &[&'a ProjectRecord] {
        match self {
            FilterOutcome::Matches(records) => records,
            FilterOutcome::NoMatches | FilterOutcome::EmptyStore => &[],
        }
    }

    pub fn listing_outcome(&self) -> ListingOutcome {
        match self {
            FilterOutcome::Matches(_) => ListingOutcome::Matches,
            FilterOutcome::NoMatches => ListingOutcome::NoMatches,
            FilterOutcome::EmptyStore => ListingOutcome::EmptyCatalog,
        }
    }
}
