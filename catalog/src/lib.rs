//! Catalog Crate
//!
//! In-memory catalog of student capstone projects: the record store, the
//! listing filter, the status badge map, detail lookup and submission
//! validation. Everything here is synchronous and free of I/O once the store
//! has been built.
//!
//! # Architecture
//!
//! - **Types**: Wire types are defined in the `shared-types` crate
//! - **Logic**: Filtering, projections and validation live in this crate
//!
//! # Example
//!
//! ```rust,ignore
//! use catalog::{FilterState, RecordStore};
//!
//! let store = RecordStore::seeded();
//! let state = FilterState::default().with_query("python");
//! let outcome = state.apply(&store);
//! ```

pub mod dashboard;
pub mod error;
pub mod filter;
pub mod landing;
pub mod seed;
pub mod status;
pub mod store;
pub mod submission;
pub mod views;

pub use error::{CatalogError, Result};
pub use filter::{FilterOutcome, FilterState, Selection};
pub use store::RecordStore;
