//! Matching core of the Chamba marketplace client.
//!
//! Two small rule engines live here: the listing filter shared by the job and
//! service pages (text, range, availability and proximity predicates) and the
//! keyword-priority dispatcher behind the support assistant. Listing sources
//! and the coordinate provider are injected collaborators.

pub mod assistant;
pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod sources;

pub use assistant::{Assistant, DialogueDispatcher, Intent, IntentRule, IntentRuleTable};
pub use config::AppConfig;
pub use error::{AssistantError, ConfigError, CriteriaError, SourceError};
pub use filter::{CriteriaField, CriteriaStore, FilterCriteria, FilterEngine, ListingBoard, ListingFields};
pub use models::{Coordinate, Job, Listing, ListingKind, ListingStatus, LocationSelection, Service};
