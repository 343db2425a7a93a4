//! Listing filter: criteria, predicates and the single-pass engine shared by
//! job and service listings.

pub mod accessor;
pub mod criteria;
pub mod engine;
pub mod proximity;
pub mod store;

pub use accessor::{ListingFields, TextField};
pub use criteria::{CriteriaField, FilterCriteria, Predicate, RangeSpec};
pub use engine::FilterEngine;
pub use proximity::{is_near, planar_distance, PROXIMITY_THRESHOLD};
pub use store::{CriteriaStore, ListingBoard};
