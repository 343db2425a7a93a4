use crate::error::CriteriaError;
use crate::filter::accessor::{ListingFields, TextField};
use crate::filter::proximity::is_near;
use crate::models::Coordinate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Filter inputs for a listing page.
///
/// Every field is optional; an absent or empty field does not constrain the
/// result. A listing passes only when every active field holds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Substring of the job title or service type
    #[serde(default)]
    pub title: Option<String>,
    /// Substring of the company name
    #[serde(default)]
    pub category: Option<String>,
    /// Raw `min-max` range for salary or cost
    #[serde(default)]
    pub range: Option<String>,
    /// Availability, compared case-insensitively
    #[serde(default)]
    pub status: Option<String>,
    /// Point the listing must be near
    #[serde(default)]
    pub location: Option<Coordinate>,
}

/// The discrete text inputs of the filter form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CriteriaField {
    Title,
    Category,
    Range,
    Status,
}

impl FromStr for CriteriaField {
    type Err = CriteriaError;

    /// Accepts the input names used by both listing pages.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "title" | "jobTitle" | "serviceName" => Ok(CriteriaField::Title),
            "category" | "company" => Ok(CriteriaField::Category),
            "range" | "salaryRange" | "priceRange" => Ok(CriteriaField::Range),
            "status" | "availability" => Ok(CriteriaField::Status),
            other => Err(CriteriaError::UnknownField(other.to_string())),
        }
    }
}

fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.set(CriteriaField::Title, title);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.set(CriteriaField::Category, category);
        self
    }

    pub fn with_range(mut self, range: impl Into<String>) -> Self {
        self.set(CriteriaField::Range, range);
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.set(CriteriaField::Status, status);
        self
    }

    pub fn with_location(mut self, location: Coordinate) -> Self {
        self.location = Some(location);
        self
    }

    /// Update one text field. An empty value clears it.
    pub fn set(&mut self, field: CriteriaField, value: impl Into<String>) {
        let value = value.into();
        let value = (!value.is_empty()).then_some(value);
        match field {
            CriteriaField::Title => self.title = value,
            CriteriaField::Category => self.category = value,
            CriteriaField::Range => self.range = value,
            CriteriaField::Status => self.status = value,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.predicates().is_empty()
    }

    /// Build the predicate for each non-empty field.
    pub fn predicates(&self) -> Vec<Predicate> {
        let mut predicates = Vec::new();

        if let Some(category) = active(&self.category) {
            predicates.push(Predicate::contains(TextField::Category, category));
        }
        if let Some(range) = active(&self.range) {
            predicates.push(Predicate::Range(RangeSpec::parse(range)));
        }
        if let Some(status) = active(&self.status) {
            predicates.push(Predicate::Status(status.to_lowercase()));
        }
        if let Some(location) = self.location {
            predicates.push(Predicate::Near(location));
        }
        if let Some(title) = active(&self.title) {
            predicates.push(Predicate::contains(TextField::Title, title));
        }

        predicates
    }

    /// Opt-in check a host can run before filtering.
    ///
    /// Filtering itself never fails: a malformed range simply matches nothing.
    pub fn validate(&self) -> Result<(), CriteriaError> {
        let Some(raw) = active(&self.range) else {
            return Ok(());
        };

        let spec = RangeSpec::parse(raw);
        if !spec.is_well_formed() {
            return Err(CriteriaError::MalformedRange { raw: raw.to_string() });
        }
        if spec.min > spec.max {
            return Err(CriteriaError::InvertedRange {
                raw: raw.to_string(),
                min: spec.min,
                max: spec.max,
            });
        }
        Ok(())
    }
}

/// Inclusive numeric range parsed from `min-max` text.
///
/// Bounds that do not read as finite numbers (including `inf` and `nan`) are
/// kept as NaN, which fails every comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeSpec {
    pub min: f64,
    pub max: f64,
}

impl RangeSpec {
    /// Split on `-` and read the first two pieces. An empty piece reads as 0,
    /// a missing upper bound as NaN.
    pub fn parse(raw: &str) -> Self {
        let mut pieces = raw.split('-');
        let min = pieces.next().map_or(f64::NAN, read_bound);
        let max = pieces.next().map_or(f64::NAN, read_bound);
        Self { min, max }
    }

    pub fn is_well_formed(&self) -> bool {
        !self.min.is_nan() && !self.max.is_nan()
    }

    pub fn contains(&self, amount: f64) -> bool {
        self.min <= amount && amount <= self.max
    }
}

fn read_bound(piece: &str) -> f64 {
    let piece = piece.trim();
    if piece.is_empty() {
        return 0.0;
    }
    piece
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .unwrap_or(f64::NAN)
}

/// A single yes/no test derived from one criteria field
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Case-insensitive containment; the needle is stored lower-cased
    Contains { field: TextField, needle: String },
    Range(RangeSpec),
    /// Exact status match; stored lower-cased
    Status(String),
    Near(Coordinate),
}

impl Predicate {
    fn contains(field: TextField, needle: &str) -> Self {
        Predicate::Contains {
            field,
            needle: needle.to_lowercase(),
        }
    }

    pub fn matches<T: ListingFields + ?Sized>(&self, listing: &T) -> bool {
        match self {
            Predicate::Contains { field, needle } => {
                let haystack = listing.text(*field);
                !haystack.is_empty() && haystack.to_lowercase().contains(needle.as_str())
            }
            Predicate::Range(spec) => listing.amount().is_some_and(|amount| spec.contains(amount)),
            Predicate::Status(wanted) => listing
                .status()
                .is_some_and(|status| status.label().to_lowercase() == *wanted),
            Predicate::Near(target) => listing
                .coordinate()
                .is_some_and(|position| is_near(position, *target)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_reads_both_bounds() {
        assert_eq!(RangeSpec::parse("51-100"), RangeSpec { min: 51.0, max: 100.0 });
        assert_eq!(RangeSpec::parse(" 0 - 50 "), RangeSpec { min: 0.0, max: 50.0 });
    }

    #[test]
    fn range_with_empty_min_starts_at_zero() {
        let spec = RangeSpec::parse("-100");
        assert_eq!(spec.min, 0.0);
        assert_eq!(spec.max, 100.0);
        assert!(spec.contains(0.0));
    }

    #[test]
    fn malformed_range_matches_nothing() {
        for raw in ["abc-100", "100", "10-xyz", "0-inf", "0-infinity", "inf-inf", "nan-10"] {
            let spec = RangeSpec::parse(raw);
            assert!(!spec.is_well_formed(), "{raw}");
            assert!(!spec.contains(50.0), "{raw}");
        }
    }

    #[test]
    fn extra_pieces_are_ignored() {
        assert_eq!(RangeSpec::parse("10-20-30"), RangeSpec { min: 10.0, max: 20.0 });
    }

    #[test]
    fn empty_values_clear_fields() {
        let mut criteria = FilterCriteria::new().with_title("chef").with_status("available");
        criteria.set(CriteriaField::Title, "");
        assert_eq!(criteria.title, None);
        assert_eq!(criteria.predicates().len(), 1);

        criteria.reset();
        assert!(criteria.is_empty());
        assert_eq!(criteria, FilterCriteria::default());
    }

    #[test]
    fn explicit_empty_strings_are_inactive() {
        let criteria = FilterCriteria {
            title: Some(String::new()),
            range: Some(String::new()),
            ..FilterCriteria::default()
        };
        assert!(criteria.is_empty());
    }

    #[test]
    fn form_input_names_map_to_fields() {
        assert_eq!("jobTitle".parse::<CriteriaField>(), Ok(CriteriaField::Title));
        assert_eq!("serviceName".parse::<CriteriaField>(), Ok(CriteriaField::Title));
        assert_eq!("company".parse::<CriteriaField>(), Ok(CriteriaField::Category));
        assert_eq!("salaryRange".parse::<CriteriaField>(), Ok(CriteriaField::Range));
        assert_eq!("priceRange".parse::<CriteriaField>(), Ok(CriteriaField::Range));
        assert_eq!("availability".parse::<CriteriaField>(), Ok(CriteriaField::Status));
        assert_eq!(
            "zip".parse::<CriteriaField>(),
            Err(CriteriaError::UnknownField("zip".to_string()))
        );
    }

    #[test]
    fn validate_flags_bad_ranges_only() {
        assert_eq!(FilterCriteria::new().validate(), Ok(()));
        assert_eq!(FilterCriteria::new().with_range("51-100").validate(), Ok(()));
        assert_eq!(
            FilterCriteria::new().with_range("abc-100").validate(),
            Err(CriteriaError::MalformedRange { raw: "abc-100".to_string() })
        );
        for raw in ["0-inf", "0-Infinity", "inf-inf"] {
            assert_eq!(
                FilterCriteria::new().with_range(raw).validate(),
                Err(CriteriaError::MalformedRange { raw: raw.to_string() })
            );
        }
        assert!(matches!(
            FilterCriteria::new().with_range("200-100").validate(),
            Err(CriteriaError::InvertedRange { .. })
        ));
    }
}
