mod de;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of marketplace listing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ListingKind {
    Jobs,
    Services,
}

impl ListingKind {
    /// Read endpoint on the marketplace API
    pub fn endpoint(self) -> &'static str {
        match self {
            ListingKind::Jobs => "/api/jobs",
            ListingKind::Services => "/api/services",
        }
    }
}

impl fmt::Display for ListingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingKind::Jobs => f.write_str("jobs"),
            ListingKind::Services => f.write_str("services"),
        }
    }
}

/// A point on the map, in raw degrees
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Both halves must be present and finite, otherwise the listing has no position.
    pub fn from_parts(lat: Option<f64>, lng: Option<f64>) -> Option<Self> {
        match (lat, lng) {
            (Some(lat), Some(lng)) if lat.is_finite() && lng.is_finite() => Some(Self { lat, lng }),
            _ => None,
        }
    }
}

/// A place picked on the map widget or through address autocomplete
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocationSelection {
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub address: Option<String>,
}

impl LocationSelection {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }
}

impl From<Coordinate> for LocationSelection {
    fn from(coordinate: Coordinate) -> Self {
        Self {
            lat: coordinate.lat,
            lng: coordinate.lng,
            address: None,
        }
    }
}

/// Availability of a job or service
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum ListingStatus {
    Available,
    Unavailable,
}

impl ListingStatus {
    pub fn label(self) -> &'static str {
        match self {
            ListingStatus::Available => "Available",
            ListingStatus::Unavailable => "Unavailable",
        }
    }
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ListingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "available" => Ok(ListingStatus::Available),
            "unavailable" => Ok(ListingStatus::Unavailable),
            other => Err(format!("unknown listing status: {other}")),
        }
    }
}

/// Job offer as returned by the jobs endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Job {
    #[serde(default, deserialize_with = "de::lenient_id")]
    pub id: String,
    #[serde(default, deserialize_with = "de::nullable_string")]
    pub job_title: String,
    #[serde(default, deserialize_with = "de::nullable_string")]
    pub company: String,
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub salary: Option<f64>,
    #[serde(default)]
    pub salary_frequency: Option<String>,
    #[serde(default)]
    pub job_type: Option<String>,
    #[serde(default, deserialize_with = "de::lenient_status")]
    pub status: Option<ListingStatus>,
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub lng: Option<f64>,
    /// Human readable address shown under the title
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "de::nullable_string")]
    pub description: String,
    #[serde(default)]
    pub modalities: Option<String>,
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub rating: Option<f64>,
    #[serde(default)]
    pub user_img: Option<String>,
    #[serde(default, deserialize_with = "de::lenient_opt_id")]
    pub user_id: Option<String>,
}

/// Service offer as returned by the services endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Service {
    #[serde(default, deserialize_with = "de::lenient_id")]
    pub id: String,
    #[serde(default, deserialize_with = "de::nullable_string")]
    pub service_type: String,
    #[serde(default, deserialize_with = "de::nullable_string")]
    pub company: String,
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub cost: Option<f64>,
    #[serde(default, deserialize_with = "de::lenient_status")]
    pub status: Option<ListingStatus>,
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub lng: Option<f64>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "de::nullable_string")]
    pub description: String,
    #[serde(default)]
    pub modalities: Option<String>,
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub rating: Option<f64>,
    #[serde(default)]
    pub user_img: Option<String>,
    #[serde(default, deserialize_with = "de::lenient_opt_id")]
    pub user_id: Option<String>,
}

/// Either kind of listing, for callers that mix both collections
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Listing {
    Job(Job),
    Service(Service),
}

impl Listing {
    pub fn id(&self) -> &str {
        match self {
            Listing::Job(job) => &job.id,
            Listing::Service(service) => &service.id,
        }
    }

    pub fn kind(&self) -> ListingKind {
        match self {
            Listing::Job(_) => ListingKind::Jobs,
            Listing::Service(_) => ListingKind::Services,
        }
    }
}

impl From<Job> for Listing {
    fn from(job: Job) -> Self {
        Listing::Job(job)
    }
}

impl From<Service> for Listing {
    fn from(service: Service) -> Self {
        Listing::Service(service)
    }
}
