use crate::models::{Coordinate, Job, Listing, ListingStatus, Service};

/// Text fields a substring criterion can target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    /// Job title or service type
    Title,
    /// Company offering the listing
    Category,
}

/// Maps a listing kind onto the typed fields the filter predicates read.
///
/// Jobs expose their salary as the amount, services their cost. Everything the
/// engine does goes through this trait, so both kinds share one filter.
pub trait ListingFields {
    /// Job title for jobs, service type for services
    fn title(&self) -> &str;

    /// Company offering the listing
    fn category(&self) -> &str;

    /// Salary for jobs, cost for services
    fn amount(&self) -> Option<f64>;

    /// Availability, if the record carries one
    fn status(&self) -> Option<ListingStatus>;

    /// Map position, present only when both lat and lng are
    fn coordinate(&self) -> Option<Coordinate>;

    /// The text field a substring criterion targets
    fn text(&self, field: TextField) -> &str {
        match field {
            TextField::Title => self.title(),
            TextField::Category => self.category(),
        }
    }
}

impl ListingFields for Job {
    fn title(&self) -> &str {
        &self.job_title
    }

    fn category(&self) -> &str {
        &self.company
    }

    fn amount(&self) -> Option<f64> {
        self.salary
    }

    fn status(&self) -> Option<ListingStatus> {
        self.status
    }

    fn coordinate(&self) -> Option<Coordinate> {
        Coordinate::from_parts(self.lat, self.lng)
    }
}

impl ListingFields for Service {
    fn title(&self) -> &str {
        &self.service_type
    }

    fn category(&self) -> &str {
        &self.company
    }

    fn amount(&self) -> Option<f64> {
        self.cost
    }

    fn status(&self) -> Option<ListingStatus> {
        self.status
    }

    fn coordinate(&self) -> Option<Coordinate> {
        Coordinate::from_parts(self.lat, self.lng)
    }
}

impl ListingFields for Listing {
    fn title(&self) -> &str {
        match self {
            Listing::Job(job) => job.title(),
            Listing::Service(service) => service.title(),
        }
    }

    fn category(&self) -> &str {
        match self {
            Listing::Job(job) => job.category(),
            Listing::Service(service) => service.category(),
        }
    }

    fn amount(&self) -> Option<f64> {
        match self {
            Listing::Job(job) => job.amount(),
            Listing::Service(service) => service.amount(),
        }
    }

    fn status(&self) -> Option<ListingStatus> {
        match self {
            Listing::Job(job) => job.status(),
            Listing::Service(service) => service.status(),
        }
    }

    fn coordinate(&self) -> Option<Coordinate> {
        match self {
            Listing::Job(job) => job.coordinate(),
            Listing::Service(service) => service.coordinate(),
        }
    }
}
