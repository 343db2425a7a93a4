use crate::filter::accessor::ListingFields;
use crate::filter::criteria::FilterCriteria;
use tracing::debug;

/// Single-pass, stateless listing filter.
///
/// The output is always a subsequence of the input: listings are never
/// reordered, duplicated or merged.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterEngine;

impl FilterEngine {
    pub fn apply<T>(listings: &[T], criteria: &FilterCriteria) -> Vec<T>
    where
        T: ListingFields + Clone,
    {
        let predicates = criteria.predicates();
        if predicates.is_empty() {
            return listings.to_vec();
        }

        let filtered: Vec<T> = listings
            .iter()
            .filter(|listing| predicates.iter().all(|p| p.matches(*listing)))
            .cloned()
            .collect();

        debug!(
            "Applied {} predicates: {} of {} listings kept",
            predicates.len(),
            filtered.len(),
            listings.len()
        );

        filtered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Coordinate, Job, ListingStatus, Service};
    use pretty_assertions::assert_eq;

    fn job(id: &str, title: &str, company: &str, salary: Option<f64>) -> Job {
        Job {
            id: id.to_string(),
            job_title: title.to_string(),
            company: company.to_string(),
            salary,
            salary_frequency: None,
            job_type: None,
            status: None,
            lat: None,
            lng: None,
            location: None,
            description: String::new(),
            modalities: None,
            rating: None,
            user_img: None,
            user_id: None,
        }
    }

    fn service(id: &str, status: Option<ListingStatus>, at: Option<Coordinate>) -> Service {
        Service {
            id: id.to_string(),
            service_type: "Electricidad".to_string(),
            company: "Voltio SAC".to_string(),
            cost: Some(80.0),
            status,
            lat: at.map(|c| c.lat),
            lng: at.map(|c| c.lng),
            address: None,
            phone: None,
            description: String::new(),
            modalities: None,
            rating: None,
            user_img: None,
            user_id: None,
        }
    }

    fn ids<T>(listings: &[T], id: impl Fn(&T) -> &str) -> Vec<String> {
        listings.iter().map(|l| id(l).to_string()).collect()
    }

    #[test]
    fn empty_criteria_returns_input_unchanged() {
        let jobs = vec![
            job("3", "Chef", "Tambo", Some(10.0)),
            job("1", "Mozo", "Tambo", None),
            job("2", "", "", Some(5.0)),
        ];
        assert_eq!(FilterEngine::apply(&jobs, &FilterCriteria::default()), jobs);
    }

    #[test]
    fn salary_range_is_inclusive() {
        let jobs: Vec<Job> = [40.0, 60.0, 90.0, 150.0, 51.0, 100.0]
            .iter()
            .enumerate()
            .map(|(i, s)| job(&i.to_string(), "Chofer", "Rutas", Some(*s)))
            .collect();

        let result = FilterEngine::apply(&jobs, &FilterCriteria::new().with_range("51-100"));
        let salaries: Vec<f64> = result.iter().filter_map(|j| j.salary).collect();
        assert_eq!(salaries, vec![60.0, 90.0, 51.0, 100.0]);
    }

    #[test]
    fn missing_amount_fails_range() {
        let jobs = vec![job("1", "Chofer", "Rutas", None)];
        assert!(FilterEngine::apply(&jobs, &FilterCriteria::new().with_range("0-500")).is_empty());
    }

    #[test]
    fn substring_is_case_insensitive_and_skips_empty_fields() {
        let jobs = vec![
            job("1", "Desarrollador Backend", "Acme", None),
            job("2", "", "ACME Logística", None),
            job("3", "Diseñador", "Otra", None),
        ];

        let by_title = FilterEngine::apply(&jobs, &FilterCriteria::new().with_title("BACKEND"));
        assert_eq!(ids(&by_title, |j| j.id.as_str()), vec!["1"]);

        let by_company = FilterEngine::apply(&jobs, &FilterCriteria::new().with_category("acme"));
        assert_eq!(ids(&by_company, |j| j.id.as_str()), vec!["1", "2"]);

        let both = FilterEngine::apply(
            &jobs,
            &FilterCriteria::new().with_category("acme").with_title("e"),
        );
        assert_eq!(ids(&both, |j| j.id.as_str()), vec!["1"]);
    }

    #[test]
    fn status_and_proximity_apply_to_services() {
        let here = Coordinate::new(-12.05, -77.04);
        let services = vec![
            service("a", Some(ListingStatus::Available), Some(here)),
            service("b", Some(ListingStatus::Unavailable), Some(here)),
            service("c", Some(ListingStatus::Available), None),
            service("d", None, Some(here)),
            service("e", Some(ListingStatus::Available), Some(Coordinate::new(-12.5, -77.04))),
        ];

        let available = FilterEngine::apply(&services, &FilterCriteria::new().with_status("AVAILABLE"));
        assert_eq!(ids(&available, |s| s.id.as_str()), vec!["a", "c", "e"]);

        let nearby = FilterEngine::apply(&services, &FilterCriteria::new().with_location(here));
        assert_eq!(ids(&nearby, |s| s.id.as_str()), vec!["a", "b", "d"]);

        let both = FilterEngine::apply(
            &services,
            &FilterCriteria::new().with_location(here).with_status("available"),
        );
        assert_eq!(ids(&both, |s| s.id.as_str()), vec!["a"]);
    }
}
