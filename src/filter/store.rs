use crate::config::DEFAULT_CENTRE;
use crate::error::CriteriaError;
use crate::filter::accessor::ListingFields;
use crate::filter::criteria::{CriteriaField, FilterCriteria};
use crate::filter::engine::FilterEngine;
use crate::models::{Coordinate, LocationSelection};
use crate::sources::{CoordinateProvider, ListingSource};
use tracing::{debug, info, warn};

/// Owns the current filter criteria and counts every change to them.
#[derive(Debug, Clone, Default)]
pub struct CriteriaStore {
    criteria: FilterCriteria,
    selected: Option<LocationSelection>,
    revision: u64,
}

impl CriteriaStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// The place picked on the map, with its address when the widget gave one
    pub fn selected_location(&self) -> Option<&LocationSelection> {
        self.selected.as_ref()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn set(&mut self, field: CriteriaField, value: impl Into<String>) {
        self.criteria.set(field, value);
        self.revision += 1;
    }

    /// Update a field by its form input name (`company`, `priceRange`, ...)
    pub fn set_named(&mut self, name: &str, value: impl Into<String>) -> Result<(), CriteriaError> {
        let field: CriteriaField = name.parse()?;
        self.set(field, value);
        Ok(())
    }

    pub fn select_location(&mut self, selection: LocationSelection) {
        self.criteria.location = Some(selection.coordinate());
        self.selected = Some(selection);
        self.revision += 1;
    }

    pub fn clear_location(&mut self) {
        self.criteria.location = None;
        self.selected = None;
        self.revision += 1;
    }

    /// Clear every field in one step
    pub fn reset(&mut self) {
        self.criteria.reset();
        self.selected = None;
        self.revision += 1;
    }
}

/// One activation of a listing page: the fetched collection, the criteria and
/// the filtered view, recomputed on every criteria change.
#[derive(Debug, Clone)]
pub struct ListingBoard<T> {
    listings: Vec<T>,
    store: CriteriaStore,
    results: Vec<T>,
    default_centre: Coordinate,
}

impl<T> ListingBoard<T>
where
    T: ListingFields + Clone,
{
    pub fn new(listings: Vec<T>) -> Self {
        Self {
            results: listings.clone(),
            listings,
            store: CriteriaStore::new(),
            default_centre: DEFAULT_CENTRE,
        }
    }

    /// Fetch once from `source`. A failed fetch leaves the page empty.
    pub async fn load<S>(source: &S) -> Self
    where
        S: ListingSource<Item = T> + ?Sized,
    {
        match source.fetch().await {
            Ok(listings) => {
                info!("Loaded {} listings from {}", listings.len(), source.source_name());
                Self::new(listings)
            }
            Err(e) => {
                warn!("Failed to load listings from {}: {}", source.source_name(), e);
                Self::new(Vec::new())
            }
        }
    }

    /// Map centre used when neither a selection nor a device position exists
    pub fn with_default_centre(mut self, centre: Coordinate) -> Self {
        self.default_centre = centre;
        self
    }

    /// Everything fetched for this activation, in source order
    pub fn listings(&self) -> &[T] {
        &self.listings
    }

    pub fn results(&self) -> &[T] {
        &self.results
    }

    pub fn criteria(&self) -> &FilterCriteria {
        self.store.criteria()
    }

    pub fn store(&self) -> &CriteriaStore {
        &self.store
    }

    pub fn update(&mut self, field: CriteriaField, value: impl Into<String>) {
        self.store.set(field, value);
        self.refresh();
    }

    pub fn update_named(&mut self, name: &str, value: impl Into<String>) -> Result<(), CriteriaError> {
        self.store.set_named(name, value)?;
        self.refresh();
        Ok(())
    }

    pub fn select_location(&mut self, selection: LocationSelection) {
        self.store.select_location(selection);
        self.refresh();
    }

    pub fn clear_location(&mut self) {
        self.store.clear_location();
        self.refresh();
    }

    pub fn reset(&mut self) {
        self.store.reset();
        self.refresh();
    }

    /// Where the map should be centred: the selected place, else the device
    /// position, else the configured default.
    pub fn centre(&self, provider: &dyn CoordinateProvider) -> Coordinate {
        self.store
            .criteria()
            .location
            .or_else(|| provider.current().map(|s| s.coordinate()))
            .unwrap_or(self.default_centre)
    }

    fn refresh(&mut self) {
        self.results = FilterEngine::apply(&self.listings, self.store.criteria());
        debug!(
            "Criteria revision {}: showing {} of {} listings",
            self.store.revision(),
            self.results.len(),
            self.listings.len()
        );
    }
}
