use crate::models::LocationSelection;

/// Supplies the user's position, e.g. from device geolocation or a map widget.
///
/// Passed explicitly to whatever needs it rather than read from host globals.
pub trait CoordinateProvider {
    fn current(&self) -> Option<LocationSelection>;
}

/// A provider that always reports the same place (or none)
#[derive(Debug, Clone, Default)]
pub struct FixedCoordinateProvider {
    selection: Option<LocationSelection>,
}

impl FixedCoordinateProvider {
    pub fn new(selection: impl Into<LocationSelection>) -> Self {
        Self {
            selection: Some(selection.into()),
        }
    }

    pub fn unavailable() -> Self {
        Self::default()
    }
}

impl CoordinateProvider for FixedCoordinateProvider {
    fn current(&self) -> Option<LocationSelection> {
        self.selection.clone()
    }
}
