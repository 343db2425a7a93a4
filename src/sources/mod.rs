pub mod decode;
pub mod file;
pub mod location;
pub mod rest;
pub mod traits;

pub use file::JsonFileSource;
pub use location::{CoordinateProvider, FixedCoordinateProvider};
pub use rest::RestListingSource;
pub use traits::ListingSource;
