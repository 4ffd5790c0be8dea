pub mod list_store;
pub mod geo_store;
pub mod map_store;

pub use list_store::ListStore;
pub use geo_store::{GeoStatus, GeoStore};
pub use map_store::MapSdkStatus;
