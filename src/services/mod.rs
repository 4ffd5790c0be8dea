pub mod supabase_client;
pub mod movie_service;
pub mod screening_service;
pub mod cinema_service;
pub mod data_service;
pub mod location_service;
pub mod map_sdk_loader;

pub use supabase_client::{PostgrestQuery, SupabaseClient};
pub use data_service::{DataService, SupabaseDataService};
pub use location_service::{BrowserLocationProvider, LocationProvider};
pub use map_sdk_loader::load_naver_maps;
