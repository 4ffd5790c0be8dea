// Módulo de mapas: trait de renderizado + capa de marcadores + implementación web

pub mod traits;
pub mod markers;
pub mod web;

pub use traits::{CinemaPin, MapRenderer};
pub use markers::MarkerLayer;
pub use web::NaverMapRenderer;
