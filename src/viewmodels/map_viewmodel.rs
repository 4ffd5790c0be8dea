// ============================================================================
// MAP VIEWMODEL - Preparación de datos para el mapa
// ============================================================================
// SOLO lógica de preparación de datos - Sin estado
// ============================================================================

use crate::maps::CinemaPin;
use crate::models::{Cinema, Coordinates};

/// Pins para los cines con coordenadas válidas
pub fn cinema_pins(cinemas: &[Cinema]) -> Vec<CinemaPin> {
    let pins: Vec<CinemaPin> = cinemas
        .iter()
        .filter_map(|cinema| {
            Some(CinemaPin {
                cinema_code: cinema.cinema_code.clone(),
                cinema_name: cinema.cinema_name.clone(),
                position: cinema.coordinates()?,
            })
        })
        .collect();

    if pins.len() < cinemas.len() {
        log::warn!("⚠️ {} cines sin coordenadas, sin pin", cinemas.len() - pins.len());
    }
    pins
}

/// Buscar un cine por código (primero en `primary`, luego en `fallback`)
pub fn find_cinema(code: &str, primary: &[Cinema], fallback: &[Cinema]) -> Option<Cinema> {
    primary
        .iter()
        .chain(fallback.iter())
        .find(|c| c.cinema_code == code)
        .cloned()
}

/// Centro inicial del mapa: la ubicación del usuario
pub fn map_center(location: Coordinates) -> Option<Coordinates> {
    location.is_valid().then_some(location)
}
