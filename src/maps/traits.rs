use yew::Callback;
use crate::errors::MapError;
use crate::models::Coordinates;

/// Un pin de cine en el mapa
#[derive(Debug, Clone, PartialEq)]
pub struct CinemaPin {
    pub cinema_code: String,
    pub cinema_name: String,
    pub position: Coordinates,
}

/// Trait común para renderizadores de mapas
///
/// Cada marcador devuelto por `add_marker` pertenece al llamador, que debe
/// devolverlo con `remove_marker` (ver [`super::MarkerLayer`]).
pub trait MapRenderer {
    type Marker;

    /// Agregar un marcador; `on_click` recibe el `cinema_code`
    fn add_marker(&mut self, pin: &CinemaPin, on_click: Callback<String>) -> Result<Self::Marker, MapError>;

    /// Quitar un marcador del mapa y soltar sus listeners
    fn remove_marker(&mut self, marker: Self::Marker);

    /// Centrar el mapa en una ubicación
    fn set_center(&mut self, center: Coordinates) -> Result<(), MapError>;
}
