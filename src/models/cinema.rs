use serde::{Deserialize, Serialize};
use super::{Coordinates, Screening};

/// Cine. La tabla `cinemas` usa `name`; el RPC por distancia usa `cinema_name`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cinema {
    pub cinema_code: String,
    #[serde(alias = "name")]
    pub cinema_name: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Calculada en el servidor
    #[serde(default)]
    pub distance_m: Option<f64>,
}

impl Cinema {
    pub fn coordinates(&self) -> Option<Coordinates> {
        let coords = Coordinates::new(self.latitude?, self.longitude?);
        coords.is_valid().then_some(coords)
    }
}

/// Fila del RPC `get_nearby_screenings`: un cine con sus sesiones del día
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NearbyCinema {
    pub cinema_code: String,
    pub cinema_name: String,
    pub distance_m: f64,
    #[serde(default)]
    pub screenings: Vec<Screening>,
}
