// ============================================================================
// GEO STORE - Estado de la geolocalización
// ============================================================================
// Una lectura al montar; solo se repite con el botón de reintento.
// Una vez obtenida, la ubicación se mantiene toda la sesión.
// ============================================================================

use crate::errors::LocationError;
use crate::models::Coordinates;

#[derive(Clone, Debug, PartialEq)]
pub enum GeoStatus {
    Locating,
    Located(Coordinates),
    Failed(LocationError),
}

#[derive(Clone, Debug, PartialEq)]
pub struct GeoStore {
    pub status: GeoStatus,
    /// Número del intento en curso (o del último)
    pub attempt: u64,
}

impl Default for GeoStore {
    fn default() -> Self {
        Self {
            status: GeoStatus::Locating,
            attempt: 0,
        }
    }
}

impl GeoStore {
    /// Empezar un intento. `None` si ya hay ubicación
    pub fn begin_attempt(&mut self) -> Option<u64> {
        if self.location().is_some() {
            return None;
        }
        self.attempt += 1;
        self.status = GeoStatus::Locating;
        Some(self.attempt)
    }

    /// Resultado de un intento; los de intentos anteriores se descartan
    pub fn resolve(&mut self, attempt: u64, result: Result<Coordinates, LocationError>) -> bool {
        if attempt != self.attempt || self.location().is_some() {
            return false;
        }
        self.status = match result {
            Ok(coords) => GeoStatus::Located(coords),
            Err(e) => GeoStatus::Failed(e),
        };
        true
    }

    pub fn location(&self) -> Option<Coordinates> {
        match self.status {
            GeoStatus::Located(coords) => Some(coords),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&LocationError> {
        match &self.status {
            GeoStatus::Failed(e) => Some(e),
            _ => None,
        }
    }

    pub fn is_locating(&self) -> bool {
        self.status == GeoStatus::Locating
    }

    /// El reintento solo se ofrece tras un fallo
    pub fn can_retry(&self) -> bool {
        self.error().is_some()
    }
}
