// ============================================================================
// ERRORS - Taxonomía de errores del cliente
// ============================================================================
// Ningún error es fatal: todos terminan como campos del estado de la vista
// ============================================================================

use thiserror::Error;

/// Error de geolocalización (recuperable con reintento manual)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("Location permission denied")]
    PermissionDenied,
    #[error("Location unavailable")]
    Unavailable,
    #[error("Location request timed out")]
    Timeout,
    #[error("Geolocation not supported")]
    Unsupported,
}

impl LocationError {
    /// Mapear `GeolocationPositionError.code` (1, 2, 3)
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => LocationError::PermissionDenied,
            3 => LocationError::Timeout,
            _ => LocationError::Unavailable,
        }
    }

    /// Mensaje para mostrar al usuario
    pub fn user_message(&self) -> &'static str {
        match self {
            LocationError::PermissionDenied => {
                "Location access was denied. Allow location access in your browser and retry."
            }
            LocationError::Unavailable => "Your location is currently unavailable.",
            LocationError::Timeout => "Finding your location took too long.",
            LocationError::Unsupported => "This browser does not support geolocation.",
        }
    }
}

/// Fallo de cualquier llamada al Data Service (sin resultados parciales)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{operation} failed: {cause}")]
pub struct DataError {
    pub operation: &'static str,
    pub cause: String,
}

impl DataError {
    pub fn new(operation: &'static str, cause: impl Into<String>) -> Self {
        Self {
            operation,
            cause: cause.into(),
        }
    }
}

/// El SDK de mapas no pudo cargarse
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapInitError {
    #[error("map key missing (NAVER_MAP_KEY_ID)")]
    MissingKey,
    #[error("map script failed to load: {0}")]
    ScriptFailed(String),
    #[error("map SDK loaded but naver.maps is not available")]
    SdkUnavailable,
}

/// Error de operaciones sobre el mapa ya creado
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MapError {
    #[error("Map is not ready")]
    NotReady,
    #[error("Invalid coordinates ({0}, {1})")]
    InvalidCoordinates(f64, f64),
    #[error("Map error: {0}")]
    Js(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geolocation_codes_map_to_kinds() {
        assert_eq!(LocationError::from_code(1), LocationError::PermissionDenied);
        assert_eq!(LocationError::from_code(2), LocationError::Unavailable);
        assert_eq!(LocationError::from_code(3), LocationError::Timeout);
        assert_eq!(LocationError::from_code(42), LocationError::Unavailable);
    }

    #[test]
    fn data_error_display_names_operation() {
        let err = DataError::new("list_movie_dates", "HTTP 500: Internal Server Error");
        assert_eq!(
            err.to_string(),
            "list_movie_dates failed: HTTP 500: Internal Server Error"
        );
    }
}
