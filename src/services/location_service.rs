// ============================================================================
// LOCATION SERVICE - Geolocalización del navegador (una sola lectura)
// ============================================================================
// `getCurrentPosition` se invoca por Reflect: las posiciones y errores se leen
// como objetos JS (`coords.latitude`, `code`) sin depender de tipos inestables
// ============================================================================

use async_trait::async_trait;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use crate::errors::LocationError;
use crate::models::Coordinates;

/// Proveedor de ubicación. Sin seguimiento continuo: cada llamada es un intento
#[async_trait(?Send)]
pub trait LocationProvider {
    async fn current_location(&self) -> Result<Coordinates, LocationError>;
}

/// `navigator.geolocation.getCurrentPosition` envuelto en una Promise
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserLocationProvider;

#[async_trait(?Send)]
impl LocationProvider for BrowserLocationProvider {
    async fn current_location(&self) -> Result<Coordinates, LocationError> {
        let navigator = web_sys::window()
            .ok_or(LocationError::Unsupported)?
            .navigator();

        // Sin `navigator.geolocation` no hay nada que pedir
        let geolocation = get(&navigator, "geolocation")
            .filter(|g| g.is_object())
            .ok_or_else(|| {
                log::warn!("⚠️ navigator.geolocation no disponible");
                LocationError::Unsupported
            })?;
        let get_current_position = get(&geolocation, "getCurrentPosition")
            .and_then(|f| f.dyn_into::<js_sys::Function>().ok())
            .ok_or(LocationError::Unsupported)?;

        log::info!("📍 Solicitando ubicación...");
        let promise = js_sys::Promise::new(&mut |resolve, reject| {
            if let Err(e) = get_current_position.call2(&geolocation, &resolve, &reject) {
                let _ = reject.call1(&JsValue::NULL, &e);
            }
        });

        match JsFuture::from(promise).await {
            Ok(position) => {
                let coords = get(&position, "coords");
                let latitude = coords.as_ref().and_then(|c| get(c, "latitude")).and_then(|v| v.as_f64());
                let longitude = coords.as_ref().and_then(|c| get(c, "longitude")).and_then(|v| v.as_f64());
                let location = coordinates_from_parts(latitude, longitude)?;
                log::info!("✅ Ubicación: ({}, {})", location.latitude, location.longitude);
                Ok(location)
            }
            Err(err) => {
                let error = location_error_from_code(get(&err, "code").and_then(|c| c.as_f64()));
                log::warn!("⚠️ Error de geolocalización: {}", error);
                Err(error)
            }
        }
    }
}

fn get(target: &JsValue, key: &str) -> Option<JsValue> {
    js_sys::Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

/// `GeolocationPositionError.code`; un rechazo sin código es `Unavailable`
pub fn location_error_from_code(code: Option<f64>) -> LocationError {
    match code {
        Some(code) if (0.0..=f64::from(u16::MAX)).contains(&code) => LocationError::from_code(code as u16),
        _ => LocationError::Unavailable,
    }
}

/// Coordenadas de `position.coords`; faltantes o fuera de rango es `Unavailable`
pub fn coordinates_from_parts(latitude: Option<f64>, longitude: Option<f64>) -> Result<Coordinates, LocationError> {
    let coords = Coordinates::new(
        latitude.ok_or(LocationError::Unavailable)?,
        longitude.ok_or(LocationError::Unavailable)?,
    );
    if coords.is_valid() {
        Ok(coords)
    } else {
        Err(LocationError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes_from_js_map_to_kinds() {
        assert_eq!(location_error_from_code(Some(1.0)), LocationError::PermissionDenied);
        assert_eq!(location_error_from_code(Some(2.0)), LocationError::Unavailable);
        assert_eq!(location_error_from_code(Some(3.0)), LocationError::Timeout);
        assert_eq!(location_error_from_code(None), LocationError::Unavailable);
        assert_eq!(location_error_from_code(Some(-1.0)), LocationError::Unavailable);
    }

    #[test]
    fn coordinates_require_both_parts_in_range() {
        assert_eq!(
            coordinates_from_parts(Some(37.5), Some(127.0)),
            Ok(Coordinates::new(37.5, 127.0))
        );
        assert_eq!(coordinates_from_parts(Some(37.5), None), Err(LocationError::Unavailable));
        assert_eq!(coordinates_from_parts(Some(f64::NAN), Some(127.0)), Err(LocationError::Unavailable));
    }
}
