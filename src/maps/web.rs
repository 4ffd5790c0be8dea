use wasm_bindgen::prelude::*;
use yew::Callback;
use crate::errors::MapError;
use crate::models::Coordinates;
use crate::utils::naver_ffi::{self, LatLng, Marker, NaverMap};
use super::{CinemaPin, MapRenderer};

/// Marcador vivo: el closure del click vive mientras el marcador exista
pub struct NaverMarker {
    marker: Marker,
    listener: JsValue,
    _on_click: Closure<dyn FnMut()>,
}

/// Renderizador de mapas para web usando Naver Maps JS v3
pub struct NaverMapRenderer {
    map: NaverMap,
}

impl NaverMapRenderer {
    /// Crear el mapa dentro de `container`, centrado en `center`
    pub fn create(container: &web_sys::HtmlElement, center: Coordinates, zoom: f64) -> Result<Self, MapError> {
        if !naver_ffi::sdk_available() {
            return Err(MapError::NotReady);
        }
        if !center.is_valid() {
            return Err(MapError::InvalidCoordinates(center.latitude, center.longitude));
        }

        log::info!("🗺️ Creando mapa en ({}, {}) zoom {}", center.latitude, center.longitude, zoom);
        let latlng = LatLng::new(center.latitude, center.longitude);
        let map = NaverMap::new(container, &naver_ffi::map_options(&latlng, zoom))
            .map_err(|e| MapError::Js(naver_ffi::js_error_text(&e)))?;
        Ok(Self { map })
    }
}

impl MapRenderer for NaverMapRenderer {
    type Marker = NaverMarker;

    fn add_marker(&mut self, pin: &CinemaPin, on_click: Callback<String>) -> Result<NaverMarker, MapError> {
        if !pin.position.is_valid() {
            return Err(MapError::InvalidCoordinates(pin.position.latitude, pin.position.longitude));
        }

        let position = LatLng::new(pin.position.latitude, pin.position.longitude);
        let marker = Marker::new(&naver_ffi::marker_options(&position, &self.map, &pin.cinema_name))
            .map_err(|e| MapError::Js(naver_ffi::js_error_text(&e)))?;

        let code = pin.cinema_code.clone();
        let on_click = Closure::wrap(Box::new(move || on_click.emit(code.clone())) as Box<dyn FnMut()>);
        let listener = naver_ffi::add_listener(marker.as_ref(), "click", on_click.as_ref().unchecked_ref());

        Ok(NaverMarker {
            marker,
            listener,
            _on_click: on_click,
        })
    }

    fn remove_marker(&mut self, marker: NaverMarker) {
        naver_ffi::remove_listener(&marker.listener);
        marker.marker.set_map(&JsValue::NULL);
    }

    fn set_center(&mut self, center: Coordinates) -> Result<(), MapError> {
        if !center.is_valid() {
            return Err(MapError::InvalidCoordinates(center.latitude, center.longitude));
        }
        self.map.set_center(&LatLng::new(center.latitude, center.longitude));
        Ok(())
    }
}
