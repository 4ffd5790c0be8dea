// ============================================================================
// NAVER MAPS FFI - Bindings a `naver.maps` (JavaScript)
// ============================================================================
// Solo bindings - Sin estado, sin lógica
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["naver", "maps"], js_name = LatLng)]
    pub type LatLng;

    #[wasm_bindgen(constructor, js_namespace = ["naver", "maps"], js_class = "LatLng")]
    pub fn new(lat: f64, lng: f64) -> LatLng;

    #[wasm_bindgen(js_namespace = ["naver", "maps"], js_name = Map)]
    pub type NaverMap;

    #[wasm_bindgen(constructor, catch, js_namespace = ["naver", "maps"], js_class = "Map")]
    pub fn new(container: &web_sys::HtmlElement, options: &JsValue) -> Result<NaverMap, JsValue>;

    #[wasm_bindgen(method, js_name = setCenter)]
    pub fn set_center(this: &NaverMap, center: &LatLng);

    #[wasm_bindgen(js_namespace = ["naver", "maps"], js_name = Marker)]
    pub type Marker;

    #[wasm_bindgen(constructor, catch, js_namespace = ["naver", "maps"], js_class = "Marker")]
    pub fn new(options: &JsValue) -> Result<Marker, JsValue>;

    /// `null` quita el marcador del mapa
    #[wasm_bindgen(method, js_name = setMap)]
    pub fn set_map(this: &Marker, map: &JsValue);

    #[wasm_bindgen(js_namespace = ["naver", "maps", "Event"], js_name = addListener)]
    pub fn add_listener(target: &JsValue, event_name: &str, handler: &js_sys::Function) -> JsValue;

    #[wasm_bindgen(js_namespace = ["naver", "maps", "Event"], js_name = removeListener)]
    pub fn remove_listener(listener: &JsValue);
}

/// ¿Está `window.naver.maps` disponible?
pub fn sdk_available() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    js_sys::Reflect::get(&window, &JsValue::from_str("naver"))
        .ok()
        .filter(|naver| naver.is_object())
        .and_then(|naver| js_sys::Reflect::get(&naver, &JsValue::from_str("maps")).ok())
        .map(|maps| maps.is_object())
        .unwrap_or(false)
}

/// Opciones `{ center, zoom }` para `new naver.maps.Map`
pub fn map_options(center: &LatLng, zoom: f64) -> JsValue {
    let options = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&options, &JsValue::from_str("center"), center.as_ref());
    let _ = js_sys::Reflect::set(&options, &JsValue::from_str("zoom"), &JsValue::from_f64(zoom));
    options.into()
}

/// Opciones `{ position, map, title }` para `new naver.maps.Marker`
pub fn marker_options(position: &LatLng, map: &NaverMap, title: &str) -> JsValue {
    let options = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&options, &JsValue::from_str("position"), position.as_ref());
    let _ = js_sys::Reflect::set(&options, &JsValue::from_str("map"), map.as_ref());
    let _ = js_sys::Reflect::set(&options, &JsValue::from_str("title"), &JsValue::from_str(title));
    options.into()
}

/// Convertir un error JS en texto para logs
pub fn js_error_text(err: &JsValue) -> String {
    err.dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}
