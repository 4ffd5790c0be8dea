// ============================================================================
// MAP SDK LOADER - Inyecta el script de Naver Maps una sola vez
// ============================================================================
// El <script> queda en el documento al desmontar: otro montaje lo reutiliza.
// Su estado de carga queda en `data-navermaps-state` para que un montaje
// posterior no espere eventos que ya ocurrieron.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, HtmlScriptElement};
use crate::errors::MapInitError;
use crate::utils::constants::{NAVER_MAPS_SDK_URL, NAVER_SDK_DATA_KEY, NAVER_SDK_SELECTOR, NAVER_SDK_STATE_ATTR};
use crate::utils::naver_ffi;

pub fn sdk_script_url(key_id: &str) -> String {
    format!("{}?ncpKeyId={}", NAVER_MAPS_SDK_URL, key_id)
}

/// Estado del `<script>` del SDK
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptState {
    Pending,
    Loaded,
    Failed,
}

impl ScriptState {
    pub fn from_attr(value: Option<&str>) -> Self {
        match value {
            Some("loaded") => ScriptState::Loaded,
            Some("failed") => ScriptState::Failed,
            _ => ScriptState::Pending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScriptState::Pending => "pending",
            ScriptState::Loaded => "loaded",
            ScriptState::Failed => "failed",
        }
    }

    /// Resultado de un script ya terminado; `None` si aún hay que esperar
    pub fn settled(&self, sdk_ready: bool) -> Option<Result<(), MapInitError>> {
        match self {
            ScriptState::Pending => None,
            ScriptState::Loaded if sdk_ready => Some(Ok(())),
            ScriptState::Loaded => Some(Err(MapInitError::SdkUnavailable)),
            ScriptState::Failed => Some(Err(MapInitError::ScriptFailed("script error".to_string()))),
        }
    }
}

/// Cargar el SDK. Resuelve cuando `naver.maps` está disponible
pub async fn load_naver_maps(key_id: Option<&str>) -> Result<(), MapInitError> {
    if naver_ffi::sdk_available() {
        return Ok(());
    }

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| MapInitError::ScriptFailed("no document".to_string()))?;

    let existing = document
        .query_selector(NAVER_SDK_SELECTOR)
        .ok()
        .flatten();

    let (script, loaded): (Element, _) = match existing {
        Some(script) => {
            let state = ScriptState::from_attr(script.get_attribute(NAVER_SDK_STATE_ATTR).as_deref());
            if let Some(outcome) = state.settled(naver_ffi::sdk_available()) {
                log::info!("🗺️ Script del SDK ya terminado ({})", state.as_str());
                return outcome;
            }

            // Inyectado en un montaje anterior y aún cargando
            log::info!("🗺️ Script del SDK ya presente, esperando load");
            let promise = js_sys::Promise::new(&mut |resolve, reject| {
                let _ = script.add_event_listener_with_callback("load", &resolve);
                let _ = script.add_event_listener_with_callback("error", &reject);
            });
            let loaded = JsFuture::from(promise).await;
            (script, loaded)
        }
        None => {
            let key_id = key_id.ok_or_else(|| {
                log::error!("❌ NAVER_MAP_KEY_ID no configurada");
                MapInitError::MissingKey
            })?;

            let script: HtmlScriptElement = document
                .create_element("script")
                .map_err(|e| MapInitError::ScriptFailed(naver_ffi::js_error_text(&e)))?
                .unchecked_into();
            script.set_src(&sdk_script_url(key_id));
            script.set_async(true);
            let _ = script.dataset().set(NAVER_SDK_DATA_KEY, "true");
            let _ = script.set_attribute(NAVER_SDK_STATE_ATTR, ScriptState::Pending.as_str());

            let promise = js_sys::Promise::new(&mut |resolve, reject| {
                script.set_onload(Some(&resolve));
                script.set_onerror(Some(&reject));
            });

            let head = document
                .head()
                .ok_or_else(|| MapInitError::ScriptFailed("no <head>".to_string()))?;
            head.append_child(&script)
                .map_err(|e| MapInitError::ScriptFailed(naver_ffi::js_error_text(&e)))?;
            log::info!("🗺️ Cargando SDK de mapas...");

            let loaded = JsFuture::from(promise).await;
            (script.unchecked_into(), loaded)
        }
    };

    let state = match &loaded {
        Ok(_) => ScriptState::Loaded,
        Err(e) => {
            log::error!("❌ El script del SDK falló: {}", naver_ffi::js_error_text(e));
            ScriptState::Failed
        }
    };
    let _ = script.set_attribute(NAVER_SDK_STATE_ATTR, state.as_str());

    let outcome = state
        .settled(naver_ffi::sdk_available())
        .unwrap_or(Err(MapInitError::SdkUnavailable));
    if outcome.is_ok() {
        log::info!("✅ SDK de mapas listo");
    }
    outcome
}
