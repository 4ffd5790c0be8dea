// ============================================================================
// USE GEOLOCATION HOOK - Ubicación del usuario (una lectura + reintento)
// ============================================================================

use std::cell::RefCell;
use yew::prelude::*;
use crate::context::use_services;
use crate::services::LocationProvider;
use crate::stores::GeoStore;

/// Handle del hook
#[derive(Clone, PartialEq)]
pub struct UseGeolocationHandle {
    pub state: GeoStore,
    /// Vuelve a pedir la ubicación (solo tras un fallo)
    pub retry: Callback<()>,
}

#[hook]
pub fn use_geolocation() -> UseGeolocationHandle {
    let services = use_services();
    let store = use_mut_ref(GeoStore::default);
    let update = use_force_update();

    // Lectura inicial al montar
    {
        let store = store.clone();
        let provider = services.location.clone();
        let update = update.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let redraw = move || update.force_update();
                locate(&store, &*provider, &redraw).await;
            });
            || ()
        });
    }

    let retry = {
        let store = store.clone();
        let provider = services.location.clone();
        let update = update.clone();
        Callback::from(move |_: ()| {
            let store = store.clone();
            let provider = provider.clone();
            let update = update.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let redraw = move || update.force_update();
                retry_location(&store, &*provider, &redraw).await;
            });
        })
    };

    let state = store.borrow().clone();
    UseGeolocationHandle { state, retry }
}

/// Un intento completo. `false` si ya había ubicación o el resultado llegó tarde
pub async fn locate(store: &RefCell<GeoStore>, provider: &dyn LocationProvider, redraw: &dyn Fn()) -> bool {
    let Some(attempt) = store.borrow_mut().begin_attempt() else {
        return false;
    };
    redraw();

    let result = provider.current_location().await;
    let applied = store.borrow_mut().resolve(attempt, result);
    if applied {
        redraw();
    }
    applied
}

/// Reintento manual: solo después de un fallo
pub async fn retry_location(store: &RefCell<GeoStore>, provider: &dyn LocationProvider, redraw: &dyn Fn()) -> bool {
    if !store.borrow().can_retry() {
        return false;
    }
    log::info!("🔄 Reintentando geolocalización");
    locate(store, provider, redraw).await
}
