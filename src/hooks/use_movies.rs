// ============================================================================
// USE MOVIES HOOK - Películas con sesiones próximas (una vez al montar)
// ============================================================================

use yew::prelude::*;
use crate::context::use_services;
use crate::models::Movie;
use crate::stores::ListStore;

#[hook]
pub fn use_movies() -> UseStateHandle<ListStore<Movie>> {
    let services = use_services();
    let state = use_state(ListStore::<Movie>::loading);

    {
        let state = state.clone();
        let data = services.data.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let result = data.list_upcoming_movies().await;
                state.set(ListStore::finished(result));
            });
            || ()
        });
    }

    state
}
