// ============================================================================
// USE CINEMAS HOOK - Cines para el mapa y la lista de cercanos
// ============================================================================

use yew::prelude::*;
use crate::context::use_services;
use crate::models::{Cinema, Coordinates};
use crate::stores::ListStore;

#[derive(Clone, PartialEq)]
pub struct UseCinemasHandle {
    /// Todos los cines con coordenadas (pins)
    pub all: ListStore<Cinema>,
    /// Cines por distancia a `location`
    pub nearby: ListStore<Cinema>,
}

#[hook]
pub fn use_cinemas(location: Option<Coordinates>) -> UseCinemasHandle {
    let services = use_services();
    let all = use_state(ListStore::<Cinema>::loading);
    let nearby = use_state(ListStore::<Cinema>::default);

    {
        let all = all.clone();
        let data = services.data.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                all.set(ListStore::finished(data.list_cinemas().await));
            });
            || ()
        });
    }

    {
        let nearby = nearby.clone();
        let data = services.data.clone();
        use_effect_with(location, move |location| {
            if let Some(location) = *location {
                nearby.set(ListStore::loading());
                wasm_bindgen_futures::spawn_local(async move {
                    nearby.set(ListStore::finished(data.list_cinemas_by_distance(location).await));
                });
            }
            || ()
        });
    }

    UseCinemasHandle {
        all: (*all).clone(),
        nearby: (*nearby).clone(),
    }
}
