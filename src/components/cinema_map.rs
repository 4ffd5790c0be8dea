// ============================================================================
// CINEMA MAP - Mapa de cines + lista de cines cercanos
// ============================================================================
// El mapa se crea cuando el SDK está listo y hay ubicación. Los marcadores
// los posee la MarkerLayer: se limpian al cambiar los pins y al desmontar.
// ============================================================================

use web_sys::HtmlElement;
use yew::prelude::*;
use crate::components::{CinemaOverlay, LocationNotice};
use crate::config::CONFIG;
use crate::hooks::{use_cinemas, use_naver_maps};
use crate::maps::{MapRenderer, MarkerLayer, NaverMapRenderer};
use crate::stores::{GeoStore, MapSdkStatus};
use crate::utils::{format_distance, MAP_CONTAINER_ID};
use crate::viewmodels::map_viewmodel::{cinema_pins, find_cinema, map_center};

#[derive(Properties, PartialEq, Clone)]
pub struct CinemaMapProps {
    pub geo: GeoStore,
    pub on_retry: Callback<()>,
}

#[function_component(CinemaMap)]
pub fn cinema_map(props: &CinemaMapProps) -> Html {
    let sdk = use_naver_maps();
    let location = props.geo.location();
    let cinemas = use_cinemas(location);

    let container = use_node_ref();
    let layer = use_mut_ref(|| None::<MarkerLayer<NaverMapRenderer>>);
    let map_epoch = use_state(|| 0u32);
    let selected_code = use_state(|| None::<String>);

    let on_pick = {
        let selected_code = selected_code.clone();
        Callback::from(move |code: String| selected_code.set(Some(code)))
    };

    // Crear el mapa (y destruir el anterior junto con sus marcadores)
    {
        let container = container.clone();
        let layer = layer.clone();
        let map_epoch = map_epoch.clone();
        let center = location.and_then(map_center);
        use_effect_with((sdk.is_ready(), center.is_some()), move |(ready, _)| {
            if let (true, Some(center)) = (*ready, center) {
                match container.cast::<HtmlElement>() {
                    Some(element) => match NaverMapRenderer::create(&element, center, CONFIG.default_map_zoom) {
                        Ok(renderer) => {
                            *layer.borrow_mut() = Some(MarkerLayer::new(renderer));
                            map_epoch.set(*map_epoch + 1);
                        }
                        Err(e) => log::error!("❌ No se pudo crear el mapa: {}", e),
                    },
                    None => log::warn!("⚠️ Contenedor del mapa no montado"),
                }
            }
            move || {
                layer.borrow_mut().take();
            }
        });
    }

    // Un pin por cine con coordenadas
    {
        let layer = layer.clone();
        let on_pick = on_pick.clone();
        let pins = cinema_pins(&cinemas.all.items);
        use_effect_with((pins, *map_epoch), move |(pins, _)| {
            if let Some(layer) = layer.borrow_mut().as_mut() {
                layer.replace(pins, &on_pick);
            }
            || ()
        });
    }

    // Recentrar si cambia la ubicación con el mapa ya creado
    {
        let layer = layer.clone();
        use_effect_with(location, move |location| {
            if let Some(center) = (*location).and_then(map_center) {
                if let Some(layer) = layer.borrow_mut().as_mut() {
                    if let Err(e) = layer.renderer_mut().set_center(center) {
                        log::warn!("⚠️ {}", e);
                    }
                }
            }
            || ()
        });
    }

    let map_area = match &sdk {
        MapSdkStatus::Failed(error) => html! {
            <div class="map-placeholder error">{ format!("Map unavailable: {}", error) }</div>
        },
        _ if sdk.is_ready() && location.is_some() => html! {
            <div id={MAP_CONTAINER_ID} class="map-container" ref={container.clone()}></div>
        },
        _ => html! { <div class="map-placeholder">{"Loading map…"}</div> },
    };

    let nearby = if cinemas.nearby.loading {
        html! { <p class="loading">{"Loading…"}</p> }
    } else if let Some(error) = &cinemas.nearby.error {
        html! { <p class="error">{ error }</p> }
    } else {
        html! {
            <ul class="nearby-list">
                { for cinemas.nearby.items.iter().map(|cinema| {
                    let onclick = {
                        let on_pick = on_pick.clone();
                        let code = cinema.cinema_code.clone();
                        Callback::from(move |_: MouseEvent| on_pick.emit(code.clone()))
                    };
                    html! {
                        <li key={cinema.cinema_code.clone()} class="nearby-item" {onclick}>
                            <span class="cinema-name">{ &cinema.cinema_name }</span>
                            if let Some(distance) = cinema.distance_m {
                                <span class="cinema-distance">{ format_distance(distance) }</span>
                            }
                        </li>
                    }
                }) }
            </ul>
        }
    };

    let selected = selected_code
        .as_deref()
        .and_then(|code| find_cinema(code, &cinemas.nearby.items, &cinemas.all.items));

    let on_close = {
        let selected_code = selected_code.clone();
        Callback::from(move |_: ()| selected_code.set(None))
    };

    html! {
        <section class="cinema-map">
            if let Some(error) = props.geo.error() {
                <LocationNotice error={error.clone()} on_retry={props.on_retry.clone()} />
            }
            { map_area }
            <h2 class="nearby-title">{"Nearby cinemas"}</h2>
            { nearby }
            if let Some(cinema) = selected {
                <CinemaOverlay {cinema} {on_close} />
            }
        </section>
    }
}
