// ============================================================================
// APP - Raíz: servicios en contexto + navegación entre vistas
// ============================================================================

use yew::prelude::*;
use crate::components::{CinemaMap, MovieScreeningsList, MovieSelector};
use crate::config::CONFIG;
use crate::context::AppServices;
use crate::hooks::use_geolocation;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum View {
    Movies,
    Map,
}

#[function_component(App)]
pub fn app() -> Html {
    let services = use_memo((), |_| AppServices::from_config(&CONFIG));

    html! {
        <ContextProvider<AppServices> context={(*services).clone()}>
            <Shell />
        </ContextProvider<AppServices>>
    }
}

#[function_component(Shell)]
fn shell() -> Html {
    let view = use_state(|| View::Movies);
    let movie_id = use_state(|| None::<i64>);
    let geo = use_geolocation();

    let nav_button = |target: View, label: &'static str| {
        let class = nav_classes(*view, target);
        let view = view.clone();
        let onclick = Callback::from(move |_: MouseEvent| view.set(target));
        html! {
            <button {class} {onclick}>
                { label }
            </button>
        }
    };

    let on_select_movie = {
        let movie_id = movie_id.clone();
        Callback::from(move |id: Option<i64>| {
            log::info!("🎬 Película seleccionada: {:?}", id);
            movie_id.set(id);
        })
    };

    let content = match *view {
        View::Movies => html! {
            <>
                <MovieSelector selected={*movie_id} on_select={on_select_movie} />
                <MovieScreeningsList
                    movie_id={*movie_id}
                    geo={geo.state.clone()}
                    on_retry={geo.retry.clone()}
                />
            </>
        },
        View::Map => html! {
            <CinemaMap geo={geo.state.clone()} on_retry={geo.retry.clone()} />
        },
    };

    html! {
        <div class="app">
            <nav class="app-nav">
                { nav_button(View::Movies, "🎬 Movies") }
                { nav_button(View::Map, "🗺️ Map") }
            </nav>
            <main class="app-content">
                { content }
            </main>
        </div>
    }
}

fn nav_classes(current: View, target: View) -> Classes {
    classes!("nav-button", (current == target).then_some("active"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_current_view_is_active() {
        assert!(nav_classes(View::Movies, View::Movies).contains("active"));
        assert!(!nav_classes(View::Movies, View::Map).contains("active"));
        assert!(nav_classes(View::Map, View::Movies).contains("nav-button"));
    }
}
