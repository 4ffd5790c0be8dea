// ============================================================================
// CINEMA OVERLAY - Horario de un cine agrupado por película
// ============================================================================

use yew::prelude::*;
use crate::components::{DateTabs, ScreeningCard};
use crate::hooks::use_cinema_timetable;
use crate::models::Cinema;
use crate::utils::format_distance;
use crate::viewmodels::{dates_slot, listing_slot, DatesSlot, ListingSlot};

#[derive(Properties, PartialEq, Clone)]
pub struct CinemaOverlayProps {
    pub cinema: Cinema,
    pub on_close: Callback<()>,
}

#[function_component(CinemaOverlay)]
pub fn cinema_overlay(props: &CinemaOverlayProps) -> Html {
    let timetable = use_cinema_timetable(Some(props.cinema.cinema_code.clone()));
    let chain = &timetable.chain.chain;

    let on_backdrop = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_close = on_backdrop.clone();
    // Los clicks dentro del panel no cierran
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    let body = match dates_slot(chain) {
        DatesSlot::Loading => html! { <p class="loading">{"Loading…"}</p> },
        DatesSlot::Failed(message) => html! { <p class="error">{ message }</p> },
        DatesSlot::NoDates => html! { <p class="empty">{"No upcoming showings."}</p> },
        DatesSlot::Tabs => match listing_slot(chain, false) {
            ListingSlot::Loading | ListingSlot::Locating => html! { <p class="loading">{"Loading…"}</p> },
            ListingSlot::Failed(message) => html! { <p class="error">{ message }</p> },
            ListingSlot::Empty(date) => html! { <p class="empty">{ format!("No showings on {}.", date) }</p> },
            ListingSlot::Nothing => html! {},
            ListingSlot::Ready => html! {
                <div class="timetable">
                    { for timetable.groups.iter().map(|group| html! {
                        <div class="timetable-group">
                            <h3 class="timetable-title">{ group.display_title() }</h3>
                            <div class="screening-list">
                                { for group.screenings.iter().map(|s| html! {
                                    <ScreeningCard screening={s.clone()} />
                                }) }
                            </div>
                        </div>
                    }) }
                </div>
            },
        },
    };

    html! {
        <div class="overlay-backdrop" onclick={on_backdrop}>
            <div class="cinema-overlay" onclick={stop}>
                <div class="overlay-header">
                    <h2>{ &props.cinema.cinema_name }</h2>
                    if let Some(distance) = props.cinema.distance_m {
                        <span class="cinema-distance">{ format_distance(distance) }</span>
                    }
                    <button class="close-button" onclick={on_close}>{"×"}</button>
                </div>
                if !chain.dates().is_empty() {
                    <DateTabs
                        dates={chain.dates().to_vec()}
                        selected={chain.selected_date().map(str::to_string)}
                        on_select={timetable.chain.select_date.clone()}
                    />
                }
                { body }
            </div>
        </div>
    }
}
