// ============================================================================
// MOVIE SCREENINGS LIST - Fechas y cines cercanos de la película elegida
// ============================================================================

use yew::prelude::*;
use crate::components::{DateTabs, LocationNotice, ScreeningCard};
use crate::hooks::use_movie_showtimes;
use crate::models::NearbyCinema;
use crate::stores::GeoStore;
use crate::utils::format_distance;
use crate::viewmodels::{dates_slot, listing_slot, DatesSlot, ListingSlot};

#[derive(Properties, PartialEq, Clone)]
pub struct MovieScreeningsListProps {
    pub movie_id: Option<i64>,
    pub geo: GeoStore,
    pub on_retry: Callback<()>,
}

#[function_component(MovieScreeningsList)]
pub fn movie_screenings_list(props: &MovieScreeningsListProps) -> Html {
    let showtimes = use_movie_showtimes(props.movie_id, props.geo.location());
    let chain = &showtimes.chain;

    if props.movie_id.is_none() {
        return html! { <p class="placeholder">{"Please select a movie."}</p> };
    }

    let location_notice = match props.geo.error() {
        Some(error) => html! {
            <LocationNotice error={error.clone()} on_retry={props.on_retry.clone()} />
        },
        None => html! {},
    };

    let body = match dates_slot(chain) {
        DatesSlot::Loading => html! { <p class="loading">{"Loading…"}</p> },
        DatesSlot::Failed(message) => html! { <p class="error">{ message }</p> },
        DatesSlot::NoDates => html! { <p class="empty">{"No upcoming showings."}</p> },
        DatesSlot::Tabs => html! {
            <>
                <DateTabs
                    dates={chain.dates().to_vec()}
                    selected={chain.selected_date().map(str::to_string)}
                    on_select={showtimes.select_date.clone()}
                />
                { render_listing(listing_slot(chain, props.geo.is_locating()), chain.listing()) }
            </>
        },
    };

    html! {
        <section class="movie-screenings">
            { location_notice }
            { body }
        </section>
    }
}

fn render_listing(slot: ListingSlot, listing: Option<&Vec<NearbyCinema>>) -> Html {
    match slot {
        ListingSlot::Locating => html! { <p class="loading">{"Finding your location…"}</p> },
        ListingSlot::Loading => html! { <p class="loading">{"Loading…"}</p> },
        ListingSlot::Failed(message) => html! { <p class="error">{ message }</p> },
        ListingSlot::Empty(date) => html! { <p class="empty">{ format!("No showings on {}.", date) }</p> },
        ListingSlot::Nothing => html! {},
        ListingSlot::Ready => html! {
            <div class="cinema-list">
                { for listing.into_iter().flatten().map(|cinema| html! {
                    <div key={cinema.cinema_code.clone()} class="cinema-card">
                        <div class="cinema-header">
                            <h3 class="cinema-name">{ &cinema.cinema_name }</h3>
                            <span class="cinema-distance">{ format_distance(cinema.distance_m) }</span>
                        </div>
                        <div class="screening-list">
                            { for cinema.screenings.iter().map(|s| html! {
                                <ScreeningCard screening={s.clone()} />
                            }) }
                        </div>
                    </div>
                }) }
            </div>
        },
    }
}
