// ============================================================================
// USE MOVIE SHOWTIMES HOOK - película → fechas → cines cercanos
// ============================================================================

use yew::prelude::*;
use crate::context::use_services;
use crate::models::{Coordinates, NearbyCinema};
use crate::viewmodels::MovieShowtimes;
use super::use_selection_chain::{use_selection_chain, UseSelectionChainHandle};

pub type UseMovieShowtimesHandle = UseSelectionChainHandle<i64, Vec<NearbyCinema>>;

/// Sigue a `movie_id` y `location`: cada cambio de película reinicia la cadena
#[hook]
pub fn use_movie_showtimes(movie_id: Option<i64>, location: Option<Coordinates>) -> UseMovieShowtimesHandle {
    let services = use_services();
    let handle = use_selection_chain(MovieShowtimes::new(services.data.clone()));

    {
        let select_movie = handle.select_target.clone();
        use_effect_with(movie_id, move |movie_id| {
            select_movie.emit(*movie_id);
            || ()
        });
    }

    {
        let set_location = handle.set_location.clone();
        use_effect_with(location, move |location| {
            if let Some(location) = location {
                set_location.emit(*location);
            }
            || ()
        });
    }

    handle
}
