// ============================================================================
// USE CINEMA TIMETABLE HOOK - cine → fechas → horario agrupado por película
// ============================================================================

use yew::prelude::*;
use crate::context::use_services;
use crate::models::Screening;
use crate::viewmodels::{group_by_title, CinemaTimetable, ScreeningGroup};
use super::use_selection_chain::{use_selection_chain, UseSelectionChainHandle};

#[derive(Clone)]
pub struct UseCinemaTimetableHandle {
    pub chain: UseSelectionChainHandle<String, Vec<Screening>>,
    /// Horario del día agrupado por título
    pub groups: Vec<ScreeningGroup>,
}

#[hook]
pub fn use_cinema_timetable(cinema_code: Option<String>) -> UseCinemaTimetableHandle {
    let services = use_services();
    let chain = use_selection_chain(CinemaTimetable::new(services.data.clone()));

    {
        let select_cinema = chain.select_target.clone();
        use_effect_with(cinema_code, move |code| {
            select_cinema.emit(code.clone());
            || ()
        });
    }

    let groups = chain
        .chain
        .listing()
        .map(|screenings| group_by_title(screenings))
        .unwrap_or_default();

    UseCinemaTimetableHandle { chain, groups }
}
