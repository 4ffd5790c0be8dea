// ============================================================================
// SELECTION CHAIN - Máquina de estados de cargas dependientes
// ============================================================================
// objetivo (película / cine) → fechas → sesiones del día
//
// Cada carga lleva un token con la generación de la selección para la que se
// pidió. Un resultado solo se aplica si su generación sigue siendo la actual:
// las respuestas tardías de selecciones anteriores se descartan.
// ============================================================================

use std::fmt::Debug;
use crate::errors::DataError;
use crate::models::Coordinates;
use crate::utils::format::dedupe_dates;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainStage {
    Idle,
    LoadingDates,
    DatesReady,
    LoadingScreenings,
    ScreeningsReady,
    Error,
}

/// Token de una carga de fechas
#[derive(Debug, Clone, PartialEq)]
pub struct DatesToken<K> {
    generation: u64,
    pub target: K,
}

/// Token de una carga de sesiones
#[derive(Debug, Clone, PartialEq)]
pub struct ListingToken<K> {
    generation: u64,
    pub target: K,
    pub date: String,
    pub location: Option<Coordinates>,
}

/// Carga que el llamador debe ejecutar y devolver con `apply_*`
#[derive(Debug, Clone, PartialEq)]
pub enum ChainCommand<K> {
    LoadDates(DatesToken<K>),
    LoadListing(ListingToken<K>),
}

/// Estado de una cadena. `K` = clave del objetivo, `L` = listado de sesiones
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionChain<K, L> {
    needs_location: bool,
    target: Option<K>,
    dates: Vec<String>,
    date: Option<String>,
    location: Option<Coordinates>,
    listing: Option<L>,
    stage: ChainStage,
    error: Option<String>,
    selection_generation: u64,
    listing_generation: u64,
}

impl<K, L> SelectionChain<K, L>
where
    K: Clone + PartialEq + Debug,
    L: Clone,
{
    /// `needs_location`: las sesiones solo se piden con ubicación conocida
    pub fn new(needs_location: bool) -> Self {
        Self {
            needs_location,
            target: None,
            dates: Vec::new(),
            date: None,
            location: None,
            listing: None,
            stage: ChainStage::Idle,
            error: None,
            selection_generation: 0,
            listing_generation: 0,
        }
    }

    // ------------------------------------------------------------------------
    // Transiciones
    // ------------------------------------------------------------------------

    /// Nuevo objetivo. Reinicia fechas y sesiones aunque haya cargas en vuelo
    pub fn select_target(&mut self, target: Option<K>) -> Option<ChainCommand<K>> {
        self.selection_generation += 1;
        self.listing_generation += 1;
        self.dates.clear();
        self.date = None;
        self.listing = None;
        self.error = None;
        self.target = target.clone();

        match target {
            None => {
                self.stage = ChainStage::Idle;
                None
            }
            Some(target) => {
                log::info!("📅 Cargando fechas para {:?}", target);
                self.stage = ChainStage::LoadingDates;
                Some(ChainCommand::LoadDates(DatesToken {
                    generation: self.selection_generation,
                    target,
                }))
            }
        }
    }

    /// Resultado de fechas. Auto-selecciona la más temprana
    pub fn apply_dates(
        &mut self,
        token: DatesToken<K>,
        result: Result<Vec<String>, DataError>,
    ) -> Option<ChainCommand<K>> {
        if token.generation != self.selection_generation {
            log::debug!("🗑️ Fechas obsoletas de {:?} descartadas", token.target);
            return None;
        }

        match result {
            Ok(dates) => {
                self.dates = dedupe_dates(dates);
                self.stage = ChainStage::DatesReady;
                self.error = None;
                let first = self.dates.first().cloned()?;
                self.choose_date(first)
            }
            Err(e) => {
                log::error!("❌ {}", e);
                self.fail(e);
                None
            }
        }
    }

    /// El usuario elige una fecha de las pestañas
    pub fn select_date(&mut self, date: String) -> Option<ChainCommand<K>> {
        if !self.dates.contains(&date) {
            log::warn!("⚠️ Fecha {} no disponible, ignorada", date);
            return None;
        }
        let already_requested = self.date.as_ref() == Some(&date)
            && matches!(self.stage, ChainStage::LoadingScreenings | ChainStage::ScreeningsReady);
        if already_requested {
            return None;
        }
        self.choose_date(date)
    }

    /// Ubicación conocida (o nueva)
    pub fn set_location(&mut self, location: Coordinates) -> Option<ChainCommand<K>> {
        if self.location == Some(location) {
            return None;
        }
        self.location = Some(location);
        if !self.needs_location || self.target.is_none() || self.date.is_none() {
            return None;
        }
        self.listing = None;
        self.listing_generation += 1;
        self.request_listing()
    }

    /// Resultado de sesiones. Devuelve `true` si se aplicó
    pub fn apply_listing(&mut self, token: ListingToken<K>, result: Result<L, DataError>) -> bool {
        if token.generation != self.listing_generation {
            log::debug!("🗑️ Sesiones obsoletas de {:?} ({}) descartadas", token.target, token.date);
            return false;
        }

        match result {
            Ok(listing) => {
                self.listing = Some(listing);
                self.stage = ChainStage::ScreeningsReady;
                self.error = None;
            }
            Err(e) => {
                log::error!("❌ {}", e);
                self.listing = None;
                self.stage = ChainStage::Error;
                self.error = Some(e.to_string());
            }
        }
        true
    }

    fn choose_date(&mut self, date: String) -> Option<ChainCommand<K>> {
        self.date = Some(date);
        self.listing = None;
        self.error = None;
        self.listing_generation += 1;
        self.request_listing()
    }

    fn request_listing(&mut self) -> Option<ChainCommand<K>> {
        let target = self.target.clone()?;
        let date = self.date.clone()?;

        if self.needs_location && self.location.is_none() {
            // Se pedirá en set_location
            self.stage = ChainStage::DatesReady;
            return None;
        }

        self.stage = ChainStage::LoadingScreenings;
        Some(ChainCommand::LoadListing(ListingToken {
            generation: self.listing_generation,
            target,
            date,
            location: self.location,
        }))
    }

    fn fail(&mut self, error: DataError) {
        self.dates.clear();
        self.date = None;
        self.listing = None;
        self.stage = ChainStage::Error;
        self.error = Some(error.to_string());
    }

    // ------------------------------------------------------------------------
    // Vistas de solo lectura
    // ------------------------------------------------------------------------

    pub fn target(&self) -> Option<&K> {
        self.target.as_ref()
    }

    pub fn dates(&self) -> &[String] {
        &self.dates
    }

    pub fn selected_date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    /// `None` mientras no haya un listado válido para la selección actual
    pub fn listing(&self) -> Option<&L> {
        self.listing.as_ref()
    }

    pub fn stage(&self) -> ChainStage {
        self.stage
    }

    pub fn is_loading_dates(&self) -> bool {
        self.stage == ChainStage::LoadingDates
    }

    pub fn is_loading_screenings(&self) -> bool {
        self.stage == ChainStage::LoadingScreenings
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading_dates() || self.is_loading_screenings()
    }

    /// Hay fecha elegida pero falta la ubicación para pedir sesiones
    pub fn awaiting_location(&self) -> bool {
        self.needs_location && self.location.is_none() && self.date.is_some()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Chain = SelectionChain<i64, Vec<&'static str>>;

    fn dates(list: &[&str]) -> Result<Vec<String>, DataError> {
        Ok(list.iter().map(|d| d.to_string()).collect())
    }

    fn seoul() -> Coordinates {
        Coordinates::new(37.5665, 126.978)
    }

    fn expect_dates(cmd: Option<ChainCommand<i64>>) -> DatesToken<i64> {
        match cmd {
            Some(ChainCommand::LoadDates(token)) => token,
            other => panic!("expected LoadDates, got {:?}", other),
        }
    }

    fn expect_listing(cmd: Option<ChainCommand<i64>>) -> ListingToken<i64> {
        match cmd {
            Some(ChainCommand::LoadListing(token)) => token,
            other => panic!("expected LoadListing, got {:?}", other),
        }
    }

    #[test]
    fn starts_idle() {
        let chain = Chain::new(true);
        assert_eq!(chain.stage(), ChainStage::Idle);
        assert!(chain.dates().is_empty());
        assert!(chain.listing().is_none());
    }

    #[test]
    fn first_date_is_auto_selected_and_screenings_requested() {
        let mut chain = Chain::new(true);
        chain.set_location(seoul());

        let token = expect_dates(chain.select_target(Some(1)));
        assert_eq!(chain.stage(), ChainStage::LoadingDates);

        let listing = expect_listing(chain.apply_dates(token, dates(&["2024-05-01", "2024-05-02"])));
        assert_eq!(chain.selected_date(), Some("2024-05-01"));
        assert_eq!(listing.date, "2024-05-01");
        assert_eq!(listing.location, Some(seoul()));
        assert!(chain.is_loading_screenings());

        assert!(chain.apply_listing(listing, Ok(vec![])));
        assert_eq!(chain.stage(), ChainStage::ScreeningsReady);
        assert_eq!(chain.listing(), Some(&vec![]));
        assert!(!chain.is_loading());
    }

    #[test]
    fn dates_are_deduplicated_and_sorted() {
        let mut chain = Chain::new(false);
        let token = expect_dates(chain.select_target(Some(1)));
        chain.apply_dates(token, dates(&["2024-05-03", "2024-05-01", "2024-05-03"]));
        assert_eq!(chain.dates(), ["2024-05-01", "2024-05-03"]);
    }

    #[test]
    fn late_dates_from_previous_target_are_discarded() {
        let mut chain = Chain::new(false);
        let first = expect_dates(chain.select_target(Some(1)));
        let second = expect_dates(chain.select_target(Some(2)));

        expect_listing(chain.apply_dates(second, dates(&["2024-06-10"])));
        assert!(chain.apply_dates(first, dates(&["2024-05-01"])).is_none());

        assert_eq!(chain.target(), Some(&2));
        assert_eq!(chain.dates(), ["2024-06-10"]);
        assert_eq!(chain.selected_date(), Some("2024-06-10"));
    }

    #[test]
    fn late_screenings_from_previous_target_are_discarded() {
        let mut chain = Chain::new(false);
        let t1 = expect_dates(chain.select_target(Some(1)));
        let l1 = expect_listing(chain.apply_dates(t1, dates(&["2024-05-01"])));

        let t2 = expect_dates(chain.select_target(Some(2)));
        let l2 = expect_listing(chain.apply_dates(t2, dates(&["2024-05-01"])));

        assert!(chain.apply_listing(l2, Ok(vec!["movie 2 at cinema"])));
        assert!(!chain.apply_listing(l1, Ok(vec!["movie 1 at cinema"])));
        assert_eq!(chain.listing(), Some(&vec!["movie 2 at cinema"]));
    }

    #[test]
    fn late_screenings_from_previous_date_are_discarded() {
        let mut chain = Chain::new(false);
        let t = expect_dates(chain.select_target(Some(1)));
        let may1 = expect_listing(chain.apply_dates(t, dates(&["2024-05-01", "2024-05-02"])));
        let may2 = expect_listing(chain.select_date("2024-05-02".to_string()));

        assert!(!chain.apply_listing(may1, Ok(vec!["may 1"])));
        assert!(chain.is_loading_screenings());
        assert!(chain.apply_listing(may2, Ok(vec!["may 2"])));
        assert_eq!(chain.listing(), Some(&vec!["may 2"]));
    }

    #[test]
    fn new_target_clears_dates_and_screenings_immediately() {
        let mut chain = Chain::new(false);
        let t = expect_dates(chain.select_target(Some(1)));
        let l = expect_listing(chain.apply_dates(t, dates(&["2024-05-01"])));
        chain.apply_listing(l, Ok(vec!["old"]));

        expect_dates(chain.select_target(Some(2)));
        assert!(chain.dates().is_empty());
        assert_eq!(chain.selected_date(), None);
        assert!(chain.listing().is_none());
        assert!(chain.is_loading_dates());
    }

    #[test]
    fn clearing_the_target_returns_to_idle() {
        let mut chain = Chain::new(false);
        let t = expect_dates(chain.select_target(Some(1)));
        assert!(chain.select_target(None).is_none());
        assert_eq!(chain.stage(), ChainStage::Idle);
        assert!(chain.apply_dates(t, dates(&["2024-05-01"])).is_none());
        assert!(chain.dates().is_empty());
    }

    #[test]
    fn screenings_wait_for_location() {
        let mut chain = Chain::new(true);
        let t = expect_dates(chain.select_target(Some(1)));
        assert!(chain.apply_dates(t, dates(&["2024-05-01"])).is_none());
        assert_eq!(chain.stage(), ChainStage::DatesReady);
        assert!(chain.awaiting_location());

        let listing = expect_listing(chain.set_location(seoul()));
        assert_eq!(listing.date, "2024-05-01");
        assert!(!chain.awaiting_location());
        assert!(chain.set_location(seoul()).is_none());
    }

    #[test]
    fn empty_dates_leave_no_selection() {
        let mut chain = Chain::new(true);
        chain.set_location(seoul());
        let t = expect_dates(chain.select_target(Some(1)));
        assert!(chain.apply_dates(t, dates(&[])).is_none());
        assert_eq!(chain.stage(), ChainStage::DatesReady);
        assert_eq!(chain.selected_date(), None);
    }

    #[test]
    fn dates_error_clears_data_and_keeps_message() {
        let mut chain = Chain::new(false);
        let t = expect_dates(chain.select_target(Some(1)));
        chain.apply_dates(t, Err(DataError::new("list_movie_dates", "HTTP 500")));
        assert_eq!(chain.stage(), ChainStage::Error);
        assert!(chain.dates().is_empty());
        assert_eq!(chain.error_message(), Some("list_movie_dates failed: HTTP 500"));

        // Una nueva selección limpia el error
        expect_dates(chain.select_target(Some(1)));
        assert_eq!(chain.error_message(), None);
    }

    #[test]
    fn screenings_error_keeps_dates() {
        let mut chain = Chain::new(false);
        let t = expect_dates(chain.select_target(Some(1)));
        let l = expect_listing(chain.apply_dates(t, dates(&["2024-05-01"])));
        chain.apply_listing(l, Err(DataError::new("get_cinema_timetable", "timeout")));
        assert_eq!(chain.stage(), ChainStage::Error);
        assert_eq!(chain.dates(), ["2024-05-01"]);
        assert!(chain.listing().is_none());

        // Reintentar eligiendo la fecha de nuevo
        expect_listing(chain.select_date("2024-05-01".to_string()));
    }

    #[test]
    fn unknown_or_repeated_date_is_ignored() {
        let mut chain = Chain::new(false);
        let t = expect_dates(chain.select_target(Some(1)));
        expect_listing(chain.apply_dates(t, dates(&["2024-05-01"])));
        assert!(chain.select_date("2030-01-01".to_string()).is_none());
        assert!(chain.select_date("2024-05-01".to_string()).is_none());
    }

    #[test]
    fn rapid_selections_end_on_the_last_one() {
        let mut chain = Chain::new(false);
        let tokens: Vec<_> = (1..=5).map(|id| expect_dates(chain.select_target(Some(id)))).collect();

        // Las respuestas llegan en orden inverso
        let mut pending = Vec::new();
        for token in tokens.into_iter().rev() {
            let date = format!("2024-05-0{}", token.target);
            if let Some(cmd) = chain.apply_dates(token, dates(&[date.as_str()])) {
                pending.push(cmd);
            }
        }
        assert_eq!(pending.len(), 1);
        let listing = match pending.pop() {
            Some(ChainCommand::LoadListing(l)) => l,
            other => panic!("unexpected {:?}", other),
        };
        assert_eq!(listing.target, 5);
        assert!(chain.apply_listing(listing, Ok(vec!["five"])));
        assert_eq!(chain.target(), Some(&5));
        assert_eq!(chain.selected_date(), Some("2024-05-05"));
    }
}
