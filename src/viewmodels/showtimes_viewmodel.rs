// ============================================================================
// SHOWTIMES VIEWMODEL - Fuentes de datos de las cadenas y su ejecución
// ============================================================================
// película → fechas → cines cercanos   (necesita ubicación)
// cine     → fechas → horario del día  (no la necesita)
// ============================================================================

use std::cell::RefCell;
use std::fmt::Debug;
use std::rc::Rc;
use async_trait::async_trait;
use crate::errors::DataError;
use crate::models::{Coordinates, NearbyCinema, Screening};
use crate::services::DataService;
use crate::state::selection_chain::{ChainCommand, SelectionChain};

/// Qué pide cada etapa de una cadena
#[async_trait(?Send)]
pub trait ChainSource {
    type Key: Clone + PartialEq + Debug + 'static;
    type Listing: Clone + PartialEq + 'static;

    /// Las sesiones solo se piden con ubicación conocida
    const NEEDS_LOCATION: bool;

    async fn load_dates(&self, key: &Self::Key) -> Result<Vec<String>, DataError>;

    async fn load_listing(
        &self,
        key: &Self::Key,
        date: &str,
        location: Option<Coordinates>,
    ) -> Result<Self::Listing, DataError>;

    fn new_chain() -> SelectionChain<Self::Key, Self::Listing> {
        SelectionChain::new(Self::NEEDS_LOCATION)
    }
}

/// Cadena de película: fechas de la película y cines cercanos con sesiones
#[derive(Clone)]
pub struct MovieShowtimes {
    service: Rc<dyn DataService>,
}

impl MovieShowtimes {
    pub fn new(service: Rc<dyn DataService>) -> Self {
        Self { service }
    }
}

#[async_trait(?Send)]
impl ChainSource for MovieShowtimes {
    type Key = i64;
    type Listing = Vec<NearbyCinema>;
    const NEEDS_LOCATION: bool = true;

    async fn load_dates(&self, movie_id: &i64) -> Result<Vec<String>, DataError> {
        self.service.list_movie_dates(*movie_id).await
    }

    async fn load_listing(
        &self,
        movie_id: &i64,
        date: &str,
        location: Option<Coordinates>,
    ) -> Result<Vec<NearbyCinema>, DataError> {
        let location = location.ok_or_else(|| DataError::new("get_nearby_screenings", "location unknown"))?;
        self.service.get_nearby_screenings(*movie_id, location, date).await
    }
}

/// Cadena de cine: fechas del cine y su horario
#[derive(Clone)]
pub struct CinemaTimetable {
    service: Rc<dyn DataService>,
}

impl CinemaTimetable {
    pub fn new(service: Rc<dyn DataService>) -> Self {
        Self { service }
    }
}

#[async_trait(?Send)]
impl ChainSource for CinemaTimetable {
    type Key = String;
    type Listing = Vec<Screening>;
    const NEEDS_LOCATION: bool = false;

    async fn load_dates(&self, cinema_code: &String) -> Result<Vec<String>, DataError> {
        self.service.list_cinema_dates(cinema_code).await
    }

    async fn load_listing(
        &self,
        cinema_code: &String,
        date: &str,
        _location: Option<Coordinates>,
    ) -> Result<Vec<Screening>, DataError> {
        self.service.get_cinema_timetable(cinema_code, date).await
    }
}

/// Ejecutar un comando y los que le sigan (fechas → fecha auto-seleccionada → sesiones).
/// `redraw` se llama después de aplicar cada resultado.
pub async fn drive<S: ChainSource>(
    chain: Rc<RefCell<SelectionChain<S::Key, S::Listing>>>,
    source: &S,
    command: ChainCommand<S::Key>,
    redraw: &dyn Fn(),
) {
    let mut next = Some(command);
    while let Some(command) = next.take() {
        next = match command {
            ChainCommand::LoadDates(token) => {
                let result = source.load_dates(&token.target).await;
                chain.borrow_mut().apply_dates(token, result)
            }
            ChainCommand::LoadListing(token) => {
                let result = source.load_listing(&token.target, &token.date, token.location).await;
                chain.borrow_mut().apply_listing(token, result);
                None
            }
        };
        redraw();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Cinema, Movie};
    use crate::state::selection_chain::ChainStage;
    use futures::executor::block_on;
    use std::collections::HashMap;

    /// Backend en memoria
    #[derive(Default)]
    struct FakeData {
        movie_dates: HashMap<i64, Vec<String>>,
        cinema_dates: HashMap<String, Vec<String>>,
        nearby: HashMap<(i64, String), Vec<NearbyCinema>>,
        timetable: HashMap<(String, String), Vec<Screening>>,
        fail_dates: bool,
        calls: RefCell<Vec<String>>,
    }

    #[async_trait(?Send)]
    impl DataService for FakeData {
        async fn list_upcoming_movies(&self) -> Result<Vec<Movie>, DataError> {
            Ok(vec![Movie { id: 1, title: "Movie X".to_string(), poster_url: None }])
        }

        async fn list_movie_dates(&self, movie_id: i64) -> Result<Vec<String>, DataError> {
            self.calls.borrow_mut().push(format!("movie_dates:{}", movie_id));
            if self.fail_dates {
                return Err(DataError::new("list_movie_dates", "HTTP 503"));
            }
            Ok(self.movie_dates.get(&movie_id).cloned().unwrap_or_default())
        }

        async fn list_cinema_dates(&self, cinema_code: &str) -> Result<Vec<String>, DataError> {
            self.calls.borrow_mut().push(format!("cinema_dates:{}", cinema_code));
            Ok(self.cinema_dates.get(cinema_code).cloned().unwrap_or_default())
        }

        async fn get_nearby_screenings(
            &self,
            movie_id: i64,
            _location: Coordinates,
            date: &str,
        ) -> Result<Vec<NearbyCinema>, DataError> {
            self.calls.borrow_mut().push(format!("nearby:{}:{}", movie_id, date));
            Ok(self.nearby.get(&(movie_id, date.to_string())).cloned().unwrap_or_default())
        }

        async fn get_cinema_timetable(&self, cinema_code: &str, date: &str) -> Result<Vec<Screening>, DataError> {
            self.calls.borrow_mut().push(format!("timetable:{}:{}", cinema_code, date));
            Ok(self
                .timetable
                .get(&(cinema_code.to_string(), date.to_string()))
                .cloned()
                .unwrap_or_default())
        }

        async fn list_cinemas_by_distance(&self, _location: Coordinates) -> Result<Vec<Cinema>, DataError> {
            Ok(vec![])
        }

        async fn list_cinemas(&self) -> Result<Vec<Cinema>, DataError> {
            Ok(vec![])
        }
    }

    fn strings(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn nearby(code: &str, distance_m: f64) -> NearbyCinema {
        NearbyCinema {
            cinema_code: code.to_string(),
            cinema_name: format!("Cinema {}", code),
            distance_m,
            screenings: vec![],
        }
    }

    fn screening(title: &str, start: &str) -> Screening {
        Screening {
            screen_name: "1관".to_string(),
            start_dt: start.to_string(),
            end_dt: start.to_string(),
            remain_seat_cnt: 10,
            total_seat_cnt: 50,
            url: None,
            movie: Some(crate::models::MovieTitle { title: title.to_string() }),
        }
    }

    fn seoul() -> Coordinates {
        Coordinates::new(37.5665, 126.978)
    }

    #[test]
    fn movie_with_no_nearby_showings_ends_ready_and_empty() {
        let mut data = FakeData::default();
        data.movie_dates.insert(1, strings(&["2024-05-01", "2024-05-02"]));
        let source = MovieShowtimes::new(Rc::new(data));

        let chain = Rc::new(RefCell::new(MovieShowtimes::new_chain()));
        chain.borrow_mut().set_location(seoul());
        let cmd = chain.borrow_mut().select_target(Some(1)).unwrap();

        let redraws = RefCell::new(0);
        block_on(drive(chain.clone(), &source, cmd, &|| *redraws.borrow_mut() += 1));

        let chain = chain.borrow();
        assert_eq!(chain.selected_date(), Some("2024-05-01"));
        assert_eq!(chain.stage(), ChainStage::ScreeningsReady);
        assert_eq!(chain.listing(), Some(&vec![]));
        assert!(!chain.is_loading());
        assert_eq!(*redraws.borrow(), 2);
    }

    #[test]
    fn movie_chain_returns_nearby_cinemas_for_the_auto_selected_date() {
        let mut data = FakeData::default();
        data.movie_dates.insert(1, strings(&["2024-05-02", "2024-05-01"]));
        data.nearby.insert((1, "2024-05-01".to_string()), vec![nearby("A", 800.0), nearby("B", 4500.0)]);
        let data = Rc::new(data);
        let source = MovieShowtimes::new(data.clone());

        let chain = Rc::new(RefCell::new(MovieShowtimes::new_chain()));
        chain.borrow_mut().set_location(seoul());
        let cmd = chain.borrow_mut().select_target(Some(1)).unwrap();
        block_on(drive(chain.clone(), &source, cmd, &|| ()));

        let listing = chain.borrow().listing().cloned().unwrap();
        assert_eq!(listing.iter().map(|c| c.cinema_code.as_str()).collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(*data.calls.borrow(), strings(&["movie_dates:1", "nearby:1:2024-05-01"]));
    }

    #[test]
    fn stale_movie_chain_is_discarded_when_it_finishes_last() {
        let mut data = FakeData::default();
        data.movie_dates.insert(1, strings(&["2024-05-01"]));
        data.movie_dates.insert(2, strings(&["2024-05-03"]));
        data.nearby.insert((1, "2024-05-01".to_string()), vec![nearby("OLD", 100.0)]);
        data.nearby.insert((2, "2024-05-03".to_string()), vec![nearby("NEW", 200.0)]);
        let source = MovieShowtimes::new(Rc::new(data));

        let chain = Rc::new(RefCell::new(MovieShowtimes::new_chain()));
        chain.borrow_mut().set_location(seoul());
        let first = chain.borrow_mut().select_target(Some(1)).unwrap();
        let second = chain.borrow_mut().select_target(Some(2)).unwrap();

        // La selección 2 termina primero, la 1 llega tarde
        block_on(drive(chain.clone(), &source, second, &|| ()));
        block_on(drive(chain.clone(), &source, first, &|| ()));

        let chain = chain.borrow();
        assert_eq!(chain.target(), Some(&2));
        assert_eq!(chain.selected_date(), Some("2024-05-03"));
        assert_eq!(chain.listing().unwrap()[0].cinema_code, "NEW");
    }

    #[test]
    fn movie_chain_without_location_waits() {
        let mut data = FakeData::default();
        data.movie_dates.insert(1, strings(&["2024-05-01"]));
        let data = Rc::new(data);
        let source = MovieShowtimes::new(data.clone());

        let chain = Rc::new(RefCell::new(MovieShowtimes::new_chain()));
        let cmd = chain.borrow_mut().select_target(Some(1)).unwrap();
        block_on(drive(chain.clone(), &source, cmd, &|| ()));

        assert!(chain.borrow().awaiting_location());
        assert_eq!(*data.calls.borrow(), strings(&["movie_dates:1"]));

        let cmd = chain.borrow_mut().set_location(seoul()).unwrap();
        block_on(drive(chain.clone(), &source, cmd, &|| ()));
        assert_eq!(chain.borrow().stage(), ChainStage::ScreeningsReady);
    }

    #[test]
    fn dates_failure_surfaces_an_error() {
        let data = FakeData { fail_dates: true, ..FakeData::default() };
        let source = MovieShowtimes::new(Rc::new(data));

        let chain = Rc::new(RefCell::new(MovieShowtimes::new_chain()));
        let cmd = chain.borrow_mut().select_target(Some(9)).unwrap();
        block_on(drive(chain.clone(), &source, cmd, &|| ()));

        let chain = chain.borrow();
        assert_eq!(chain.stage(), ChainStage::Error);
        assert_eq!(chain.error_message(), Some("list_movie_dates failed: HTTP 503"));
        assert!(chain.dates().is_empty());
    }

    #[test]
    fn cinema_chain_does_not_need_location() {
        let mut data = FakeData::default();
        data.cinema_dates.insert("C01".to_string(), strings(&["2024-05-01"]));
        data.timetable.insert(
            ("C01".to_string(), "2024-05-01".to_string()),
            vec![screening("A", "10:00"), screening("B", "12:00")],
        );
        let source = CinemaTimetable::new(Rc::new(data));

        let chain = Rc::new(RefCell::new(CinemaTimetable::new_chain()));
        let cmd = chain.borrow_mut().select_target(Some("C01".to_string())).unwrap();
        block_on(drive(chain.clone(), &source, cmd, &|| ()));

        let chain = chain.borrow();
        assert_eq!(chain.stage(), ChainStage::ScreeningsReady);
        assert_eq!(chain.listing().map(Vec::len), Some(2));
    }
}
