pub mod use_geolocation;
pub mod use_movies;
pub mod use_selection_chain;
pub mod use_movie_showtimes;
pub mod use_cinema_timetable;
pub mod use_naver_maps;
pub mod use_cinemas;

pub use use_geolocation::{use_geolocation, UseGeolocationHandle};
pub use use_movies::use_movies;
pub use use_selection_chain::{use_selection_chain, UseSelectionChainHandle};
pub use use_movie_showtimes::{use_movie_showtimes, UseMovieShowtimesHandle};
pub use use_cinema_timetable::{use_cinema_timetable, UseCinemaTimetableHandle};
pub use use_naver_maps::use_naver_maps;
pub use use_cinemas::{use_cinemas, UseCinemasHandle};
