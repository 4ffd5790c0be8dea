pub mod app;
pub mod date_tabs;
pub mod screening_card;
pub mod location_notice;
pub mod movie_selector;
pub mod movie_screenings;
pub mod cinema_overlay;
pub mod cinema_map;

pub use app::App;
pub use date_tabs::DateTabs;
pub use screening_card::ScreeningCard;
pub use location_notice::LocationNotice;
pub use movie_selector::MovieSelector;
pub use movie_screenings::MovieScreeningsList;
pub use cinema_overlay::CinemaOverlay;
pub use cinema_map::CinemaMap;
