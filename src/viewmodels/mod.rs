pub mod showtimes_viewmodel;
pub mod timetable_viewmodel;
pub mod map_viewmodel;
pub mod chain_view;

pub use showtimes_viewmodel::{drive, ChainSource, CinemaTimetable, MovieShowtimes};
pub use timetable_viewmodel::{group_by_title, ScreeningGroup};
pub use chain_view::{dates_slot, listing_slot, DatesSlot, ListingSlot};
