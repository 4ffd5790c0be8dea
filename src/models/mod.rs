pub mod movie;
pub mod cinema;
pub mod screening;
pub mod location;

pub use movie::Movie;
pub use cinema::{Cinema, NearbyCinema};
pub use screening::{Screening, MovieTitle, PlayDateRow};
pub use location::Coordinates;
