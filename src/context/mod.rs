pub mod services;

pub use services::{use_services, AppServices};
