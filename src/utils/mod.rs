// Utils compartidos

pub mod constants;
pub mod format;
pub mod naver_ffi;

pub use constants::*;
pub use format::*;
