pub mod detail;
pub mod marker;

pub use detail::*;
pub use marker::*;
