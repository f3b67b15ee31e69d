pub mod assets;
pub mod scenario;

pub use assets::*;
pub use scenario::*;
