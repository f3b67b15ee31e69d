pub mod numfmt;

// Foundation crate: small, well-tested primitives only.
pub use numfmt::*;
