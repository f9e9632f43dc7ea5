//! Value types produced by the decoders in this crate.

mod link;
pub use link::Link;
