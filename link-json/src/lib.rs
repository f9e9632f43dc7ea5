#![doc = include_str!("../README.md")]
pub mod decode;
pub mod error;
pub mod token;
pub mod types;

pub use error::{Error, Result};
