#![doc = "Error types."]
use thiserror::Error;

/// Error type for this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The token under the cursor cannot be mapped to the target type.
    #[error("cannot map token stream to target type `{target}`")]
    Mapping { target: &'static str },
}

impl Error {
    pub(crate) fn mapping(target: &'static str) -> Self {
        Self::Mapping { target }
    }
}

/// Type alias to use this library's [`Error`] type in a [`Result`](core::result::Result).
pub type Result<T> = core::result::Result<T, Error>;
