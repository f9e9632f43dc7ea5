//! Decoding of a single token into a [`Link`].

use log::trace;

use crate::error::{Error, Result};
use crate::token::{Cursor, TokenKind};
use crate::types::Link;

/// Decodes the token under `cursor` into a [`Link`].
///
/// Every scalar token is accepted and its text is kept verbatim. Structural tokens
/// (array or object boundaries, field names) fail with [`Error::Mapping`].
///
/// The cursor is only read, never advanced.
pub fn decode<C>(cursor: &C) -> Result<Link>
where
    C: Cursor + ?Sized,
{
    let token = cursor.current_token();
    trace!("decoding link from {token:?} token");
    // Usually a string, but other scalars keep their text too.
    if token == TokenKind::String || token.is_scalar_value() {
        return Ok(Link::new(cursor.text()));
    }
    Err(Error::mapping(Link::TYPE_NAME))
}
