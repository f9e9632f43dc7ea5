//! Token kinds and the read-only cursor that decoders inspect.

use std::borrow::Cow;

use serde_json::Value;

/// The kind of token under a [`Cursor`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    StartObject,
    EndObject,
    StartArray,
    EndArray,
    FieldName,
    String,
    Integer,
    Float,
    True,
    False,
    Null,
    /// A scalar with no JSON spelling of its own, such as a byte string.
    Embedded,
}

impl TokenKind {
    /// Returns `true` for tokens that hold a single primitive value.
    pub fn is_scalar_value(self) -> bool {
        matches!(
            self,
            Self::String
                | Self::Integer
                | Self::Float
                | Self::True
                | Self::False
                | Self::Null
                | Self::Embedded
        )
    }

    /// Returns the fixed spelling of punctuation and keyword tokens.
    pub fn as_str(self) -> Option<&'static str> {
        match self {
            Self::StartObject => Some("{"),
            Self::EndObject => Some("}"),
            Self::StartArray => Some("["),
            Self::EndArray => Some("]"),
            Self::True => Some("true"),
            Self::False => Some("false"),
            Self::Null => Some("null"),
            _ => None,
        }
    }
}

/// A position within a token stream.
///
/// Implementations are owned by the surrounding decoder; consumers only read the
/// current token and must not keep the cursor past the call they were given it in.
pub trait Cursor {
    /// The kind of the token under the cursor.
    fn current_token(&self) -> TokenKind;

    /// The text of the token under the cursor.
    fn text(&self) -> Cow<'_, str>;
}

/// A parsed JSON value, seen as a cursor resting on its first token.
impl Cursor for Value {
    fn current_token(&self) -> TokenKind {
        match self {
            Value::Null => TokenKind::Null,
            Value::Bool(true) => TokenKind::True,
            Value::Bool(false) => TokenKind::False,
            Value::Number(n) if n.is_f64() => TokenKind::Float,
            Value::Number(_) => TokenKind::Integer,
            Value::String(_) => TokenKind::String,
            Value::Array(_) => TokenKind::StartArray,
            Value::Object(_) => TokenKind::StartObject,
        }
    }

    fn text(&self) -> Cow<'_, str> {
        match self {
            Value::String(s) => Cow::Borrowed(s.as_str()),
            Value::Number(n) => Cow::Owned(n.to_string()),
            _ => Cow::Borrowed(self.current_token().as_str().unwrap_or_default()),
        }
    }
}
