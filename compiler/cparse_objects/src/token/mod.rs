//! Value handle for the cparse interpreter.
//!
//! `Token` is the element type stored in tuples, lists and scope maps. Cloning
//! a `Token` follows the copy discipline of its payload:
//!
//! - scalars and `Tuple` are values: a clone is independent of its source;
//! - `TokenList` and `TokenMap` are references: a clone aliases the source.
//!
//! `Token::deep_clone` is the explicit escape hatch that gives an independent
//! copy of a reference-typed payload as well.

use std::fmt;

use crate::iter::{Iterable, TokenIterator};
use crate::list::TokenList;
use crate::map::TokenMap;
use crate::tuple::Tuple;

/// Set on every tag whose values can be walked element by element.
const ITERABLE_BIT: u8 = 0x20;
/// Set on every map-like tag.
const MAP_BIT: u8 = 0x40;

/// Runtime type tag of a token.
///
/// The discriminants keep the interpreter's bit layout: `0x20` marks the
/// iterable kinds and `0x40` marks maps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokType {
    None = 0x00,
    Op = 0x01,
    Var = 0x02,
    Num = 0x03,
    Str = 0x04,
    Tuple = 0x21,
    List = 0x22,
    Map = 0x60,
}

impl TokType {
    /// Raw tag bits.
    #[inline]
    pub fn bits(self) -> u8 {
        self as u8
    }

    /// Returns `true` for tuples, lists and maps.
    #[inline]
    pub fn is_iterable(self) -> bool {
        self.bits() & ITERABLE_BIT != 0
    }

    /// Returns `true` for map-like tags.
    #[inline]
    pub fn is_map(self) -> bool {
        self.bits() & MAP_BIT != 0
    }

    /// Upper-case tag name, as used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            TokType::None => "NONE",
            TokType::Op => "OP",
            TokType::Var => "VAR",
            TokType::Num => "NUM",
            TokType::Str => "STR",
            TokType::Tuple => "TUPLE",
            TokType::List => "LIST",
            TokType::Map => "MAP",
        }
    }
}

impl fmt::Display for TokType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A tagged handle holding one interpreter value.
#[derive(Clone, Debug, Default)]
pub enum Token {
    /// The absent value. Also the default for auto-created bindings.
    #[default]
    None,
    /// Operator text.
    Op(String),
    /// Variable name.
    Var(String),
    /// Number.
    Num(f64),
    /// String literal.
    Str(String),
    /// Value-semantics argument group.
    Tuple(Tuple),
    /// Reference-semantics ordered list.
    List(TokenList),
    /// Reference-semantics scope or dictionary.
    Map(TokenMap),
}

impl Token {
    /// Create an operator token.
    #[inline]
    pub fn op(text: impl Into<String>) -> Self {
        Token::Op(text.into())
    }

    /// Create a variable-name token.
    #[inline]
    pub fn var(name: impl Into<String>) -> Self {
        Token::Var(name.into())
    }

    /// Runtime type tag.
    pub fn tok_type(&self) -> TokType {
        match self {
            Token::None => TokType::None,
            Token::Op(_) => TokType::Op,
            Token::Var(_) => TokType::Var,
            Token::Num(_) => TokType::Num,
            Token::Str(_) => TokType::Str,
            Token::Tuple(_) => TokType::Tuple,
            Token::List(_) => TokType::List,
            Token::Map(_) => TokType::Map,
        }
    }

    /// Produce a copy that shares no mutable storage with `self`.
    ///
    /// Lists and maps get fresh storage; the elements inside them are copied
    /// as handles. A map keeps its parent scope.
    pub fn deep_clone(&self) -> Token {
        match self {
            Token::List(list) => Token::List(list.deep_clone()),
            Token::Map(map) => Token::Map(map.deep_clone()),
            other => other.clone(),
        }
    }

    /// Truthiness of the token.
    ///
    /// Returns `None` for operator and variable tokens, which have no truth
    /// value of their own.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Token::None => Some(false),
            Token::Num(n) => Some(*n != 0.0),
            Token::Str(s) => Some(!s.is_empty()),
            Token::Tuple(t) => Some(!t.is_empty()),
            Token::List(l) => Some(!l.is_empty()),
            Token::Map(_) => Some(true),
            Token::Op(_) | Token::Var(_) => None,
        }
    }

    /// Numeric payload, if this is a number.
    pub fn as_num(&self) -> Option<f64> {
        match self {
            Token::Num(n) => Some(*n),
            _ => None,
        }
    }

    /// Text payload of string, variable and operator tokens.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Token::Str(s) | Token::Var(s) | Token::Op(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_tuple(&self) -> Option<&Tuple> {
        match self {
            Token::Tuple(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&TokenList> {
        match self {
            Token::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&TokenMap> {
        match self {
            Token::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Cursor over a list or map payload; `None` for every other kind.
    pub fn token_iter(&self) -> Option<Box<dyn TokenIterator>> {
        match self {
            Token::List(list) => Some(list.token_iter()),
            Token::Map(map) => Some(map.token_iter()),
            _ => None,
        }
    }
}

impl PartialEq for Token {
    #[allow(clippy::float_cmp, reason = "number tokens compare exactly")]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Token::None, Token::None) => true,
            (Token::Op(a), Token::Op(b))
            | (Token::Var(a), Token::Var(b))
            | (Token::Str(a), Token::Str(b)) => a == b,
            (Token::Num(a), Token::Num(b)) => a == b,
            (Token::Tuple(a), Token::Tuple(b)) => a == b,
            (Token::List(a), Token::List(b)) => a == b,
            (Token::Map(a), Token::Map(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::None => f.write_str("None"),
            Token::Op(s) | Token::Var(s) => f.write_str(s),
            Token::Num(n) => write!(f, "{n}"),
            Token::Str(s) => write!(f, "\"{s}\""),
            Token::Tuple(t) => write!(f, "{t}"),
            Token::List(l) => write!(f, "{l}"),
            Token::Map(m) => write!(f, "{m}"),
        }
    }
}

impl From<f64> for Token {
    fn from(n: f64) -> Self {
        Token::Num(n)
    }
}

impl From<&str> for Token {
    fn from(s: &str) -> Self {
        Token::Str(s.to_owned())
    }
}

impl From<String> for Token {
    fn from(s: String) -> Self {
        Token::Str(s)
    }
}

impl From<Tuple> for Token {
    fn from(t: Tuple) -> Self {
        Token::Tuple(t)
    }
}

impl From<TokenList> for Token {
    fn from(l: TokenList) -> Self {
        Token::List(l)
    }
}

impl From<TokenMap> for Token {
    fn from(m: TokenMap) -> Self {
        Token::Map(m)
    }
}

#[cfg(test)]
mod tests;
