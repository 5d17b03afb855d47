//! Ordered mutable lists with alias semantics.
//!
//! Copies of a `TokenList` share one sequence; `deep_clone` detaches. A list
//! built from a tuple deep-clones the tuple's elements, so the two never share
//! storage.

use std::cell::Ref;
use std::fmt;

use crate::errors::{index_out_of_range, invalid_conversion, ObjectError, ObjectResult};
use crate::iter::{Iterable, TokenIterator};
use crate::shared::Shared;
use crate::token::Token;
use crate::tuple::Tuple;

/// Position in a list, given either as an integer or as a number token.
///
/// Floating positions are truncated toward zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ListIndex {
    Int(usize),
    Float(f64),
}

impl ListIndex {
    /// Resolve to a position in `0..len`.
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss,
        reason = "floating positions truncate toward zero after the sign and range checks"
    )]
    fn resolve(self, len: usize) -> ObjectResult<usize> {
        match self {
            ListIndex::Int(pos) if pos < len => Ok(pos),
            ListIndex::Int(pos) => Err(index_out_of_range(pos as f64, len)),
            ListIndex::Float(idx) => {
                if idx.is_finite() && idx > -1.0 {
                    let pos = idx.trunc() as usize;
                    if pos < len {
                        return Ok(pos);
                    }
                }
                Err(index_out_of_range(idx, len))
            }
        }
    }

    /// Like `resolve`, but a position truncating below zero counts back from
    /// `len`.
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "the distance from the end is a finite positive integer here"
    )]
    fn resolve_from_end(self, len: usize) -> ObjectResult<usize> {
        match self {
            ListIndex::Float(idx) if idx.is_finite() && idx.trunc() < 0.0 => {
                let back = (-idx.trunc()) as usize;
                len.checked_sub(back)
                    .ok_or_else(|| index_out_of_range(idx, len))
            }
            index => index.resolve(len),
        }
    }
}

impl From<usize> for ListIndex {
    fn from(pos: usize) -> Self {
        ListIndex::Int(pos)
    }
}

impl From<f64> for ListIndex {
    fn from(idx: f64) -> Self {
        ListIndex::Float(idx)
    }
}

/// An ordered, mutable, shared sequence of tokens.
#[derive(Clone, Debug, Default)]
pub struct TokenList(Shared<Vec<Token>>);

impl TokenList {
    /// Create an empty list.
    pub fn new() -> Self {
        TokenList::default()
    }

    /// Build a list from a tuple token.
    ///
    /// Fails with `InvalidConversion` for any other kind of token.
    pub fn from_token(token: &Token) -> ObjectResult<Self> {
        match token {
            Token::Tuple(tuple) => Ok(TokenList::from(tuple)),
            other => Err(invalid_conversion(other.tok_type())),
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Read access to the elements.
    pub fn items(&self) -> Ref<'_, [Token]> {
        Ref::map(self.0.borrow(), Vec::as_slice)
    }

    /// Element at `index`.
    pub fn get(&self, index: impl Into<ListIndex>) -> ObjectResult<Token> {
        let items = self.0.borrow();
        let pos = index.into().resolve(items.len())?;
        Ok(items[pos].clone())
    }

    /// Replace the element at `index`, returning the old one.
    pub fn set(&self, index: impl Into<ListIndex>, value: Token) -> ObjectResult<Token> {
        self.with_item(index, |slot| std::mem::replace(slot, value))
    }

    /// Run `f` on the element at `index`.
    ///
    /// `f` must not access this list.
    pub fn with_item<R>(
        &self,
        index: impl Into<ListIndex>,
        f: impl FnOnce(&mut Token) -> R,
    ) -> ObjectResult<R> {
        let mut items = self.0.borrow_mut();
        let pos = index.into().resolve(items.len())?;
        Ok(f(&mut items[pos]))
    }

    /// Append `item`.
    pub fn push(&self, item: Token) {
        self.0.borrow_mut().push(item);
    }

    /// Remove and return the element at `index`, or the last element when
    /// `index` is `None`.
    ///
    /// A negative floating position counts from the end, so `-1.0` pops the
    /// last element.
    pub fn pop(&self, index: Option<ListIndex>) -> ObjectResult<Token> {
        let mut items = self.0.borrow_mut();
        let len = items.len();
        let pos = match index {
            Some(index) => index.resolve_from_end(len)?,
            None => len
                .checked_sub(1)
                .ok_or_else(|| index_out_of_range(-1.0, len))?,
        };
        Ok(items.remove(pos))
    }

    /// Independent copy of the sequence. Elements are copied as handles.
    #[must_use]
    pub fn deep_clone(&self) -> TokenList {
        TokenList(self.0.detach())
    }

    /// Returns `true` if both lists alias the same sequence.
    #[inline]
    pub fn ptr_eq(&self, other: &TokenList) -> bool {
        self.0.ptr_eq(&other.0)
    }
}

impl From<&Tuple> for TokenList {
    fn from(tuple: &Tuple) -> Self {
        tuple.iter().map(Token::deep_clone).collect()
    }
}

impl TryFrom<&Token> for TokenList {
    type Error = ObjectError;

    fn try_from(token: &Token) -> ObjectResult<Self> {
        TokenList::from_token(token)
    }
}

impl FromIterator<Token> for TokenList {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        TokenList(Shared::new(iter.into_iter().collect()))
    }
}

impl PartialEq for TokenList {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || *self.0.borrow() == *other.0.borrow()
    }
}

impl fmt::Display for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.0.borrow().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}

impl Iterable for TokenList {
    fn token_iter(&self) -> Box<dyn TokenIterator> {
        Box::new(ListIterator::new(self))
    }
}

/// Restartable cursor over a list's positions `0..len`.
///
/// The cursor observes the live sequence; elements pushed mid-walk are
/// visited, removals may skip elements.
#[derive(Debug)]
pub struct ListIterator {
    items: Shared<Vec<Token>>,
    pos: usize,
}

impl ListIterator {
    pub fn new(list: &TokenList) -> Self {
        ListIterator {
            items: list.0.clone(),
            pos: 0,
        }
    }
}

impl TokenIterator for ListIterator {
    fn next(&mut self) -> Option<Token> {
        let item = self.items.borrow().get(self.pos).cloned();
        match item {
            Some(item) => {
                self.pos += 1;
                Some(item)
            }
            None => {
                self.pos = 0;
                None
            }
        }
    }

    fn reset(&mut self) {
        self.pos = 0;
    }
}
