//! Value-semantics argument groups.
//!
//! A `Tuple` owns its elements outright. Every copy, whether through `Clone`
//! or `push_back`, deep-clones the elements, so mutating a tuple that was
//! passed somewhere never leaks back to the caller.

use std::collections::VecDeque;
use std::fmt;

use crate::errors::{ObjectError, ObjectResult};
use crate::token::Token;

/// Ordered group of owned tokens.
#[derive(Debug, Default, PartialEq)]
pub struct Tuple {
    items: VecDeque<Token>,
}

impl Tuple {
    /// Create an empty tuple.
    pub fn new() -> Self {
        Tuple::default()
    }

    /// Create a tuple holding a deep clone of `a`.
    pub fn single(a: &Token) -> Self {
        let mut tuple = Tuple::new();
        tuple.push_back(a);
        tuple
    }

    /// Create a tuple holding deep clones of `a` and `b`, in that order.
    pub fn pair(a: &Token, b: &Token) -> Self {
        let mut tuple = Tuple::single(a);
        tuple.push_back(b);
        tuple
    }

    /// Append a deep clone of `value`.
    pub fn push_back(&mut self, value: &Token) {
        self.items.push_back(value.deep_clone());
    }

    /// Remove the first element and hand ownership to the caller.
    pub fn pop_front(&mut self) -> ObjectResult<Token> {
        self.items.pop_front().ok_or(ObjectError::EmptyTuple)
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Element at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.items.get(index)
    }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.items.iter()
    }
}

impl Clone for Tuple {
    fn clone(&self) -> Self {
        Tuple {
            items: self.items.iter().map(Token::deep_clone).collect(),
        }
    }
}

impl FromIterator<Token> for Tuple {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Tuple {
            items: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Tuple {
    type Item = Token;
    type IntoIter = std::collections::vec_deque::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl fmt::Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, ")")
    }
}
