//! Uniform iteration over lists and maps.
//!
//! The evaluator's `for each` walks `TokenList` and `TokenMap` through the same
//! cursor interface. A cursor is restartable: when it runs off the end it
//! reports `None` once and rewinds, so the next call starts over.
//!
//! | Container   | Yields                          |
//! |-------------|---------------------------------|
//! | `TokenList` | elements, positions `0..len`    |
//! | `TokenMap`  | local keys as `Token::Str`      |

use crate::token::Token;

/// A restartable cursor over live container storage.
pub trait TokenIterator {
    /// Next element, or `None` at the end. Returning `None` rewinds the cursor.
    fn next(&mut self) -> Option<Token>;

    /// Rewind to the first element.
    fn reset(&mut self);
}

/// A container that hands out cursors over its current storage.
pub trait Iterable {
    fn token_iter(&self) -> Box<dyn TokenIterator>;
}

/// Borrowing adapter that walks a cursor once as a std iterator.
///
/// Stops at the first `None`, which leaves the cursor rewound.
#[derive(Debug)]
pub struct OnePass<'a, I: ?Sized>(&'a mut I);

impl<'a, I: TokenIterator + ?Sized> OnePass<'a, I> {
    pub fn new(cursor: &'a mut I) -> Self {
        OnePass(cursor)
    }
}

impl<I: TokenIterator + ?Sized> Iterator for OnePass<'_, I> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        TokenIterator::next(self.0)
    }
}
