//! cparse objects - Value and scope object model for the cparse interpreter.
//!
//! This crate provides the containers the evaluator passes around:
//! - `Tuple`: value-semantics argument group (copies deep-clone)
//! - `TokenMap`: reference-semantics scope with parent-chain lookup
//! - `TokenList`: reference-semantics ordered list
//! - `TokenIterator` / `Iterable`: restartable cursors over lists and maps
//! - `Token`: the tagged value handle stored in all of the above
//!
//! # Copy Discipline
//!
//! `Clone` on a `Tuple` copies every element. `Clone` on a `TokenMap` or
//! `TokenList` aliases the same storage; use `deep_clone` to detach.
//!
//! # Threading
//!
//! Maps and lists share storage through `Shared<T>` (`Rc`-based), so every
//! value lives on the thread that created it. The default scopes returned by
//! `TokenMap::base_map` and `TokenMap::default_global` are per thread.

mod errors;
mod iter;
mod list;
mod map;
mod shared;
mod token;
mod tracing_setup;
mod tuple;

pub use errors::{ObjectError, ObjectResult};
pub use iter::{Iterable, OnePass, TokenIterator};
pub use list::{ListIndex, ListIterator, TokenList};
pub use map::{Bindings, GlobalScope, MapData, MapIterator, ScopeChain, TokenMap};
pub use shared::Shared;
pub use token::{TokType, Token};
pub use tracing_setup::init_tracing;
pub use tuple::Tuple;
