//! Hierarchical scopes and dictionaries.
//!
//! A `TokenMap` is a reference to a `MapData` payload: a local binding table
//! plus an optional parent scope. Copies of a `TokenMap` alias the payload;
//! `deep_clone` gives an independent snapshot that keeps the same parent.
//!
//! # Name resolution
//!
//! - `find` looks at the local table only.
//! - `lookup`, `find_map` and `with_entry` walk the scope chain from the
//!   innermost scope outwards.
//! - `assign` overwrites the nearest existing binding, or declares locally.
//! - `insert` and `erase` only ever touch the local table.
//!
//! The parent link is a counted alias of the parent's payload, so a parent
//! lives at least as long as its children.

use std::cell::Ref;
use std::fmt;
use std::ops::Deref;

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

use crate::iter::{Iterable, TokenIterator};
use crate::shared::Shared;
use crate::token::Token;

/// Local binding table of one scope, in declaration order.
pub type Bindings = IndexMap<String, Token, FxBuildHasher>;

/// Payload of a `TokenMap`.
///
/// Cloning copies the local table and aliases the parent.
#[derive(Clone, Debug, Default)]
pub struct MapData {
    /// Bindings declared directly in this scope.
    map: Bindings,
    /// Enclosing scope (for lexical scoping).
    parent: Option<TokenMap>,
}

impl MapData {
    /// Create an empty payload under `parent`.
    pub fn new(parent: Option<TokenMap>) -> Self {
        MapData {
            map: Bindings::default(),
            parent,
        }
    }

    #[inline]
    pub fn map(&self) -> &Bindings {
        &self.map
    }

    #[inline]
    pub fn parent(&self) -> Option<&TokenMap> {
        self.parent.as_ref()
    }
}

thread_local! {
    static BASE_MAP: TokenMap = {
        tracing::debug!("creating base scope");
        TokenMap::root()
    };
    static DEFAULT_GLOBAL: TokenMap = {
        tracing::debug!("creating default global scope");
        TokenMap::with_parent(&TokenMap::base_map())
    };
}

/// A scope or dictionary with alias semantics.
#[derive(Clone)]
pub struct TokenMap(Shared<MapData>);

impl TokenMap {
    /// Create an empty map whose parent is [`TokenMap::base_map`].
    pub fn new() -> Self {
        TokenMap::with_parent(&TokenMap::base_map())
    }

    /// Create an empty map with no parent.
    pub fn root() -> Self {
        TokenMap(Shared::new(MapData::new(None)))
    }

    /// Create an empty map under `parent`.
    pub fn with_parent(parent: &TokenMap) -> Self {
        TokenMap(Shared::new(MapData::new(Some(parent.clone()))))
    }

    /// Root scope holding built-in bindings.
    ///
    /// Created on first access and shared by every later caller on this thread.
    pub fn base_map() -> TokenMap {
        BASE_MAP.with(TokenMap::clone)
    }

    /// Default top-level scope, a child of [`TokenMap::base_map`].
    pub fn default_global() -> TokenMap {
        DEFAULT_GLOBAL.with(TokenMap::clone)
    }

    /// Enclosing scope, or `None` for a root.
    pub fn parent(&self) -> Option<TokenMap> {
        self.0.borrow().parent.clone()
    }

    /// Read access to the local bindings.
    pub fn map(&self) -> Ref<'_, Bindings> {
        Ref::map(self.0.borrow(), MapData::map)
    }

    /// Number of local bindings.
    pub fn len(&self) -> usize {
        self.0.borrow().map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().map.is_empty()
    }

    /// Returns `true` if `key` is bound in the local table.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.borrow().map.contains_key(key)
    }

    /// Look up `key` in the local table only.
    pub fn find(&self, key: &str) -> Option<Token> {
        self.0.borrow().map.get(key).cloned()
    }

    /// Look up `key` along the scope chain.
    pub fn lookup(&self, key: &str) -> Option<Token> {
        self.scope_chain().find_map(|scope| scope.find(key))
    }

    /// Nearest scope in the chain (starting with `self`) that binds `key`.
    pub fn find_map(&self, key: &str) -> Option<TokenMap> {
        self.scope_chain().find(|scope| scope.contains_key(key))
    }

    /// Run `f` on the binding `key` resolves to.
    ///
    /// The nearest binding along the scope chain is used. If no scope binds
    /// `key`, a `Token::None` binding is created in the local table first.
    ///
    /// `f` must not access the scope that owns the binding.
    pub fn with_entry<R>(&self, key: &str, f: impl FnOnce(&mut Token) -> R) -> R {
        let owner = self.find_map(key).unwrap_or_else(|| self.clone());
        let mut data = owner.0.borrow_mut();
        let slot = data.map.entry(key.to_owned()).or_default();
        f(slot)
    }

    /// Overwrite the nearest binding of `key`, or declare it locally.
    pub fn assign(&self, key: &str, value: Token) {
        let owner = self.find_map(key).unwrap_or_else(|| {
            tracing::trace!(key, "assign fell through to local declaration");
            self.clone()
        });
        owner.0.borrow_mut().map.insert(key.to_owned(), value);
    }

    /// Bind `key` in the local table, shadowing any ancestor binding.
    ///
    /// Returns the previous local value.
    pub fn insert(&self, key: impl Into<String>, value: Token) -> Option<Token> {
        self.0.borrow_mut().map.insert(key.into(), value)
    }

    /// Remove `key` from the local table.
    ///
    /// Ancestors are untouched, so a later chain lookup may find their binding.
    /// The remaining bindings keep their declaration order.
    pub fn erase(&self, key: &str) -> Option<Token> {
        self.0.borrow_mut().map.shift_remove(key)
    }

    /// Create a nested scope whose parent is `self`.
    #[must_use]
    pub fn child(&self) -> TokenMap {
        tracing::trace!(depth = self.scope_chain().count(), "entering child scope");
        TokenMap::with_parent(self)
    }

    /// Independent copy of the local table under the same parent.
    #[must_use]
    pub fn deep_clone(&self) -> TokenMap {
        TokenMap(self.0.detach())
    }

    /// Returns `true` if both maps alias the same payload.
    #[inline]
    pub fn ptr_eq(&self, other: &TokenMap) -> bool {
        self.0.ptr_eq(&other.0)
    }

    /// Returns `true` if `ancestor` appears in the parent chain of `self`.
    ///
    /// A map is not its own descendant.
    pub fn is_descendant_of(&self, ancestor: &TokenMap) -> bool {
        self.scope_chain().skip(1).any(|scope| scope.ptr_eq(ancestor))
    }

    /// Walk from `self` outwards to the root scope.
    pub fn scope_chain(&self) -> ScopeChain {
        ScopeChain {
            next: Some(self.clone()),
        }
    }
}

impl Default for TokenMap {
    fn default() -> Self {
        TokenMap::new()
    }
}

impl PartialEq for TokenMap {
    fn eq(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        let (a, b) = (self.0.borrow(), other.0.borrow());
        let same_parent = match (&a.parent, &b.parent) {
            (Some(pa), Some(pb)) => pa.ptr_eq(pb),
            (None, None) => true,
            _ => false,
        };
        same_parent && a.map == b.map
    }
}

impl fmt::Debug for TokenMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.0.borrow();
        f.debug_struct("TokenMap")
            .field("map", &data.map)
            .field("has_parent", &data.parent.is_some())
            .finish()
    }
}

impl fmt::Display for TokenMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.0.borrow();
        if data.map.is_empty() {
            return write!(f, "{{}}");
        }
        let mut keys: Vec<&String> = data.map.keys().collect();
        keys.sort_unstable();
        write!(f, "{{")?;
        for (i, key) in keys.into_iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, " \"{key}\": {}", data.map[key])?;
        }
        write!(f, " }}")
    }
}

impl Iterable for TokenMap {
    fn token_iter(&self) -> Box<dyn TokenIterator> {
        Box::new(MapIterator::new(self))
    }
}

/// Iterator over a scope and its ancestors, innermost first.
#[derive(Debug)]
pub struct ScopeChain {
    next: Option<TokenMap>,
}

impl Iterator for ScopeChain {
    type Item = TokenMap;

    fn next(&mut self) -> Option<TokenMap> {
        let current = self.next.take()?;
        self.next = current.parent();
        Some(current)
    }
}

/// Restartable cursor over the keys of a map's local table.
///
/// Keys come out in declaration order, one indexed step each. Ancestor scopes
/// are never visited. The cursor observes the live table, so erasing keys
/// mid-walk may skip entries; keys inserted mid-walk are visited.
#[derive(Debug)]
pub struct MapIterator {
    data: Shared<MapData>,
    pos: usize,
}

impl MapIterator {
    pub fn new(map: &TokenMap) -> Self {
        MapIterator {
            data: map.0.clone(),
            pos: 0,
        }
    }
}

impl TokenIterator for MapIterator {
    fn next(&mut self) -> Option<Token> {
        let key = self
            .data
            .borrow()
            .map
            .get_index(self.pos)
            .map(|(key, _)| key.clone());
        match key {
            Some(key) => {
                self.pos += 1;
                Some(Token::Str(key))
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

/// Per-context top-level scope: a fresh child of [`TokenMap::default_global`].
///
/// Bindings made here shadow the shared defaults without modifying them.
#[derive(Clone, Debug)]
pub struct GlobalScope(TokenMap);

impl GlobalScope {
    #[must_use]
    pub fn new() -> Self {
        GlobalScope(TokenMap::default_global().child())
    }

    pub fn into_map(self) -> TokenMap {
        self.0
    }
}

impl Default for GlobalScope {
    fn default() -> Self {
        GlobalScope::new()
    }
}

impl Deref for GlobalScope {
    type Target = TokenMap;

    fn deref(&self) -> &TokenMap {
        &self.0
    }
}

impl From<GlobalScope> for TokenMap {
    fn from(scope: GlobalScope) -> Self {
        scope.0
    }
}
