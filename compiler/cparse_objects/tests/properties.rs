//! Property tests for the copy discipline and scope rules of the object model.
//!
//! Each test checks one behavior over generated inputs:
//! 1. Tuple copies never alias
//! 2. Map and list copies always alias until `deep_clone`
//! 3. Scope chain resolution, `assign` vs `insert`, `erase` locality
//! 4. Tuple to list conversion isolation and failure
//! 5. Cursor auto-rewind

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use cparse_objects::{Iterable, ObjectError, TokType, Token, TokenList, TokenMap, Tuple};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

/// Generate a scalar token.
fn scalar_strategy() -> impl Strategy<Value = Token> {
    prop_oneof![
        Just(Token::None),
        (-1.0e6..1.0e6f64).prop_map(Token::Num),
        "[a-z]{0,8}".prop_map(Token::Str),
    ]
}

/// Generate a binding name.
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,7}"
}

proptest! {
    #[test]
    fn tuple_copy_never_aliases(
        items in prop::collection::vec(scalar_strategy(), 0..8),
        extra in scalar_strategy(),
    ) {
        let original: Tuple = items.iter().cloned().collect();
        let mut copy = original.clone();
        copy.push_back(&extra);

        prop_assert_eq!(original.len(), items.len());
        prop_assert_eq!(copy.len(), items.len() + 1);
        prop_assert_eq!(original.iter().cloned().collect::<Vec<_>>(), items);
    }

    #[test]
    fn map_copy_aliases_until_deep_clone(
        key in key_strategy(),
        first in scalar_strategy(),
        second in scalar_strategy(),
    ) {
        let m = TokenMap::root();
        m.insert(key.clone(), first.clone());

        let n = m.clone();
        n.insert(key.clone(), second.clone());
        prop_assert_eq!(m.find(&key), Some(second.clone()));

        let detached = m.deep_clone();
        detached.insert(key.clone(), first.clone());
        prop_assert_eq!(m.find(&key), Some(second));
    }

    #[test]
    fn list_copy_aliases_until_deep_clone(
        items in prop::collection::vec(scalar_strategy(), 0..8),
        extra in scalar_strategy(),
    ) {
        let list: TokenList = items.iter().cloned().collect();
        let alias = list.clone();
        alias.push(extra.clone());
        prop_assert_eq!(list.len(), items.len() + 1);

        let detached = list.deep_clone();
        detached.push(extra);
        prop_assert_eq!(list.len(), items.len() + 1);
    }

    #[test]
    fn assign_insert_erase_follow_scope_rules(
        key in key_strategy(),
        a in -100.0..100.0f64,
        b in -100.0..100.0f64,
        c in -100.0..100.0f64,
    ) {
        let root = TokenMap::root();
        root.insert(key.clone(), Token::Num(a));
        let child = root.child();

        // Local search misses, chain resolution hits the root binding.
        prop_assert_eq!(child.find(&key), None);
        prop_assert_eq!(child.with_entry(&key, |tok| tok.clone()), Token::Num(a));
        prop_assert!(!child.contains_key(&key));

        child.assign(&key, Token::Num(b));
        prop_assert_eq!(root.find(&key), Some(Token::Num(b)));
        prop_assert_eq!(child.find(&key), None);

        child.insert(key.clone(), Token::Num(c));
        prop_assert_eq!(child.lookup(&key), Some(Token::Num(c)));
        prop_assert_eq!(root.find(&key), Some(Token::Num(b)));

        child.erase(&key);
        prop_assert_eq!(child.lookup(&key), Some(Token::Num(b)));
    }

    #[test]
    fn tuple_to_list_is_isolated(
        items in prop::collection::vec(scalar_strategy(), 1..8),
        replacement in scalar_strategy(),
    ) {
        let tuple: Tuple = items.iter().cloned().collect();
        let list = TokenList::from_token(&Token::from(tuple.clone())).unwrap();
        prop_assert_eq!(&*list.items(), items.as_slice());

        list.set(0_usize, replacement).unwrap();
        prop_assert_eq!(tuple.get(0), Some(&items[0]));
    }

    #[test]
    fn list_cursor_rewinds_after_exhaustion(
        items in prop::collection::vec(scalar_strategy(), 0..8),
    ) {
        let list: TokenList = items.iter().cloned().collect();
        let mut cursor = list.token_iter();

        for item in &items {
            let got = cursor.next();
            prop_assert_eq!(got.as_ref(), Some(item));
        }
        prop_assert_eq!(cursor.next(), None);
        prop_assert_eq!(cursor.next(), items.first().cloned());
    }
}

#[test]
fn conversion_from_non_tuple_fails() {
    for token in [
        Token::None,
        Token::from(1.0),
        Token::from("s"),
        Token::from(TokenList::new()),
        Token::from(TokenMap::root()),
    ] {
        let tag = token.tok_type();
        assert_eq!(
            TokenList::from_token(&token),
            Err(ObjectError::InvalidConversion { found: tag })
        );
        assert_ne!(tag, TokType::Tuple);
    }
}

#[test]
fn map_iterator_rewinds_after_exhaustion() {
    let map = TokenMap::root();
    map.insert("a", Token::from(1.0));
    map.insert("b", Token::from(2.0));
    map.insert("c", Token::from(3.0));
    let mut cursor = map.token_iter();

    let first = cursor.next();
    assert!(first.is_some());
    assert!(cursor.next().is_some());
    assert!(cursor.next().is_some());
    assert_eq!(cursor.next(), None);
    assert_eq!(cursor.next(), first);
}
