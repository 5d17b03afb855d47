use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_tok_type_bits() {
    assert!(TokType::Tuple.is_iterable());
    assert!(TokType::List.is_iterable());
    assert!(TokType::Map.is_iterable());
    assert!(!TokType::Num.is_iterable());

    assert!(TokType::Map.is_map());
    assert!(!TokType::List.is_map());
    assert_eq!(TokType::Tuple.bits(), 0x21);
}

#[test]
fn test_token_tags() {
    assert_eq!(Token::None.tok_type(), TokType::None);
    assert_eq!(Token::from(1.0).tok_type(), TokType::Num);
    assert_eq!(Token::from("a").tok_type(), TokType::Str);
    assert_eq!(Token::var("x").tok_type(), TokType::Var);
    assert_eq!(Token::op("+").tok_type(), TokType::Op);
    assert_eq!(Token::from(Tuple::new()).tok_type(), TokType::Tuple);
    assert_eq!(Token::from(TokenList::new()).tok_type(), TokType::List);
    assert_eq!(Token::from(TokenMap::root()).tok_type(), TokType::Map);
}

#[test]
fn test_token_default_is_none() {
    assert_eq!(Token::default(), Token::None);
}

#[test]
fn test_token_display() {
    assert_eq!(Token::None.to_string(), "None");
    assert_eq!(Token::from(42.0).to_string(), "42");
    assert_eq!(Token::from(2.5).to_string(), "2.5");
    assert_eq!(Token::from("hi").to_string(), "\"hi\"");
    assert_eq!(Token::var("x").to_string(), "x");
    assert_eq!(Token::op("+").to_string(), "+");

    let tuple = Tuple::pair(&Token::from(1.0), &Token::from("a"));
    assert_eq!(Token::from(tuple).to_string(), "(1, \"a\")");
}

#[test]
fn test_token_num_display_keeps_every_digit() {
    assert_eq!(Token::from(std::f64::consts::PI).to_string(), "3.141592653589793");
    assert_eq!(Token::from(1_000_000.0).to_string(), "1000000");
    assert_eq!(Token::from(-0.1).to_string(), "-0.1");

    let n = 2.0_f64 / 3.0;
    let rendered = Token::from(n).to_string();
    assert_eq!(rendered.parse::<f64>(), Ok(n));
}

#[test]
fn test_token_truthiness() {
    assert_eq!(Token::None.as_bool(), Some(false));
    assert_eq!(Token::from(0.0).as_bool(), Some(false));
    assert_eq!(Token::from(3.0).as_bool(), Some(true));
    assert_eq!(Token::from("").as_bool(), Some(false));
    assert_eq!(Token::from("x").as_bool(), Some(true));
    assert_eq!(Token::from(Tuple::new()).as_bool(), Some(false));
    assert_eq!(Token::from(TokenMap::root()).as_bool(), Some(true));
    assert_eq!(Token::var("x").as_bool(), None);
}

#[test]
fn test_token_accessors() {
    assert_eq!(Token::from(1.5).as_num(), Some(1.5));
    assert_eq!(Token::from("s").as_num(), None);
    assert_eq!(Token::var("name").as_str(), Some("name"));
    assert!(Token::from(Tuple::new()).as_tuple().is_some());
    assert!(Token::from(TokenList::new()).as_list().is_some());
    assert!(Token::from(TokenMap::root()).as_map().is_some());
    assert!(Token::None.as_map().is_none());
}

#[test]
fn test_token_equality_requires_same_tag() {
    assert_eq!(Token::from("x"), Token::from("x"));
    assert_ne!(Token::from("x"), Token::var("x"));
    assert_ne!(Token::from(1.0), Token::from("1"));
}

#[test]
fn test_token_clone_aliases_list() {
    let list = TokenList::new();
    let token = Token::from(list.clone());
    let copy = token.clone();

    list.push(Token::from(1.0));
    assert_eq!(copy.as_list().map(TokenList::len), Some(1));
}

#[test]
fn test_token_deep_clone_detaches_list() {
    let list = TokenList::new();
    let token = Token::from(list.clone());
    let copy = token.deep_clone();

    list.push(Token::from(1.0));
    assert_eq!(copy.as_list().map(TokenList::len), Some(0));
}

#[test]
fn test_token_iter_only_for_containers() {
    assert!(Token::from(TokenList::new()).token_iter().is_some());
    assert!(Token::from(TokenMap::root()).token_iter().is_some());
    assert!(Token::from(1.0).token_iter().is_none());
}
