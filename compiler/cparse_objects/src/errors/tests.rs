use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_error_messages() {
    assert_eq!(
        invalid_conversion(TokType::Num).to_string(),
        "invalid conversion: cannot build a list from a NUM token"
    );
    assert_eq!(
        index_out_of_range(5.0, 3).to_string(),
        "index 5 out of range for list of length 3"
    );
    assert_eq!(
        ObjectError::EmptyTuple.to_string(),
        "cannot pop front of an empty tuple"
    );
}

#[test]
fn test_out_of_range_family() {
    assert!(index_out_of_range(-1.0, 0).is_out_of_range());
    assert!(ObjectError::EmptyTuple.is_out_of_range());
    assert!(!invalid_conversion(TokType::Map).is_out_of_range());
}
