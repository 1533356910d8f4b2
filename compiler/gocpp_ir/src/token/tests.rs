use super::*;

#[test]
fn spelling_round_trips_through_lookup() {
    for tok in Token::ALL {
        assert_eq!(Token::from_text(tok.as_str()), Some(tok), "{tok:?}");
    }
}

#[test]
fn spellings_are_distinct() {
    let mut seen = std::collections::HashSet::new();
    for tok in Token::ALL {
        assert!(seen.insert(tok.as_str()), "duplicate spelling {tok}");
    }
}

#[test]
fn unknown_spelling_is_rejected() {
    assert_eq!(Token::from_text("**"), None);
    assert_eq!(Token::from_text(""), None);
}

#[test]
fn assignment_classification() {
    assert!(Token::Define.is_assignment());
    assert!(Token::AndNotAssign.is_assignment());
    assert!(!Token::Eql.is_assignment());
    assert!(!Token::Inc.is_assignment());
}
