use super::*;

mod lex_test;
mod token_test;

fn texts(s: &str) -> Vec<String> {
    lex(s).map(|t| t.text).collect()
}

#[test]
fn test_error_display() {
    let col = 4..6;
    let e = error!(SyntaxError, Some(3), ..&col; "EXPECTED THEN");
    assert_eq!(e.to_string(), "SYNTAX ERROR IN 3 (4..6); EXPECTED THEN");
    assert_eq!(e.code(), ErrorCode::SyntaxError);
    assert_eq!(e.line_number(), Some(3));
    assert_eq!(error!(DivisionByZero).to_string(), "DIVISION BY ZERO");
    assert_eq!(error!(MissingToken, Some(9)).to_string(), "MISSING TOKEN IN 9");
}
