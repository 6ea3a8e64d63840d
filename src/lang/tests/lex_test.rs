use super::*;

#[test]
fn test_whitespace_separates() {
    assert_eq!(texts("x = 10\n\tprint   x\r\n"), vec!["x", "=", "10", "print", "x"]);
}

#[test]
fn test_last_token_without_newline() {
    assert_eq!(texts("print x"), vec!["print", "x"]);
}

#[test]
fn test_empty() {
    assert_eq!(texts(""), Vec::<String>::new());
    assert_eq!(texts("  \n (only a comment) \n"), Vec::<String>::new());
}

#[test]
fn test_comment_dropped() {
    assert_eq!(texts("x (set it) = 1"), vec!["x", "=", "1"]);
    assert_eq!(texts("(a\nmultiline\ncomment) y"), vec!["y"]);
}

#[test]
fn test_comment_inside_word() {
    assert_eq!(texts("pr(nope)int x"), vec!["print", "x"]);
}

#[test]
fn test_stray_close_paren_dropped() {
    assert_eq!(texts("x ) = 1"), vec!["x", "=", "1"]);
    assert_eq!(texts("go)to"), vec!["goto"]);
}

#[test]
fn test_open_paren_inside_comment() {
    assert_eq!(texts("((a)b)c"), vec!["bc"]);
}

#[test]
fn test_positions() {
    let tokens: Vec<Token> = lex("x = 1\n  print x").collect();
    assert_eq!(tokens[0].line, 1);
    assert_eq!(tokens[0].col, 0..1);
    assert_eq!(tokens[2].col, 4..5);
    assert_eq!(tokens[3].text, "print");
    assert_eq!(tokens[3].line, 2);
    assert_eq!(tokens[3].col, 2..7);
    assert_eq!(tokens[4].col, 8..9);
}

#[test]
fn test_remainder_after_newline() {
    let mut lexer = lex("data\n: ship\nx.......\n");
    assert_eq!(lexer.next().map(|t| t.text), Some("data".to_string()));
    let (tail, lines) = lexer.remainder();
    assert_eq!(tail, "");
    let lines: Vec<(usize, &str)> = lines.collect();
    assert_eq!(lines, vec![(2, ": ship"), (3, "x.......")]);
    assert_eq!(lexer.next(), None);
}

#[test]
fn test_remainder_mid_line() {
    let mut lexer = lex("x = 1 data  \n..x.....");
    assert_eq!(lexer.by_ref().take(4).count(), 4);
    let (tail, lines) = lexer.remainder();
    assert_eq!(tail, " ");
    let lines: Vec<(usize, &str)> = lines.collect();
    assert_eq!(lines, vec![(2, "..x.....")]);
}
