use super::{Column, LineNumber};

pub fn lex(s: &str) -> Lexer<'_> {
    Lexer::new(s)
}

/// A whitespace delimited word of source text.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub text: String,
    pub line: usize,
    pub col: Column,
}

impl Token {
    pub fn line_number(&self) -> LineNumber {
        Some(self.line)
    }

    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

fn is_token_char(c: char) -> bool {
    !c.is_whitespace() && !c.is_control()
}

/// Lazy token stream over source text.
///
/// Anything between `(` and `)` is a comment and is dropped, even in the
/// middle of a word. A `)` outside of a comment is dropped as well.
/// Scanning never fails; the stream simply ends.
pub struct Lexer<'a> {
    chars: std::str::Chars<'a>,
    line: usize,
    col: usize,
    comment: bool,
}

impl<'a> Lexer<'a> {
    fn new(s: &'a str) -> Lexer<'a> {
        Lexer {
            chars: s.chars(),
            line: 1,
            col: 0,
            comment: false,
        }
    }

    /// Hands over the source that has not been scanned yet.
    ///
    /// Returns what is left of the current line and the numbered lines
    /// after it. The lexer is exhausted afterwards.
    pub fn remainder(&mut self) -> (&'a str, impl Iterator<Item = (usize, &'a str)> + 'a) {
        let rest = self.chars.as_str();
        self.chars = "".chars();
        let (tail, rest, first) = if self.col == 0 {
            ("", rest, self.line)
        } else {
            match rest.find('\n') {
                Some(n) => (&rest[..n], &rest[n + 1..], self.line + 1),
                None => (rest, "", self.line + 1),
            }
        };
        let lines = rest
            .lines()
            .enumerate()
            .map(move |(index, line)| (first + index, line));
        (tail, lines)
    }

    fn advance(&mut self, ch: char) {
        if ch == '\n' {
            self.line += 1;
            self.col = 0;
        } else {
            self.col += 1;
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let mut text = String::new();
        let mut line = self.line;
        let mut col = 0..0;
        while let Some(ch) = self.chars.next() {
            let (ch_line, ch_col) = (self.line, self.col);
            self.advance(ch);
            self.comment = self.comment && ch != ')' || ch == '(';
            if self.comment || ch == ')' {
                continue;
            }
            if is_token_char(ch) {
                if text.is_empty() {
                    line = ch_line;
                    col = ch_col..ch_col;
                }
                if ch_line == line {
                    col.end = ch_col + 1;
                }
                text.push(ch);
                continue;
            }
            if !text.is_empty() {
                break;
            }
        }
        if text.is_empty() {
            None
        } else {
            Some(Token { text, line, col })
        }
    }
}
