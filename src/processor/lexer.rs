//! Hand-written lexer for the enum definitions language.
//!
//! Only breaks the source into positioned `Token`s; `type` is recognised
//! here, every other word comes out as an identifier and the parser decides
//! whether it is allowed.
//
//  Lexical items:
//
//      Upper    ::= [A-Z][A-Za-z0-9_]*
//      Lower    ::= [a-z][A-Za-z0-9_]*
//      Str      ::= '"' json-escaped chars '"'   (single line)
//      Symbols  ::= '=' | '|'
//      Whitespace, `-- line` and `{- block -}` comments are discarded.

use std::iter::Peekable;
use std::str::Chars;

use crate::error::SyntaxError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Type,
    Upper(String),
    Lower(String),
    Str(String),
    Equals,
    Pipe,
    Eof,
}

/// A token and the 1-based position of its first character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned {
    pub token: Token,
    pub line: usize,
    pub column: usize,
}

#[derive(Clone)]
pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
    column: usize,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            chars: src.chars().peekable(),
            line: 1,
            column: 1,
            finished: false,
        }
    }

    fn next_char(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    /// Look one character past `peek_char` without consuming anything.
    fn peek_second(&self) -> Option<char> {
        let mut ahead = self.chars.clone();
        ahead.next();
        ahead.next()
    }

    fn consume_while<F: Fn(char) -> bool>(&mut self, pred: F, buf: &mut String) {
        while let Some(c) = self.peek_char() {
            if pred(c) {
                buf.push(c);
                self.next_char();
            } else {
                break;
            }
        }
    }

    fn read_identifier(&mut self, first: char) -> String {
        let mut id = String::new();
        id.push(first);
        self.consume_while(|c| c.is_ascii_alphanumeric() || c == '_', &mut id);
        id
    }

    /// Skip whitespace and comments. Fails only on an unterminated block
    /// comment.
    fn skip_trivia(&mut self) -> Result<(), SyntaxError> {
        loop {
            match (self.peek_char(), self.peek_second()) {
                (Some(c), _) if c.is_whitespace() => {
                    self.next_char();
                }
                (Some('-'), Some('-')) => {
                    while let Some(c) = self.peek_char() {
                        if c == '\n' {
                            break;
                        }
                        self.next_char();
                    }
                }
                (Some('{'), Some('-')) => self.skip_block_comment()?,
                _ => return Ok(()),
            }
        }
    }

    fn skip_block_comment(&mut self) -> Result<(), SyntaxError> {
        let (line, column) = (self.line, self.column);
        self.next_char();
        self.next_char();
        let mut depth = 1;
        while depth > 0 {
            match self.next_char() {
                Some('{') if self.peek_char() == Some('-') => {
                    self.next_char();
                    depth += 1;
                }
                Some('-') if self.peek_char() == Some('}') => {
                    self.next_char();
                    depth -= 1;
                }
                Some(_) => {}
                None => {
                    return Err(SyntaxError::new(line, column, "unterminated block comment"));
                }
            }
        }
        Ok(())
    }

    /// Read a string literal whose opening quote was already consumed.
    /// Escapes follow JSON, so decoding is left to serde_json.
    fn read_string(&mut self, line: usize, column: usize) -> Result<String, SyntaxError> {
        let mut raw = String::from("\"");
        loop {
            match self.next_char() {
                Some('"') => break,
                Some('\\') => {
                    raw.push('\\');
                    match self.next_char() {
                        Some('\n') | None => {
                            return Err(SyntaxError::new(line, column, "unterminated string"));
                        }
                        Some(c) => raw.push(c),
                    }
                }
                Some('\n') | None => {
                    return Err(SyntaxError::new(line, column, "unterminated string"));
                }
                Some(c) => raw.push(c),
            }
        }
        raw.push('"');

        let text: String = serde_json::from_str(&raw)
            .map_err(|e| SyntaxError::new(line, column, format!("invalid string {raw}: {e}")))?;

        if text.is_empty() {
            return Err(SyntaxError::new(line, column, "tag must not be empty"));
        }
        if text.chars().any(char::is_control) {
            return Err(SyntaxError::new(
                line,
                column,
                format!("tag {raw} contains a control character"),
            ));
        }
        Ok(text)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Spanned, SyntaxError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        if let Err(e) = self.skip_trivia() {
            self.finished = true;
            return Some(Err(e));
        }

        let (line, column) = (self.line, self.column);
        let ch = match self.next_char() {
            Some(c) => c,
            None => {
                self.finished = true;
                return Some(Ok(Spanned {
                    token: Token::Eof,
                    line,
                    column,
                }));
            }
        };

        let tok_res = match ch {
            '=' => Ok(Token::Equals),
            '|' => Ok(Token::Pipe),
            '"' => self.read_string(line, column).map(Token::Str),
            c if c.is_ascii_uppercase() => Ok(Token::Upper(self.read_identifier(c))),
            c if c.is_ascii_lowercase() => match self.read_identifier(c).as_str() {
                "type" => Ok(Token::Type),
                other => Ok(Token::Lower(other.to_string())),
            },
            e => Err(SyntaxError::new(
                line,
                column,
                format!("unexpected character '{e}'"),
            )),
        };

        if tok_res.is_err() {
            self.finished = true;
        }
        Some(tok_res.map(|token| Spanned {
            token,
            line,
            column,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::{Lexer, Token};

    fn tokens(src: &str) -> Vec<Token> {
        let spanned: Result<Vec<_>, _> = Lexer::new(src).collect();
        spanned.unwrap().into_iter().map(|s| s.token).collect()
    }

    #[test]
    fn test_tokenisation() {
        let test_cases = vec![
            (
                "type Color = Red | Green | Blue",
                vec![
                    Token::Type,
                    Token::Upper("Color".into()),
                    Token::Equals,
                    Token::Upper("Red".into()),
                    Token::Pipe,
                    Token::Upper("Green".into()),
                    Token::Pipe,
                    Token::Upper("Blue".into()),
                    Token::Eof,
                ],
            ),
            (
                "type Fruit = Apple \"apple\" | Banana \"ba\\\"nana\"",
                vec![
                    Token::Type,
                    Token::Upper("Fruit".into()),
                    Token::Equals,
                    Token::Upper("Apple".into()),
                    Token::Str("apple".into()),
                    Token::Pipe,
                    Token::Upper("Banana".into()),
                    Token::Str("ba\"nana".into()),
                    Token::Eof,
                ],
            ),
            ("", vec![Token::Eof]),
        ];

        for (src, expected) in test_cases {
            assert_eq!(tokens(src), expected);
        }
    }

    #[test]
    fn test_comments_are_skipped() {
        let src = "-- colours\n{- block {- nested -} still comment -}\ntype X = A -- trailing\n";
        assert_eq!(
            tokens(src),
            vec![
                Token::Type,
                Token::Upper("X".into()),
                Token::Equals,
                Token::Upper("A".into()),
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_positions() {
        let spanned: Vec<_> = Lexer::new("type\n  Color")
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!((spanned[0].line, spanned[0].column), (1, 1));
        assert_eq!((spanned[1].line, spanned[1].column), (2, 3));
    }

    #[test]
    fn test_lexer_errors() {
        let test_cases = vec![
            ("type X = A; ", "line 1, column 11: unexpected character ';'"),
            ("type X = A \"open", "line 1, column 12: unterminated string"),
            ("type X = A \"\"", "line 1, column 12: tag must not be empty"),
            ("{- never closed", "line 1, column 1: unterminated block comment"),
        ];

        for (src, expected) in test_cases {
            let err = Lexer::new(src)
                .collect::<Result<Vec<_>, _>>()
                .unwrap_err();
            assert_eq!(err.to_string(), expected);
        }
    }

    #[test]
    fn test_lexer_stops_after_error() {
        let mut lex = Lexer::new("# type");
        assert!(lex.next().unwrap().is_err());
        assert!(lex.next().is_none());
    }
}
