use std::fmt;

use crate::ast::Token;

/// Zero-based character offset into a binding expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position(pub usize);

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Splits a binding expression into [`Token`]s, skipping whitespace.
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    token_start: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
            token_start: 0,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn is_identifier_char(ch: char) -> bool {
        !ch.is_whitespace() && !matches!(ch, '&' | '|' | '!' | '(' | ')')
    }

    fn read_identifier(&mut self) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if Self::is_identifier_char(ch) {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        result
    }

    /// Where the token last returned by [`Lexer::next_token`] starts.
    pub fn token_start(&self) -> Position {
        Position(self.token_start)
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();
        self.token_start = self.position;

        let token = match self.current_char() {
            None => return Token::Eof,
            Some('&') => Token::Ampersand,
            Some('|') => Token::Pipe,
            Some('!') => Token::Exclamation,
            Some('(') => Token::LParen,
            Some(')') => Token::RParen,
            Some(_) => return Token::Identifier(self.read_identifier()),
        };
        self.advance();
        token
    }
}

#[test]
fn test_operators() {
    let mut lexer = Lexer::new("a & b | !c");
    assert_eq!(lexer.next_token(), Token::Identifier("a".to_string()));
    assert_eq!(lexer.next_token(), Token::Ampersand);
    assert_eq!(lexer.next_token(), Token::Identifier("b".to_string()));
    assert_eq!(lexer.next_token(), Token::Pipe);
    assert_eq!(lexer.next_token(), Token::Exclamation);
    assert_eq!(lexer.next_token(), Token::Identifier("c".to_string()));
    assert_eq!(lexer.next_token(), Token::Eof);
}

#[test]
fn test_token_start() {
    let mut lexer = Lexer::new("  left&(right)");
    lexer.next_token();
    assert_eq!(lexer.token_start(), Position(2));
    lexer.next_token();
    assert_eq!(lexer.token_start(), Position(6));
    lexer.next_token();
    assert_eq!(lexer.token_start(), Position(7));
    lexer.next_token();
    assert_eq!(lexer.token_start(), Position(8));
}
