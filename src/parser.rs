use std::mem;

use thiserror::Error;

use crate::{
    ast::{Expression, Token},
    lexer::{Lexer, Position},
};

/// Structural problems in a binding expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Nothing but whitespace to parse
    #[error("empty binding expression")]
    EmptyInput,

    #[error("expected {expected}, got {found} at position {position}")]
    UnexpectedToken {
        expected: &'static str,
        found: Token,
        position: Position,
    },

    /// Input ended in the middle of an expression
    #[error("expected {expected}, got end of input at position {position}")]
    UnexpectedEof {
        expected: &'static str,
        position: Position,
    },

    /// Groups, negations or operator chains nest past `limit` levels
    #[error("binding nests deeper than {limit} levels at position {position}")]
    TooDeep { limit: usize, position: Position },
}

/// Deepest nesting of `(` and `!`, and deepest resulting tree, a binding
/// may have.
pub const MAX_DEPTH: usize = 128;

/// Recursive descent parser for binding expressions.
///
/// ```text
/// Expr    := OrExpr
/// OrExpr  := AndExpr ( '|' AndExpr )*
/// AndExpr := NotExpr ( '&' NotExpr )*
/// NotExpr := '!' NotExpr | Atom
/// Atom    := Identifier | '(' Expr ')'
/// ```
///
/// Both the parser's own recursion and the depth of the produced tree are
/// capped at [`MAX_DEPTH`].
pub struct Parser {
    lexer: Lexer,
    current_token: Token,
    current_position: Position,
    nesting: usize,
}

/// A subtree together with its depth.
type Parsed = (Expression, usize);

impl Parser {
    /// Reads the first token of `lexer`.
    pub fn new(mut lexer: Lexer) -> Self {
        let current_token = lexer.next_token();
        let current_position = lexer.token_start();
        Parser {
            lexer,
            current_token,
            current_position,
            nesting: 0,
        }
    }

    fn advance(&mut self) {
        self.current_token = self.lexer.next_token();
        self.current_position = self.lexer.token_start();
    }

    fn check(&self, token: &Token) -> bool {
        mem::discriminant(&self.current_token) == mem::discriminant(token)
    }

    fn unexpected(&self, expected: &'static str) -> ParseError {
        match &self.current_token {
            Token::Eof => ParseError::UnexpectedEof {
                expected,
                position: self.current_position,
            },
            found => ParseError::UnexpectedToken {
                expected,
                found: found.clone(),
                position: self.current_position,
            },
        }
    }

    fn too_deep(&self) -> ParseError {
        ParseError::TooDeep {
            limit: MAX_DEPTH,
            position: self.current_position,
        }
    }

    fn descend(&mut self) -> Result<(), ParseError> {
        self.nesting += 1;
        if self.nesting > MAX_DEPTH {
            return Err(self.too_deep());
        }
        Ok(())
    }

    fn ascend(&mut self) {
        self.nesting -= 1;
    }

    fn tree_depth(&self, depth: usize) -> Result<usize, ParseError> {
        if depth > MAX_DEPTH {
            return Err(self.too_deep());
        }
        Ok(depth)
    }

    fn expect(&mut self, expected: Token, description: &'static str) -> Result<(), ParseError> {
        if !self.check(&expected) {
            return Err(self.unexpected(description));
        }
        self.advance();
        Ok(())
    }

    /// Identifier or parenthesized group
    fn parse_atom(&mut self) -> Result<Parsed, ParseError> {
        match mem::replace(&mut self.current_token, Token::Eof) {
            Token::Identifier(name) => {
                self.advance();
                Ok((Expression::parameter(name), 1))
            }
            Token::LParen => {
                self.descend()?;
                self.advance();
                let parsed = self.parse_or()?;
                self.expect(Token::RParen, "')'")?;
                self.ascend();
                Ok(parsed)
            }
            token => {
                self.current_token = token;
                Err(self.unexpected("identifier or '('"))
            }
        }
    }

    fn parse_not(&mut self) -> Result<Parsed, ParseError> {
        if self.check(&Token::Exclamation) {
            self.descend()?;
            self.advance();
            let (inner, depth) = self.parse_not()?;
            self.ascend();
            return Ok((Expression::negate(inner), self.tree_depth(depth + 1)?));
        }
        self.parse_atom()
    }

    fn parse_and(&mut self) -> Result<Parsed, ParseError> {
        let (mut left, mut depth) = self.parse_not()?;

        while self.check(&Token::Ampersand) {
            self.advance();
            let (right, right_depth) = self.parse_not()?;
            depth = self.tree_depth(depth.max(right_depth) + 1)?;
            left = Expression::and(left, right);
        }
        Ok((left, depth))
    }

    fn parse_or(&mut self) -> Result<Parsed, ParseError> {
        let (mut left, mut depth) = self.parse_and()?;

        while self.check(&Token::Pipe) {
            self.advance();
            let (right, right_depth) = self.parse_and()?;
            depth = self.tree_depth(depth.max(right_depth) + 1)?;
            left = Expression::or(left, right);
        }
        Ok((left, depth))
    }

    pub fn parse_expression(&mut self) -> Result<Expression, ParseError> {
        self.parse_or().map(|(expr, _)| expr)
    }

    /// Parses the whole input. Trailing tokens are an error.
    pub fn parse(&mut self) -> Result<Expression, ParseError> {
        if self.check(&Token::Eof) {
            return Err(ParseError::EmptyInput);
        }
        let expr = self.parse_expression()?;
        if !self.check(&Token::Eof) {
            return Err(self.unexpected("'&', '|' or end of input"));
        }
        Ok(expr)
    }
}

/// Parses a binding expression into an unresolved filter tree.
pub fn parse_binding(input: &str) -> Result<Expression, ParseError> {
    Parser::new(Lexer::new(input)).parse()
}
