use std::fmt;

/// Lexical tokens of a binding expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Parameter identification
    ///
    /// Any run of characters other than whitespace, `&`, `|`, `!`, `(` and `)`.
    ///
    /// # Examples
    /// ```text
    /// name
    /// created_at
    /// aliased.Name-2
    /// ```
    Identifier(String),

    /// Logical AND
    ///
    /// # Examples
    /// ```text
    /// date & name
    /// ```
    Ampersand,

    /// Logical OR
    ///
    /// # Examples
    /// ```text
    /// date | name
    /// ```
    Pipe,

    /// Logical NOT, prefix
    ///
    /// # Examples
    /// ```text
    /// !date
    /// !!date
    /// ```
    Exclamation,

    /// Left parenthesis for grouping
    LParen,

    /// Right parenthesis
    RParen,

    /// End of input
    Eof,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Identifier(name) => write!(f, "identifier '{}'", name),
            Token::Ampersand => write!(f, "'&'"),
            Token::Pipe => write!(f, "'|'"),
            Token::Exclamation => write!(f, "'!'"),
            Token::LParen => write!(f, "'('"),
            Token::RParen => write!(f, "')'"),
            Token::Eof => write!(f, "end of input"),
        }
    }
}
