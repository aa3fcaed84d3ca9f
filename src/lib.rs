pub mod arguments;
pub mod ast;
pub mod cli;
pub mod error;
pub mod lexer;
pub mod operation;
pub mod ordering;
pub mod parser;
pub mod query;

pub use arguments::{assemble, Definition, FilterArguments, OperationSettings};
pub use ast::{Expression, Order, Parameter, Token};
pub use error::QueryError;
pub use lexer::{Lexer, Position};
pub use operation::Operation;
pub use ordering::{parse_order, parse_orders};
pub use parser::{parse_binding, ParseError, Parser};
pub use query::{Query, QueryBuilder, QueryData};
