//! # Filter Query - Abstract Syntax Tree
//!
//! Data model shared by the binding parser, the order parser and the query
//! argument assembler.
//!
//! - **[tokens]** - Lexical tokens of a binding expression
//! - **[expressions]** - The boolean filter tree and its leaf parameters
//! - **[order]** - Sort directives
//!
//! ## Bindings
//!
//! A binding combines parameter identifications with boolean operators:
//!
//! ```text
//! left & (middle | data) | !right
//! ```
//!
//! `!` binds tighter than `&`, which binds tighter than `|`. Parentheses
//! override precedence.
//!
//! ## Resolution
//!
//! The parser only knows identifications. Every leaf [`Parameter`] is later
//! filled in with the field name, operation and value declared by the
//! matching `filter[param]` query argument.
pub mod expressions;
pub mod order;
pub mod tokens;

pub use expressions::{Expression, Parameter};
pub use order::Order;
pub use tokens::Token;
