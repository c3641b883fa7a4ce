//! The AGDL front end: lexer, recursive-descent parser and graph AST.
//!
//! An AGDL description enumerates transformers, each with up to three
//! sections (`inputs`, `outputs`, `configs`) of `<TAG> value` links:
//!
//! ```text
//! WavReader {
//!     outputs { <SAMPLING_RATE> sr <DATA> d }
//!     configs { <FILENAME> "in.wav" }
//! }
//! ```

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod parser;

pub use ast::{GraphAst, Ioc, Link, LinkValue, TfmContent, TransformerDecl};
pub use errors::{LexError, SyntaxError};
pub use lexer::Lexer;
pub use parser::Parser;

#[cfg(test)]
mod tests;
