use audiograph_types::thiserror;
use audiograph_types::thiserror::Error;

use crate::lexer::Position;

#[derive(Error, Debug)]
pub enum LexError {
    #[error("invalid character {ch:?} at {position}")]
    InvalidCharacter { ch: char, position: Position },
    #[error("unterminated file literal starting at {position}")]
    UnterminatedFile { position: Position },
}

#[derive(Error, Debug)]
pub enum SyntaxError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error("expected {expected}, got {found:?} at {position}")]
    UnexpectedToken {
        expected: String,
        found: String,
        position: Position,
    },
    #[error("expected {expected}, got end of input")]
    UnexpectedEof { expected: String },
    #[error("expected an all-caps tag, got {found:?} at {position}")]
    MalformedTag { found: String, position: Position },
    #[error("number {text:?} at {position} is out of range")]
    InvalidNumber { text: String, position: Position },
}
