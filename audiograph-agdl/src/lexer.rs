use std::fmt::{Display, Formatter};

use crate::errors::{LexError, SyntaxError};

/// Line/column location of a token or lexing failure, 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// Alphabetic identifier, `_` allowed after the first character.
    Name,
    /// Decimal integer.
    Number,
    /// Double-quoted literal; the token text keeps both quotes.
    File,
    /// One of `<`, `>`, `{`, `}`.
    Bracket,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub position: Position,
}

/// Single-lookahead token cursor over AGDL source.
///
/// The cursor always holds the next unconsumed token (`None` at end of
/// input); `inspect*` peeks at it and `consume*` checks, returns and
/// advances past it.
#[derive(Debug)]
pub struct Lexer {
    chars: Vec<char>,
    index: usize,
    line: u32,
    column: u32,
    token: Option<Token>,
}

impl Lexer {
    pub fn new(source: &str) -> Result<Self, LexError> {
        let mut lexer = Self {
            chars: source.chars().collect(),
            index: 0,
            line: 1,
            column: 1,
            token: None,
        };
        lexer.advance()?;
        Ok(lexer)
    }

    /// The current lookahead token, or `None` at end of input.
    pub fn token(&self) -> Option<&Token> {
        self.token.as_ref()
    }

    /// Position of the current token, or of the cursor at end of input.
    pub fn token_position(&self) -> Position {
        self.token
            .as_ref()
            .map(|t| t.position)
            .unwrap_or_else(|| self.position())
    }

    /// Scan the next token into the lookahead slot.
    pub fn advance(&mut self) -> Result<(), LexError> {
        self.skip_whitespace();

        let Some(ch) = self.peek_char() else {
            self.token = None;
            return Ok(());
        };

        let position = self.position();
        let token = if ch.is_ascii_alphabetic() {
            self.scan_name(position)
        } else if ch.is_ascii_digit() {
            self.scan_number(position)
        } else if is_bracket(ch) {
            self.bump();
            Token {
                kind: TokenKind::Bracket,
                text: ch.to_string(),
                position,
            }
        } else if ch == '"' {
            self.scan_file(position)?
        } else {
            return Err(LexError::InvalidCharacter { ch, position });
        };

        self.token = Some(token);
        Ok(())
    }

    pub fn inspect(&self, literal: &str) -> bool {
        self.token.as_ref().is_some_and(|t| t.text == literal)
    }

    pub fn inspect_name(&self) -> bool {
        self.token.as_ref().is_some_and(|t| t.kind == TokenKind::Name)
    }

    pub fn inspect_number(&self) -> bool {
        self.token
            .as_ref()
            .is_some_and(|t| t.kind == TokenKind::Number)
    }

    pub fn inspect_eof(&self) -> bool {
        self.token.is_none()
    }

    /// Advance past the current token iff its text equals `literal`.
    pub fn consume(&mut self, literal: &str) -> Result<(), SyntaxError> {
        let token = self.expect_token(&format!("{literal:?}"))?;
        if token.text != literal {
            return Err(SyntaxError::UnexpectedToken {
                expected: format!("{literal:?}"),
                found: token.text.clone(),
                position: token.position,
            });
        }
        self.advance()?;
        Ok(())
    }

    /// Consume a NAME consisting only of upper-case letters (and `_`).
    pub fn consume_tag(&mut self) -> Result<String, SyntaxError> {
        let token = self.expect_token("a tag")?;
        if token.kind != TokenKind::Name {
            return Err(SyntaxError::UnexpectedToken {
                expected: "a tag".to_string(),
                found: token.text.clone(),
                position: token.position,
            });
        }
        if token.text.chars().any(|c| c.is_ascii_lowercase()) {
            return Err(SyntaxError::MalformedTag {
                found: token.text.clone(),
                position: token.position,
            });
        }
        let text = token.text.clone();
        self.advance()?;
        Ok(text)
    }

    pub fn consume_name(&mut self) -> Result<String, SyntaxError> {
        self.consume_kind(TokenKind::Name, "a name")
    }

    pub fn consume_number(&mut self) -> Result<String, SyntaxError> {
        self.consume_kind(TokenKind::Number, "a number")
    }

    pub fn consume_file(&mut self) -> Result<String, SyntaxError> {
        self.consume_kind(TokenKind::File, "a file path")
    }

    fn consume_kind(
        &mut self,
        kind: TokenKind,
        expected: &str,
    ) -> Result<String, SyntaxError> {
        let token = self.expect_token(expected)?;
        if token.kind != kind {
            return Err(SyntaxError::UnexpectedToken {
                expected: expected.to_string(),
                found: token.text.clone(),
                position: token.position,
            });
        }
        let text = token.text.clone();
        self.advance()?;
        Ok(text)
    }

    fn expect_token(&self, expected: &str) -> Result<&Token, SyntaxError> {
        self.token.as_ref().ok_or_else(|| SyntaxError::UnexpectedEof {
            expected: expected.to_string(),
        })
    }

    fn scan_name(&mut self, position: Position) -> Token {
        let mut text = String::new();
        while let Some(ch) = self.peek_char() {
            if !ch.is_ascii_alphabetic() && ch != '_' {
                break;
            }
            text.push(ch);
            self.bump();
        }
        Token {
            kind: TokenKind::Name,
            text,
            position,
        }
    }

    fn scan_number(&mut self, position: Position) -> Token {
        let mut text = String::new();
        while let Some(ch) = self.peek_char() {
            if !ch.is_ascii_digit() {
                break;
            }
            text.push(ch);
            self.bump();
        }
        Token {
            kind: TokenKind::Number,
            text,
            position,
        }
    }

    fn scan_file(&mut self, position: Position) -> Result<Token, LexError> {
        let mut text = String::new();
        text.push('"');
        self.bump();
        loop {
            match self.peek_char() {
                Some('"') => {
                    text.push('"');
                    self.bump();
                    break;
                }
                Some(ch) => {
                    text.push(ch);
                    self.bump();
                }
                None => return Err(LexError::UnterminatedFile { position }),
            }
        }
        Ok(Token {
            kind: TokenKind::File,
            text,
            position,
        })
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek_char() {
            if !ch.is_whitespace() {
                break;
            }
            self.bump();
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.chars.get(self.index).copied()
    }

    fn bump(&mut self) {
        if let Some(ch) = self.chars.get(self.index) {
            if *ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.index += 1;
    }

    fn position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
        }
    }
}

fn is_bracket(ch: char) -> bool {
    matches!(ch, '<' | '>' | '{' | '}')
}
