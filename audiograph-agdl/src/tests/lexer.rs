use crate::errors::{LexError, SyntaxError};
use crate::lexer::{Lexer, TokenKind};

fn drain(source: &str) -> Vec<(TokenKind, String)> {
    let mut lexer = Lexer::new(source).unwrap();
    let mut tokens = Vec::new();
    while let Some(token) = lexer.token() {
        tokens.push((token.kind, token.text.clone()));
        lexer.advance().unwrap();
    }
    tokens
}

#[test]
fn classifies_all_token_kinds() {
    let tokens = drain("Splitter { <SPLIT_LENGTH> 80 \"in.wav\" }");
    assert_eq!(
        tokens,
        vec![
            (TokenKind::Name, "Splitter".to_string()),
            (TokenKind::Bracket, "{".to_string()),
            (TokenKind::Bracket, "<".to_string()),
            (TokenKind::Name, "SPLIT_LENGTH".to_string()),
            (TokenKind::Bracket, ">".to_string()),
            (TokenKind::Number, "80".to_string()),
            (TokenKind::File, "\"in.wav\"".to_string()),
            (TokenKind::Bracket, "}".to_string()),
        ]
    );
}

#[test]
fn empty_source_is_immediate_eof() {
    let lexer = Lexer::new("   \n\t ").unwrap();
    assert!(lexer.inspect_eof());
}

#[test]
fn file_literal_keeps_quotes_and_spaces() {
    let tokens = drain("\"dir name/audio file.wav\"");
    assert_eq!(tokens[0].1, "\"dir name/audio file.wav\"");
}

#[test]
fn invalid_character_is_a_lex_error() {
    let err = Lexer::new("WavReader @").map(|mut l| l.advance()).unwrap().unwrap_err();
    match err {
        LexError::InvalidCharacter { ch, position } => {
            assert_eq!(ch, '@');
            assert_eq!(position.line, 1);
            assert_eq!(position.column, 11);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unterminated_file_literal_is_a_lex_error() {
    let err = Lexer::new("\"never closed").unwrap_err();
    assert!(matches!(err, LexError::UnterminatedFile { .. }));
}

#[test]
fn consume_checks_the_literal() {
    let mut lexer = Lexer::new("{ }").unwrap();
    lexer.consume("{").unwrap();
    let err = lexer.consume("{").unwrap_err();
    match err {
        SyntaxError::UnexpectedToken { expected, found, .. } => {
            assert_eq!(expected, "\"{\"");
            assert_eq!(found, "}");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn tag_must_be_all_caps() {
    let mut lexer = Lexer::new("SPLIT_LENGTH mixedCase").unwrap();
    assert_eq!(lexer.consume_tag().unwrap(), "SPLIT_LENGTH");
    assert!(matches!(
        lexer.consume_tag(),
        Err(SyntaxError::MalformedTag { .. })
    ));
}

#[test]
fn consume_past_eof_reports_what_was_expected() {
    let mut lexer = Lexer::new("").unwrap();
    let err = lexer.consume_name().unwrap_err();
    assert!(matches!(err, SyntaxError::UnexpectedEof { .. }));
}

// Re-concatenating lexed tokens with single spaces must lex to the same
// sequence: token boundaries survive the print.
#[test]
fn lex_print_round_trip() {
    let source = "WavReader{outputs{<SAMPLING_RATE> sr <DATA> d}\nconfigs { <FILENAME> \"in.wav\" <DEBUG> 1 } }";
    let tokens = drain(source);
    let printed = tokens
        .iter()
        .map(|(_, text)| text.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    assert_eq!(drain(&printed), tokens);
}
