use crate::ast::LinkValue;
use crate::errors::SyntaxError;
use crate::parser::Parser;

fn parse(source: &str) -> Result<crate::ast::GraphAst, SyntaxError> {
    Parser::new(source)?.parse()
}

const MINIMAL: &str =
    "WavReader { outputs { <SAMPLING_RATE> sr <DATA> d } configs { <FILENAME> \"in.wav\" } }";

#[test]
fn minimal_graph_parses() {
    let graph = parse(MINIMAL).unwrap();
    assert_eq!(graph.transformers.len(), 1);

    let tfm = &graph.transformers[0];
    assert_eq!(tfm.class_name, "WavReader");
    assert!(tfm.content.inputs.is_none());

    let outputs = tfm.content.outputs.as_ref().unwrap();
    let links: Vec<_> = outputs
        .iter()
        .map(|l| (l.tag.as_str(), l.value.clone()))
        .collect();
    assert_eq!(
        links,
        vec![
            ("SAMPLING_RATE", LinkValue::Name("sr".to_string())),
            ("DATA", LinkValue::Name("d".to_string())),
        ]
    );

    let configs = tfm.content.configs.as_ref().unwrap();
    assert_eq!(configs.links[0].tag, "FILENAME");
    assert_eq!(
        configs.links[0].value,
        LinkValue::File("\"in.wav\"".to_string())
    );
}

#[test]
fn parse_is_deterministic() {
    let source = "A { inputs { <X> s } }\nB { outputs { <X> s } configs { <N> 3 <NAME> foo } }";
    assert_eq!(parse(source).unwrap(), parse(source).unwrap());
}

#[test]
fn config_values_cover_all_three_kinds() {
    let graph =
        parse("Node { configs { <A> name_value <B> 42 <C> \"file.wav\" } }").unwrap();
    let configs = graph.transformers[0].content.configs.clone().unwrap();
    assert_eq!(configs.links[0].value, LinkValue::Name("name_value".to_string()));
    assert_eq!(configs.links[1].value, LinkValue::Number(42));
    assert_eq!(configs.links[2].value, LinkValue::File("\"file.wav\"".to_string()));
}

#[test]
fn io_link_value_must_be_a_name() {
    let err = parse("Node { inputs { <DATA> 42 } }").unwrap_err();
    assert!(matches!(err, SyntaxError::UnexpectedToken { .. }));
}

#[test]
fn sections_out_of_order_are_rejected() {
    // outputs parsed first leaves the trailing inputs block unconsumable.
    let err = parse("Node { outputs { <A> s } inputs { <B> t } }").unwrap_err();
    assert!(matches!(err, SyntaxError::UnexpectedToken { .. }));
}

#[test]
fn empty_section_is_rejected() {
    let err = parse("Node { inputs { } }").unwrap_err();
    assert!(matches!(err, SyntaxError::UnexpectedToken { .. }));
}

#[test]
fn lowercase_tag_is_rejected() {
    let err = parse("Node { inputs { <data> d } }").unwrap_err();
    assert!(matches!(err, SyntaxError::MalformedTag { .. }));
}

#[test]
fn number_overflow_is_a_syntax_error() {
    let err = parse("Node { configs { <N> 99999999999999999999 } }").unwrap_err();
    assert!(matches!(err, SyntaxError::InvalidNumber { .. }));
}

#[test]
fn empty_source_is_rejected() {
    assert!(matches!(
        parse("   "),
        Err(SyntaxError::UnexpectedEof { .. })
    ));
}
