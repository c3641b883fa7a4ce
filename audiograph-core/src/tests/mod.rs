mod executor;

use audiograph_agdl::{GraphAst, Parser};

pub(crate) fn parse(source: &str) -> GraphAst {
    Parser::new(source).unwrap().parse().unwrap()
}
