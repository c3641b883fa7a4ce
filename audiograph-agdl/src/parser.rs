//! Recursive-descent parser for AGDL, one method per nonterminal:
//!
//! ```text
//! Graph       = Transformer { Transformer } ;
//! Transformer = Name "{" TFMContent "}" ;
//! TFMContent  = [ Inputs ] [ Outputs ] [ Configs ] ;
//! Inputs      = "inputs"  "{" IOLink     { IOLink     } "}" ;
//! Outputs     = "outputs" "{" IOLink     { IOLink     } "}" ;
//! Configs     = "configs" "{" ConfigLink { ConfigLink } "}" ;
//! IOLink      = "<" Tag ">" Name ;
//! ConfigLink  = "<" Tag ">" ( Name | Number | File ) ;
//! ```

use crate::ast::{GraphAst, Ioc, Link, LinkValue, TfmContent, TransformerDecl};
use crate::errors::SyntaxError;
use crate::lexer::Lexer;

pub struct Parser {
    lexer: Lexer,
}

impl Parser {
    pub fn new(source: &str) -> Result<Self, SyntaxError> {
        Ok(Self {
            lexer: Lexer::new(source)?,
        })
    }

    /// Parse the whole source into a graph AST. At least one transformer is
    /// required and the input must be fully consumed.
    pub fn parse(&mut self) -> Result<GraphAst, SyntaxError> {
        let mut graph = GraphAst::default();
        graph.transformers.push(self.transformer()?);
        while !self.lexer.inspect_eof() {
            graph.transformers.push(self.transformer()?);
        }
        Ok(graph)
    }

    fn transformer(&mut self) -> Result<TransformerDecl, SyntaxError> {
        let class_name = self.lexer.consume_name()?;
        self.lexer.consume("{")?;
        let content = self.tfm_content()?;
        self.lexer.consume("}")?;
        Ok(TransformerDecl {
            class_name,
            content,
        })
    }

    // The three sections are each optional but must appear in this order.
    fn tfm_content(&mut self) -> Result<TfmContent, SyntaxError> {
        Ok(TfmContent {
            inputs: self.io_block("inputs")?,
            outputs: self.io_block("outputs")?,
            configs: self.config_block()?,
        })
    }

    fn io_block(&mut self, keyword: &str) -> Result<Option<Ioc>, SyntaxError> {
        if !self.lexer.inspect(keyword) {
            return Ok(None);
        }
        self.lexer.consume(keyword)?;
        self.lexer.consume("{")?;
        let mut ioc = Ioc::default();
        ioc.links.push(self.io_link()?);
        while !self.lexer.inspect("}") {
            ioc.links.push(self.io_link()?);
        }
        self.lexer.consume("}")?;
        Ok(Some(ioc))
    }

    fn config_block(&mut self) -> Result<Option<Ioc>, SyntaxError> {
        if !self.lexer.inspect("configs") {
            return Ok(None);
        }
        self.lexer.consume("configs")?;
        self.lexer.consume("{")?;
        let mut ioc = Ioc::default();
        ioc.links.push(self.config_link()?);
        while !self.lexer.inspect("}") {
            ioc.links.push(self.config_link()?);
        }
        self.lexer.consume("}")?;
        Ok(Some(ioc))
    }

    // IOLink values are always signal names.
    fn io_link(&mut self) -> Result<Link, SyntaxError> {
        let tag = self.link_tag()?;
        let name = self.lexer.consume_name()?;
        Ok(Link::new(tag, LinkValue::Name(name)))
    }

    // ConfigLink values may be a name, a number or a file literal.
    fn config_link(&mut self) -> Result<Link, SyntaxError> {
        let tag = self.link_tag()?;
        let value = if self.lexer.inspect_number() {
            self.number()?
        } else if self.lexer.inspect_name() {
            LinkValue::Name(self.lexer.consume_name()?)
        } else {
            LinkValue::File(self.lexer.consume_file()?)
        };
        Ok(Link::new(tag, value))
    }

    fn link_tag(&mut self) -> Result<String, SyntaxError> {
        self.lexer.consume("<")?;
        let tag = self.lexer.consume_tag()?;
        self.lexer.consume(">")?;
        Ok(tag)
    }

    fn number(&mut self) -> Result<LinkValue, SyntaxError> {
        let position = self.lexer.token_position();
        let text = self.lexer.consume_number()?;
        let value = text
            .parse::<i64>()
            .map_err(|_| SyntaxError::InvalidNumber {
                text: text.clone(),
                position,
            })?;
        Ok(LinkValue::Number(value))
    }
}
