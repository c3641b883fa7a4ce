pub mod types;

use std::fs;
use std::path::PathBuf;

use audiograph_agdl::{GraphAst, LinkValue, Parser};
use audiograph_core::{ExecutorOptions, GraphBuilder, GraphExecutor, TransformerRegistry};
use audiograph_std::register_standard;
use audiograph_types::log::info;

use crate::errors::CliError;
use types::Cli;

const FILENAME: &str = "FILENAME";

/// Parse, link and run the described graph. The run either completes and
/// returns, or aborts with the first error.
pub fn run(cli: Cli) -> Result<(), CliError> {
    let source = fs::read_to_string(&cli.graph)
        .map_err(|e| CliError::FileSystem(PathBuf::from(&cli.graph), e))?;
    let mut ast = Parser::new(&source)?.parse()?;
    apply_output_override(&mut ast, &cli.output);

    let mut registry = TransformerRegistry::new();
    register_standard(&mut registry);

    let runtime = GraphBuilder::new(&registry).build(&ast)?;
    let options = ExecutorOptions {
        max_cycles: Some(cli.max_cycles),
        progress_cycle_interval: cli.progress_interval,
    };
    GraphExecutor::new(runtime, options).run()?;
    Ok(())
}

/// The original tool wrote its generated artifact to the output path; the
/// runtime executes directly instead, so the path redirects the writer
/// nodes: every non-root transformer with a FILENAME config gets it
/// replaced.
fn apply_output_override(ast: &mut GraphAst, output: &str) {
    for transformer in &mut ast.transformers {
        if transformer.content.inputs.is_none() {
            continue;
        }
        let Some(configs) = &mut transformer.content.configs else {
            continue;
        };
        for link in &mut configs.links {
            if link.tag == FILENAME {
                info!(
                    "redirecting {} output to {output}",
                    transformer.class_name
                );
                link.value = LinkValue::File(format!("\"{output}\""));
            }
        }
    }
}
