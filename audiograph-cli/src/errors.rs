use std::path::PathBuf;

use audiograph_agdl::SyntaxError;
use audiograph_core::errors::{BuildError, ExecutionError};
use audiograph_types::thiserror;
use audiograph_types::thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("failed to read {0}: {1}")]
    FileSystem(PathBuf, #[source] std::io::Error),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Build(#[from] BuildError),
    #[error(transparent)]
    Execution(#[from] ExecutionError),
}
