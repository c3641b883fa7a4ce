use audiograph_types::errors::internal::BoxedError;
use audiograph_types::node::NodeHandle;
use audiograph_types::thiserror;
use audiograph_types::thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("required config {tag} is missing")]
    Missing { tag: String },
    #[error("config {tag} must be {expected}")]
    WrongType {
        tag: String,
        expected: &'static str,
    },
}

#[derive(Error, Debug)]
pub enum PortError {
    #[error("input port {tag} has no payload")]
    MissingInput { tag: String },
}

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("unknown transformer class {0:?}")]
    UnknownTransformer(String),
    #[error("failed to initialize {node}: {source}")]
    Initialization {
        node: NodeHandle,
        #[source]
        source: ConfigError,
    },
}

#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("{node} failed in cycle {cycle}: {source}")]
    Compute {
        node: NodeHandle,
        cycle: u64,
        #[source]
        source: BoxedError,
    },
    #[error("{node} failed to close: {source}")]
    Close {
        node: NodeHandle,
        #[source]
        source: BoxedError,
    },
    #[error("graph failed to quiesce within {cycles} cycles")]
    NonTerminating { cycles: u64 },
}
