//! The graph runtime: transformer contract, registry, linker and the
//! cycle-stepped executor.

pub mod builder;
pub mod errors;
pub mod executor;
pub mod node;
pub mod registry;

pub use builder::{GraphBuilder, PortMapping, RuntimeGraph, RuntimeNode};
pub use executor::{ExecutionSummary, ExecutorOptions, GraphExecutor};
pub use node::{Configs, Ports, Transformer};
pub use registry::TransformerRegistry;

#[cfg(test)]
mod tests;
