
use std::sync::Arc;

use audiograph_agdl::Parser;
use audiograph_core::errors::ConfigError;
use audiograph_core::{
    Configs, GraphBuilder, Ports, RuntimeGraph, Transformer, TransformerRegistry,
};
use audiograph_types::errors::internal::BoxedError;
use audiograph_types::types::Payload;

/// Root fixture emitting one fixed buffer, standing in for a file reader.
#[derive(Debug)]
struct BufferSource {
    data: Vec<f64>,
}

impl Transformer for BufferSource {
    fn initialize(&mut self, _ports: &mut Ports, _configs: &Configs) -> Result<(), ConfigError> {
        Ok(())
    }

    fn compute(&mut self, ports: &mut Ports) -> Result<(), BoxedError> {
        ports.set_output("DATA", Payload::Samples(Arc::new(self.data.clone())));
        Ok(())
    }
}

#[derive(Debug, Default)]
struct PassThrough;

impl Transformer for PassThrough {
    fn initialize(&mut self, ports: &mut Ports, _configs: &Configs) -> Result<(), ConfigError> {
        ports.declare_input("INPUT_DATA", false);
        Ok(())
    }

    fn compute(&mut self, ports: &mut Ports) -> Result<(), BoxedError> {
        let payload = ports.require_input("INPUT_DATA")?.clone();
        ports.set_output("OUTPUT_DATA", payload);
        Ok(())
    }
}

fn registry_with_source(data: Vec<f64>) -> TransformerRegistry {
    let mut registry = TransformerRegistry::new();
    crate::register_standard(&mut registry);
    registry.register("BufferSource", move || {
        Box::new(BufferSource { data: data.clone() })
    });
    registry.register("PassThrough", || Box::<PassThrough>::default());
    registry
}

fn build(source: &str, data: Vec<f64>) -> RuntimeGraph {
    let registry = registry_with_source(data);
    let ast = Parser::new(source).unwrap().parse().unwrap();
    GraphBuilder::new(&registry).build(&ast).unwrap()
}
