use std::collections::HashMap;

use audiograph_agdl::GraphAst;
use audiograph_types::node::NodeHandle;
use petgraph::stable_graph::{NodeIndex, StableDiGraph};

use crate::errors::BuildError;
use crate::node::{Configs, Ports, Transformer};
use crate::registry::TransformerRegistry;

/// Edge weight: producer-tag → consumer-tag pairs for one (producer,
/// consumer) pair, in producer output-link order.
#[derive(Clone, Debug, Default)]
pub struct PortMapping {
    pub pairs: Vec<(String, String)>,
}

/// A live node: its unique handle, the transformer behavior and the port
/// state the executor drives.
#[derive(Debug)]
pub struct RuntimeNode {
    pub handle: NodeHandle,
    pub transformer: Box<dyn Transformer>,
    pub ports: Ports,
}

/// The wired graph the linker hands to the executor. Feedback edges are
/// legal, so this is a general directed multigraph, not a DAG.
#[derive(Debug, Default)]
pub struct RuntimeGraph {
    graph: StableDiGraph<RuntimeNode, PortMapping>,
    /// Node indices in declaration order.
    order: Vec<NodeIndex>,
    /// Transformers with no `inputs` block, in declaration order.
    roots: Vec<NodeIndex>,
}

impl RuntimeGraph {
    pub fn graph(&self) -> &StableDiGraph<RuntimeNode, PortMapping> {
        &self.graph
    }

    pub fn graph_mut(&mut self) -> &mut StableDiGraph<RuntimeNode, PortMapping> {
        &mut self.graph
    }

    pub fn order(&self) -> &[NodeIndex] {
        &self.order
    }

    pub fn roots(&self) -> &[NodeIndex] {
        &self.roots
    }

    pub fn node(&self, index: NodeIndex) -> &RuntimeNode {
        &self.graph[index]
    }

    pub fn node_mut(&mut self, index: NodeIndex) -> &mut RuntimeNode {
        &mut self.graph[index]
    }

    /// Look a node up by instance name.
    pub fn by_handle(&self, id: &str) -> Option<&RuntimeNode> {
        self.order
            .iter()
            .map(|index| &self.graph[*index])
            .find(|node| node.handle.id == id)
    }

    pub fn handles(&self) -> Vec<&NodeHandle> {
        self.order.iter().map(|index| &self.graph[*index].handle).collect()
    }
}

/// Links a parsed graph AST into a `RuntimeGraph`: assigns instance names,
/// constructs and initializes each transformer, and resolves signal names
/// into producer→consumer port bindings.
pub struct GraphBuilder<'a> {
    registry: &'a TransformerRegistry,
}

impl<'a> GraphBuilder<'a> {
    pub fn new(registry: &'a TransformerRegistry) -> Self {
        Self { registry }
    }

    pub fn build(&self, ast: &GraphAst) -> Result<RuntimeGraph, BuildError> {
        let mut runtime = RuntimeGraph::default();

        // Instance naming and construction, in declaration order.
        let mut occurrences: HashMap<&str, u32> = HashMap::new();
        for decl in &ast.transformers {
            let count = occurrences.entry(decl.class_name.as_str()).or_insert(0);
            *count += 1;
            let stem = TransformerRegistry::instance_stem(&decl.class_name);
            let handle = if *count == 1 {
                NodeHandle::new(stem)
            } else {
                NodeHandle::new(format!("{stem}{count}"))
            };

            let mut transformer = self.registry.create(&decl.class_name)?;
            let mut ports = Ports::new();
            let configs = Configs::from_ioc(decl.content.configs.as_ref());
            transformer
                .initialize(&mut ports, &configs)
                .map_err(|source| BuildError::Initialization {
                    node: handle.clone(),
                    source,
                })?;

            // Every AGDL-declared input must be tracked for readiness, even
            // if the node did not declare it itself.
            if let Some(inputs) = &decl.content.inputs {
                for link in inputs.iter() {
                    ports.declare_input_if_absent(&link.tag);
                }
            }

            let index = runtime.graph.add_node(RuntimeNode {
                handle,
                transformer,
                ports,
            });
            runtime.order.push(index);
            if decl.content.inputs.is_none() {
                runtime.roots.push(index);
            }
        }

        // Signal index: signal name → consumers of that signal.
        let mut consumers: HashMap<&str, Vec<(&str, NodeIndex)>> = HashMap::new();
        for (decl, index) in ast.transformers.iter().zip(&runtime.order) {
            let Some(inputs) = &decl.content.inputs else {
                continue;
            };
            for link in inputs.iter() {
                if let Some(signal) = link.value.signal() {
                    consumers
                        .entry(signal)
                        .or_default()
                        .push((link.tag.as_str(), *index));
                }
            }
        }

        // Binding emission: one edge per (producer, consumer) pair, its
        // mapping accumulating one tag pair per shared signal. A produced
        // signal nobody consumes is not an error.
        for (decl, producer) in ast.transformers.iter().zip(&runtime.order) {
            let Some(outputs) = &decl.content.outputs else {
                continue;
            };
            let mut edges: Vec<(NodeIndex, PortMapping)> = Vec::new();
            let mut edge_of: HashMap<NodeIndex, usize> = HashMap::new();
            for link in outputs.iter() {
                let Some(signal) = link.value.signal() else {
                    continue;
                };
                let Some(sinks) = consumers.get(signal) else {
                    continue;
                };
                for (consumer_tag, consumer) in sinks {
                    let slot = *edge_of.entry(*consumer).or_insert_with(|| {
                        edges.push((*consumer, PortMapping::default()));
                        edges.len() - 1
                    });
                    edges[slot]
                        .1
                        .pairs
                        .push((link.tag.clone(), consumer_tag.to_string()));
                }
            }
            for (consumer, mapping) in edges {
                runtime.graph.add_edge(*producer, consumer, mapping);
            }
        }

        Ok(runtime)
    }
}
