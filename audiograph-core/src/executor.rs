use audiograph_types::log::info;
use audiograph_types::types::Payload;
use petgraph::stable_graph::NodeIndex;
use petgraph::visit::EdgeRef;

use crate::builder::{PortMapping, RuntimeGraph, RuntimeNode};
use crate::errors::ExecutionError;

#[derive(Clone, Debug)]
pub struct ExecutorOptions {
    /// Safety valve for graphs that never quiesce; `None` disables it.
    pub max_cycles: Option<u64>,
    /// Emit a progress line every this many cycles.
    pub progress_cycle_interval: u64,
}

impl Default for ExecutorOptions {
    fn default() -> Self {
        Self {
            max_cycles: Some(1_000_000),
            progress_cycle_interval: 100,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExecutionSummary {
    pub cycles: u64,
}

/// Cycle-stepped breadth-first graph runner. One cycle evaluates every
/// member of the current frontier once, then swaps in the children those
/// members made ready. Termination is emergent: the run ends when no node
/// became ready.
pub struct GraphExecutor {
    graph: RuntimeGraph,
    options: ExecutorOptions,
}

impl GraphExecutor {
    pub fn new(graph: RuntimeGraph, options: ExecutorOptions) -> Self {
        Self { graph, options }
    }

    pub fn graph(&self) -> &RuntimeGraph {
        &self.graph
    }

    pub fn into_graph(self) -> RuntimeGraph {
        self.graph
    }

    pub fn run(&mut self) -> Result<ExecutionSummary, ExecutionError> {
        let mut frontier: Vec<NodeIndex> = self.graph.roots().to_vec();
        let mut cycles: u64 = 0;

        while !frontier.is_empty() {
            if let Some(max_cycles) = self.options.max_cycles {
                if cycles >= max_cycles {
                    return Err(ExecutionError::NonTerminating { cycles });
                }
            }
            if self.options.progress_cycle_interval > 0
                && cycles % self.options.progress_cycle_interval == 0
            {
                info!("Executing cycle {cycles}");
            }

            let mut next_frontier = Vec::new();
            for index in frontier {
                self.compute(index, cycles)?;
                self.notify_children(index, &mut next_frontier);
            }
            frontier = next_frontier;
            cycles += 1;
        }

        info!("Completed graph execution after {cycles} cycles");
        self.close_all()?;
        Ok(ExecutionSummary { cycles })
    }

    fn compute(&mut self, index: NodeIndex, cycle: u64) -> Result<(), ExecutionError> {
        let RuntimeNode {
            handle,
            transformer,
            ports,
        } = self.graph.node_mut(index);
        transformer
            .compute(ports)
            .map_err(|source| ExecutionError::Compute {
                node: handle.clone(),
                cycle,
                source,
            })
    }

    /// Propagate this node's outputs into its children and collect the
    /// children whose inputs are now complete. Suppressed (or never-set)
    /// outputs do not propagate, leaving the waiting child un-ready.
    fn notify_children(&mut self, index: NodeIndex, next_frontier: &mut Vec<NodeIndex>) {
        // The adjacency walk yields edges most-recent-first; restore
        // declaration order so children become ready deterministically.
        let mut edges: Vec<(NodeIndex, PortMapping)> = self
            .graph
            .graph()
            .edges(index)
            .map(|edge| (edge.target(), edge.weight().clone()))
            .collect();
        edges.reverse();

        for (child, mapping) in edges {
            for (producer_tag, consumer_tag) in &mapping.pairs {
                let payload = self
                    .graph
                    .node(index)
                    .ports
                    .output(producer_tag)
                    .cloned()
                    .unwrap_or(Payload::Suppressed);
                if payload.is_suppressed() {
                    continue;
                }
                self.graph.node_mut(child).ports.set_input(consumer_tag, payload);
            }

            let RuntimeNode {
                transformer, ports, ..
            } = self.graph.node_mut(child);
            if ports.ready_to_execute() {
                next_frontier.push(child);
                transformer.reset_ready_inputs(ports);
            }
        }
    }

    fn close_all(&mut self) -> Result<(), ExecutionError> {
        for index in self.graph.order().to_vec() {
            let RuntimeNode {
                handle, transformer, ..
            } = self.graph.node_mut(index);
            transformer
                .close()
                .map_err(|source| ExecutionError::Close {
                    node: handle.clone(),
                    source,
                })?;
        }
        Ok(())
    }
}
