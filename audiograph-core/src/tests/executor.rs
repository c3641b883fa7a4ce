use audiograph_types::types::Payload;

use crate::builder::{GraphBuilder, RuntimeGraph};
use crate::errors::ExecutionError;
use crate::executor::{ExecutorOptions, GraphExecutor};
use crate::tests::nodes::test_registry;
use crate::tests::parse;

fn build(source: &str, data: Vec<f64>) -> RuntimeGraph {
    let registry = test_registry(data);
    GraphBuilder::new(&registry).build(&parse(source)).unwrap()
}

fn run(source: &str, data: Vec<f64>) -> GraphExecutor {
    let mut executor = GraphExecutor::new(build(source, data), ExecutorOptions::default());
    executor.run().unwrap();
    executor
}

#[test]
fn chain_executes_once_per_node_in_bfs_cycles() {
    let source = "\
        BufferSource { outputs { <DATA> d } }\n\
        PassThrough { inputs { <INPUT_DATA> d } outputs { <OUTPUT_DATA> o } }\n\
        ComputeCounter { inputs { <IN> o } }";
    let mut executor = GraphExecutor::new(
        build(source, vec![1.0, 2.0]),
        ExecutorOptions::default(),
    );
    let summary = executor.run().unwrap();

    assert_eq!(summary.cycles, 3);
    let counter = executor.graph().by_handle("computecounter").unwrap();
    assert_eq!(counter.ports.output("COUNT"), Some(&Payload::Int(1)));

    // The pass-through forwarded the source buffer unchanged.
    let pass = executor.graph().by_handle("passthrough").unwrap();
    match pass.ports.output("OUTPUT_DATA").unwrap() {
        Payload::Samples(samples) => assert_eq!(samples.as_slice(), &[1.0, 2.0]),
        other => panic!("unexpected payload: {other}"),
    }
}

// A node runs only once both of its declared inputs were set in the same
// cycle-window, and does not rerun without a fresh completion.
#[test]
fn readiness_gates_on_every_declared_input() {
    let source = "\
        BufferSource { outputs { <X> left } }\n\
        BufferSource { outputs { <X> right } }\n\
        ComputeCounter { inputs { <A> left <B> right } }";
    let executor = run(source, vec![0.0]);

    let counter = executor.graph().by_handle("computecounter").unwrap();
    assert_eq!(counter.ports.output("COUNT"), Some(&Payload::Int(1)));
}

#[test]
fn node_with_an_unfed_input_never_computes() {
    let source = "\
        BufferSource { outputs { <X> left } }\n\
        ComputeCounter { inputs { <A> left <B> nothing } }";
    let mut executor = GraphExecutor::new(build(source, vec![0.0]), ExecutorOptions::default());
    let summary = executor.run().unwrap();

    assert_eq!(summary.cycles, 1);
    let counter = executor.graph().by_handle("computecounter").unwrap();
    assert_eq!(counter.ports.output("COUNT"), None);
}

#[test]
fn suppressed_output_does_not_arm_the_consumer() {
    let source = "\
        SuppressedSource { outputs { <DATA> d } }\n\
        PassThrough { inputs { <INPUT_DATA> d } outputs { <OUTPUT_DATA> o } }";
    let mut executor = GraphExecutor::new(build(source, Vec::new()), ExecutorOptions::default());
    let summary = executor.run().unwrap();

    assert_eq!(summary.cycles, 1);
    let pass = executor.graph().by_handle("passthrough").unwrap();
    assert_eq!(pass.ports.output("OUTPUT_DATA"), None);
    assert!(pass.ports.input("INPUT_DATA").is_none());
}

// Two parents completing the same single-input child within one cycle put
// it on the next frontier twice; the child must tolerate the double run.
#[test]
fn two_parents_can_schedule_a_child_twice_in_one_cycle() {
    let source = "\
        BufferSource { outputs { <X> s } }\n\
        BufferSource { outputs { <X> s } }\n\
        ComputeCounter { inputs { <IN> s } }";
    let executor = run(source, vec![0.0]);

    let counter = executor.graph().by_handle("computecounter").unwrap();
    assert_eq!(counter.ports.output("COUNT"), Some(&Payload::Int(2)));
}

#[test]
fn cycle_cap_reports_non_termination() {
    let source = "\
        BufferSource { outputs { <TICK> t } }\n\
        Repeater { inputs { <TICK> t } outputs { <TICK> t } }";
    let options = ExecutorOptions {
        max_cycles: Some(10),
        ..ExecutorOptions::default()
    };
    let mut executor = GraphExecutor::new(build(source, Vec::new()), options);
    let err = executor.run().unwrap_err();
    assert!(matches!(
        err,
        ExecutionError::NonTerminating { cycles: 10 }
    ));
}
