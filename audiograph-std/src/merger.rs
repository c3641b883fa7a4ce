use std::sync::Arc;

use audiograph_core::errors::ConfigError;
use audiograph_core::{Configs, Ports, Transformer};
use audiograph_types::errors::internal::BoxedError;
use audiograph_types::types::{quantize_i16, Payload};

pub const INPUT_DATA: &str = "INPUT_DATA";
pub const FINAL_INPUT: &str = "FINAL_INPUT";
pub const OUTPUT_DATA: &str = "OUTPUT_DATA";
pub const INPUT_CONSUMED: &str = "INPUT_CONSUMED";

/// Concatenates incoming slices and releases the quantized result once the
/// final slice arrives.
///
/// Every consumed slice is acked on `INPUT_CONSUMED`, which a splitter wires
/// back into its `READY` input. On the final slice the ack is suppressed
/// instead, so the feedback edge stays dark and the pipeline quiesces.
#[derive(Debug, Default)]
pub struct AudioMerger {
    data: Vec<f64>,
    started: bool,
}

impl Transformer for AudioMerger {
    fn initialize(&mut self, ports: &mut Ports, _configs: &Configs) -> Result<(), ConfigError> {
        ports.declare_input(INPUT_DATA, false);
        ports.declare_input(FINAL_INPUT, false);
        ports.suppress_output(OUTPUT_DATA);
        Ok(())
    }

    fn compute(&mut self, ports: &mut Ports) -> Result<(), BoxedError> {
        let input = ports.require_input(INPUT_DATA)?.as_samples()?.clone();
        let final_input = ports.require_input(FINAL_INPUT)?.as_bool()?;

        if !self.started {
            self.data = input.as_slice().to_vec();
            self.started = true;
        } else {
            self.data.extend_from_slice(&input);
        }

        ports.set_output(INPUT_CONSUMED, Payload::Bool(true));
        if final_input {
            ports.set_output(OUTPUT_DATA, Payload::Pcm(Arc::new(quantize_i16(&self.data))));
            ports.suppress_output(INPUT_CONSUMED);
        }
        Ok(())
    }
}
