use std::sync::Arc;

use audiograph_core::errors::ConfigError;
use audiograph_core::{Configs, Ports, Transformer};
use audiograph_types::errors::internal::BoxedError;
use audiograph_types::types::{quantize_i16, Payload};

use crate::merger::{FINAL_INPUT, INPUT_CONSUMED, INPUT_DATA, OUTPUT_DATA};

const OFFSET: &str = "OFFSET";

/// Overlap-add merger for STFT-style pipelines: each incoming slice is added
/// onto the tail of the accumulated buffer starting `OFFSET` samples past
/// the previous slice's start, with the non-overlapping remainder appended.
/// The `INPUT_CONSUMED` / `FINAL_INPUT` handshake is the same as the plain
/// merger's; the plain merger is this with zero overlap.
#[derive(Debug, Default)]
pub struct AudioOverlapMerger {
    offset: usize,
    data: Vec<f64>,
    position: usize,
    started: bool,
}

impl Transformer for AudioOverlapMerger {
    fn initialize(&mut self, ports: &mut Ports, configs: &Configs) -> Result<(), ConfigError> {
        let offset = configs.require_int(OFFSET)?;
        if offset <= 0 {
            return Err(ConfigError::WrongType {
                tag: OFFSET.to_string(),
                expected: "a positive number",
            });
        }
        self.offset = offset as usize;

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
            // A misconfigured offset can step past the accumulated data;
            // clamp rather than panic and append the whole slice.
            let start = self.position.min(self.data.len());
            let added = (self.data.len() - start).min(input.len());
            for (accumulated, sample) in self.data[start..].iter_mut().zip(&input[..added]) {
                *accumulated += sample;
            }
            self.data.extend_from_slice(&input[added..]);
        }
        self.position += self.offset;

        ports.set_output(INPUT_CONSUMED, Payload::Bool(true));
        if final_input {
            ports.set_output(OUTPUT_DATA, Payload::Pcm(Arc::new(quantize_i16(&self.data))));
            ports.suppress_output(INPUT_CONSUMED);
        }
        Ok(())
    }
}
