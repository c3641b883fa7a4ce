use std::sync::Arc;

use audiograph_core::errors::ConfigError;
use audiograph_core::{Configs, Ports, Transformer};
use audiograph_types::errors::internal::BoxedError;
use audiograph_types::log::debug;
use audiograph_types::types::Payload;

pub const INPUT_DATA: &str = "INPUT_DATA";
pub const READY: &str = "READY";
pub const OUTPUT_DATA: &str = "OUTPUT_DATA";
pub const FINISHED: &str = "FINISHED";

const SPLIT_LENGTH: &str = "SPLIT_LENGTH";
const SPLIT_OFFSET: &str = "SPLIT_OFFSET";
const DEBUG: &str = "DEBUG";

/// Streams slices of a sample buffer downstream, one per handshake round.
///
/// `READY` starts pre-satisfied so the first slice goes out before the
/// downstream merger has produced anything; afterwards each slice waits for
/// the merger's `INPUT_CONSUMED` ack on the feedback edge. `INPUT_DATA`
/// stays ready once delivered: the splitter keeps slicing the same buffer
/// for the whole run.
///
/// `FINISHED` is raised on the cycle in which the slice no longer reaches
/// `SPLIT_LENGTH` past the current position; on an exact-fit buffer that is
/// one extra cycle carrying an empty slice. Downstream mergers accept short
/// and empty slices.
#[derive(Debug, Default)]
pub struct AudioSplitter {
    split_length: usize,
    split_offset: usize,
    data_position: usize,
    debug: bool,
}

impl Transformer for AudioSplitter {
    fn initialize(&mut self, ports: &mut Ports, configs: &Configs) -> Result<(), ConfigError> {
        let split_length = configs.require_int(SPLIT_LENGTH)?;
        if split_length <= 0 {
            return Err(ConfigError::WrongType {
                tag: SPLIT_LENGTH.to_string(),
                expected: "a positive number",
            });
        }
        self.split_length = split_length as usize;

        // The offset defaults to the split length; a smaller offset makes
        // adjacent slices overlap by (length - offset) samples.
        self.split_offset = match configs.optional_int(SPLIT_OFFSET)? {
            Some(offset) if offset <= 0 => {
                return Err(ConfigError::WrongType {
                    tag: SPLIT_OFFSET.to_string(),
                    expected: "a positive number",
                });
            }
            Some(offset) => offset as usize,
            None => self.split_length,
        };
        self.debug = configs.optional_flag(DEBUG)?;

        ports.declare_input(INPUT_DATA, false);
        ports.declare_input(READY, true);
        Ok(())
    }

    fn compute(&mut self, ports: &mut Ports) -> Result<(), BoxedError> {
        let data = ports.require_input(INPUT_DATA)?.as_samples()?.clone();
        let num_samples = data.len();

        let start = self.data_position.min(num_samples);
        let end = (self.data_position + self.split_length).min(num_samples);
        if self.debug {
            debug!("splitting samples {start}..{end} of {num_samples}");
        }

        let finished = self.data_position + self.split_length > num_samples;
        self.data_position += self.split_offset;

        ports.set_output(
            OUTPUT_DATA,
            Payload::Samples(Arc::new(data[start..end].to_vec())),
        );
        ports.set_output(FINISHED, Payload::Bool(finished));
        Ok(())
    }

    // Only the feedback ack is re-armed per round; the buffer stays ready.
    fn reset_ready_inputs(&self, ports: &mut Ports) {
        ports.set_ready(READY, false);
    }
}
