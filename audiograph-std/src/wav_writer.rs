use std::sync::Arc;

use audiograph_core::errors::ConfigError;
use audiograph_core::{Configs, Ports, Transformer};
use audiograph_types::errors::internal::BoxedError;
use audiograph_types::errors::types::TypeError;
use audiograph_types::log::debug;
use audiograph_types::types::{quantize_i16, Payload};

pub const DATA: &str = "DATA";
pub const SAMPLING_RATE: &str = "SAMPLING_RATE";

const FILENAME: &str = "FILENAME";

/// Sink node writing its `DATA` input as a mono 16-bit PCM WAV file. Accepts
/// an already-quantized `Pcm` buffer or quantizes a `Samples` buffer itself.
#[derive(Debug, Default)]
pub struct WavWriter {
    filename: String,
}

impl Transformer for WavWriter {
    fn initialize(&mut self, ports: &mut Ports, configs: &Configs) -> Result<(), ConfigError> {
        self.filename = configs.require_file(FILENAME)?;
        ports.declare_input(DATA, false);
        ports.declare_input(SAMPLING_RATE, false);
        Ok(())
    }

    fn compute(&mut self, ports: &mut Ports) -> Result<(), BoxedError> {
        let pcm: Arc<Vec<i16>> = match ports.require_input(DATA)? {
            Payload::Pcm(buffer) => buffer.clone(),
            Payload::Samples(samples) => Arc::new(quantize_i16(samples)),
            other => {
                return Err(TypeError::PayloadTypeMismatch {
                    expected: "pcm or samples",
                    actual: other.kind(),
                }
                .into())
            }
        };
        let sample_rate = ports.require_input(SAMPLING_RATE)?.as_int()?;

        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: sample_rate as u32,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(&self.filename, spec)?;
        for sample in pcm.iter() {
            writer.write_sample(*sample)?;
        }
        writer.finalize()?;
        debug!("wrote {} samples to {}", pcm.len(), self.filename);
        Ok(())
    }
}
