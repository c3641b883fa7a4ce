use std::sync::Arc;

use audiograph_core::errors::ConfigError;
use audiograph_core::{Configs, Ports, Transformer};
use audiograph_types::errors::internal::BoxedError;
use audiograph_types::log::debug;
use audiograph_types::types::Payload;

use crate::errors::WavError;

pub const SAMPLING_RATE: &str = "SAMPLING_RATE";
pub const DATA: &str = "DATA";

const FILENAME: &str = "FILENAME";
const DEBUG: &str = "DEBUG";

/// Root node loading a mono 16-bit PCM WAV file. Emits the sampling rate
/// and the full, un-normalized sample buffer.
#[derive(Debug, Default)]
pub struct WavReader {
    filename: String,
    debug: bool,
}

impl Transformer for WavReader {
    fn initialize(&mut self, _ports: &mut Ports, configs: &Configs) -> Result<(), ConfigError> {
        self.filename = configs.require_file(FILENAME)?;
        self.debug = configs.optional_flag(DEBUG)?;
        Ok(())
    }

    fn compute(&mut self, ports: &mut Ports) -> Result<(), BoxedError> {
        let mut reader = hound::WavReader::open(&self.filename)?;
        let spec = reader.spec();
        if spec.channels != 1
            || spec.bits_per_sample != 16
            || spec.sample_format != hound::SampleFormat::Int
        {
            return Err(WavError::UnsupportedFormat {
                path: self.filename.clone(),
                channels: spec.channels,
                bits: spec.bits_per_sample,
            }
            .into());
        }

        let samples = reader
            .samples::<i16>()
            .map(|sample| sample.map(f64::from))
            .collect::<Result<Vec<f64>, _>>()?;
        if self.debug {
            debug!(
                "read {} samples at {} Hz from {}",
                samples.len(),
                spec.sample_rate,
                self.filename
            );
        }

        ports.set_output(SAMPLING_RATE, Payload::Int(spec.sample_rate as i64));
        ports.set_output(DATA, Payload::Samples(Arc::new(samples)));
        Ok(())
    }
}
