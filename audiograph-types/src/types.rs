use std::fmt::{Display, Formatter};
use std::sync::Arc;

use num_complex::Complex64;

use crate::errors::types::TypeError;

/// The value flowing over a port binding. Buffer variants are `Arc`-shared:
/// propagating a payload to several consumers clones the handle, not the
/// samples. Consumers must not mutate buffers they received.
#[derive(Clone, Debug, PartialEq)]
pub enum Payload {
    /// The explicit "do not propagate this output on this cycle" value.
    Suppressed,
    Bool(bool),
    Int(i64),
    Text(String),
    /// Floating-point sample buffer, the working type of the pipeline.
    Samples(Arc<Vec<f64>>),
    /// Quantized 16-bit PCM buffer, the terminal output type.
    Pcm(Arc<Vec<i16>>),
    /// Complex spectrum buffer for frequency-domain collaborators.
    Spectrum(Arc<Vec<Complex64>>),
}

impl Payload {
    pub fn is_suppressed(&self) -> bool {
        matches!(self, Payload::Suppressed)
    }

    /// The variant name, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Payload::Suppressed => "suppressed",
            Payload::Bool(_) => "bool",
            Payload::Int(_) => "int",
            Payload::Text(_) => "text",
            Payload::Samples(_) => "samples",
            Payload::Pcm(_) => "pcm",
            Payload::Spectrum(_) => "spectrum",
        }
    }

    pub fn as_bool(&self) -> Result<bool, TypeError> {
        match self {
            Payload::Bool(v) => Ok(*v),
            other => Err(mismatch("bool", other)),
        }
    }

    pub fn as_int(&self) -> Result<i64, TypeError> {
        match self {
            Payload::Int(v) => Ok(*v),
            other => Err(mismatch("int", other)),
        }
    }

    pub fn as_text(&self) -> Result<&str, TypeError> {
        match self {
            Payload::Text(v) => Ok(v),
            other => Err(mismatch("text", other)),
        }
    }

    pub fn as_samples(&self) -> Result<&Arc<Vec<f64>>, TypeError> {
        match self {
            Payload::Samples(v) => Ok(v),
            other => Err(mismatch("samples", other)),
        }
    }

    pub fn as_pcm(&self) -> Result<&Arc<Vec<i16>>, TypeError> {
        match self {
            Payload::Pcm(v) => Ok(v),
            other => Err(mismatch("pcm", other)),
        }
    }

    pub fn as_spectrum(&self) -> Result<&Arc<Vec<Complex64>>, TypeError> {
        match self {
            Payload::Spectrum(v) => Ok(v),
            other => Err(mismatch("spectrum", other)),
        }
    }
}

impl Display for Payload {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Payload::Suppressed => f.write_str("<suppressed>"),
            Payload::Bool(v) => write!(f, "{v}"),
            Payload::Int(v) => write!(f, "{v}"),
            Payload::Text(v) => f.write_str(v),
            Payload::Samples(v) => write!(f, "samples[{}]", v.len()),
            Payload::Pcm(v) => write!(f, "pcm[{}]", v.len()),
            Payload::Spectrum(v) => write!(f, "spectrum[{}]", v.len()),
        }
    }
}

fn mismatch(expected: &'static str, actual: &Payload) -> TypeError {
    TypeError::PayloadTypeMismatch {
        expected,
        actual: actual.kind(),
    }
}

/// Clamp and truncate a float buffer to 16-bit PCM, the way merged output is
/// quantized before it reaches a writer.
pub fn quantize_i16(samples: &[f64]) -> Vec<i16> {
    samples
        .iter()
        .map(|s| s.clamp(i16::MIN as f64, i16::MAX as f64) as i16)
        .collect()
}
