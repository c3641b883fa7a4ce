//! The standard transformer library: the splitter / merger handshake pair
//! that drives streaming pipelines, and the WAV file endpoints.

pub mod errors;
mod merger;
mod overlap_merger;
mod splitter;
mod wav_reader;
mod wav_writer;

pub use merger::AudioMerger;
pub use overlap_merger::AudioOverlapMerger;
pub use splitter::AudioSplitter;
pub use wav_reader::WavReader;
pub use wav_writer::WavWriter;

use audiograph_core::TransformerRegistry;

/// Register every standard transformer class.
pub fn register_standard(registry: &mut TransformerRegistry) {
    registry.register("AudioSplitter", || Box::<AudioSplitter>::default());
    registry.register("AudioMerger", || Box::<AudioMerger>::default());
    registry.register("AudioOverlapMerger", || Box::<AudioOverlapMerger>::default());
    registry.register("WavReader", || Box::<WavReader>::default());
    registry.register("WavWriter", || Box::<WavWriter>::default());
}

#[cfg(test)]
mod tests;
