use audiograph_types::thiserror;
use audiograph_types::thiserror::Error;

#[derive(Error, Debug)]
pub enum WavError {
    #[error(
        "{path}: only mono 16-bit integer PCM is supported \
         (got {channels} channel(s) at {bits} bits)"
    )]
    UnsupportedFormat {
        path: String,
        channels: u16,
        bits: u16,
    },
}
