use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, name = "audiograph")]
#[command(about = "Parse, link and execute an AGDL audio-processing graph")]
pub struct Cli {
    /// Path to the AGDL graph description.
    pub graph: String,

    /// Output artifact path. Overrides the FILENAME config of every
    /// non-root transformer declaring one (the writer nodes).
    pub output: String,

    /// Abort with an error if the graph has not quiesced after this many
    /// cycles.
    #[arg(long, default_value_t = 1_000_000)]
    pub max_cycles: u64,

    /// Emit a progress line every this many cycles.
    #[arg(long, default_value_t = 100)]
    pub progress_interval: u64,
}
