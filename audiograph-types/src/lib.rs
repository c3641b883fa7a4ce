pub mod errors;
pub mod node;
pub mod types;

// Re-exports, so the rest of the workspace agrees on a single version.
pub use log;
pub use num_complex;
pub use thiserror;
