pub mod internal {
    /// Opaque error type returned by transformer implementations. The executor
    /// attaches the offending instance name and cycle before surfacing it.
    pub type BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;
}

pub mod types {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum TypeError {
        #[error("expected a {expected} payload, got {actual}")]
        PayloadTypeMismatch {
            expected: &'static str,
            actual: &'static str,
        },
    }
}
