use std::collections::HashMap;
use std::fmt::{Debug, Formatter};

use crate::errors::BuildError;
use crate::node::Transformer;

type TransformerFactory = Box<dyn Fn() -> Box<dyn Transformer> + Send + Sync>;

/// Mapping from AGDL class name to a factory for the concrete transformer.
/// Populated once at startup; registration is the only extension point a new
/// node must satisfy.
#[derive(Default)]
pub struct TransformerRegistry {
    factories: HashMap<String, TransformerFactory>,
}

impl TransformerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(&mut self, class_name: impl Into<String>, factory: F)
    where
        F: Fn() -> Box<dyn Transformer> + Send + Sync + 'static,
    {
        self.factories.insert(class_name.into(), Box::new(factory));
    }

    pub fn contains(&self, class_name: &str) -> bool {
        self.factories.contains_key(class_name)
    }

    pub fn create(&self, class_name: &str) -> Result<Box<dyn Transformer>, BuildError> {
        let factory = self
            .factories
            .get(class_name)
            .ok_or_else(|| BuildError::UnknownTransformer(class_name.to_string()))?;
        Ok(factory())
    }

    /// The instance-name stem for a class: its lower-cased name. The first
    /// `WavReader` instance becomes `wavreader`, the second `wavreader2`.
    pub fn instance_stem(class_name: &str) -> String {
        class_name.to_lowercase()
    }
}

impl Debug for TransformerRegistry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransformerRegistry")
            .field("classes", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}
