use std::collections::HashMap;
use std::fmt::Debug;

use audiograph_agdl::{Ioc, LinkValue};
use audiograph_types::errors::internal::BoxedError;
use audiograph_types::types::Payload;

use crate::errors::{ConfigError, PortError};

/// Port state of one live transformer: latest input payloads, pending output
/// payloads and the per-input readiness flags that gate execution.
///
/// Input payloads persist across cycles; only the readiness flags are
/// cleared on reset. Feedback nodes rely on this (a splitter keeps slicing
/// the buffer it was handed in cycle one).
#[derive(Debug, Default)]
pub struct Ports {
    inputs: HashMap<String, Payload>,
    outputs: HashMap<String, Payload>,
    ready: HashMap<String, bool>,
}

impl Ports {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an input port. `ready_default` is `true` only for ports that
    /// must assume readiness to unblock a feedback edge on the first cycle.
    pub fn declare_input(&mut self, tag: impl Into<String>, ready_default: bool) {
        self.ready.insert(tag.into(), ready_default);
    }

    pub fn declare_input_if_absent(&mut self, tag: &str) {
        if !self.ready.contains_key(tag) {
            self.ready.insert(tag.to_string(), false);
        }
    }

    pub fn declared_inputs(&self) -> impl Iterator<Item = &str> {
        self.ready.keys().map(String::as_str)
    }

    /// Store a payload and mark the port ready. Undeclared tags are ignored.
    pub fn set_input(&mut self, tag: &str, payload: Payload) {
        let Some(ready) = self.ready.get_mut(tag) else {
            return;
        };
        *ready = true;
        self.inputs.insert(tag.to_string(), payload);
    }

    pub fn input(&self, tag: &str) -> Option<&Payload> {
        self.inputs.get(tag)
    }

    pub fn require_input(&self, tag: &str) -> Result<&Payload, PortError> {
        self.inputs.get(tag).ok_or_else(|| PortError::MissingInput {
            tag: tag.to_string(),
        })
    }

    pub fn set_output(&mut self, tag: impl Into<String>, payload: Payload) {
        self.outputs.insert(tag.into(), payload);
    }

    /// Mark an output as not-propagating for the current cycle.
    pub fn suppress_output(&mut self, tag: impl Into<String>) {
        self.outputs.insert(tag.into(), Payload::Suppressed);
    }

    pub fn output(&self, tag: &str) -> Option<&Payload> {
        self.outputs.get(tag)
    }

    /// All declared inputs have been set since the last reset. Nodes with no
    /// declared inputs (roots) are always ready.
    pub fn ready_to_execute(&self) -> bool {
        self.ready.values().all(|ready| *ready)
    }

    pub fn set_ready(&mut self, tag: &str, value: bool) {
        if let Some(ready) = self.ready.get_mut(tag) {
            *ready = value;
        }
    }

    pub fn is_ready(&self, tag: &str) -> bool {
        self.ready.get(tag).copied().unwrap_or(false)
    }

    pub fn reset_ready(&mut self) {
        for ready in self.ready.values_mut() {
            *ready = false;
        }
    }
}

/// The configuration dictionary handed to `Transformer::initialize`, built
/// from the transformer's `configs` section.
#[derive(Debug, Default)]
pub struct Configs {
    values: HashMap<String, LinkValue>,
}

impl Configs {
    pub fn from_ioc(ioc: Option<&Ioc>) -> Self {
        let mut values = HashMap::new();
        if let Some(ioc) = ioc {
            for link in ioc.iter() {
                values.insert(link.tag.clone(), link.value.clone());
            }
        }
        Self { values }
    }

    pub fn get(&self, tag: &str) -> Option<&LinkValue> {
        self.values.get(tag)
    }

    pub fn require_int(&self, tag: &str) -> Result<i64, ConfigError> {
        self.optional_int(tag)?.ok_or_else(|| ConfigError::Missing {
            tag: tag.to_string(),
        })
    }

    pub fn optional_int(&self, tag: &str) -> Result<Option<i64>, ConfigError> {
        match self.values.get(tag) {
            None => Ok(None),
            Some(LinkValue::Number(value)) => Ok(Some(*value)),
            Some(_) => Err(ConfigError::WrongType {
                tag: tag.to_string(),
                expected: "a number",
            }),
        }
    }

    /// A file config value, with the surrounding quotes stripped.
    pub fn require_file(&self, tag: &str) -> Result<String, ConfigError> {
        match self.values.get(tag) {
            None => Err(ConfigError::Missing {
                tag: tag.to_string(),
            }),
            Some(LinkValue::File(text)) => {
                Ok(text.trim_matches('"').to_string())
            }
            Some(_) => Err(ConfigError::WrongType {
                tag: tag.to_string(),
                expected: "a file path",
            }),
        }
    }

    /// A numeric flag: absent means false, any non-zero number means true.
    pub fn optional_flag(&self, tag: &str) -> Result<bool, ConfigError> {
        Ok(self.optional_int(tag)?.map(|v| v != 0).unwrap_or(false))
    }
}

/// The contract every processing node obeys.
///
/// `initialize` runs once at link time: read configs, declare input ports
/// and their readiness defaults. `compute` runs each cycle in which all
/// declared inputs are ready. Nodes with feedback defaults override
/// `reset_ready_inputs` to keep specific ports armed across resets.
pub trait Transformer: Debug {
    fn initialize(&mut self, ports: &mut Ports, configs: &Configs) -> Result<(), ConfigError>;

    fn compute(&mut self, ports: &mut Ports) -> Result<(), BoxedError>;

    fn reset_ready_inputs(&self, ports: &mut Ports) {
        ports.reset_ready();
    }

    /// Called once after the graph quiesces, in declaration order.
    fn close(&mut self) -> Result<(), BoxedError> {
        Ok(())
    }
}
