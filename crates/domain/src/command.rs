//! Command parameters — typed key/value arguments for device commands.
//!
//! A command is a plain name (`"turn_on"`, `"set_brightness"`) plus an
//! optional bag of parameters. Each device kind documents which keys it
//! reads; a missing required key makes the command fail (return `false`),
//! it never panics.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single typed parameter value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

/// Named parameters passed alongside a command.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommandParams {
    values: HashMap<String, ParamValue>,
}

impl CommandParams {
    /// Create an empty parameter bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter, consuming and returning the bag for chaining.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Look up a raw parameter value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.values.get(key)
    }

    /// Read an integer parameter. Float values are truncated.
    #[must_use]
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        match self.values.get(key)? {
            ParamValue::Int(v) => Some(*v),
            #[allow(clippy::cast_possible_truncation)]
            ParamValue::Float(v) => Some(*v as i64),
            _ => None,
        }
    }

    /// Read a float parameter. Integer values are widened.
    #[must_use]
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        match self.values.get(key)? {
            ParamValue::Float(v) => Some(*v),
            #[allow(clippy::cast_precision_loss)]
            ParamValue::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// Read a string parameter.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        match self.values.get(key)? {
            ParamValue::String(v) => Some(v),
            _ => None,
        }
    }

    /// Read a boolean parameter.
    #[must_use]
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        match self.values.get(key)? {
            ParamValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Whether the bag holds no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
