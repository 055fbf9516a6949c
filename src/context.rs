//! Scenario-scoped key/value storage.
//!
//! Each executing scenario owns one [`ScenarioContext`]. Step functions
//! receive a shared reference to it and use [`set`](ScenarioContext::set) and
//! [`get`](ScenarioContext::get) to pass intermediate values between clauses.
//! The context is created when the scenario starts and dropped with it, so
//! nothing stored here survives into another test case.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::ContextError;

/// A value stored in a [`ScenarioContext`].
///
/// Steps mostly shuttle text captured from scenario phrases, but arithmetic
/// steps write integers back, so both representations are first-class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextValue {
    /// Text captured verbatim from a scenario phrase.
    Text(String),
    /// An integer produced by a step.
    Number(i64),
}

impl ContextValue {
    /// Converts the value to an integer.
    ///
    /// Text is trimmed and parsed as a decimal `i64`; numbers pass through
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::NotNumeric`] when text does not parse as an
    /// integer.
    pub fn to_number(&self) -> Result<i64, ContextError> {
        match self {
            Self::Number(value) => Ok(*value),
            Self::Text(text) => {
                text.trim()
                    .parse()
                    .map_err(|source| ContextError::NotNumeric {
                        text: text.clone(),
                        source,
                    })
            }
        }
    }
}

impl From<&str> for ContextValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for ContextValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<i64> for ContextValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

/// Per-scenario mutable store shared by the steps of one scenario.
///
/// Access is synchronous and single-threaded: the harness drives one scenario
/// at a time and hands every step a reference to the same instance, so plain
/// interior mutability suffices. When scenarios run in parallel, each one
/// receives its own context through the fixture; an instance is never shared
/// across test cases.
#[derive(Debug, Default)]
pub struct ScenarioContext {
    values: RefCell<HashMap<String, ContextValue>>,
}

impl ScenarioContext {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `key`, replacing any previous value for that key.
    pub fn set(&self, key: impl Into<String>, value: impl Into<ContextValue>) {
        self.values.borrow_mut().insert(key.into(), value.into());
    }

    /// Returns a copy of the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::MissingKey`] when `key` was never set in this
    /// scenario.
    pub fn get(&self, key: &str) -> Result<ContextValue, ContextError> {
        self.values
            .borrow()
            .get(key)
            .cloned()
            .ok_or_else(|| ContextError::MissingKey(key.to_owned()))
    }

    /// Reports whether a value is stored under `key`.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.values.borrow().contains_key(key)
    }

    /// Reports whether the context holds no values at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }
}
