//! Scenario-scoped key/value storage for behaviour-driven test suites.
//!
//! The [`context`] module provides the per-scenario store that step functions
//! use to pass intermediate values between clauses of the same scenario. The
//! [`tally`] module builds the running-tally step semantics on top of it:
//! record an initial value, fold increments in, and report the doubled total.
//!
//! Each scenario owns exactly one [`ScenarioContext`], created by a fixture
//! when the scenario starts and dropped with it, so values never leak across
//! test cases.

pub mod context;
pub mod error;
pub mod tally;

pub use context::{ContextValue, ScenarioContext};
pub use error::{ContextError, TallyError};
