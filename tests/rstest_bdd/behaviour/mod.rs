//! Behavioural test harness for the running tally using `rstest-bdd`.
//!
//! Step implementations live in [`steps`], while [`scenarios`] binds the
//! feature file to the shared fixtures.

pub mod steps;
