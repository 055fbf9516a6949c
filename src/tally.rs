//! Running-tally operations built on the scenario context.
//!
//! The tally lives under a single well-known key, [`TALLY_KEY`]. Phrase
//! handlers record the initial data as text, fold increments in as integers,
//! and report the doubled total through an injected sink. Conversion happens
//! where arithmetic first touches a value, so malformed input surfaces at the
//! step that uses it rather than the step that stored it.

use std::io::Write;

use crate::context::{ContextValue, ScenarioContext};
use crate::error::TallyError;

/// Context key under which the running tally is stored.
pub const TALLY_KEY: &str = "tally";

/// Records `data` as the starting tally, overwriting any prior value.
///
/// The text is stored verbatim, without validation.
pub fn record(context: &ScenarioContext, data: &str) {
    tracing::debug!(data, "recording initial tally data");
    context.set(TALLY_KEY, data);
}

/// Adds `increment` to the stored tally and writes the sum back.
///
/// Both the stored value and `increment` go through integer coercion before
/// the addition; the sum is stored as an integer.
///
/// # Errors
///
/// Fails when no tally has been recorded in this scenario, when either value
/// is not numeric, or when the sum leaves the `i64` range.
pub fn add(context: &ScenarioContext, increment: &str) -> Result<(), TallyError> {
    let current = context.get(TALLY_KEY)?.to_number()?;
    let applied = ContextValue::from(increment).to_number()?;
    let sum = current
        .checked_add(applied)
        .ok_or(TallyError::Overflow { current, applied })?;
    tracing::debug!(current, applied, sum, "added increment to tally");
    context.set(TALLY_KEY, sum);
    Ok(())
}

/// Returns twice the stored tally without modifying the stored value.
///
/// # Errors
///
/// Fails when no tally has been recorded in this scenario, when the stored
/// value is not numeric, or when doubling leaves the `i64` range.
pub fn doubled(context: &ScenarioContext) -> Result<i64, TallyError> {
    let current = context.get(TALLY_KEY)?.to_number()?;
    current.checked_mul(2).ok_or(TallyError::Overflow {
        current,
        applied: current,
    })
}

/// Writes the doubled tally to `out` and returns the reported value.
///
/// The report is observational: nothing is asserted about the value here.
///
/// # Errors
///
/// Fails when the tally cannot be doubled (see [`doubled`]) or when writing
/// to `out` fails.
pub fn report_doubled(context: &ScenarioContext, out: &mut impl Write) -> Result<i64, TallyError> {
    let value = doubled(context)?;
    writeln!(out, "doubled tally output: {value}")?;
    tracing::info!(value, "reported doubled tally");
    Ok(value)
}
