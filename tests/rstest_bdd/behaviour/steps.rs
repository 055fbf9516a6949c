//! Step definitions for the running-tally behavioural suite.
//!
//! The narration steps only emit a message. The data steps drive the
//! library's tally operations through the scenario context fixture, and the
//! rejection steps pin down how malformed or missing data fails.

use std::io;

use anyhow::{Result, ensure};
use rstest_bdd_macros::{given, then, when};
use scenario_tally::{ContextError, ScenarioContext, TallyError, tally};

#[given("the scenario background is prepared")]
fn background_prepared() {
    println!("running the scenario background");
}

#[given("a worked example is in play")]
fn worked_example_in_play() {
    println!("running a worked example");
}

#[when("the initial data is {data}")]
fn set_initial_data(scenario_context: &ScenarioContext, data: String) {
    tally::record(scenario_context, &data);
}

#[when("{increment} is added to the data")]
fn add_to_data(scenario_context: &ScenarioContext, increment: String) -> Result<()> {
    tally::add(scenario_context, &increment)?;
    Ok(())
}

#[then("the doubled output is printed")]
fn print_doubled_output(scenario_context: &ScenarioContext) -> Result<()> {
    tally::report_doubled(scenario_context, &mut io::stdout().lock())?;
    Ok(())
}

#[then("the doubled output equals {expected:i64}")]
fn doubled_output_equals(scenario_context: &ScenarioContext, expected: i64) -> Result<()> {
    let actual = tally::doubled(scenario_context)?;
    ensure!(
        actual == expected,
        "unexpected doubled output {actual}, expected {expected}"
    );
    Ok(())
}

#[then("adding {increment} to the data is rejected")]
fn adding_is_rejected(scenario_context: &ScenarioContext, increment: String) -> Result<()> {
    let outcome = tally::add(scenario_context, &increment);
    ensure!(
        matches!(
            outcome,
            Err(TallyError::Context(ContextError::NotNumeric { .. }))
        ),
        "expected a conversion failure, got {outcome:?}"
    );
    Ok(())
}

#[then("printing the output without any data is rejected")]
fn printing_without_data_is_rejected(scenario_context: &ScenarioContext) -> Result<()> {
    let outcome = tally::doubled(scenario_context);
    ensure!(
        matches!(
            outcome,
            Err(TallyError::Context(ContextError::MissingKey(_)))
        ),
        "expected a lookup failure, got {outcome:?}"
    );
    Ok(())
}
