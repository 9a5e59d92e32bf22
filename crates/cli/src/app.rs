// crates/cli/src/app.rs
use std::io::Write;

use group_fold_domain::{Person, QueryOutcome, sample_roster};
use group_fold_infra::{FileWriter, RosterReader};
use group_fold_shared_kernel::ErrorContext;

use crate::{config::Config, error::Result, presentation};

/// Load the configured roster, or the built-in sample when no input is given.
///
/// # Errors
/// Propagates roster read/parse failures with the input path as context.
pub fn load_roster(config: &Config) -> Result<Vec<Person>> {
    match &config.input {
        Some(path) => {
            let roster = RosterReader::read(path).with_context(|| format!("loading roster {}", path.display()))?;
            Ok(roster)
        }
        None => {
            log::info!("no --input given; using the built-in sample roster");
            Ok(sample_roster())
        }
    }
}

/// Fold the roster according to `config.query`.
///
/// # Errors
/// Fails on roster errors, or when `verify` is set and the selection strategies disagree.
pub fn execute(config: &Config) -> Result<QueryOutcome> {
    let roster = load_roster(config)?;
    let outcome = config.query.run(&roster);
    if config.verify {
        let agreed = config.query.verify(&roster)?;
        log::info!("chained and folded selections agree on {} names", agreed.len());
    }
    Ok(outcome)
}

/// Execute and emit the report to `--output` or stdout.
///
/// # Errors
/// Fails on any execution, rendering or write error.
pub fn run(config: &Config) -> Result<()> {
    let outcome = execute(config)?;
    let rendered = presentation::render(&outcome, config)?;
    match &config.output {
        Some(path) => {
            FileWriter::atomic_write(path, rendered.as_bytes())
                .with_context(|| format!("writing report {}", path.display()))?;
            log::info!("report written to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
