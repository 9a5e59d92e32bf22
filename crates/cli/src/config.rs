// crates/cli/src/config.rs
use std::path::PathBuf;

use derive_builder::Builder;
use group_fold_domain::{AgeRange, Query, QueryBuilder};
use group_fold_shared_kernel::{Age, PresentationError};

use crate::{args::Args, error::AppError, options::OutputFormat};

/// Upper age bound (exclusive) applied when no age option is given at all.
pub const DEFAULT_MAX_AGE: u32 = 30;

/// Fully resolved run configuration.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub input: Option<PathBuf>,
    #[builder(default)]
    pub query: Query,
    #[builder(default)]
    pub format: OutputFormat,
    #[builder(default)]
    pub output: Option<PathBuf>,
    #[builder(default)]
    pub verify: bool,
}

impl TryFrom<Args> for Config {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let max_age = match (args.all_ages, args.min_age, args.max_age) {
            (true, _, _) => None,
            (false, _, Some(max)) => Some(max),
            (false, Some(_), None) => None,
            (false, None, None) => Some(DEFAULT_MAX_AGE),
        };
        let range = AgeRange::new(args.min_age.map(Age::new), max_age.map(Age::new))?;

        let query = QueryBuilder::default()
            .by(args.by)
            .range(range)
            .field(args.field)
            .strategy(args.strategy)
            .build()
            .map_err(|e| PresentationError::ConfigBuildFailed(e.to_string()))?;

        ConfigBuilder::default()
            .input(args.input)
            .query(query)
            .format(args.format)
            .output(args.output)
            .verify(args.verify)
            .build()
            .map_err(|e| PresentationError::ConfigBuildFailed(e.to_string()).into())
    }
}
