use clap::Parser;

pub mod types;
pub mod validation;

pub use types::{Args, CleanArgs, Source, StrokePolicyArg, TeamScoringArg};

/// Parses the command line and validates it.
///
/// # Errors
///
/// Will return `Err` if the arguments are inconsistent
pub fn args_checks() -> Result<CleanArgs, String> {
    let args = Args::parse();
    args.validate()?;
    Ok(CleanArgs::new(args))
}
