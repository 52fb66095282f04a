// Warning groups (as of rust 1.55)
#![deny(
    future_incompatible,
    nonstandard_style,
    rust_2018_compatibility,
    rust_2021_compatibility,
    rust_2018_idioms,
    unused
)]
// Other warnings (as of rust 1.55)
#![deny(
    bindings_with_variant_name,
    confusable_idents,
    const_item_mutation,
    deprecated,
    drop_bounds,
    elided_lifetimes_in_paths,
    irrefutable_let_patterns,
    non_shorthand_field_patterns,
    overlapping_range_endpoints,
    unconditional_recursion,
    unused_comparisons,
    while_true
)]

// wrapping the MEGAHIT assembler
pub mod config;
pub mod errors;
pub mod invocation;
pub mod logging;
pub mod megahit_args;
pub mod utils;

use anyhow::{Context, Result};
use config::RunConfig;
use errors::WrapError;
use invocation::Invocation;
use itertools::Itertools;
use read_inputs::{demote_orphan_mates, find_inputs, InputSpec, ReadRole};
use std::path::Path;
use std::process::{ExitCode, ExitStatus};

/// Convert something to an ExitCode.
pub(crate) trait IntoExitCode {
    fn into_exit_code(self) -> ExitCode;
}

impl IntoExitCode for ExitStatus {
    /// Convert an ExitStatus to an ExitCode.
    fn into_exit_code(self) -> ExitCode {
        self.code()
            .map_or(ExitCode::FAILURE, |x| ExitCode::from(x as u8))
    }
}

/// Find the inputs, build the MEGAHIT command line and run it.
///
/// Nothing on disk is modified until the inputs and the binary have been
/// validated. The output directory is then recreated from scratch and the
/// assembler runs in the foreground. Any failure is fatal to the whole run.
pub fn run(config: &RunConfig) -> Result<()> {
    let inputs = collect_inputs(config)?;
    report_inputs(&inputs);

    validate_binary(&config.megahit)?;
    let invocation = Invocation::new(config, &inputs);

    if config.dry_run {
        println!("Dry Run Mode");
        println!();
        println!("megahit command: {invocation}");
        return Ok(());
    }

    prepare_out_dir(&config.out_dir)?;
    invocation.execute()?;

    println!("Done, see output in \"{}\"", config.out_dir.display());
    Ok(())
}

/// Find the inputs of every query, in query order. A file reached through
/// more than one query is passed once. Anything under the output directory
/// is skipped since it is about to be deleted.
fn collect_inputs(config: &RunConfig) -> Result<Vec<InputSpec>> {
    let mut inputs = Vec::new();
    for query in &config.query {
        inputs.extend(find_inputs(query, Some(config.out_dir.as_path()))?);
    }
    Ok(demote_orphan_mates(inputs.into_iter().unique().collect()))
}

/// Log how many files of each role were found, and list them when debugging.
fn report_inputs(inputs: &[InputSpec]) {
    let count = |role: ReadRole| inputs.iter().filter(|i| i.role() == role).count();

    log::info!(
        "Processing {} forward, {} reverse, {} interleaved, {} single.",
        count(ReadRole::Forward),
        count(ReadRole::Reverse),
        count(ReadRole::Interleaved),
        count(ReadRole::Single),
    );
    for (i, input) in inputs.iter().enumerate() {
        log::debug!("{:3}: {:<11} {}", i + 1, input.role(), input.path().display());
    }
}

/// The binary must be a regular, non-empty file.
fn validate_binary(path: &Path) -> Result<()> {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() && meta.len() > 0 => Ok(()),
        _ => Err(WrapError::MissingBinary {
            path: path.to_path_buf(),
        }
        .into()),
    }
}

/// Remove anything left at `out_dir` by an earlier run and create it afresh.
fn prepare_out_dir(out_dir: &Path) -> Result<()> {
    match std::fs::symlink_metadata(out_dir) {
        Ok(meta) if meta.is_dir() => {
            log::info!("removing previous output {}", out_dir.display());
            std::fs::remove_dir_all(out_dir)
                .with_context(|| format!("removing {}", out_dir.display()))?;
        }
        Ok(_) => {
            log::info!("removing previous output {}", out_dir.display());
            std::fs::remove_file(out_dir)
                .with_context(|| format!("removing {}", out_dir.display()))?;
        }
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => (),
        Err(error) => return Err(error).context(out_dir.display().to_string()),
    }

    std::fs::create_dir_all(out_dir).with_context(|| out_dir.display().to_string())?;
    log::debug!("created {}", out_dir.display());
    Ok(())
}
