//! Command-line arguments and the resolved configuration of a run.

use crate::megahit_args::{MegahitArgs, Tuning};
use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

/// Name of the output directory created in the working directory when
/// `--out-dir` is not given.
pub const DEFAULT_OUT_DIR: &str = "megahit-out";

/// Location of the assembler relative to the directory holding this binary.
pub const DEFAULT_MEGAHIT_REL_PATH: &str = "bin/megahit";

/// Assemble reads with MEGAHIT. Paired-end files are recognised by the
/// `_r1_`/`.r1.` and `_r2_`/`.r2.` tokens in their names, interleaved files
/// by `_paired_`/`.paired.`; anything else is passed as single-end reads.
#[derive(Parser, Debug, Clone)]
#[clap(name = "run_megahit", version)]
pub struct RunArgs {
    /// Input files, or directories searched recursively for input files.
    #[clap(short = 'q', long, value_name = "FILE_OR_DIR", required = true, num_args = 1..)]
    pub query: Vec<PathBuf>,

    /// Output directory. Removed and recreated if it already exists.
    /// [default: ./megahit-out]
    #[clap(short = 'o', long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    #[clap(flatten)]
    pub megahit_args: MegahitArgs,

    /// Path to the MEGAHIT executable.
    /// [default: bin/megahit next to this program]
    #[clap(long, value_name = "PATH")]
    pub megahit: Option<PathBuf>,

    /// Do not execute MEGAHIT.
    /// Print the command that would be run and stop.
    #[clap(long)]
    pub dry: bool,

    /// Print debugging messages.
    #[clap(short = 'd', long)]
    pub debug: bool,
}

/// Everything needed to run MEGAHIT once. Built from the command line and
/// read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub query: Vec<PathBuf>,
    pub out_dir: PathBuf,
    pub tuning: Tuning,
    pub megahit: PathBuf,
    pub dry_run: bool,
    pub debug: bool,
}

impl RunConfig {
    /// Resolve `args`, placing the default output directory under `cwd` and
    /// looking for the default binary under `exe_dir`.
    pub fn from_args(args: RunArgs, cwd: &Path, exe_dir: &Path) -> RunConfig {
        RunConfig {
            tuning: args.megahit_args.resolve(),
            query: args.query,
            out_dir: args.out_dir.unwrap_or_else(|| cwd.join(DEFAULT_OUT_DIR)),
            megahit: args
                .megahit
                .unwrap_or_else(|| exe_dir.join(DEFAULT_MEGAHIT_REL_PATH)),
            dry_run: args.dry,
            debug: args.debug,
        }
    }

    /// Resolve `args` against the working directory and the location of the
    /// running executable.
    pub fn from_env(args: RunArgs) -> Result<RunConfig> {
        let cwd = std::env::current_dir().context("reading the current directory")?;
        let exe = std::env::current_exe().context("locating the running executable")?;
        let exe_dir = exe.parent().unwrap_or(Path::new("."));
        Ok(RunConfig::from_args(args, &cwd, exe_dir))
    }
}
