use crate::config::RunConfig;
use crate::errors::WrapError;
use anyhow::{Context, Result};
use read_inputs::InputSpec;
use shell_escape::escape;
use std::ffi::OsString;
use std::fmt::{self, Display, Formatter};
use std::path::{Path, PathBuf};
use std::process::Command;

/// A fully built MEGAHIT command line:
/// `<binary> [tuning flags] -o <out_dir> (<role flag> <path>)...`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: PathBuf,
    args: Vec<OsString>,
}

impl Invocation {
    pub fn new(config: &RunConfig, inputs: &[InputSpec]) -> Invocation {
        let mut args: Vec<OsString> = config
            .tuning
            .get_args()
            .into_iter()
            .map(OsString::from)
            .collect();

        args.push("-o".into());
        args.push(config.out_dir.clone().into_os_string());

        for input in inputs {
            args.push(input.role().megahit_flag().into());
            args.push(input.path().as_os_str().to_owned());
        }

        Invocation {
            program: config.megahit.clone(),
            args,
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Run the command in the foreground, passing its output through.
    /// A non-zero exit is an error carrying the full command line.
    pub fn execute(&self) -> Result<()> {
        log::info!("running {self}");
        let status = Command::new(&self.program)
            .args(&self.args)
            .status()
            .with_context(|| format!("running {self}"))?;

        if !status.success() {
            return Err(WrapError::CommandFailed {
                cmd: self.to_string(),
                status,
            }
            .into());
        }
        log::debug!("{} finished: {status}", self.program.display());
        Ok(())
    }
}

impl Display for Invocation {
    /// Render as a shell-escaped command line.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let words = std::iter::once(self.program.as_os_str())
            .chain(self.args.iter().map(OsString::as_os_str))
            .map(|w| escape(w.to_string_lossy()));

        for (i, word) in words.enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(&word)?;
        }
        Ok(())
    }
}
