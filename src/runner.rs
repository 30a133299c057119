use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

/// Trait for running external commands.
///
/// The scaffolder shells out for dependency installation, repository
/// initialization and the baseline test run. Implementations decide how a
/// command is actually executed, which lets tests substitute a fake runner
/// and assert on the exact argument lists without spawning real processes.
pub trait CommandRunner {
    /// Runs `program` with `args` inside `working_dir`, blocking until the
    /// child process terminates.
    ///
    /// # Returns
    /// * `Result<()>` - Ok on a zero exit status
    ///
    /// # Errors
    /// * `Error::CommandFailedError` if the command exits non-zero
    fn run(&self, program: &str, args: &[&str], working_dir: &Path) -> Result<()>;
}

/// Runner that spawns real child processes.
///
/// stdin/stdout/stderr are inherited, so installer and test-runner output
/// streams straight to the invoking console unmodified.
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, program: &str, args: &[&str], working_dir: &Path) -> Result<()> {
        let status = Command::new(program)
            .args(args)
            .current_dir(working_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;

        if !status.success() {
            return Err(Error::CommandFailedError {
                command: program.to_string(),
                status,
            });
        }

        Ok(())
    }
}
