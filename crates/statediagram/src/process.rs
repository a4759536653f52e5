//! Subprocess seam for the external tools.
//!
//! Both the model compiler and the graph renderer are reached through the
//! [`ProcessRunner`] trait so the pipeline can be exercised without spawning
//! real processes. [`SystemRunner`] is the implementation used by the CLI.

use std::{
    env,
    ffi::OsString,
    io,
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use log::{debug, trace};

/// Captured result of a finished child process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Whether the process exited with status zero.
    pub success: bool,
    /// Captured standard output, lossily decoded.
    pub stdout: String,
    /// Captured standard error, lossily decoded.
    pub stderr: String,
}

impl ProcessOutput {
    /// Standard output followed by standard error, with surrounding
    /// whitespace removed.
    pub fn combined(&self) -> String {
        format!("{}{}", self.stdout, self.stderr).trim().to_string()
    }
}

/// Launches external programs and resolves their locations.
pub trait ProcessRunner {
    /// Resolves `program` the way a shell's command lookup would.
    ///
    /// Returns `None` when no executable is reachable.
    fn locate(&self, program: &str) -> Option<PathBuf>;

    /// Runs `program` with `args` to completion, capturing its output.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the process cannot be launched.
    fn run(&self, program: &str, args: &[OsString]) -> io::Result<ProcessOutput>;
}

impl<T: ProcessRunner + ?Sized> ProcessRunner for &T {
    fn locate(&self, program: &str) -> Option<PathBuf> {
        (**self).locate(program)
    }

    fn run(&self, program: &str, args: &[OsString]) -> io::Result<ProcessOutput> {
        (**self).run(program, args)
    }
}

/// [`ProcessRunner`] backed by [`std::process::Command`] and `PATH`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn locate(&self, program: &str) -> Option<PathBuf> {
        let candidate = Path::new(program);
        if candidate.components().count() > 1 {
            return is_executable(candidate).then(|| candidate.to_path_buf());
        }

        let search_path = env::var_os("PATH")?;
        env::split_paths(&search_path)
            .flat_map(|dir| executable_names(program).map(move |name| dir.join(name)))
            .find(|path| is_executable(path))
    }

    fn run(&self, program: &str, args: &[OsString]) -> io::Result<ProcessOutput> {
        debug!(program, args:? = args; "Spawning process");

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .output()?;

        let result = ProcessOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        trace!(program, status:? = output.status; "Process finished");

        Ok(result)
    }
}

#[cfg(windows)]
fn executable_names(program: &str) -> impl Iterator<Item = OsString> + '_ {
    ["", ".exe", ".cmd", ".bat"]
        .into_iter()
        .map(move |ext| OsString::from(format!("{program}{ext}")))
}

#[cfg(not(windows))]
fn executable_names(program: &str) -> impl Iterator<Item = OsString> + '_ {
    std::iter::once(OsString::from(program))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
