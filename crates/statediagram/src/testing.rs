//! Test doubles shared by the unit tests of this crate.

use std::{cell::RefCell, ffi::OsString, io, path::PathBuf};

use chrono::{DateTime, TimeZone, Utc};

use crate::{
    output::Clock,
    process::{ProcessOutput, ProcessRunner},
};

type Behavior = Box<dyn Fn(&str, &[OsString]) -> io::Result<ProcessOutput>>;

/// Records every invocation and answers with a scripted behavior.
pub(crate) struct FakeRunner {
    available: Vec<String>,
    calls: RefCell<Vec<(String, Vec<OsString>)>>,
    behavior: Behavior,
}

impl FakeRunner {
    /// A runner that can "find" the given programs and succeeds silently.
    pub(crate) fn new(available: &[&str]) -> Self {
        Self {
            available: available.iter().map(|p| p.to_string()).collect(),
            calls: RefCell::new(Vec::new()),
            behavior: Box::new(|_, _| {
                Ok(ProcessOutput {
                    success: true,
                    ..ProcessOutput::default()
                })
            }),
        }
    }

    pub(crate) fn on_run(
        mut self,
        behavior: impl Fn(&str, &[OsString]) -> io::Result<ProcessOutput> + 'static,
    ) -> Self {
        self.behavior = Box::new(behavior);
        self
    }

    /// Invocations so far as `(program, args)` with lossily converted args.
    pub(crate) fn calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls
            .borrow()
            .iter()
            .map(|(program, args)| {
                let args = args
                    .iter()
                    .map(|arg| arg.to_string_lossy().into_owned())
                    .collect();
                (program.clone(), args)
            })
            .collect()
    }
}

impl ProcessRunner for FakeRunner {
    fn locate(&self, program: &str) -> Option<PathBuf> {
        self.available
            .iter()
            .any(|p| p == program)
            .then(|| PathBuf::from("/usr/bin").join(program))
    }

    fn run(&self, program: &str, args: &[OsString]) -> io::Result<ProcessOutput> {
        self.calls
            .borrow_mut()
            .push((program.to_string(), args.to_vec()));
        (self.behavior)(program, args)
    }
}

pub(crate) fn failed(output: &str) -> ProcessOutput {
    ProcessOutput {
        success: false,
        stdout: String::new(),
        stderr: output.to_string(),
    }
}

pub(crate) fn succeeded() -> ProcessOutput {
    ProcessOutput {
        success: true,
        ..ProcessOutput::default()
    }
}

/// Clock frozen at 2024-03-05 07:08:09 UTC.
pub(crate) struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 5, 7, 8, 9).unwrap()
    }
}
