use crate::try_io;
use crate::util::error::Result;

use std::process::{Child, ChildStdout, ExitStatus};
use std::thread;
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// How a launched (or pretended) process ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Execution {
    /// Exit code, `None` if the process was terminated by a signal
    Exited(Option<i32>),
    /// Killed after running longer than the given amount of seconds
    TimedOut(u64),
    DryRun
}

impl Execution {
    pub fn success(&self) -> bool {
        match self {
            Execution::Exited(Some(0)) | Execution::DryRun => true,
            _ => false
        }
    }
}

impl From<ExitStatus> for Execution {
    fn from(status: ExitStatus) -> Self {
        Execution::Exited(status.code())
    }
}

/// Running process whose stdout is an anonymous pipe, consumed by another process.
///
/// Owns the child: dropping an unfinished source kills and reaps the process, so
/// a failure on the consuming side never leaves the producer behind.
pub struct PipeSource {
    program: String,
    child: Option<Child>,
    stdout: Option<ChildStdout>
}

impl PipeSource {
    pub fn spawned(program: &str, mut child: Child) -> PipeSource {
        let stdout = child.stdout.take();
        PipeSource {
            program: program.to_string(),
            child: Some(child),
            stdout
        }
    }

    /// Source without an actual process (dry runs)
    pub fn detached(program: &str) -> PipeSource {
        PipeSource {
            program: program.to_string(),
            child: None,
            stdout: None
        }
    }

    pub fn program(&self) -> &str {
        self.program.as_str()
    }

    pub fn take_stdout(&mut self) -> Option<ChildStdout> {
        self.stdout.take()
    }

    pub fn into_child(mut self) -> Option<Child> {
        self.stdout = None;
        self.child.take()
    }
}

impl Drop for PipeSource {
    fn drop(&mut self) {
        // Close our end first, the producer may be blocked writing
        self.stdout = None;
        if let Some(mut child) = self.child.take() {
            warn!("Stopping unfinished '{}' process", self.program);
            if let Err(err) = child.kill() {
                debug!("Could not kill '{}' ({})", self.program, err);
            }
            if let Err(err) = child.wait() {
                error!("Could not reap '{}' ({})", self.program, err);
            }
        }
    }
}

/// Wait for a child to exit. With a timeout, the child is killed once it runs longer.
pub fn wait(child: &mut Child, program: &str, timeout: Option<Duration>) -> Result<Execution> {
    let timeout = match timeout {
        Some(timeout) => timeout,
        None => {
            let status = try_io!(child.wait(), format!("Failed waiting for '{}'", program));
            return Ok(Execution::from(status));
        }
    };

    let started = Instant::now();
    loop {
        match try_io!(child.try_wait(), format!("Failed polling '{}'", program)) {
            Some(status) => return Ok(Execution::from(status)),
            None if started.elapsed() >= timeout => {
                warn!("'{}' is running longer than {} seconds, stopping it", program, timeout.as_secs());
                try_io!(child.kill(), format!("Could not stop '{}'", program));
                try_io!(child.wait(), format!("Failed waiting for '{}'", program));
                return Ok(Execution::TimedOut(timeout.as_secs()));
            }
            None => thread::sleep(POLL_INTERVAL)
        }
    }
}
