use crate::modules::traits::Runner;
use crate::try_io;
use crate::util::command::CommandWrapper;
use crate::util::error::{Error, Result};
use crate::util::process::{self, Execution, PipeSource};

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::process::{Child, Stdio};
use std::time::Duration;

/// Runs commands as actual child processes
pub struct System {
    timeout: Option<Duration>
}

impl System {
    pub fn new(timeout: Option<Duration>) -> Self {
        System { timeout }
    }

    fn wait(&self, mut child: Child, command: &CommandWrapper) -> Result<Execution> {
        let execution = process::wait(&mut child, command.program(), self.timeout)?;
        debug!("'{}' finished: {:?}", command.program(), execution);
        Ok(execution)
    }
}

fn spawn(command: &CommandWrapper, stdin: Stdio, stdout: Stdio) -> Result<Child> {
    debug!("Running: {}", command);

    // The command is dropped right after spawning, so no pipe end stays open in this process
    let spawned = {
        let mut cmd = command.to_command();
        cmd.stdin(stdin).stdout(stdout);
        cmd.spawn()
    };

    match spawned {
        Ok(child) => Ok(child),
        Err(source) => {
            let err = Error::Launch { program: command.program().to_string(), source };
            error!("{}", err);
            Err(err)
        }
    }
}

impl Runner for System {
    fn run_with_output_file(&mut self, command: &CommandWrapper, path: &Path) -> Result<Execution> {
        let file = try_io!(File::create(path), format!("Could not open '{}' for writing", path.display()));
        let child = spawn(command, Stdio::inherit(), Stdio::from(file))?;
        self.wait(child, command)
    }

    fn run_with_input_file(&mut self, command: &CommandWrapper, path: &Path) -> Result<Execution> {
        let file = try_io!(File::open(path), format!("Could not open '{}' for reading", path.display()));
        let child = spawn(command, Stdio::from(file), Stdio::inherit())?;
        self.wait(child, command)
    }

    fn run_with_text_input(&mut self, command: &CommandWrapper, text: &str) -> Result<Execution> {
        let mut child = spawn(command, Stdio::piped(), Stdio::inherit())?;

        if let Some(mut stdin) = child.stdin.take() {
            // A process exiting early (e.g. rejected login) closes the pipe, its exit code tells why
            if let Err(err) = stdin.write_all(text.as_bytes()) {
                warn!("Could not pass input to '{}' ({})", command.program(), err);
            }
        }

        self.wait(child, command)
    }

    fn spawn_with_output_pipe(&mut self, command: &CommandWrapper) -> Result<PipeSource> {
        let child = spawn(command, Stdio::null(), Stdio::piped())?;
        Ok(PipeSource::spawned(command.program(), child))
    }

    fn run_with_input_stream(&mut self, command: &CommandWrapper, source: &mut PipeSource) -> Result<Execution> {
        let stdout = match source.take_stdout() {
            Some(stdout) => stdout,
            None => {
                let context = format!("Output of '{}' is not available as a pipe", source.program());
                error!("{}", context);
                return Err(Error::Io { context, source: io::Error::new(io::ErrorKind::BrokenPipe, "no pipe") });
            }
        };

        let child = spawn(command, Stdio::from(stdout), Stdio::inherit())?;
        self.wait(child, command)
    }

    fn finish_source(&mut self, source: PipeSource) -> Result<Execution> {
        let program = source.program().to_string();
        match source.into_child() {
            Some(mut child) => process::wait(&mut child, &program, self.timeout),
            None => Ok(Execution::DryRun)
        }
    }
}
