use crate::modules::traits::Runner;
use crate::util::command::CommandWrapper;
use crate::util::error::Result;
use crate::util::process::{Execution, PipeSource};

use std::path::Path;
use std::time::Duration;

mod system;
mod dry_run;

pub enum RunnerModule {
    System(system::System),
    DryRun(dry_run::DryRun)
}

use RunnerModule::*;

pub fn get_module(dry_run: bool, timeout: Option<Duration>) -> RunnerModule {
    if dry_run {
        DryRun(dry_run::DryRun::new())
    } else {
        System(system::System::new(timeout))
    }
}

impl Runner for RunnerModule {
    fn run_with_output_file(&mut self, command: &CommandWrapper, path: &Path) -> Result<Execution> {
        match self {
            System(runner) => runner.run_with_output_file(command, path),
            DryRun(runner) => runner.run_with_output_file(command, path)
        }
    }

    fn run_with_input_file(&mut self, command: &CommandWrapper, path: &Path) -> Result<Execution> {
        match self {
            System(runner) => runner.run_with_input_file(command, path),
            DryRun(runner) => runner.run_with_input_file(command, path)
        }
    }

    fn run_with_text_input(&mut self, command: &CommandWrapper, text: &str) -> Result<Execution> {
        match self {
            System(runner) => runner.run_with_text_input(command, text),
            DryRun(runner) => runner.run_with_text_input(command, text)
        }
    }

    fn spawn_with_output_pipe(&mut self, command: &CommandWrapper) -> Result<PipeSource> {
        match self {
            System(runner) => runner.spawn_with_output_pipe(command),
            DryRun(runner) => runner.spawn_with_output_pipe(command)
        }
    }

    fn run_with_input_stream(&mut self, command: &CommandWrapper, source: &mut PipeSource) -> Result<Execution> {
        match self {
            System(runner) => runner.run_with_input_stream(command, source),
            DryRun(runner) => runner.run_with_input_stream(command, source)
        }
    }

    fn finish_source(&mut self, source: PipeSource) -> Result<Execution> {
        match self {
            System(runner) => runner.finish_source(source),
            DryRun(runner) => runner.finish_source(source)
        }
    }
}
