use crate::dry_run;
use crate::modules::traits::Runner;
use crate::util::command::CommandWrapper;
use crate::util::error::Result;
use crate::util::process::{Execution, PipeSource};

use std::path::Path;

/// Prints the commands (password masked) instead of running them
pub struct DryRun;

impl DryRun {
    pub fn new() -> Self {
        DryRun
    }
}

impl Runner for DryRun {
    fn run_with_output_file(&mut self, command: &CommandWrapper, path: &Path) -> Result<Execution> {
        dry_run!(format!("{} > '{}'", command, path.display()));
        Ok(Execution::DryRun)
    }

    fn run_with_input_file(&mut self, command: &CommandWrapper, path: &Path) -> Result<Execution> {
        dry_run!(format!("{} < '{}'", command, path.display()));
        Ok(Execution::DryRun)
    }

    fn run_with_text_input(&mut self, command: &CommandWrapper, text: &str) -> Result<Execution> {
        dry_run!(format!("echo '{}' | {}", text, command));
        Ok(Execution::DryRun)
    }

    fn spawn_with_output_pipe(&mut self, command: &CommandWrapper) -> Result<PipeSource> {
        dry_run!(format!("{} |", command));
        Ok(PipeSource::detached(command.program()))
    }

    fn run_with_input_stream(&mut self, command: &CommandWrapper, source: &mut PipeSource) -> Result<Execution> {
        dry_run!(format!("({} output) | {}", source.program(), command));
        Ok(Execution::DryRun)
    }

    fn finish_source(&mut self, _source: PipeSource) -> Result<Execution> {
        Ok(Execution::DryRun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn nothing_is_executed_or_written() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("orders.sql");
        let mut runner = DryRun::new();

        let execution = runner.run_with_output_file(&CommandWrapper::new("dbtools-no-such-binary"), &path).unwrap();
        assert_eq!(execution, Execution::DryRun);
        assert!(!path.exists());

        let mut source = runner.spawn_with_output_pipe(&CommandWrapper::new("mysqldump")).unwrap();
        assert_eq!(runner.run_with_input_stream(&CommandWrapper::new("mysql"), &mut source).unwrap(), Execution::DryRun);
        assert_eq!(runner.finish_source(source).unwrap(), Execution::DryRun);
    }
}
