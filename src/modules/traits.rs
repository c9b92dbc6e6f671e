use crate::util::command::CommandWrapper;
use crate::util::error::Result;
use crate::util::objects::configuration::ConnectionConfig;
use crate::util::objects::tables::TableFilter;
use crate::util::process::{Execution, PipeSource};

use std::path::Path;

/// Construction of the external commands. Implementations must not have side effects.
pub trait CommandBuilder {
    fn dump(&self, config: &ConnectionConfig, database: &str, filter: &TableFilter) -> CommandWrapper;
    fn restore(&self, config: &ConnectionConfig, database: &str) -> CommandWrapper;

    /// Client command and the statement to pipe into it
    fn create(&self, config: &ConnectionConfig, database: &str) -> (CommandWrapper, String);
    fn drop(&self, config: &ConnectionConfig, database: &str) -> (CommandWrapper, String);
}

/// Execution of external commands with their standard streams wired up.
///
/// `Err` means the command could not be launched (or a file could not be opened),
/// how a launched process ended is reported by the returned `Execution`.
pub trait Runner {
    fn run_with_output_file(&mut self, command: &CommandWrapper, path: &Path) -> Result<Execution>;
    fn run_with_input_file(&mut self, command: &CommandWrapper, path: &Path) -> Result<Execution>;
    fn run_with_text_input(&mut self, command: &CommandWrapper, text: &str) -> Result<Execution>;

    /// Start a process whose stdout is a pipe, to be consumed by `run_with_input_stream`
    fn spawn_with_output_pipe(&mut self, command: &CommandWrapper) -> Result<PipeSource>;
    fn run_with_input_stream(&mut self, command: &CommandWrapper, source: &mut PipeSource) -> Result<Execution>;
    fn finish_source(&mut self, source: PipeSource) -> Result<Execution>;
}
