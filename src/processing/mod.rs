use crate::modules::traits::{CommandBuilder, Runner};
use crate::util::error::{Error, Result};
use crate::util::objects::configuration::ConnectionConfig;
use crate::util::process::Execution;

mod database;
mod dump;
mod restore;
mod duplicate;

/// Runs the database operations as sequences of external commands.
///
/// In strict mode launch failures, failing exit codes and timeouts are errors.
/// Lenient mode only logs failing exit codes and launch failures of the
/// create/drop statements, and carries on.
pub struct Orchestrator<'a, B: CommandBuilder, R: Runner> {
    config: &'a ConnectionConfig,
    builder: B,
    runner: R,
    strict: bool
}

impl<'a, B: CommandBuilder, R: Runner> Orchestrator<'a, B, R> {
    pub fn new(config: &'a ConnectionConfig, builder: B, runner: R, strict: bool) -> Self {
        Orchestrator { config, builder, runner, strict }
    }

    /// Turn the way a process ended into a result according to the strictness
    fn check(&self, program: &str, execution: Execution) -> Result<()> {
        if execution.success() {
            return Ok(());
        }

        match execution {
            Execution::Exited(code) => {
                let err = Error::ExternalTool { program: program.to_string(), code };
                if self.strict {
                    error!("{}", err);
                    Err(err)
                } else {
                    warn!("{} (ignored)", err);
                    Ok(())
                }
            }
            Execution::TimedOut(seconds) => {
                let err = Error::TimedOut { program: program.to_string(), seconds };
                error!("{}", err);
                Err(err)
            }
            Execution::DryRun => Ok(())
        }
    }

    /// Launch failures are only logged in lenient mode
    fn tolerate_launch(&self, result: Result<Execution>) -> Result<Option<Execution>> {
        match result {
            Err(err @ Error::Launch { .. }) if !self.strict => {
                error!("{}, continuing anyway", err);
                Ok(None)
            }
            other => other.map(Some)
        }
    }
}
