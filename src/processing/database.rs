use crate::modules::traits::{CommandBuilder, Runner};
use crate::processing::Orchestrator;
use crate::util::error::{Error, Result};

/// Only databases marked as test or copy may be dropped by this tool
pub fn is_disposable(database: &str) -> bool {
    database.contains("test") || database.contains("copy")
}

impl<'a, B: CommandBuilder, R: Runner> Orchestrator<'a, B, R> {
    pub fn create_database(&mut self, database: &str) -> Result<()> {
        info!("Creating database '{}'", database);
        let (command, statement) = self.builder.create(self.config, database);
        let result = self.runner.run_with_text_input(&command, &statement);
        if let Some(execution) = self.tolerate_launch(result)? {
            self.check(command.program(), execution)?;
        }
        Ok(())
    }

    /// Drop a database, refused with `Error::SafetyGuard` for anything not disposable
    pub fn drop_database(&mut self, database: &str) -> Result<()> {
        if !is_disposable(database) {
            let err = Error::SafetyGuard(database.to_string());
            error!("{}", err);
            return Err(err);
        }

        info!("Dropping database '{}'", database);
        let (command, statement) = self.builder.drop(self.config, database);
        let result = self.runner.run_with_text_input(&command, &statement);
        if let Some(execution) = self.tolerate_launch(result)? {
            self.check(command.program(), execution)?;
        }
        Ok(())
    }
}
