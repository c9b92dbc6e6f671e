use crate::modules::traits::{CommandBuilder, Runner};
use crate::processing::Orchestrator;
use crate::util::error::{Error, Result};
use crate::util::io::file;

use std::path::Path;

impl<'a, B: CommandBuilder, R: Runner> Orchestrator<'a, B, R> {
    /// Create `database` and load `input` into it. Nothing is rolled back on failure.
    pub fn restore(&mut self, database: &str, input: &Path) -> Result<()> {
        file::ensure_readable(input)?;

        info!("Restoring '{}' into database '{}'", input.display(), database);
        self.create_for_restore(database)?;

        let command = self.builder.restore(self.config, database);
        let result = self.runner.run_with_input_file(&command, input)
            .and_then(|execution| self.check(command.program(), execution));

        if result.is_err() {
            error!("Restore into '{}' failed, the database is left as it is and may be partially restored", database);
        }
        result
    }

    /// An already existing database is reported by the client and the restore goes on
    pub(crate) fn create_for_restore(&mut self, database: &str) -> Result<()> {
        match self.create_database(database) {
            Err(Error::ExternalTool { code, .. }) => {
                warn!("Creating '{}' failed (code {:?}), it may already exist, restoring anyway", database, code);
                Ok(())
            }
            other => other
        }
    }
}
