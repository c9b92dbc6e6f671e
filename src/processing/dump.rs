use crate::modules::traits::{CommandBuilder, Runner};
use crate::processing::Orchestrator;
use crate::util::error::Result;
use crate::util::objects::tables::TableFilter;

use std::path::Path;

impl<'a, B: CommandBuilder, R: Runner> Orchestrator<'a, B, R> {
    pub fn dump(&mut self, database: &str, filter: &TableFilter, output: &Path) -> Result<()> {
        info!("Dumping database '{}' to '{}'", database, output.display());
        if !filter.is_empty() {
            debug!("Tables: {:?}, ignored tables: {:?}", filter.include, filter.exclude);
        }

        let command = self.builder.dump(self.config, database, filter);
        let execution = self.runner.run_with_output_file(&command, output)?;
        self.check(command.program(), execution)
    }
}
