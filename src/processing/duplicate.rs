use crate::modules::traits::{CommandBuilder, Runner};
use crate::processing::Orchestrator;
use crate::util::error::{Error, Result};
use crate::util::objects::tables::TableFilter;

/// Name of the duplicate of `database`, the only target duplication ever writes to
pub fn copy_name(database: &str) -> String {
    format!("{}_copy", database)
}

impl<'a, B: CommandBuilder, R: Runner> Orchestrator<'a, B, R> {
    /// Stream a dump of `database` into a freshly created `<database>_copy`.
    ///
    /// Steps: start dump with piped output, drop the copy, create the copy, restore
    /// from the pipe, then wait for the dump to end. Returns the name of the copy.
    pub fn duplicate(&mut self, database: &str, filter: &TableFilter) -> Result<String> {
        let target = copy_name(database);
        info!("Duplicating database '{}' to '{}'", database, target);

        let dump_command = self.builder.dump(self.config, database, filter);
        // Dropping the source on any early return stops the dump process
        let mut source = self.runner.spawn_with_output_pipe(&dump_command)?;

        // The copy of a previous run has to go first, a missing one is fine
        match self.drop_database(&target) {
            Ok(()) => {}
            Err(err @ Error::SafetyGuard(_)) => warn!("Skipping drop: {}", err),
            Err(Error::ExternalTool { code, .. }) => {
                warn!("Dropping '{}' failed (code {:?}), it probably did not exist", target, code)
            }
            Err(err) => return Err(err)
        }

        self.create_for_restore(&target)?;

        let restore_command = self.builder.restore(self.config, &target);
        let restored = self.runner.run_with_input_stream(&restore_command, &mut source)
            .and_then(|execution| self.check(restore_command.program(), execution));
        if let Err(err) = restored {
            error!("Restore into '{}' failed, the database is left as it is and may be partially restored", target);
            return Err(err);
        }

        // A failing dump only shows as truncated input on the restore side
        let dumped = self.runner.finish_source(source)?;
        self.check(dump_command.program(), dumped)?;

        info!("Database '{}' duplicated to '{}'", database, target);
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::mysql::MySql;
    use crate::processing::testing::{self, Call, Calls, Recorder};
    use crate::util::objects::configuration::Tools;
    use crate::util::process::Execution;

    fn position(calls: &Calls, predicate: impl Fn(&Call) -> bool) -> usize {
        calls.borrow().iter().position(|call| predicate(call)).expect("call was not issued")
    }

    #[test]
    fn target_name_is_derived() {
        assert_eq!(copy_name("orders"), "orders_copy");
        assert_eq!(copy_name("orders"), copy_name("orders"));
    }

    #[test]
    fn steps_run_in_order_against_copy() {
        let config = testing::config();
        let (recorder, calls) = Recorder::new();
        let mut orchestrator = Orchestrator::new(&config, MySql::new(&Tools::default()), recorder, true);

        let target = orchestrator.duplicate("orders", &TableFilter::default()).unwrap();
        assert_eq!(target, "orders_copy");

        let spawn = position(&calls, |call| matches!(call, Call::Spawn(argv) if argv.last().map(String::as_str) == Some("orders")));
        let drop = position(&calls, |call| matches!(call, Call::Text(_, text) if text == "DROP DATABASE orders_copy;"));
        let create = position(&calls, |call| matches!(call, Call::Text(_, text) if text == "CREATE DATABASE orders_copy;"));
        let restore = position(&calls, |call| matches!(call, Call::Stream(argv) if argv.contains(&String::from("-Dorders_copy"))));
        let finish = position(&calls, |call| matches!(call, Call::Finish(program) if program == "mysqldump"));

        assert!(spawn < drop);
        assert!(drop < create);
        assert!(create < restore);
        assert!(restore < finish);
        assert_eq!(calls.borrow().len(), 5);
    }

    #[test]
    fn repeated_duplication_always_targets_same_copy() {
        let config = testing::config();
        let (recorder, calls) = Recorder::new();
        let mut orchestrator = Orchestrator::new(&config, MySql::new(&Tools::default()), recorder, true);

        orchestrator.duplicate("orders", &TableFilter::default()).unwrap();
        orchestrator.duplicate("orders", &TableFilter::default()).unwrap();

        assert_eq!(testing::statements(&calls), vec![
            "DROP DATABASE orders_copy;",
            "CREATE DATABASE orders_copy;",
            "DROP DATABASE orders_copy;",
            "CREATE DATABASE orders_copy;"
        ]);
    }

    #[test]
    fn table_filter_is_applied_to_dump() {
        let config = testing::config();
        let (recorder, calls) = Recorder::new();
        let mut orchestrator = Orchestrator::new(&config, MySql::new(&Tools::default()), recorder, true);

        let filter = TableFilter::new(vec![], vec![String::from("audit_log")]);
        orchestrator.duplicate("orders", &filter).unwrap();

        let calls = calls.borrow();
        match &calls[0] {
            Call::Spawn(argv) => assert_eq!(argv.last().unwrap(), "--ignore-table=orders.audit_log"),
            other => panic!("unexpected call {:?}", other)
        }
    }

    #[test]
    fn missing_copy_does_not_stop_duplication() {
        let config = testing::config();
        let (recorder, _) = Recorder::new();
        let recorder = recorder.ending("DROP DATABASE", Execution::Exited(Some(1)));
        let mut orchestrator = Orchestrator::new(&config, MySql::new(&Tools::default()), recorder, true);

        assert_eq!(orchestrator.duplicate("orders", &TableFilter::default()).unwrap(), "orders_copy");
    }

    #[test]
    fn failing_dump_is_detected_after_restore() {
        let config = testing::config();

        let (recorder, calls) = Recorder::new();
        let mut strict = Orchestrator::new(&config, MySql::new(&Tools::default()), recorder.ending("mysqldump", Execution::Exited(Some(2))), true);
        let result = strict.duplicate("orders", &TableFilter::default());
        assert!(matches!(result, Err(Error::ExternalTool { ref program, code: Some(2) }) if program == "mysqldump"));
        assert!(matches!(calls.borrow().last(), Some(Call::Finish(_))));

        let (recorder, _) = Recorder::new();
        let mut lenient = Orchestrator::new(&config, MySql::new(&Tools::default()), recorder.ending("mysqldump", Execution::Exited(Some(2))), false);
        assert!(lenient.duplicate("orders", &TableFilter::default()).is_ok());
    }

    #[test]
    fn failing_restore_skips_waiting_for_dump() {
        let config = testing::config();
        let (recorder, calls) = Recorder::new();
        let recorder = recorder.ending("-Dorders_copy", Execution::Exited(Some(1)));
        let mut orchestrator = Orchestrator::new(&config, MySql::new(&Tools::default()), recorder, true);

        assert!(orchestrator.duplicate("orders", &TableFilter::default()).is_err());
        assert!(!calls.borrow().iter().any(|call| matches!(call, Call::Finish(_))));
    }

    #[test]
    fn missing_client_is_skipped_when_lenient() {
        let config = testing::config();
        let (recorder, calls) = Recorder::new();
        let recorder = recorder.unlaunchable("DATABASE orders_copy;");
        let mut orchestrator = Orchestrator::new(&config, MySql::new(&Tools::default()), recorder, false);

        orchestrator.duplicate("orders", &TableFilter::default()).unwrap();
        assert!(calls.borrow().iter().any(|call| matches!(call, Call::Stream(_))));
    }
}
