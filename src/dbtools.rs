use crate::modules::mysql::MySql;
use crate::modules::runner;
use crate::processing::Orchestrator;
use crate::util::error::{Error, Result};
use crate::util::io::{file, savefile};
use crate::util::objects::arguments::{Arguments, DEFAULT_CONFIG};
use crate::util::objects::configuration::ConnectionConfig;
use crate::util::objects::tables::TableFilter;

use argparse::{ArgumentParser, Collect, List, Store, StoreOption, StoreTrue};
use chrono::Local;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, PartialEq, Eq)]
pub enum Operation {
    Dump { database: Option<String> },
    Restore { path: PathBuf, database: String },
    Duplicate { database: Option<String> },
    Drop { database: String }
}

pub fn parse_arguments() -> Arguments {
    let mut args = Arguments {
        config: String::from(DEFAULT_CONFIG),
        ..Arguments::default()
    };

    {
        let mut parser = ArgumentParser::new();
        parser.set_description("Dump, restore and duplicate MySQL databases");
        parser.refer(&mut args.operation)
            .add_argument("operation", Store, "Operation to perform (dump,restore,duplicate,drop)")
            .required();
        parser.refer(&mut args.targets)
            .add_argument("arguments", List, "dump/duplicate: [DATABASE], restore: PATH DATABASE, drop: DATABASE");
        parser.refer(&mut args.config)
            .add_option(&["-c", "--config"], Store, "Change configuration file path");
        parser.refer(&mut args.name)
            .add_option(&["-n", "--name"], StoreOption, "Text appended to the database name for the dump file (default: current time)");
        parser.refer(&mut args.output)
            .add_option(&["-o", "--output"], StoreOption, "Write the dump to this file instead of the backup path");
        parser.refer(&mut args.tables)
            .add_option(&["-t", "--table"], Collect, "Only use this table (repeatable)");
        parser.refer(&mut args.exclude)
            .add_option(&["-x", "--exclude"], Collect, "Ignore this table (repeatable)");
        parser.refer(&mut args.lenient)
            .add_option(&["--lenient"], StoreTrue, "Only log failing exit codes of the database tools");
        parser.refer(&mut args.timeout)
            .add_option(&["--timeout"], StoreOption, "Stop database tools running longer than this amount of seconds");
        parser.refer(&mut args.dry_run)
            .add_option(&["--dry-run"], StoreTrue, "Print actions instead of performing them");
        parser.refer(&mut args.verbose)
            .add_option(&["-v", "--verbose", "--trace"], StoreTrue, "Print additional trace information");
        parser.refer(&mut args.debug)
            .add_option(&["-d", "--debug"], StoreTrue, "Print additional debug information");
        parser.refer(&mut args.quiet)
            .add_option(&["-q", "--quiet"], StoreTrue, "Only print warnings and errors");
        parser.parse_args_or_exit();
    }

    args
}

pub fn operation(args: &Arguments) -> Result<Operation> {
    let targets: Vec<&str> = args.targets.iter().map(String::as_str).collect();

    let operation = match (args.operation.as_str(), targets.as_slice()) {
        ("dump", [database]) => Operation::Dump { database: Some(database.to_string()) },
        ("dump", []) => Operation::Dump { database: None },
        ("restore", [path, database]) => Operation::Restore { path: PathBuf::from(path), database: database.to_string() },
        ("restore", _) => return Err(usage("restore expects a PATH and a DATABASE")),
        ("duplicate", [database]) => Operation::Duplicate { database: Some(database.to_string()) },
        ("duplicate", []) => Operation::Duplicate { database: None },
        ("drop", [database]) => Operation::Drop { database: database.to_string() },
        ("drop", _) => return Err(usage("drop expects exactly one DATABASE")),
        ("dump", _) | ("duplicate", _) => return Err(usage(&format!("{} expects at most one DATABASE", args.operation))),
        (unknown, _) => return Err(usage(&format!("Unknown operation: '{}'", unknown)))
    };

    Ok(operation)
}

fn usage(msg: &str) -> Error {
    error!("{}", msg);
    Error::Usage(msg.to_string())
}

pub fn main(args: &Arguments) -> Result<()> {
    let operation = operation(args)?;
    if args.output.is_some() && !matches!(operation, Operation::Dump { .. }) {
        warn!("--output is only used by dump");
    }

    let config = ConnectionConfig::load(Path::new(&args.config))?;

    let builder = MySql::new(&config.tools);
    let runner = runner::get_module(args.dry_run, args.timeout.map(Duration::from_secs));
    let mut orchestrator = Orchestrator::new(&config, builder, runner, !args.lenient);
    let filter = TableFilter::new(args.tables.clone(), args.exclude.clone());

    match operation {
        Operation::Dump { database } => {
            let database = config.database_or(database.as_deref())?;
            let output = match args.output.as_ref() {
                Some(output) => PathBuf::from(output),
                None => {
                    if !args.dry_run {
                        file::create_dir_if_missing(&config.backup_path, true)?;
                    }
                    savefile::dump_path(&config.backup_path, &Local::now(), &database, args.name.as_deref())
                }
            };
            orchestrator.dump(&database, &filter, &output)
        }
        Operation::Restore { path, database } => orchestrator.restore(&database, &path),
        Operation::Duplicate { database } => {
            let database = config.database_or(database.as_deref())?;
            orchestrator.duplicate(&database, &filter).map(|_| ())
        }
        Operation::Drop { database } => orchestrator.drop_database(&database)
    }
}
