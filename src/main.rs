#[macro_use]
extern crate log;
extern crate env_logger;
extern crate serde_json;
extern crate serde;
extern crate chrono;

mod util;
mod dbtools;
mod modules;
mod processing;

use log::LevelFilter;
use env_logger::Builder;
use std::process::exit;

use crate::util::objects::arguments::Arguments;

fn level(args: &Arguments) -> LevelFilter {
    if args.verbose {
        LevelFilter::Trace
    } else if args.debug {
        LevelFilter::Debug
    } else if args.quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    }
}

fn main() {
    let args = dbtools::parse_arguments();

    Builder::new()
        .filter_level(level(&args))
        .init();

    if let Err(error) = dbtools::main(&args) {
        error!("dbtools {} failed: {}", args.operation, error);
        exit(error.exit_code());
    }
}
