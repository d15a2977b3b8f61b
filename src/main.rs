//! Command-line entry point.
//!
//! Looks up IP addresses in a local MaxMind GeoLite2 City database and
//! prints one delimited row per address: IP, city, subdivision, country.
//! Addresses may be given as arguments, read from a file with `--in`, or
//! piped on stdin.
//!
//! Failures for individual addresses are reported on stderr and do not
//! stop the batch. Setup failures terminate with a distinct exit code per
//! cause: 1 invalid configuration, 2 database, 3 input, 4 output.

use std::io;
use std::process;

use clap::Parser;

use ip_locate::{
    init_logger_with, open_input, open_output, run_batch, BatchReport, Config, GeoDb, Opt,
    RecordEmitter, SetupError,
};

fn main() {
    let opt = Opt::parse();

    if let Err(err) = run(opt) {
        let code = err.exit_code();
        eprintln!("ip_locate error: {:#}", anyhow::Error::new(err));
        process::exit(code);
    }
}

fn run(opt: Opt) -> Result<BatchReport, SetupError> {
    let config = Config::try_from(opt)?;
    init_logger_with(config.log_level.clone().into(), config.log_format.clone())?;

    // Open resources in exit-code order: database, input, output. All
    // three are dropped on every return path.
    let db = GeoDb::open(&config.db_path)?;
    let input = open_input(config.input.as_deref())?;
    let output = open_output(config.output.as_deref())?;
    let mut emitter = RecordEmitter::new(output, config.delimiter);

    Ok(run_batch(&config, &db, input, &mut emitter, &mut io::stderr()))
}
