use std::process;

use structopt::StructOpt;

use crate::{driver::Driver, errors::QueryResult, logger, pathlib::FilePath, snapshot::SnapshotSession};

mod info;
mod type_at;

pub use info::InfoOptions;
pub use type_at::TypeOptions;

#[derive(Debug, StructOpt)]
#[structopt(name = "tyquery", about = "Type and identifier queries over a typechecked module")]
pub struct Cli {
    #[structopt(
        long, env = "LOG_LEVEL",
        help = "Sets the log level",
        default_value = "warn",
        possible_values = &["off", "error", "warn", "info", "debug", "trace"],
        global = true
    )]
    log_level: log::LevelFilter,

    #[structopt(
        long,
        env = "TYQUERY_SNAPSHOT",
        help = "typechecked snapshot to query",
        default_value = ".tyquery/snapshot.bin",
        global = true
    )]
    snapshot: FilePath,

    #[structopt(subcommand)]
    cmd: Command,
}

#[derive(Debug, StructOpt)]
pub enum Command {
    /// Prints the type of every fragment around a position, innermost first
    Type(TypeOptions),
    /// Prints what is known about an identifier
    Info(InfoOptions),
}

pub fn run() {
    let cli: Cli = Cli::from_args();

    if let Err(err) = logger::init(cli.log_level) {
        eprintln!("could not install logger: {}", err);
    }

    if let Err(err) = dispatch(cli) {
        err.emit();
        process::exit(1);
    }
}

fn dispatch(cli: Cli) -> QueryResult {
    let session = SnapshotSession::open(&cli.snapshot)?;
    let mut driver = Driver::new(session);
    match cli.cmd {
        Command::Type(options) => type_at::action(&mut driver, options),
        Command::Info(options) => info::action(&mut driver, options),
    }
}
