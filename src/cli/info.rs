use structopt::StructOpt;

use crate::{driver::Driver, errors::QueryResult, pathlib::FilePath, session::Session};

#[derive(Debug, StructOpt)]
pub struct InfoOptions {
    #[structopt(help = "source file of the module whose scope the identifier is resolved in")]
    pub file: FilePath,

    #[structopt(help = "identifier, e.g. `map`, `Data.Map.insert` or `(+)`")]
    pub ident: String,
}

pub(super) fn action<S: Session>(driver: &mut Driver<S>, options: InfoOptions) -> QueryResult {
    let info = driver.get_identifier_info(&options.file, &options.ident)?;
    println!("{}", info);
    Ok(())
}
