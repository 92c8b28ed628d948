use structopt::StructOpt;

use crate::{driver::Driver, errors::QueryResult, pathlib::FilePath, session::Session};

#[derive(Debug, StructOpt)]
pub struct TypeOptions {
    #[structopt(help = "source file of the module")]
    pub file: FilePath,

    #[structopt(help = "1-based line")]
    pub line: usize,

    #[structopt(help = "1-based column")]
    pub col: usize,
}

pub(super) fn action<S: Session>(driver: &mut Driver<S>, options: TypeOptions) -> QueryResult {
    let results = driver.get_type(&options.file, (options.line, options.col))?;
    for ((l1, c1, l2, c2), ty) in results {
        println!("{} {} {} {} {:?}", l1, c1, l2, c2, ty);
    }
    Ok(())
}
