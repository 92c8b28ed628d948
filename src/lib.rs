#[macro_use]
extern crate lazy_static;

#[macro_use]
mod macros;

pub mod ast;
pub mod cli;
pub mod driver;
pub mod errors;
pub mod ide;
pub mod lir;
pub mod logger;
pub mod pathlib;
pub mod sema;
pub mod session;
pub mod snapshot;
pub mod sort;
pub mod span;
pub mod typing;

pub use driver::Driver;
