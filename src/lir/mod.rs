//! The lowered intermediate form expression types are read from.

pub mod lower;
mod types;

pub use lower::lower_expr;
pub use types::*;
