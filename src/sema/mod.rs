pub mod env;
pub mod name;
pub mod nameresolve;
pub mod qualify;

pub use env::{NameEnv, NameEnvElt};
pub use name::{ModuleName, Name, Namespace};
pub use nameresolve::{parse_name, parse_rdr_name, resolve_rdr_name, RdrName};
pub use qualify::Qualify;
