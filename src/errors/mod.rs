use crate::span::Source;

use colored::*;
use std::fmt;
use std::io;

pub type QueryResult<T = ()> = Result<T, QueryError>;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum QueryErrorKind {
    Load,
    ModuleNotFound,
    Parse,
    Name,
    Snapshot,
    IO,
}

impl fmt::Display for QueryErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                QueryErrorKind::Load => "load error",
                QueryErrorKind::ModuleNotFound => "module error",
                QueryErrorKind::Parse => "parse error",
                QueryErrorKind::Name => "name error",
                QueryErrorKind::Snapshot => "snapshot error",
                QueryErrorKind::IO => "i/o error",
            }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryError {
    pub msg: String,
    pub src: Vec<Source>,
    pub kind: QueryErrorKind,
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.msg)
    }
}

impl std::error::Error for QueryError {}

impl QueryError {
    pub fn new<S: Into<String>>(kind: QueryErrorKind, msg: S) -> QueryError {
        QueryError {
            msg: msg.into(),
            src: vec![],
            kind,
        }
    }

    pub fn load_failure() -> QueryError {
        QueryError::new(QueryErrorKind::Load, "Error loading targets")
    }

    pub fn module_not_found() -> QueryError {
        QueryError::new(
            QueryErrorKind::ModuleNotFound,
            "Module not found in module graph",
        )
    }

    pub fn with_src(mut self, src: Source) -> QueryError {
        self.src.push(src);
        self
    }

    pub fn emit(&self) {
        let kind = format!("{}:", self.kind);
        let indent = " ".repeat(kind.len() + 1);
        let msg = self
            .msg
            .lines()
            .enumerate()
            .map(|(i, s)| {
                if i == 0 {
                    s.to_string()
                } else {
                    format!("{}{}", indent, s)
                }
            })
            .collect::<Vec<_>>()
            .join("\n");

        eprintln!("{} {}", kind.bold().red(), msg.bold());

        let arrow = "-->".bold();
        for src in self.src.iter() {
            eprintln!(" {} {}", arrow, src);
        }
    }
}

impl From<io::Error> for QueryError {
    fn from(err: io::Error) -> QueryError {
        QueryError::new(QueryErrorKind::IO, err.to_string())
    }
}

impl From<bincode::Error> for QueryError {
    fn from(err: bincode::Error) -> QueryError {
        QueryError::new(
            QueryErrorKind::Snapshot,
            format!("malformed snapshot: {}", err),
        )
    }
}
