//! The typechecked syntax tree.
//!
//! Every node the user wrote is wrapped in a `Located`; identifiers carry
//! the type the typechecker assigned them, and the typechecker's own
//! additions (type applications, dictionary passing, coercions) appear as
//! `Expr::Wrap` around the expression they elaborate.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    sema::Name,
    span::Located,
    typing::Ty,
};

mod bind;
mod expr;
mod pattern;
pub mod walk;

pub use bind::{AbsBinds, AbsExport, Bind, FunBind, Grhs, Grhss, Match, MatchGroup, PatBind, Stmt, VarBind};
pub use expr::{Expr, WrapStep};
pub use pattern::Pat;
pub use walk::{walk_binds, TreeWalk, WalkItem};

pub type LBind = Located<Bind>;
pub type LExpr = Located<Expr>;
pub type LPat = Located<Pat>;
pub type LMatch = Located<Match>;
pub type LGrhs = Located<Grhs>;
pub type LStmt = Located<Stmt>;

/// A typed identifier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Id {
    pub name: Name,
    pub ty: Ty,
}

impl Id {
    pub fn new(name: Name, ty: Ty) -> Id {
        Id { name, ty }
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} :: {}", self.name, self.ty)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lit {
    Char(char),
    Str(String),
    Int(i64),
    Frac(String),
}

impl Lit {
    pub fn ty(&self) -> Ty {
        match self {
            Lit::Char(_) => Ty::char(),
            Lit::Str(_) => Ty::string(),
            Lit::Int(_) => Ty::int(),
            Lit::Frac(_) => Ty::double(),
        }
    }
}

impl fmt::Display for Lit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lit::Char(c) => write!(f, "{:?}", c),
            Lit::Str(s) => write!(f, "{:?}", s),
            Lit::Int(i) => write!(f, "{}", i),
            Lit::Frac(s) => write!(f, "{}", s),
        }
    }
}
