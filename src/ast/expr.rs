use serde::{Deserialize, Serialize};

use crate::{sema::Name, typing::Ty};

use super::{Id, LBind, LExpr, Lit, MatchGroup};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expr {
    Var(Id),
    Lit(Lit),
    /// An overloaded literal at the type it was resolved to.
    OverLit(Lit, Ty),
    Lam(MatchGroup),
    App(Box<LExpr>, Box<LExpr>),
    /// `lhs op rhs`
    OpApp(Box<LExpr>, Box<LExpr>, Box<LExpr>),
    Par(Box<LExpr>),
    If(Box<LExpr>, Box<LExpr>, Box<LExpr>),
    Case(Box<LExpr>, MatchGroup),
    Let(Vec<LBind>, Box<LExpr>),
    /// A list literal and its element type.
    List(Vec<LExpr>, Ty),
    Tuple(Vec<LExpr>),
    Sig(Box<LExpr>, Ty),
    /// Typechecker elaboration of the inner expression. The inner
    /// expression shares the wrapper's location and is not a node of its
    /// own.
    Wrap(Vec<WrapStep>, Box<Expr>),
}

/// One elaboration step, applied in order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WrapStep {
    TyApp(Ty),
    /// Passes the dictionary bound to the evidence variable.
    EvApp(Name),
    Cast(Ty),
}
