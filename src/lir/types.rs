use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    ast::{Id, Lit},
    sema::Name,
    typing::Ty,
};

/// The lowered form of an expression. Every node's type can be read off
/// directly with `expr_type`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoreExpr {
    Var(Id),
    Lit(Lit, Ty),
    App(Box<CoreExpr>, Box<CoreExpr>),
    TyApp(Box<CoreExpr>, Ty),
    Lam(Vec<Id>, Box<CoreExpr>),
    Let(Vec<CoreBind>, Box<CoreExpr>),
    Match {
        scruts: Vec<CoreExpr>,
        clauses: Vec<CoreClause>,
        ty: Ty,
    },
    Cast(Box<CoreExpr>, Ty),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoreBind {
    NonRec(Id, CoreExpr),
    Pat(CorePat, CoreExpr),
}

/// One equation: patterns for each scrutinee, guarded right-hand sides
/// and the bindings in scope for them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreClause {
    pub pats: Vec<CorePat>,
    pub rhss: Vec<CoreRhs>,
    pub binds: Vec<CoreBind>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreRhs {
    pub guards: Vec<CoreGuard>,
    pub body: CoreExpr,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoreGuard {
    Bool(CoreExpr),
    Bind(CorePat, CoreExpr),
    Let(Vec<CoreBind>),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CorePat {
    Wild(Ty),
    /// Binds the value matched by the inner pattern.
    Bind(Id, Box<CorePat>),
    Con(Name, Vec<CorePat>, Ty),
    Lit(Lit, Ty),
}

impl CorePat {
    pub fn ty(&self) -> Ty {
        match self {
            CorePat::Wild(ty) | CorePat::Con(_, _, ty) | CorePat::Lit(_, ty) => ty.clone(),
            CorePat::Bind(id, _) => id.ty.clone(),
        }
    }
}

/// The type of a lowered term. Lowering only builds applications whose
/// head accepts the argument, so every application has a result type.
pub fn expr_type(expr: &CoreExpr) -> Ty {
    match expr {
        CoreExpr::Var(id) => id.ty.clone(),
        CoreExpr::Lit(_, ty) => ty.clone(),
        CoreExpr::App(fun, _) => {
            let fun_ty = expr_type(fun);
            fun_ty.apply_arg().unwrap_or(fun_ty)
        }
        CoreExpr::TyApp(expr, arg) => {
            let ty = expr_type(expr);
            ty.instantiate(arg).unwrap_or(ty)
        }
        CoreExpr::Lam(binders, body) => Ty::funcs(
            binders.iter().map(|id| id.ty.clone()).collect(),
            expr_type(body),
        ),
        CoreExpr::Let(_, body) => expr_type(body),
        CoreExpr::Match { ty, .. } | CoreExpr::Cast(_, ty) => ty.clone(),
    }
}

impl fmt::Display for CoreExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreExpr::Var(id) => write!(f, "{}", id.name),
            CoreExpr::Lit(lit, _) => write!(f, "{}", lit),
            CoreExpr::App(fun, arg) => write!(f, "({} {})", fun, arg),
            CoreExpr::TyApp(expr, ty) => write!(f, "({} @({}))", expr, ty),
            CoreExpr::Lam(binders, body) => write!(
                f,
                "(\\{} -> {})",
                binders.iter().map(|id| id.name.to_string()).join(" "),
                body
            ),
            CoreExpr::Let(binds, body) => write!(f, "(let <{}> in {})", binds.len(), body),
            CoreExpr::Match { scruts, clauses, .. } => write!(
                f,
                "(match {} with <{}>)",
                scruts.iter().map(|s| s.to_string()).join(", "),
                clauses.len()
            ),
            CoreExpr::Cast(expr, ty) => write!(f, "({} |> {})", expr, ty),
        }
    }
}
