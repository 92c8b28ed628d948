use serde::{Deserialize, Serialize};

use crate::{
    sema::Name,
    span::Located,
    typing::{Ty, TyVar},
};

use super::{Id, LBind, LExpr, LGrhs, LMatch, LPat, LStmt};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Bind {
    /// `f p1 p2 = e`, including nullary `x = e`.
    Fun(FunBind),
    /// `(a, b) = e`
    Pat(PatBind),
    /// A binding introduced by the typechecker.
    Var(VarBind),
    /// A generalised binding group.
    Abs(AbsBinds),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunBind {
    pub id: Located<Id>,
    pub matches: MatchGroup,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatBind {
    pub lhs: LPat,
    pub rhs: Grhss,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VarBind {
    pub id: Id,
    pub rhs: LExpr,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbsBinds {
    pub tyvars: Vec<TyVar>,
    pub evidence: Vec<Name>,
    pub exports: Vec<AbsExport>,
    pub binds: Vec<LBind>,
}

/// Links the generalised (exported) id to the monomorphic one used
/// inside the group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbsExport {
    pub poly: Id,
    pub mono: Id,
}

/// The equations of a function, lambda or case alternative list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchGroup {
    pub alts: Vec<LMatch>,
    pub arg_tys: Vec<Ty>,
    pub res_ty: Ty,
}

impl MatchGroup {
    pub fn ty(&self) -> Ty {
        Ty::funcs(self.arg_tys.clone(), self.res_ty.clone())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub pats: Vec<LPat>,
    pub grhss: Grhss,
}

/// Guarded right-hand sides and their `where` bindings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grhss {
    pub grhss: Vec<LGrhs>,
    pub local_binds: Vec<LBind>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grhs {
    pub guards: Vec<LStmt>,
    pub body: LExpr,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stmt {
    Body(LExpr),
    Bind(LPat, LExpr),
    Let(Vec<LBind>),
}
