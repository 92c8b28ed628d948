use serde::{Deserialize, Serialize};

use crate::{
    sema::Name,
    span::Located,
    typing::Ty,
};

use super::{Id, LPat, Lit};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pat {
    Wild(Ty),
    Var(Id),
    Lit(Lit),
    /// A constructor pattern at its (instantiated) result type.
    Con {
        con: Name,
        args: Vec<LPat>,
        ty: Ty,
    },
    Tuple(Vec<LPat>),
    /// A list pattern and its element type.
    List(Vec<LPat>, Ty),
    As(Located<Id>, Box<LPat>),
    Par(Box<LPat>),
    Bang(Box<LPat>),
    Sig(Box<LPat>, Ty),
}

impl Pat {
    /// Every pattern has a type.
    pub fn ty(&self) -> Ty {
        match self {
            Pat::Wild(ty) => ty.clone(),
            Pat::Var(id) => id.ty.clone(),
            Pat::Lit(lit) => lit.ty(),
            Pat::Con { ty, .. } => ty.clone(),
            Pat::Tuple(pats) => Ty::tuple(pats.iter().map(|pat| pat.ty()).collect()),
            Pat::List(_, elem) => Ty::list(elem.clone()),
            Pat::As(_, pat) | Pat::Par(pat) | Pat::Bang(pat) | Pat::Sig(pat, _) => pat.ty(),
        }
    }
}
