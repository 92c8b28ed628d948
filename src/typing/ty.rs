use std::fmt;

use fnv::FnvHashMap;
use serde::{Deserialize, Serialize};

use crate::sema::{
    name::{tuple_tycon, BOOL_TYCON, CHAR_TYCON, DOUBLE_TYCON, INT_TYCON, LIST_TYCON},
    Name, Qualify,
};

use super::pretty;

#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TyVar(pub String);

impl TyVar {
    pub fn new<S: Into<String>>(name: S) -> TyVar {
        TyVar(name.into())
    }
}

impl fmt::Display for TyVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A class constraint such as `Num a`.
#[derive(Clone, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pred {
    pub class: Name,
    pub tys: Vec<Ty>,
}

impl Pred {
    pub fn new(class: Name, tys: Vec<Ty>) -> Pred {
        Pred { class, tys }
    }

    pub fn subst(&self, subst: &Subst) -> Pred {
        Pred {
            class: self.class.clone(),
            tys: self.tys.iter().map(|ty| ty.subst(subst)).collect(),
        }
    }

    /// The type of the dictionary that witnesses this constraint.
    pub fn dict_ty(&self) -> Ty {
        Ty::Con(self.class.clone(), self.tys.clone())
    }
}

impl fmt::Display for Pred {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", pretty::render_pred(self, &Qualify::Never))
    }
}

pub type Subst = FnvHashMap<TyVar, Ty>;

#[derive(Clone, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ty {
    Var(TyVar),
    Con(Name, Vec<Ty>),
    Func(Box<Ty>, Box<Ty>),
    Qualified(Vec<Pred>, Box<Ty>),
    ForAll(Vec<TyVar>, Box<Ty>),
}

impl fmt::Display for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", pretty::render_type(self, &Qualify::Never))
    }
}

impl Ty {
    pub fn var<S: Into<String>>(name: S) -> Ty {
        Ty::Var(TyVar::new(name))
    }

    pub fn con(name: Name, args: Vec<Ty>) -> Ty {
        Ty::Con(name, args)
    }

    pub fn func(arg: Ty, ret: Ty) -> Ty {
        Ty::Func(Box::new(arg), Box::new(ret))
    }

    /// `a -> b -> ... -> ret`
    pub fn funcs(args: Vec<Ty>, ret: Ty) -> Ty {
        args.into_iter()
            .rev()
            .fold(ret, |acc, arg| Ty::func(arg, acc))
    }

    pub fn forall(vars: Vec<TyVar>, ty: Ty) -> Ty {
        if vars.is_empty() {
            ty
        } else {
            Ty::ForAll(vars, Box::new(ty))
        }
    }

    pub fn qualified(preds: Vec<Pred>, ty: Ty) -> Ty {
        if preds.is_empty() {
            ty
        } else {
            Ty::Qualified(preds, Box::new(ty))
        }
    }

    pub fn list(elem: Ty) -> Ty {
        Ty::Con(LIST_TYCON.clone(), vec![elem])
    }

    pub fn tuple(tys: Vec<Ty>) -> Ty {
        Ty::Con(tuple_tycon(tys.len()), tys)
    }

    pub fn unit() -> Ty {
        Ty::tuple(vec![])
    }

    pub fn bool() -> Ty {
        Ty::Con(BOOL_TYCON.clone(), vec![])
    }

    pub fn char() -> Ty {
        Ty::Con(CHAR_TYCON.clone(), vec![])
    }

    pub fn int() -> Ty {
        Ty::Con(INT_TYCON.clone(), vec![])
    }

    pub fn double() -> Ty {
        Ty::Con(DOUBLE_TYCON.clone(), vec![])
    }

    pub fn string() -> Ty {
        Ty::list(Ty::char())
    }

    pub fn subst(&self, subst: &Subst) -> Ty {
        match self {
            Ty::Var(v) => subst.get(v).cloned().unwrap_or_else(|| self.clone()),
            Ty::Con(name, args) => {
                Ty::Con(name.clone(), args.iter().map(|ty| ty.subst(subst)).collect())
            }
            Ty::Func(arg, ret) => Ty::func(arg.subst(subst), ret.subst(subst)),
            Ty::Qualified(preds, ty) => Ty::Qualified(
                preds.iter().map(|pred| pred.subst(subst)).collect(),
                Box::new(ty.subst(subst)),
            ),
            Ty::ForAll(vars, ty) => {
                // bound variables shadow the substitution
                let inner = subst
                    .iter()
                    .filter(|(v, _)| !vars.contains(v))
                    .map(|(v, ty)| (v.clone(), ty.clone()))
                    .collect::<Subst>();
                Ty::ForAll(vars.clone(), Box::new(ty.subst(&inner)))
            }
        }
    }

    /// Applies the outermost quantified variable to `arg`. Returns `None`
    /// if the type is not quantified.
    pub fn instantiate(&self, arg: &Ty) -> Option<Ty> {
        match self {
            Ty::ForAll(vars, body) => {
                let (first, rest) = vars.split_first()?;
                let mut subst = Subst::default();
                subst.insert(first.clone(), arg.clone());
                let body = body.subst(&subst);
                Some(Ty::forall(rest.to_vec(), body))
            }
            _ => None,
        }
    }

    /// The parameter type if this is a function type.
    pub fn arg_ty(&self) -> Option<&Ty> {
        match self {
            Ty::Func(arg, _) => Some(arg),
            _ => None,
        }
    }

    /// The result of applying a function of this type to one argument.
    pub fn result_ty(&self) -> Option<Ty> {
        match self {
            Ty::Func(_, ret) => Some(ret.as_ref().clone()),
            _ => None,
        }
    }

    /// The first constraint this type still needs evidence for.
    pub fn first_pred(&self) -> Option<&Pred> {
        match self {
            Ty::Qualified(preds, _) => preds.first(),
            _ => None,
        }
    }

    /// Discharges the first constraint of a qualified type.
    pub fn discharge(&self) -> Option<Ty> {
        match self {
            Ty::Qualified(preds, body) => {
                let (_, rest) = preds.split_first()?;
                Some(Ty::qualified(rest.to_vec(), body.as_ref().clone()))
            }
            _ => None,
        }
    }

    /// The type after one application, either to a value or to the
    /// evidence for a constraint.
    pub fn apply_arg(&self) -> Option<Ty> {
        self.result_ty().or_else(|| self.discharge())
    }

    /// True if `name` appears anywhere in the type.
    pub fn mentions(&self, name: &Name) -> bool {
        match self {
            Ty::Var(_) => false,
            Ty::Con(con, args) => con == name || args.iter().any(|ty| ty.mentions(name)),
            Ty::Func(arg, ret) => arg.mentions(name) || ret.mentions(name),
            Ty::Qualified(preds, ty) => {
                preds
                    .iter()
                    .any(|pred| pred.tys.iter().any(|ty| ty.mentions(name)))
                    || ty.mentions(name)
            }
            Ty::ForAll(_, ty) => ty.mentions(name),
        }
    }
}
