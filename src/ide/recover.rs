use crate::{
    ast::{Bind, LBind, LExpr, LPat},
    session::{Lowering, TypecheckedModule},
};

use super::{Candidates, FragmentKind, TypedFragment};

/// Only function bindings have a type of their own: the type of their
/// match group.
pub fn bind_type(bind: &LBind) -> Option<TypedFragment> {
    match bind.value() {
        Bind::Fun(fun) => Some(TypedFragment::new(
            bind.src().clone(),
            fun.matches.ty(),
            FragmentKind::Binding,
        )),
        Bind::Pat(_) | Bind::Var(_) | Bind::Abs(_) => None,
    }
}

pub fn pat_type(pat: &LPat) -> Option<TypedFragment> {
    Some(TypedFragment::new(
        pat.src().clone(),
        pat.ty(),
        FragmentKind::Pattern,
    ))
}

/// The type of the expression's lowered form.
pub fn expr_type<S>(session: &S, tcm: &TypecheckedModule, expr: &LExpr) -> Option<TypedFragment>
where
    S: Lowering + ?Sized,
{
    let core = session.lower_expr(tcm.module(), &tcm.name_env, &tcm.type_env, expr)?;
    Some(TypedFragment::new(
        expr.src().clone(),
        session.type_of(&core),
        FragmentKind::Expression,
    ))
}

/// Binding, expression and pattern types in that order. Candidates
/// without a type are dropped.
pub fn recover_types<S>(
    session: &S,
    tcm: &TypecheckedModule,
    candidates: &Candidates,
) -> Vec<TypedFragment>
where
    S: Lowering + ?Sized,
{
    let binds = candidates.binds.iter().filter_map(|bind| {
        let typed = bind_type(bind);
        if typed.is_none() {
            log::debug!("binding at {} has no type", bind.src());
        }
        typed
    });
    let exprs = candidates.exprs.iter().filter_map(|expr| {
        let typed = expr_type(session, tcm, expr);
        if typed.is_none() {
            log::debug!("expression at {} did not lower", expr.src());
        }
        typed
    });
    let pats = candidates.pats.iter().filter_map(|pat| pat_type(pat));

    binds.chain(exprs).chain(pats).collect()
}
