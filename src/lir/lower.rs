//! Lowering of typechecked expressions.
//!
//! Surface expressions don't reliably carry their own type, so an
//! expression's type is read from its lowered form instead. Lowering is
//! partial: an expression whose elaboration refers to dictionary evidence
//! the type environment doesn't bind, or that applies something that is
//! not a function, does not lower.

use crate::{
    ast::{Bind, Expr, Grhs, Grhss, Id, LBind, LExpr, Match, MatchGroup, Pat, Stmt, WrapStep},
    sema::{
        name::{tuple_datacon, CONS_DATACON, FALSE_DATACON, NIL_DATACON, TRUE_DATACON},
        ModuleName, Name, NameEnv,
    },
    typing::{Ty, TyThing, TyVar, TypeEnv},
};

use super::types::{expr_type, CoreBind, CoreClause, CoreExpr, CoreGuard, CorePat, CoreRhs};

pub fn lower_expr(
    module: &ModuleName,
    _name_env: &NameEnv,
    type_env: &TypeEnv,
    expr: &LExpr,
) -> Option<CoreExpr> {
    let mut ds = Desugarer::new(type_env);
    let core = ds.expr(expr.value());
    match &core {
        Some(core) => log::debug!("[{}] lowered {} to {}", module, expr.src(), core),
        None => log::debug!("[{}] no lowering for {}", module, expr.src()),
    }
    core
}

struct Desugarer<'a> {
    type_env: &'a TypeEnv,
    next_binder: usize,
}

impl<'a> Desugarer<'a> {
    fn new(type_env: &'a TypeEnv) -> Desugarer<'a> {
        Desugarer {
            type_env,
            next_binder: 0,
        }
    }

    fn fresh(&mut self, ty: Ty) -> Id {
        self.next_binder += 1;
        Id::new(Name::local(format!("ds{}", self.next_binder)), ty)
    }

    /// The constructor as the type environment knows it, falling back to
    /// its wired-in type.
    fn con_id(&self, name: &Name, wired_in: impl FnOnce() -> Ty) -> Id {
        match self.type_env.lookup(name) {
            Some(TyThing::DataCon { ty, .. }) => Id::new(name.clone(), ty.clone()),
            _ => Id::new(name.clone(), wired_in()),
        }
    }

    fn app(&self, fun: CoreExpr, arg: CoreExpr) -> Option<CoreExpr> {
        let fun_ty = expr_type(&fun);
        if fun_ty.arg_ty().is_none() {
            log::debug!("cannot apply `{}` of type {}", fun, fun_ty);
            return None;
        }

        Some(CoreExpr::App(Box::new(fun), Box::new(arg)))
    }

    fn ty_app(&self, expr: CoreExpr, ty: &Ty) -> Option<CoreExpr> {
        if expr_type(&expr).instantiate(ty).is_none() {
            log::debug!("cannot instantiate `{}` at {}", expr, ty);
            return None;
        }

        Some(CoreExpr::TyApp(Box::new(expr), ty.clone()))
    }

    fn ev_app(&self, expr: CoreExpr, var: &Name) -> Option<CoreExpr> {
        let pred = unless!(self.type_env.evidence(var), else {
            log::debug!("no dictionary bound for `{}`", var);
            return None;
        });

        if expr_type(&expr).first_pred() != Some(pred) {
            log::debug!("`{}` does not need a `{}` dictionary", expr, pred);
            return None;
        }

        let dict = CoreExpr::Var(Id::new(var.clone(), pred.dict_ty()));
        Some(CoreExpr::App(Box::new(expr), Box::new(dict)))
    }

    fn expr(&mut self, expr: &Expr) -> Option<CoreExpr> {
        Some(match expr {
            Expr::Var(id) => CoreExpr::Var(id.clone()),
            Expr::Lit(lit) => CoreExpr::Lit(lit.clone(), lit.ty()),
            Expr::OverLit(lit, ty) => CoreExpr::Lit(lit.clone(), ty.clone()),
            Expr::Lam(mg) => self.match_group(mg)?,
            Expr::App(fun, arg) => {
                let fun = self.expr(fun.value())?;
                let arg = self.expr(arg.value())?;
                self.app(fun, arg)?
            }
            Expr::OpApp(lhs, op, rhs) => {
                let op = self.expr(op.value())?;
                let lhs = self.expr(lhs.value())?;
                let rhs = self.expr(rhs.value())?;
                let partial = self.app(op, lhs)?;
                self.app(partial, rhs)?
            }
            Expr::Par(inner) | Expr::Sig(inner, _) => self.expr(inner.value())?,
            Expr::If(cond, then, els) => {
                let cond = self.expr(cond.value())?;
                let then = self.expr(then.value())?;
                let els = self.expr(els.value())?;
                let ty = expr_type(&then);
                CoreExpr::Match {
                    scruts: vec![cond],
                    clauses: vec![bool_clause(&TRUE_DATACON, then), bool_clause(&FALSE_DATACON, els)],
                    ty,
                }
            }
            Expr::Case(scrut, mg) => {
                let scrut = self.expr(scrut.value())?;
                let clauses = self.clauses(mg)?;
                CoreExpr::Match {
                    scruts: vec![scrut],
                    clauses,
                    ty: mg.res_ty.clone(),
                }
            }
            Expr::Let(binds, body) => {
                let binds = self.binds(binds)?;
                let body = self.expr(body.value())?;
                CoreExpr::Let(binds, Box::new(body))
            }
            Expr::List(elems, elem_ty) => self.list(elems, elem_ty)?,
            Expr::Tuple(elems) => self.tuple(elems)?,
            Expr::Wrap(steps, inner) => {
                let mut core = self.expr(inner)?;
                for step in steps.iter() {
                    core = match step {
                        WrapStep::TyApp(ty) => self.ty_app(core, ty)?,
                        WrapStep::EvApp(var) => self.ev_app(core, var)?,
                        WrapStep::Cast(ty) => CoreExpr::Cast(Box::new(core), ty.clone()),
                    };
                }
                core
            }
        })
    }

    /// `[e1, e2]` becomes `(:) @t e1 ((:) @t e2 ([] @t))`.
    fn list(&mut self, elems: &[LExpr], elem_ty: &Ty) -> Option<CoreExpr> {
        let a = TyVar::new("a");
        let nil = self.con_id(&NIL_DATACON, || {
            Ty::forall(vec![a.clone()], Ty::list(Ty::Var(a.clone())))
        });
        let cons = self.con_id(&CONS_DATACON, || {
            let v = Ty::Var(a.clone());
            Ty::forall(
                vec![a.clone()],
                Ty::funcs(vec![v.clone(), Ty::list(v.clone())], Ty::list(v)),
            )
        });

        let mut acc = self.ty_app(CoreExpr::Var(nil), elem_ty)?;
        for elem in elems.iter().rev() {
            let elem = self.expr(elem.value())?;
            let head = self.ty_app(CoreExpr::Var(cons.clone()), elem_ty)?;
            let partial = self.app(head, elem)?;
            acc = self.app(partial, acc)?;
        }

        Some(acc)
    }

    fn tuple(&mut self, elems: &[LExpr]) -> Option<CoreExpr> {
        let elems = elems
            .iter()
            .map(|elem| self.expr(elem.value()))
            .collect::<Option<Vec<_>>>()?;
        let tys = elems.iter().map(expr_type).collect::<Vec<_>>();

        let vars = (0..tys.len())
            .map(|i| TyVar::new(format!("t{}", i)))
            .collect::<Vec<_>>();
        let var_tys = vars.iter().cloned().map(Ty::Var).collect::<Vec<_>>();
        let con = self.con_id(&tuple_datacon(tys.len()), || {
            Ty::forall(vars.clone(), Ty::funcs(var_tys.clone(), Ty::tuple(var_tys)))
        });

        let mut core = CoreExpr::Var(con);
        for ty in tys.iter() {
            core = self.ty_app(core, ty)?;
        }
        for elem in elems {
            core = self.app(core, elem)?;
        }

        Some(core)
    }

    fn match_group(&mut self, mg: &MatchGroup) -> Option<CoreExpr> {
        let binders = mg
            .arg_tys
            .iter()
            .map(|ty| self.fresh(ty.clone()))
            .collect::<Vec<_>>();
        let clauses = self.clauses(mg)?;
        let body = CoreExpr::Match {
            scruts: binders.iter().cloned().map(CoreExpr::Var).collect(),
            clauses,
            ty: mg.res_ty.clone(),
        };

        if binders.is_empty() {
            Some(body)
        } else {
            Some(CoreExpr::Lam(binders, Box::new(body)))
        }
    }

    fn clauses(&mut self, mg: &MatchGroup) -> Option<Vec<CoreClause>> {
        mg.alts.iter().map(|alt| self.clause(alt.value())).collect()
    }

    fn clause(&mut self, m: &Match) -> Option<CoreClause> {
        let pats = m.pats.iter().map(|pat| lower_pat(pat.value())).collect();
        let (rhss, binds) = self.grhss(&m.grhss)?;
        Some(CoreClause { pats, rhss, binds })
    }

    fn grhss(&mut self, grhss: &Grhss) -> Option<(Vec<CoreRhs>, Vec<CoreBind>)> {
        let binds = self.binds(&grhss.local_binds)?;
        let rhss = grhss
            .grhss
            .iter()
            .map(|grhs| self.grhs(grhs.value()))
            .collect::<Option<Vec<_>>>()?;
        Some((rhss, binds))
    }

    fn grhs(&mut self, grhs: &Grhs) -> Option<CoreRhs> {
        let guards = grhs
            .guards
            .iter()
            .map(|stmt| self.guard(stmt.value()))
            .collect::<Option<Vec<_>>>()?;
        let body = self.expr(grhs.body.value())?;
        Some(CoreRhs { guards, body })
    }

    fn guard(&mut self, stmt: &Stmt) -> Option<CoreGuard> {
        Some(match stmt {
            Stmt::Body(expr) => CoreGuard::Bool(self.expr(expr.value())?),
            Stmt::Bind(pat, expr) => CoreGuard::Bind(lower_pat(pat.value()), self.expr(expr.value())?),
            Stmt::Let(binds) => CoreGuard::Let(self.binds(binds)?),
        })
    }

    fn binds(&mut self, binds: &[LBind]) -> Option<Vec<CoreBind>> {
        let mut out = vec![];
        for bind in binds.iter() {
            self.bind(bind.value(), &mut out)?;
        }
        Some(out)
    }

    fn bind(&mut self, bind: &Bind, out: &mut Vec<CoreBind>) -> Option<()> {
        match bind {
            Bind::Fun(fun) => {
                let rhs = self.match_group(&fun.matches)?;
                out.push(CoreBind::NonRec(fun.id.value().clone(), rhs));
            }
            Bind::Pat(pat_bind) => {
                let lhs = lower_pat(pat_bind.lhs.value());
                let (rhss, binds) = self.grhss(&pat_bind.rhs)?;
                let rhs = CoreExpr::Match {
                    scruts: vec![],
                    clauses: vec![CoreClause {
                        pats: vec![],
                        rhss,
                        binds,
                    }],
                    ty: lhs.ty(),
                };
                out.push(CoreBind::Pat(lhs, rhs));
            }
            Bind::Var(var_bind) => {
                let rhs = self.expr(var_bind.rhs.value())?;
                out.push(CoreBind::NonRec(var_bind.id.clone(), rhs));
            }
            Bind::Abs(abs) => {
                for inner in abs.binds.iter() {
                    self.bind(inner.value(), out)?;
                }
                for export in abs.exports.iter() {
                    out.push(CoreBind::NonRec(
                        export.poly.clone(),
                        CoreExpr::Var(export.mono.clone()),
                    ));
                }
            }
        }

        Some(())
    }
}

fn bool_clause(con: &Name, body: CoreExpr) -> CoreClause {
    CoreClause {
        pats: vec![CorePat::Con(con.clone(), vec![], Ty::bool())],
        rhss: vec![CoreRhs {
            guards: vec![],
            body,
        }],
        binds: vec![],
    }
}

fn lower_pat(pat: &Pat) -> CorePat {
    match pat {
        Pat::Wild(ty) => CorePat::Wild(ty.clone()),
        Pat::Var(id) => CorePat::Bind(id.clone(), Box::new(CorePat::Wild(id.ty.clone()))),
        Pat::Lit(lit) => CorePat::Lit(lit.clone(), lit.ty()),
        Pat::Con { con, args, ty } => CorePat::Con(
            con.clone(),
            args.iter().map(|arg| lower_pat(arg.value())).collect(),
            ty.clone(),
        ),
        Pat::Tuple(pats) => {
            let pats = pats
                .iter()
                .map(|pat| lower_pat(pat.value()))
                .collect::<Vec<_>>();
            let ty = Ty::tuple(pats.iter().map(CorePat::ty).collect());
            CorePat::Con(tuple_datacon(pats.len()), pats, ty)
        }
        Pat::List(pats, elem_ty) => {
            let list_ty = Ty::list(elem_ty.clone());
            pats.iter().rev().fold(
                CorePat::Con(NIL_DATACON.clone(), vec![], list_ty.clone()),
                |acc, pat| {
                    CorePat::Con(
                        CONS_DATACON.clone(),
                        vec![lower_pat(pat.value()), acc],
                        list_ty.clone(),
                    )
                },
            )
        }
        Pat::As(id, inner) => CorePat::Bind(id.value().clone(), Box::new(lower_pat(inner.value()))),
        Pat::Par(inner) | Pat::Bang(inner) | Pat::Sig(inner, _) => lower_pat(inner.value()),
    }
}
