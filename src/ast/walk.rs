use crate::ast::{
    Bind, Expr, Grhss, LBind, LExpr, LGrhs, LMatch, LPat, LStmt, MatchGroup, Pat, Stmt,
};

#[derive(Clone, Copy, Debug)]
pub enum WalkItem<'a> {
    Bind(&'a LBind),
    Match(&'a LMatch),
    Grhs(&'a LGrhs),
    Stmt(&'a LStmt),
    Expr(&'a LExpr),
    Pat(&'a LPat),
}

/// Pre-order, left-to-right walk over every located node of a binding
/// group.
pub struct TreeWalk<'a> {
    stack: Vec<WalkItem<'a>>,
}

impl<'a> Iterator for TreeWalk<'a> {
    type Item = WalkItem<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;

        match node {
            WalkItem::Bind(bind) => match bind.value() {
                Bind::Fun(fun) => push_match_group(self, &fun.matches),
                Bind::Pat(pat_bind) => {
                    push_grhss(self, &pat_bind.rhs);
                    self.stack.push(WalkItem::Pat(&pat_bind.lhs));
                }
                Bind::Var(var_bind) => self.stack.push(WalkItem::Expr(&var_bind.rhs)),
                Bind::Abs(abs) => push_binds(self, &abs.binds),
            },
            WalkItem::Match(m) => {
                push_grhss(self, &m.grhss);
                for pat in m.pats.iter().rev() {
                    self.stack.push(WalkItem::Pat(pat));
                }
            }
            WalkItem::Grhs(grhs) => {
                self.stack.push(WalkItem::Expr(&grhs.body));
                for guard in grhs.guards.iter().rev() {
                    self.stack.push(WalkItem::Stmt(guard));
                }
            }
            WalkItem::Stmt(stmt) => match stmt.value() {
                Stmt::Body(expr) => self.stack.push(WalkItem::Expr(expr)),
                Stmt::Bind(pat, expr) => {
                    self.stack.push(WalkItem::Expr(expr));
                    self.stack.push(WalkItem::Pat(pat));
                }
                Stmt::Let(binds) => push_binds(self, binds),
            },
            WalkItem::Expr(expr) => push_expr(self, expr.value()),
            WalkItem::Pat(pat) => push_pat(self, pat.value()),
        }

        Some(node)
    }
}

pub fn walk_binds(binds: &[LBind]) -> TreeWalk<'_> {
    let mut walk = TreeWalk { stack: vec![] };
    push_binds(&mut walk, binds);
    walk
}

fn push_binds<'a>(walk: &mut TreeWalk<'a>, binds: &'a [LBind]) {
    for bind in binds.iter().rev() {
        walk.stack.push(WalkItem::Bind(bind));
    }
}

fn push_exprs<'a>(walk: &mut TreeWalk<'a>, exprs: &'a [LExpr]) {
    for expr in exprs.iter().rev() {
        walk.stack.push(WalkItem::Expr(expr));
    }
}

fn push_pats<'a>(walk: &mut TreeWalk<'a>, pats: &'a [LPat]) {
    for pat in pats.iter().rev() {
        walk.stack.push(WalkItem::Pat(pat));
    }
}

fn push_match_group<'a>(walk: &mut TreeWalk<'a>, mg: &'a MatchGroup) {
    for alt in mg.alts.iter().rev() {
        walk.stack.push(WalkItem::Match(alt));
    }
}

fn push_grhss<'a>(walk: &mut TreeWalk<'a>, grhss: &'a Grhss) {
    push_binds(walk, &grhss.local_binds);
    for grhs in grhss.grhss.iter().rev() {
        walk.stack.push(WalkItem::Grhs(grhs));
    }
}

fn push_expr<'a>(walk: &mut TreeWalk<'a>, expr: &'a Expr) {
    match expr {
        Expr::Lam(mg) => push_match_group(walk, mg),
        Expr::App(fun, arg) => {
            walk.stack.push(WalkItem::Expr(arg));
            walk.stack.push(WalkItem::Expr(fun));
        }
        Expr::OpApp(lhs, op, rhs) => {
            walk.stack.push(WalkItem::Expr(rhs));
            walk.stack.push(WalkItem::Expr(op));
            walk.stack.push(WalkItem::Expr(lhs));
        }
        Expr::If(cond, then, els) => {
            walk.stack.push(WalkItem::Expr(els));
            walk.stack.push(WalkItem::Expr(then));
            walk.stack.push(WalkItem::Expr(cond));
        }
        Expr::Case(scrut, mg) => {
            push_match_group(walk, mg);
            walk.stack.push(WalkItem::Expr(scrut));
        }
        Expr::Let(binds, body) => {
            walk.stack.push(WalkItem::Expr(body));
            push_binds(walk, binds);
        }
        Expr::List(elems, _) | Expr::Tuple(elems) => push_exprs(walk, elems),
        Expr::Par(inner) | Expr::Sig(inner, _) => walk.stack.push(WalkItem::Expr(inner)),

        // the wrapped expression is not a node itself, only its children are
        Expr::Wrap(_, inner) => push_expr(walk, inner),

        // ignore "atoms"
        Expr::Var(_) | Expr::Lit(_) | Expr::OverLit(_, _) => {}
    }
}

fn push_pat<'a>(walk: &mut TreeWalk<'a>, pat: &'a Pat) {
    match pat {
        Pat::Con { args, .. } => push_pats(walk, args),
        Pat::Tuple(pats) | Pat::List(pats, _) => push_pats(walk, pats),
        Pat::As(_, inner) | Pat::Par(inner) | Pat::Bang(inner) | Pat::Sig(inner, _) => {
            walk.stack.push(WalkItem::Pat(inner))
        }
        Pat::Wild(_) | Pat::Var(_) | Pat::Lit(_) => {}
    }
}
