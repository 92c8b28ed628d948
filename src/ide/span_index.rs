use crate::{
    ast::{walk_binds, LBind, LExpr, LPat, WalkItem},
    span::{Located, Pos},
};

/// The nodes of each kind whose source contains the query position, in
/// walk order.
#[derive(Debug, Default)]
pub struct Candidates<'a> {
    pub binds: Vec<&'a LBind>,
    pub exprs: Vec<&'a LExpr>,
    pub pats: Vec<&'a LPat>,
}

impl<'a> Candidates<'a> {
    pub fn len(&self) -> usize {
        self.binds.len() + self.exprs.len() + self.pats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn covers<T>(node: &Located<T>, pos: Pos) -> bool {
    node.src().is_good() && node.src().contains(pos)
}

/// Walks every binding, expression and pattern once. Nodes without a
/// real source location are never candidates.
pub fn search(binds: &[LBind], pos: Pos) -> Candidates<'_> {
    let mut found = Candidates::default();
    for item in walk_binds(binds) {
        match item {
            WalkItem::Bind(bind) if covers(bind, pos) => found.binds.push(bind),
            WalkItem::Expr(expr) if covers(expr, pos) => found.exprs.push(expr),
            WalkItem::Pat(pat) if covers(pat, pos) => found.pats.push(pat),
            _ => {}
        }
    }

    log::debug!(
        "{} candidate(s) at {}: {} binding(s), {} expression(s), {} pattern(s)",
        found.len(),
        pos,
        found.binds.len(),
        found.exprs.len(),
        found.pats.len()
    );
    found
}
