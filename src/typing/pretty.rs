//! Text rendering for types and `TyThing`s.
//!
//! Types always render on a single line. Quantifiers are not shown and
//! parentheses are only added where precedence requires them.

use itertools::Itertools;

use crate::sema::{name::tuple_arity, Name, Qualify};

use super::{
    thing::{ClsInst, DataConSig, Fixity, TyThing},
    ty::{Pred, Ty},
};

const TOP_PREC: u8 = 0;
const FUN_PREC: u8 = 1;
const APP_PREC: u8 = 2;

pub fn render_type(ty: &Ty, q: &Qualify) -> String {
    ppr_ty(ty, q, TOP_PREC)
}

pub fn render_pred(pred: &Pred, q: &Qualify) -> String {
    ppr_con_app(&pred.class, &pred.tys, q, TOP_PREC)
}

fn parens_if(cond: bool, s: String) -> String {
    if cond {
        format!("({})", s)
    } else {
        s
    }
}

fn ppr_context(preds: &[Pred], q: &Qualify) -> String {
    if preds.len() == 1 {
        render_pred(&preds[0], q)
    } else {
        format!("({})", preds.iter().map(|p| render_pred(p, q)).join(", "))
    }
}

fn ppr_ty(ty: &Ty, q: &Qualify, prec: u8) -> String {
    match ty {
        Ty::Var(v) => v.to_string(),
        Ty::ForAll(_, body) => ppr_ty(body, q, prec),
        Ty::Qualified(preds, body) => parens_if(
            prec > TOP_PREC,
            format!("{} => {}", ppr_context(preds, q), ppr_ty(body, q, TOP_PREC)),
        ),
        Ty::Func(arg, ret) => parens_if(
            prec > TOP_PREC,
            format!(
                "{} -> {}",
                ppr_ty(arg, q, FUN_PREC),
                ppr_ty(ret, q, TOP_PREC)
            ),
        ),
        Ty::Con(name, args) => ppr_con_app(name, args, q, prec),
    }
}

fn ppr_con_app(name: &Name, args: &[Ty], q: &Qualify, prec: u8) -> String {
    if name.occ == "[]" && args.len() == 1 {
        return format!("[{}]", ppr_ty(&args[0], q, TOP_PREC));
    }

    if let Some(arity) = tuple_arity(&name.occ) {
        if arity == args.len() {
            return format!("({})", args.iter().map(|ty| ppr_ty(ty, q, TOP_PREC)).join(", "));
        }
    }

    if args.is_empty() {
        return q.prefix(name);
    }

    parens_if(
        prec >= APP_PREC,
        format!(
            "{} {}",
            q.prefix(name),
            args.iter().map(|ty| ppr_ty(ty, q, APP_PREC)).join(" ")
        ),
    )
}

fn ppr_data_con(con: &DataConSig, q: &Qualify) -> String {
    if con.name.is_operator() && con.fields.len() == 2 {
        return format!(
            "{} {} {}",
            ppr_ty(&con.fields[0], q, APP_PREC),
            q.infix(&con.name),
            ppr_ty(&con.fields[1], q, APP_PREC)
        );
    }

    std::iter::once(q.prefix(&con.name))
        .chain(con.fields.iter().map(|ty| ppr_ty(ty, q, APP_PREC)))
        .join(" ")
}

fn ppr_decl(thing: &TyThing, q: &Qualify) -> Vec<String> {
    match thing {
        TyThing::Id { name, ty, .. } | TyThing::DataCon { name, ty, .. } => {
            vec![format!("{} :: {}", q.prefix(name), render_type(ty, q))]
        }
        TyThing::TyCon {
            name,
            vars,
            data_cons,
        } => {
            let head = std::iter::once(q.prefix(name))
                .chain(vars.iter().map(|v| v.to_string()))
                .join(" ");
            if data_cons.is_empty() {
                vec![format!("data {}", head)]
            } else {
                let cons = data_cons.iter().map(|con| ppr_data_con(con, q)).join(" | ");
                vec![format!("data {} = {}", head, cons)]
            }
        }
        TyThing::Class {
            name,
            vars,
            methods,
        } => {
            let head = std::iter::once(q.prefix(name))
                .chain(vars.iter().map(|v| v.to_string()))
                .join(" ");
            let mut lines = vec![if methods.is_empty() {
                format!("class {}", head)
            } else {
                format!("class {} where", head)
            }];
            lines.extend(
                methods
                    .iter()
                    .map(|m| format!("  {} :: {}", q.prefix(&m.name), render_type(&m.ty, q))),
            );
            lines
        }
    }
}

fn defined_in(name: &Name) -> String {
    match &name.module {
        Some(module) => format!("\t-- Defined in ‘{}’", module),
        None => String::new(),
    }
}

pub fn render_instance(inst: &ClsInst, q: &Qualify) -> String {
    let head = ppr_con_app(&inst.class, &inst.tys, q, TOP_PREC);
    let head = if inst.context.is_empty() {
        head
    } else {
        format!("{} => {}", ppr_context(&inst.context, q), head)
    };

    match &inst.module {
        Some(module) => format!("instance {}\t-- Defined in ‘{}’", head, module),
        None => format!("instance {}", head),
    }
}

/// Renders a declaration block: the declaration itself (with its defining
/// module), a fixity line when the fixity is not the default, then one line
/// per instance in the order given.
pub fn render_info(thing: &TyThing, fixity: &Fixity, instances: &[ClsInst], q: &Qualify) -> String {
    let mut lines = ppr_decl(thing, q);
    if let Some(last) = lines.last_mut() {
        last.push_str(&defined_in(thing.name()));
    }

    if !fixity.is_default() {
        lines.push(format!(
            "{} {} {}",
            fixity.keyword(),
            fixity.prec,
            q.infix(thing.name())
        ));
    }

    lines.extend(instances.iter().map(|inst| render_instance(inst, q)));
    lines.join("\n")
}
